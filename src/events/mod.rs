use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::services::notifications::NotificationService;

#[derive(Debug, Clone)]
pub struct EventSender {
    sender: mpsc::Sender<Event>,
}

impl EventSender {
    /// Creates a new EventSender
    pub fn new(sender: mpsc::Sender<Event>) -> Self {
        Self { sender }
    }

    /// Sends an event asynchronously
    pub async fn send(&self, event: Event) -> Result<(), String> {
        self.sender
            .send(event)
            .await
            .map_err(|e| format!("Failed to send event: {}", e))
    }

    /// Fire-and-forget send; event loss is logged, never surfaced to callers.
    pub async fn send_or_log(&self, event: Event) {
        if let Err(e) = self.send(event).await {
            warn!("Dropping event: {}", e);
        }
    }
}

// The lifecycle events that can occur in the system.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Event {
    // Catalog events
    CategoryCreated(Uuid),
    CategoryUpdated(Uuid),
    CategoryDeleted(Uuid),
    ServiceCreated(Uuid),
    ServiceUpdated(Uuid),
    ServiceDeleted(Uuid),

    // Booking events
    BookingCreated {
        booking_id: Uuid,
        booking_trx_id: String,
    },
    BookingApproved {
        booking_id: Uuid,
        booking_trx_id: String,
    },
    BookingDeleted(Uuid),
}

/// Drains the event channel and routes booking lifecycle events to the
/// operator notification sink. Catalog events are recorded for telemetry.
pub async fn process_events(mut rx: mpsc::Receiver<Event>, notifications: NotificationService) {
    info!("Starting event processing loop");

    while let Some(event) = rx.recv().await {
        debug!("Received event: {:?}", event);

        match event {
            Event::BookingApproved {
                booking_id,
                booking_trx_id,
            } => {
                info!(%booking_id, "booking approved: {}", booking_trx_id);
                notifications.success(
                    "Booking approved",
                    format!("Booking {} has been successfully approved.", booking_trx_id),
                );
            }
            Event::BookingCreated {
                booking_id,
                booking_trx_id,
            } => {
                info!(%booking_id, "booking created: {}", booking_trx_id);
                notifications.success(
                    "Booking received",
                    format!("Booking {} is awaiting payment approval.", booking_trx_id),
                );
            }
            other => {
                info!("Event recorded: {:?}", other);
            }
        }
    }

    info!("Event channel closed; stopping event processing loop");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn approval_events_become_operator_notifications() {
        let (tx, rx) = mpsc::channel(8);
        let sender = EventSender::new(tx);
        let notifications = NotificationService::new(10);

        let task = tokio::spawn(process_events(rx, notifications.clone()));

        sender
            .send(Event::BookingApproved {
                booking_id: Uuid::new_v4(),
                booking_trx_id: "SHUJIA1234".to_string(),
            })
            .await
            .expect("send event");
        drop(sender);
        task.await.expect("event loop completes");

        let recent = notifications.recent();
        assert_eq!(recent.len(), 1);
        assert_eq!(recent[0].title, "Booking approved");
        assert!(recent[0].body.contains("SHUJIA1234"));
    }

    #[tokio::test]
    async fn send_or_log_swallows_closed_channel() {
        let (tx, rx) = mpsc::channel(1);
        drop(rx);
        let sender = EventSender::new(tx);
        // Must not panic or error out
        sender.send_or_log(Event::CategoryCreated(Uuid::new_v4())).await;
    }
}
