use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::broadcast;
use tracing::info;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum NotificationLevel {
    Success,
    Warning,
    Error,
}

/// A single operator-facing message
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct Notification {
    pub id: Uuid,
    pub level: NotificationLevel,
    pub title: String,
    pub body: String,
    pub created_at: DateTime<Utc>,
}

/// Fire-and-forget operator notification sink.
///
/// Keeps a bounded backlog for the back-office UI to poll and fans out live
/// copies to any subscribed listener. Losing a notification is acceptable;
/// blocking a request on one is not.
#[derive(Debug, Clone)]
pub struct NotificationService {
    tx: broadcast::Sender<Notification>,
    recent: Arc<Mutex<VecDeque<Notification>>>,
    backlog: usize,
}

impl NotificationService {
    pub fn new(backlog: usize) -> Self {
        let capacity = backlog.max(1);
        let (tx, _) = broadcast::channel(capacity);
        Self {
            tx,
            recent: Arc::new(Mutex::new(VecDeque::with_capacity(capacity))),
            backlog: capacity,
        }
    }

    pub fn success(&self, title: &str, body: String) {
        self.push(NotificationLevel::Success, title, body);
    }

    pub fn warning(&self, title: &str, body: String) {
        self.push(NotificationLevel::Warning, title, body);
    }

    pub fn error(&self, title: &str, body: String) {
        self.push(NotificationLevel::Error, title, body);
    }

    fn push(&self, level: NotificationLevel, title: &str, body: String) {
        let notification = Notification {
            id: Uuid::new_v4(),
            level,
            title: title.to_string(),
            body,
            created_at: Utc::now(),
        };

        info!(
            title = %notification.title,
            "operator notification: {}", notification.body
        );

        if let Ok(mut recent) = self.recent.lock() {
            if recent.len() == self.backlog {
                recent.pop_front();
            }
            recent.push_back(notification.clone());
        }

        // No live subscribers is the normal case
        let _ = self.tx.send(notification);
    }

    /// Most recent notifications, oldest first.
    pub fn recent(&self) -> Vec<Notification> {
        self.recent
            .lock()
            .map(|queue| queue.iter().cloned().collect())
            .unwrap_or_default()
    }

    pub fn subscribe(&self) -> broadcast::Receiver<Notification> {
        self.tx.subscribe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backlog_is_bounded() {
        let sink = NotificationService::new(3);
        for i in 0..5 {
            sink.success("title", format!("message {}", i));
        }

        let recent = sink.recent();
        assert_eq!(recent.len(), 3);
        assert_eq!(recent[0].body, "message 2");
        assert_eq!(recent[2].body, "message 4");
    }

    #[tokio::test]
    async fn subscribers_receive_live_copies() {
        let sink = NotificationService::new(4);
        let mut rx = sink.subscribe();

        sink.warning("heads up", "queue is busy".to_string());

        let received = rx.recv().await.expect("live notification");
        assert_eq!(received.level, NotificationLevel::Warning);
        assert_eq!(received.title, "heads up");
    }
}
