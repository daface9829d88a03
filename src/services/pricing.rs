//! Booking totals computation.
//!
//! A pure function over the selected line items and a price lookup: no
//! storage access, no shared state. Callers re-run it every time the
//! selection changes and apply the result to their own state; the detail
//! rows only snapshot prices once the booking is persisted.

use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::Serialize;
use std::collections::HashMap;
use thiserror::Error;
use utoipa::ToSchema;
use uuid::Uuid;

/// Tax applied to every booking (11%)
pub const TAX_RATE: Decimal = dec!(0.11);

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum PricingError {
    #[error("no service line items were selected")]
    EmptySelection,
    #[error("service {0} not found in the price catalog")]
    ServiceNotFound(Uuid),
}

/// Computed monetary fields of a booking
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
pub struct BookingTotals {
    pub subtotal: Decimal,
    pub total_tax_amount: Decimal,
    pub total_amount: Decimal,
}

/// Round to a whole currency unit, half away from zero.
fn round_currency(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}

/// Derive subtotal, tax, and total from the selected services.
///
/// Quantity is implicitly one per line item; selecting a service twice
/// means passing its id twice. Tax and total are rounded independently
/// of each other (changing that changes financial output).
///
/// A zero-priced selection is valid; an unknown id or an empty selection
/// is an error, never a silent zero.
pub fn compute_totals(
    selected: &[Uuid],
    prices: &HashMap<Uuid, Decimal>,
) -> Result<BookingTotals, PricingError> {
    if selected.is_empty() {
        return Err(PricingError::EmptySelection);
    }

    let mut subtotal = Decimal::ZERO;
    for service_id in selected {
        let price = prices
            .get(service_id)
            .copied()
            .ok_or(PricingError::ServiceNotFound(*service_id))?;
        subtotal += price;
    }

    let total_tax_amount = round_currency(subtotal * TAX_RATE);
    let total_amount = round_currency(subtotal + total_tax_amount);

    Ok(BookingTotals {
        subtotal,
        total_tax_amount,
        total_amount,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn catalog(prices: &[(Uuid, Decimal)]) -> HashMap<Uuid, Decimal> {
        prices.iter().copied().collect()
    }

    #[test]
    fn totals_for_two_line_items() {
        let deep_clean = Uuid::new_v4();
        let shine = Uuid::new_v4();
        let prices = catalog(&[(deep_clean, dec!(150000)), (shine, dec!(90000))]);

        let totals = compute_totals(&[deep_clean, shine], &prices).unwrap();

        assert_eq!(totals.subtotal, dec!(240000));
        assert_eq!(totals.total_tax_amount, dec!(26400));
        assert_eq!(totals.total_amount, dec!(266400));
    }

    #[test]
    fn repeated_selection_counts_twice() {
        let id = Uuid::new_v4();
        let prices = catalog(&[(id, dec!(75000))]);

        let totals = compute_totals(&[id, id], &prices).unwrap();
        assert_eq!(totals.subtotal, dec!(150000));
    }

    #[test]
    fn zero_priced_item_is_valid() {
        let promo = Uuid::new_v4();
        let prices = catalog(&[(promo, Decimal::ZERO)]);

        let totals = compute_totals(&[promo], &prices).unwrap();
        assert_eq!(totals.subtotal, Decimal::ZERO);
        assert_eq!(totals.total_tax_amount, Decimal::ZERO);
        assert_eq!(totals.total_amount, Decimal::ZERO);
    }

    #[test]
    fn empty_selection_is_rejected() {
        let prices = catalog(&[]);
        assert_matches!(
            compute_totals(&[], &prices),
            Err(PricingError::EmptySelection)
        );
    }

    #[test]
    fn unknown_service_is_rejected() {
        let known = Uuid::new_v4();
        let unknown = Uuid::new_v4();
        let prices = catalog(&[(known, dec!(10000))]);

        assert_matches!(
            compute_totals(&[known, unknown], &prices),
            Err(PricingError::ServiceNotFound(id)) if id == unknown
        );
    }

    #[test]
    fn tax_rounds_half_up_at_the_midpoint() {
        // 50 * 0.11 = 5.5 rounds up to 6, total 56
        let id = Uuid::new_v4();
        let prices = catalog(&[(id, dec!(50))]);

        let totals = compute_totals(&[id], &prices).unwrap();
        assert_eq!(totals.total_tax_amount, dec!(6));
        assert_eq!(totals.total_amount, dec!(56));
    }

    #[test]
    fn tax_and_total_carry_no_fractional_digits() {
        let id = Uuid::new_v4();
        let prices = catalog(&[(id, dec!(149999.25))]);

        let totals = compute_totals(&[id], &prices).unwrap();
        assert_eq!(totals.total_tax_amount.scale(), 0);
        assert_eq!(totals.total_amount.scale(), 0);
    }

    #[test]
    fn recomputation_is_idempotent() {
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        let prices = catalog(&[(a, dec!(123456.78)), (b, dec!(9999.99))]);
        let selection = [a, b, a];

        let first = compute_totals(&selection, &prices).unwrap();
        let second = compute_totals(&selection, &prices).unwrap();
        assert_eq!(first, second);
    }
}
