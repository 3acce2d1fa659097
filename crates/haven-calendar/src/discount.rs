//! Best-discount selection for a haven's nightly price.
//!
//! Discount offers arrive already fetched from the discounts API;
//! picking the winner is a pure fold over the list: compute the savings
//! each offer yields at the given price, drop offers whose minimum
//! booking amount the price does not meet, and keep the largest savings.
//! Ties keep the first-encountered offer (stable input order).

use serde::{Deserialize, Serialize};

/// How a discount's value applies to the price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiscountKind {
    /// `value` is a percentage of the base price.
    Percentage,
    /// `value` is a flat amount.
    Fixed,
}

/// A discount offer, in the shape the discounts API serves it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Discount {
    pub id: i64,
    pub code: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "discount_type")]
    pub kind: DiscountKind,
    #[serde(rename = "discount_value")]
    pub value: f64,
    #[serde(default)]
    pub min_booking_amount: Option<f64>,
    pub start_date: String,
    pub end_date: String,
}

/// The winning discount applied to a concrete price.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BestDiscount {
    pub discount: Discount,
    pub savings: f64,
    pub discounted_price: f64,
}

/// Pick the discount with the largest savings at `base_price`.
///
/// An offer whose `min_booking_amount` exceeds the price is ineligible.
/// Ties resolve to the first eligible offer in input order. Returns
/// `None` when the list is empty or nothing is eligible.
pub fn best_discount(base_price: f64, discounts: &[Discount]) -> Option<BestDiscount> {
    discounts
        .iter()
        .fold(None, |best: Option<BestDiscount>, discount| {
            if discount
                .min_booking_amount
                .is_some_and(|min| base_price < min)
            {
                return best;
            }

            let savings = match discount.kind {
                DiscountKind::Percentage => base_price * (discount.value / 100.0),
                DiscountKind::Fixed => discount.value,
            };

            match best {
                Some(current) if savings <= current.savings => Some(current),
                _ => Some(BestDiscount {
                    discount: discount.clone(),
                    savings,
                    discounted_price: base_price - savings,
                }),
            }
        })
}

// ── Tests ───────────────────────────────────────────────────────────────────
