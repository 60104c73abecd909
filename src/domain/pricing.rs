//! Bulk-pass pricing from a listing's discount table.

use thiserror::Error;

use super::entities::DiscountTable;

/// Number of days in the bulk pass offered on every card.
pub const BULK_DAYS: u32 = 10;

#[derive(Clone, Debug, PartialEq, Error)]
pub enum PricingError {
    #[error("no discount tier for {0} days")]
    MissingTier(String),
    #[error("discount {0}% is outside 0-100")]
    InvalidDiscount(f64),
    #[error("invalid day-pass price {0}")]
    InvalidBasePrice(f64),
}

#[derive(Clone, Debug, PartialEq)]
pub struct BulkPassQuote {
    pub days: u32,
    pub discount_pct: f64,
    pub message: String,
    /// Rounded to the nearest whole unit, halves up.
    pub price: u64,
}

impl BulkPassQuote {
    pub fn discount_label(&self) -> String {
        format!("{}% Discount", trim_number(self.discount_pct))
    }
}

pub fn bulk_pass_price(
    base_price: f64,
    table: &DiscountTable,
    days: u32,
) -> Result<BulkPassQuote, PricingError> {
    if !base_price.is_finite() || base_price < 0.0 {
        return Err(PricingError::InvalidBasePrice(base_price));
    }

    let key = days.to_string();
    let tier = table
        .get(&key)
        .ok_or_else(|| PricingError::MissingTier(key.clone()))?;

    let pct = tier.value;
    if !pct.is_finite() || !(0.0..=100.0).contains(&pct) {
        return Err(PricingError::InvalidDiscount(pct));
    }

    // Multiply before dividing: 0.85 has no exact binary form, 85 / 100 applied last does.
    let raw = base_price * days as f64 * (100.0 - pct) / 100.0;

    Ok(BulkPassQuote {
        days,
        discount_pct: pct,
        message: tier.message.clone(),
        price: raw.round() as u64,
    })
}

fn trim_number(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        format!("{value}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::DayPassDiscount;

    fn table(entries: &[(&str, f64)]) -> DiscountTable {
        entries
            .iter()
            .map(|(key, value)| {
                (
                    key.to_string(),
                    DayPassDiscount {
                        value: *value,
                        message: "bulk".to_string(),
                    },
                )
            })
            .collect()
    }

    #[test]
    fn twenty_percent_off_ten_days() {
        let quote = bulk_pass_price(100.0, &table(&[("10", 20.0)]), BULK_DAYS).unwrap();
        assert_eq!(quote.price, 800);
        assert_eq!(quote.days, 10);
        assert_eq!(quote.message, "bulk");
    }

    #[test]
    fn ten_percent_off_is_exact() {
        let quote = bulk_pass_price(99.0, &table(&[("10", 10.0)]), BULK_DAYS).unwrap();
        assert_eq!(quote.price, 891);
    }

    #[test]
    fn half_unit_rounds_up() {
        // 33 * 10 * 0.85 = 280.5
        let quote = bulk_pass_price(33.0, &table(&[("10", 15.0)]), BULK_DAYS).unwrap();
        assert_eq!(quote.price, 281);
    }

    #[test]
    fn uses_the_tier_matching_the_quantity() {
        let discounts = table(&[("5", 5.0), ("10", 20.0), ("20", 30.0)]);
        assert_eq!(bulk_pass_price(50.0, &discounts, 5).unwrap().price, 238);
        assert_eq!(bulk_pass_price(50.0, &discounts, 20).unwrap().price, 700);
    }

    #[test]
    fn missing_tier_is_an_error() {
        let err = bulk_pass_price(100.0, &table(&[("5", 5.0)]), BULK_DAYS).unwrap_err();
        assert_eq!(err, PricingError::MissingTier("10".to_string()));
        assert_eq!(err.to_string(), "no discount tier for 10 days");
    }

    #[test]
    fn rejects_out_of_range_inputs() {
        assert_eq!(
            bulk_pass_price(100.0, &table(&[("10", 120.0)]), BULK_DAYS).unwrap_err(),
            PricingError::InvalidDiscount(120.0)
        );
        assert_eq!(
            bulk_pass_price(-1.0, &table(&[("10", 20.0)]), BULK_DAYS).unwrap_err(),
            PricingError::InvalidBasePrice(-1.0)
        );
        assert!(bulk_pass_price(f64::NAN, &table(&[("10", 20.0)]), BULK_DAYS).is_err());
    }

    #[test]
    fn free_day_pass_stays_free() {
        let quote = bulk_pass_price(0.0, &table(&[("10", 20.0)]), BULK_DAYS).unwrap();
        assert_eq!(quote.price, 0);
    }

    #[test]
    fn discount_label_drops_trailing_zero() {
        let quote = bulk_pass_price(100.0, &table(&[("10", 20.0)]), BULK_DAYS).unwrap();
        assert_eq!(quote.discount_label(), "20% Discount");
        let quote = bulk_pass_price(100.0, &table(&[("10", 12.5)]), BULK_DAYS).unwrap();
        assert_eq!(quote.discount_label(), "12.5% Discount");
    }
}
