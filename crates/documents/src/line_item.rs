//! Billable line items.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use facturo_core::{DomainError, ProductId};

/// One billable row. Immutable once attached to a document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    pub description: String,
    /// Must be strictly positive.
    pub quantity: Decimal,
    /// Must be non-negative.
    pub unit_price: Decimal,
    /// Percentage in `[0, 100]`.
    pub tax_rate_percent: Decimal,
    /// Optional reference back to the product catalog.
    pub product_ref: Option<ProductId>,
}

impl LineItem {
    /// Check the numeric invariants for this line.
    ///
    /// `index` is the zero-based position in the document's item list, used
    /// only to point the caller at the offending line.
    pub fn validate(&self, index: usize) -> Result<(), DomainError> {
        if self.quantity <= Decimal::ZERO {
            return Err(DomainError::validation(format!(
                "line {index}: quantity must be positive"
            )));
        }
        if self.unit_price < Decimal::ZERO {
            return Err(DomainError::validation(format!(
                "line {index}: unit price must not be negative"
            )));
        }
        if self.tax_rate_percent < Decimal::ZERO || self.tax_rate_percent > Decimal::ONE_HUNDRED {
            return Err(DomainError::validation(format!(
                "line {index}: tax rate must be between 0 and 100"
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn item(quantity: Decimal, unit_price: Decimal, tax: Decimal) -> LineItem {
        LineItem {
            description: "Widget".to_string(),
            quantity,
            unit_price,
            tax_rate_percent: tax,
            product_ref: None,
        }
    }

    #[test]
    fn accepts_boundary_values() {
        assert!(item(dec!(0.001), dec!(0), dec!(0)).validate(0).is_ok());
        assert!(item(dec!(1), dec!(10), dec!(100)).validate(0).is_ok());
    }

    #[test]
    fn rejects_zero_or_negative_quantity() {
        assert!(item(dec!(0), dec!(10), dec!(19)).validate(0).is_err());
        assert!(item(dec!(-1), dec!(10), dec!(19)).validate(0).is_err());
    }

    #[test]
    fn rejects_negative_price_and_out_of_range_tax() {
        assert!(item(dec!(1), dec!(-0.01), dec!(19)).validate(0).is_err());
        assert!(item(dec!(1), dec!(10), dec!(-1)).validate(0).is_err());
        assert!(item(dec!(1), dec!(10), dec!(100.5)).validate(0).is_err());
    }

    #[test]
    fn error_message_names_the_line() {
        let err = item(dec!(0), dec!(10), dec!(19)).validate(4).unwrap_err();
        match err {
            DomainError::Validation(msg) => assert!(msg.starts_with("line 4:")),
            other => panic!("expected validation error, got {other:?}"),
        }
    }
}
