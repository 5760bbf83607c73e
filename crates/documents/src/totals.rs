//! Computed monetary totals, locked onto a document at creation.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Per-line figures, rounded to 2 decimal places for presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineFigures {
    /// `quantity × unit_price`.
    pub net: Decimal,
    /// `net × tax_rate / 100`.
    pub tax: Decimal,
    /// `net + tax`.
    pub total: Decimal,
}

/// Aggregate totals for a document.
///
/// All values are presentation values (2 decimal places); the calculator
/// accumulates at full precision and rounds once at the end. Once attached
/// to a [`DocumentRecord`](crate::DocumentRecord) these never change —
/// status transitions do not recompute them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentTotals {
    pub subtotal: Decimal,
    pub tax_total: Decimal,
    pub grand_total: Decimal,
    /// Present only when the fiscal stamp rule fired.
    pub stamp_fee: Option<Decimal>,
    /// `grand_total + stamp_fee` (equals `grand_total` without a stamp).
    pub total_payable: Decimal,
    pub lines: Vec<LineFigures>,
}

impl DocumentTotals {
    /// Totals of an empty item list.
    pub fn zero() -> Self {
        Self {
            subtotal: Decimal::ZERO,
            tax_total: Decimal::ZERO,
            grand_total: Decimal::ZERO,
            stamp_fee: None,
            total_payable: Decimal::ZERO,
            lines: Vec::new(),
        }
    }

    pub fn has_stamp(&self) -> bool {
        self.stamp_fee.is_some()
    }
}
