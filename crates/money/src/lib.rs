//! `facturo-money` — monetary computation for issued documents.
//!
//! Per-line figures, aggregate totals, the fiscal stamp rule and currency
//! presentation. All arithmetic runs on `rust_decimal::Decimal` at full
//! precision; rounding happens exactly once, at the presentation boundary.

pub mod calculator;
pub mod format;

pub use calculator::MoneyCalculator;
pub use format::format_amount;
