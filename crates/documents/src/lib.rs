//! `facturo-documents` — the document data model.
//!
//! Records, line items, party profiles, totals and the status lifecycle.
//! Everything here is pure data plus invariants; numbering and totals are
//! computed elsewhere and locked onto the record at creation.

pub mod line_item;
pub mod party;
pub mod record;
pub mod totals;

pub use line_item::LineItem;
pub use party::Party;
pub use record::{DocumentRecord, DocumentStatus, NewDocument};
pub use totals::{DocumentTotals, LineFigures};
