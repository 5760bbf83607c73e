//! `facturo-numbering` — unique sequential document numbers.
//!
//! Numbers take the shape `{PREFIX}{YYYY}{MM}-{NNNN}` and are scoped to one
//! (account, kind, calendar-month) counter. Allocation is an atomic
//! reservation against a [`SequenceStore`]; the same value is never handed
//! out twice, even under concurrent calls.

pub mod generator;
pub mod number;
pub mod store;

pub use generator::SequenceGenerator;
pub use number::DocumentNumber;
pub use store::{InMemorySequenceStore, SequenceError, SequenceScope, SequenceStore};
