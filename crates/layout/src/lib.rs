//! `facturo-layout` — pure page layout for printable documents.
//!
//! A [`LayoutEngine`] walks a fixed A4 page with a cursor, emitting
//! backend-neutral [`DrawOp`]s and breaking pages on overflow, with the
//! active table header repeated on every continuation page. No I/O happens
//! here; the PDF backend replays the finished [`Page`]s.

pub mod engine;
pub mod ops;
pub mod style;
pub mod wrap;

pub use engine::{HeaderCell, LayoutEngine, LayoutError, MAX_PAGES};
pub use ops::{DrawOp, Page};
pub use style::{PageStyle, TextStyle};
pub use wrap::wrap_text;
