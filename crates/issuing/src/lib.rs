//! `facturo-issuing` — issuing workflow orchestration.
//!
//! Wires the sequence generator, the money calculator and the renderer into
//! the two operations the calling layer invokes: issuing a new document and
//! converting a quote into an invoice. Persistence stays on the caller's
//! side: this crate receives fully-loaded inputs and hands back records and
//! rendered bytes.

pub mod issuer;

pub use issuer::{DocumentDraft, DocumentIssuer, IssueError};
