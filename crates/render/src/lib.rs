//! `facturo-render` — turns document records into printable artifacts.
//!
//! One parameterized renderer covers all three document kinds through a
//! [`DocumentTemplate`]; the output is a deterministic page list plus its
//! PDF byte-stream form.

pub mod error;
pub mod pdf;
pub mod renderer;
pub mod template;

pub use error::RenderError;
pub use renderer::{DocumentRenderer, RenderedDocument};
pub use template::{DocumentTemplate, TableColumns};
