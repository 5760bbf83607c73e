//! `facturo-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns).

pub mod config;
pub mod error;
pub mod id;
pub mod kind;

pub use config::{BillingConfig, StampPolicy};
pub use error::{DomainError, DomainResult};
pub use id::{AccountId, CustomerId, DocumentId, ProductId};
pub use kind::DocumentKind;
