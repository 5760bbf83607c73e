//! Document kind variant.

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// The three kinds of business document the core can issue.
///
/// The kind decides the number prefix, the title and label set used when
/// rendering, which secondary date the document carries (due date, expiry
/// date, or none) and whether the fiscal stamp rule can apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentKind {
    Invoice,
    Quote,
    DeliveryNote,
}

impl DocumentKind {
    /// Number prefix: `FACT` / `DEV` / `BL`.
    pub fn prefix(&self) -> &'static str {
        match self {
            Self::Invoice => "FACT",
            Self::Quote => "DEV",
            Self::DeliveryNote => "BL",
        }
    }

    /// Reverse of [`prefix`](Self::prefix), used when parsing numbers.
    pub fn from_prefix(prefix: &str) -> Result<Self, DomainError> {
        match prefix {
            "FACT" => Ok(Self::Invoice),
            "DEV" => Ok(Self::Quote),
            "BL" => Ok(Self::DeliveryNote),
            other => Err(DomainError::invalid_id(format!(
                "unknown document prefix '{other}'"
            ))),
        }
    }

    /// Whether the fiscal stamp rule can apply to this kind.
    pub fn stampable(&self) -> bool {
        matches!(self, Self::Invoice | Self::Quote)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefix_round_trips_for_every_kind() {
        for kind in [
            DocumentKind::Invoice,
            DocumentKind::Quote,
            DocumentKind::DeliveryNote,
        ] {
            assert_eq!(DocumentKind::from_prefix(kind.prefix()).unwrap(), kind);
        }
    }

    #[test]
    fn unknown_prefix_is_rejected() {
        assert!(matches!(
            DocumentKind::from_prefix("NOPE"),
            Err(DomainError::InvalidId(_))
        ));
    }

    #[test]
    fn delivery_notes_never_carry_a_stamp() {
        assert!(DocumentKind::Invoice.stampable());
        assert!(DocumentKind::Quote.stampable());
        assert!(!DocumentKind::DeliveryNote.stampable());
    }
}
