//! Document number value type.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use facturo_core::{DomainError, DocumentKind};

/// A human-readable document number: `{PREFIX}{YYYY}{MM}-{NNNN}`.
///
/// The prefix maps from the document kind (`FACT`, `DEV`, `BL`), the middle
/// part is the issuing year and zero-padded month, and the suffix is the
/// 4-digit sequence value within the (account, kind, month) scope. A number
/// is assigned once and never reused, including for voided documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DocumentNumber {
    kind: DocumentKind,
    year: i32,
    month: u32,
    sequence: u32,
}

impl DocumentNumber {
    /// Assemble a number from already-validated parts.
    pub fn new(kind: DocumentKind, year: i32, month: u32, sequence: u32) -> Result<Self, DomainError> {
        if !(1..=12).contains(&month) {
            return Err(DomainError::invalid_id(format!("month {month} out of range")));
        }
        if !(1..=9999).contains(&sequence) {
            return Err(DomainError::invalid_id(format!(
                "sequence {sequence} outside 0001..9999"
            )));
        }
        if !(1000..=9999).contains(&year) {
            return Err(DomainError::invalid_id(format!("year {year} not 4 digits")));
        }
        Ok(Self {
            kind,
            year,
            month,
            sequence,
        })
    }

    pub fn kind(&self) -> DocumentKind {
        self.kind
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn sequence(&self) -> u32 {
        self.sequence
    }
}

impl core::fmt::Display for DocumentNumber {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "{}{:04}{:02}-{:04}",
            self.kind.prefix(),
            self.year,
            self.month,
            self.sequence
        )
    }
}

impl From<DocumentNumber> for String {
    fn from(value: DocumentNumber) -> Self {
        value.to_string()
    }
}

impl TryFrom<String> for DocumentNumber {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl FromStr for DocumentNumber {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (head, seq) = s
            .split_once('-')
            .ok_or_else(|| DomainError::invalid_id(format!("'{s}' has no sequence part")))?;

        let prefix_len = head
            .find(|c: char| c.is_ascii_digit())
            .ok_or_else(|| DomainError::invalid_id(format!("'{s}' has no year/month part")))?;
        let (prefix, yyyymm) = head.split_at(prefix_len);
        let kind = DocumentKind::from_prefix(prefix)?;

        // Strict digit runs only; integer parsing alone would also admit a
        // leading `+`.
        if yyyymm.len() != 6
            || seq.len() != 4
            || !yyyymm.bytes().all(|b| b.is_ascii_digit())
            || !seq.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(DomainError::invalid_id(format!(
                "'{s}' does not match PREFIX{{YYYY}}{{MM}}-{{NNNN}}"
            )));
        }

        let year: i32 = yyyymm[..4]
            .parse()
            .map_err(|_| DomainError::invalid_id(format!("'{s}' has a non-numeric year")))?;
        let month: u32 = yyyymm[4..]
            .parse()
            .map_err(|_| DomainError::invalid_id(format!("'{s}' has a non-numeric month")))?;
        let sequence: u32 = seq
            .parse()
            .map_err(|_| DomainError::invalid_id(format!("'{s}' has a non-numeric sequence")))?;

        Self::new(kind, year, month, sequence)
    }
}
