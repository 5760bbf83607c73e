//! Document records: the immutable core of an issued document.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use facturo_core::{AccountId, CustomerId, DocumentId, DocumentKind, DomainError, DomainResult};
use facturo_numbering::DocumentNumber;

use crate::line_item::LineItem;
use crate::party::Party;
use crate::totals::DocumentTotals;

/// Document status lifecycle.
///
/// Transitions only ever move forward (`Draft → Sent → Accepted/Paid`) with
/// `Void` reachable from any unpaid state. None of them touch the locked
/// number or totals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentStatus {
    Draft,
    Sent,
    /// Quote accepted by the customer (typically via conversion).
    Accepted,
    /// Invoice settled in full.
    Paid,
    Void,
}

/// Input for creating a document, before the number and totals exist.
///
/// The calling layer supplies all of this in full; the core never fetches
/// anything lazily.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewDocument {
    pub id: DocumentId,
    pub account_id: AccountId,
    pub customer_id: CustomerId,
    pub kind: DocumentKind,
    pub issuer: Party,
    pub customer: Party,
    pub issue_date: NaiveDate,
    /// Due date for invoices, expiry date for quotes, none for delivery
    /// notes.
    pub secondary_date: Option<NaiveDate>,
    pub notes: Option<String>,
    pub line_items: Vec<LineItem>,
}

/// A fully issued document.
///
/// `number` and `totals` are fixed at creation and never recomputed; status
/// transitions mutate only `status`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentRecord {
    id: DocumentId,
    account_id: AccountId,
    customer_id: CustomerId,
    kind: DocumentKind,
    number: DocumentNumber,
    issuer: Party,
    customer: Party,
    issue_date: NaiveDate,
    secondary_date: Option<NaiveDate>,
    notes: Option<String>,
    line_items: Vec<LineItem>,
    totals: DocumentTotals,
    status: DocumentStatus,
    created_at: DateTime<Utc>,
}

impl DocumentRecord {
    /// Lock a new document together with its generated number and computed
    /// totals.
    ///
    /// All line items are validated up front (all-or-nothing); a delivery
    /// note must not carry a secondary date, and the number's kind must
    /// match the document's.
    pub fn create(
        new: NewDocument,
        number: DocumentNumber,
        totals: DocumentTotals,
    ) -> DomainResult<Self> {
        for (index, item) in new.line_items.iter().enumerate() {
            item.validate(index)?;
        }
        if number.kind() != new.kind {
            return Err(DomainError::invariant(format!(
                "number {number} does not match document kind {:?}",
                new.kind
            )));
        }
        if new.kind == DocumentKind::DeliveryNote && new.secondary_date.is_some() {
            return Err(DomainError::validation(
                "delivery notes carry no secondary date",
            ));
        }

        Ok(Self {
            id: new.id,
            account_id: new.account_id,
            customer_id: new.customer_id,
            kind: new.kind,
            number,
            issuer: new.issuer,
            customer: new.customer,
            issue_date: new.issue_date,
            secondary_date: new.secondary_date,
            notes: new.notes,
            line_items: new.line_items,
            totals,
            status: DocumentStatus::Draft,
            created_at: Utc::now(),
        })
    }

    pub fn id(&self) -> DocumentId {
        self.id
    }

    pub fn account_id(&self) -> AccountId {
        self.account_id
    }

    pub fn customer_id(&self) -> CustomerId {
        self.customer_id
    }

    pub fn kind(&self) -> DocumentKind {
        self.kind
    }

    pub fn number(&self) -> DocumentNumber {
        self.number
    }

    pub fn issuer(&self) -> &Party {
        &self.issuer
    }

    pub fn customer(&self) -> &Party {
        &self.customer
    }

    pub fn issue_date(&self) -> NaiveDate {
        self.issue_date
    }

    pub fn secondary_date(&self) -> Option<NaiveDate> {
        self.secondary_date
    }

    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }

    pub fn line_items(&self) -> &[LineItem] {
        &self.line_items
    }

    pub fn totals(&self) -> &DocumentTotals {
        &self.totals
    }

    pub fn status(&self) -> DocumentStatus {
        self.status
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Draft → Sent.
    pub fn mark_sent(&mut self) -> DomainResult<()> {
        match self.status {
            DocumentStatus::Draft => {
                self.status = DocumentStatus::Sent;
                Ok(())
            }
            other => Err(DomainError::conflict(format!(
                "cannot send a {other:?} document"
            ))),
        }
    }

    /// Draft/Sent quote → Accepted.
    pub fn mark_accepted(&mut self) -> DomainResult<()> {
        if self.kind != DocumentKind::Quote {
            return Err(DomainError::conflict("only quotes can be accepted"));
        }
        match self.status {
            DocumentStatus::Draft | DocumentStatus::Sent => {
                self.status = DocumentStatus::Accepted;
                Ok(())
            }
            other => Err(DomainError::conflict(format!(
                "cannot accept a {other:?} quote"
            ))),
        }
    }

    /// Draft/Sent invoice → Paid.
    pub fn mark_paid(&mut self) -> DomainResult<()> {
        if self.kind != DocumentKind::Invoice {
            return Err(DomainError::conflict("only invoices can be paid"));
        }
        match self.status {
            DocumentStatus::Draft | DocumentStatus::Sent => {
                self.status = DocumentStatus::Paid;
                Ok(())
            }
            other => Err(DomainError::conflict(format!(
                "cannot pay a {other:?} invoice"
            ))),
        }
    }

    /// Any unpaid state → Void. The number stays burned: voided documents
    /// never release their sequence value.
    pub fn void(&mut self) -> DomainResult<()> {
        match self.status {
            DocumentStatus::Paid => Err(DomainError::conflict("cannot void a paid invoice")),
            DocumentStatus::Void => Err(DomainError::conflict("document is already void")),
            _ => {
                self.status = DocumentStatus::Void;
                Ok(())
            }
        }
    }

    /// Convert this quote into a new invoice draft.
    ///
    /// The invoice carries the quote's customer, line items and notes, but
    /// receives its own freshly generated number and freshly computed totals
    /// (supplied by the caller, which owns the generator and calculator).
    /// The quote transitions to `Accepted`.
    pub fn convert_to_invoice(
        &mut self,
        invoice_id: DocumentId,
        number: DocumentNumber,
        totals: DocumentTotals,
        issue_date: NaiveDate,
        due_date: Option<NaiveDate>,
    ) -> DomainResult<DocumentRecord> {
        if self.kind != DocumentKind::Quote {
            return Err(DomainError::conflict(
                "only quotes can be converted to invoices",
            ));
        }
        if self.status == DocumentStatus::Void {
            return Err(DomainError::conflict("cannot convert a void quote"));
        }

        let invoice = DocumentRecord::create(
            NewDocument {
                id: invoice_id,
                account_id: self.account_id,
                customer_id: self.customer_id,
                kind: DocumentKind::Invoice,
                issuer: self.issuer.clone(),
                customer: self.customer.clone(),
                issue_date,
                secondary_date: due_date,
                notes: self.notes.clone(),
                line_items: self.line_items.clone(),
            },
            number,
            totals,
        )?;

        self.status = DocumentStatus::Accepted;
        Ok(invoice)
    }
}
