//! The document issuer.

use chrono::{NaiveDate, Utc};
use thiserror::Error;

use facturo_core::{
    AccountId, BillingConfig, CustomerId, DocumentId, DocumentKind, DomainError,
};
use facturo_documents::{DocumentRecord, LineItem, NewDocument, Party};
use facturo_money::MoneyCalculator;
use facturo_numbering::{SequenceError, SequenceGenerator, SequenceStore};
use facturo_render::{DocumentRenderer, RenderError, RenderedDocument};

#[derive(Debug, Error)]
pub enum IssueError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Sequence(#[from] SequenceError),

    #[error(transparent)]
    Render(#[from] RenderError),
}

/// Caller-supplied input for issuing a document. The number and totals do
/// not exist yet; issuing produces both and locks them onto the record.
#[derive(Debug, Clone)]
pub struct DocumentDraft {
    pub account_id: AccountId,
    pub customer_id: CustomerId,
    pub kind: DocumentKind,
    pub issuer: Party,
    pub customer: Party,
    pub issue_date: NaiveDate,
    pub secondary_date: Option<NaiveDate>,
    pub notes: Option<String>,
    pub line_items: Vec<LineItem>,
}

/// Issues documents for one process: allocates numbers, computes totals,
/// renders artifacts.
///
/// The sequence store is the only shared state inside; everything else is
/// immutable configuration, so one issuer can serve concurrent callers.
#[derive(Debug)]
pub struct DocumentIssuer<S> {
    generator: SequenceGenerator<S>,
    calculator: MoneyCalculator,
    renderer: DocumentRenderer,
}

impl<S: SequenceStore> DocumentIssuer<S> {
    pub fn new(config: BillingConfig, store: S) -> Self {
        Self {
            generator: SequenceGenerator::new(store),
            calculator: MoneyCalculator::new(config.stamp.clone()),
            renderer: DocumentRenderer::new(config),
        }
    }

    /// Issue a new document: validate and total the line items, reserve the
    /// next number for the (account, kind, month) scope, and lock both onto
    /// the record.
    pub fn issue(&self, draft: DocumentDraft) -> Result<DocumentRecord, IssueError> {
        self.issue_on(draft, Utc::now().date_naive())
    }

    /// [`issue`](Self::issue) against an explicit date; tests pin the month
    /// scope with this.
    pub fn issue_on(
        &self,
        draft: DocumentDraft,
        date: NaiveDate,
    ) -> Result<DocumentRecord, IssueError> {
        // Totals first: a validation failure must not burn a number.
        let totals = self.calculator.compute(draft.kind, &draft.line_items)?;
        let number = self.generator.generate_on(draft.account_id, draft.kind, date)?;

        let record = DocumentRecord::create(
            NewDocument {
                id: DocumentId::new(),
                account_id: draft.account_id,
                customer_id: draft.customer_id,
                kind: draft.kind,
                issuer: draft.issuer,
                customer: draft.customer,
                issue_date: draft.issue_date,
                secondary_date: draft.secondary_date,
                notes: draft.notes,
                line_items: draft.line_items,
            },
            number,
            totals,
        )?;

        tracing::info!(
            number = %record.number(),
            kind = ?record.kind(),
            total = %record.totals().total_payable,
            "issued document"
        );
        Ok(record)
    }

    /// Convert a quote into an invoice: fresh FACT number, freshly computed
    /// totals (the stamp rule may differ), quote marked accepted.
    pub fn convert_quote(
        &self,
        quote: &mut DocumentRecord,
        issue_date: NaiveDate,
        due_date: Option<NaiveDate>,
    ) -> Result<DocumentRecord, IssueError> {
        let totals = self
            .calculator
            .compute(DocumentKind::Invoice, quote.line_items())?;
        let number =
            self.generator
                .generate_on(quote.account_id(), DocumentKind::Invoice, issue_date)?;

        let invoice =
            quote.convert_to_invoice(DocumentId::new(), number, totals, issue_date, due_date)?;

        tracing::info!(
            quote = %quote.number(),
            invoice = %invoice.number(),
            "converted quote to invoice"
        );
        Ok(invoice)
    }

    /// Deterministic page-level render of an issued record.
    pub fn render(&self, record: &DocumentRecord) -> Result<RenderedDocument, IssueError> {
        Ok(self.renderer.render(record)?)
    }

    /// The finished PDF byte stream for an issued record.
    pub fn render_pdf(&self, record: &DocumentRecord) -> Result<Vec<u8>, IssueError> {
        Ok(self.renderer.render_pdf(record)?)
    }
}
