//! The document renderer: a strictly ordered walk over rendering phases.
//!
//! `Header → Issuer/Customer columns → DateLine → ItemTable → TotalsBlock
//! → StampBlock → NotesBlock → Done`, with the item table free to span
//! pages through the layout engine. The walk only ever moves forward.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use facturo_core::{BillingConfig, DomainError};
use facturo_documents::DocumentRecord;
use facturo_layout::{HeaderCell, LayoutEngine, Page, PageStyle, TextStyle, wrap_text};
use facturo_money::format_amount;
use facturo_numbering::DocumentNumber;

use crate::error::RenderError;
use crate::pdf;
use crate::template::DocumentTemplate;

const LINE_HEIGHT: f32 = 5.0;
const SECTION_GAP: f32 = 8.0;

/// The finished artifact of one render pass: the generated number and
/// totals baked into the content, plus the page list. Rendering the same
/// record twice yields identical pages.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedDocument {
    pub number: DocumentNumber,
    pub totals: facturo_documents::DocumentTotals,
    pub pages: Vec<Page>,
}

impl RenderedDocument {
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }
}

/// Renders document records into pages and PDF bytes.
///
/// Each `render` call owns its layout engine outright; renders share no
/// mutable state and can run in parallel freely.
#[derive(Debug, Clone)]
pub struct DocumentRenderer {
    config: BillingConfig,
    page_style: PageStyle,
}

impl DocumentRenderer {
    pub fn new(config: BillingConfig) -> Self {
        Self {
            config,
            page_style: PageStyle::default(),
        }
    }

    /// Produce the page list for a record. Pure and deterministic.
    pub fn render(&self, record: &DocumentRecord) -> Result<RenderedDocument, RenderError> {
        let template = DocumentTemplate::for_kind(record.kind());

        // Input contract checks come first; no partial output on failure.
        if template.secondary_date_required && record.secondary_date().is_none() {
            return Err(DomainError::validation(format!(
                "{:?} requires a secondary date",
                record.kind()
            ))
            .into());
        }
        if record.totals().lines.len() != record.line_items().len() {
            return Err(DomainError::invariant(
                "computed totals do not cover the line items",
            )
            .into());
        }

        let mut engine = LayoutEngine::new(self.page_style);
        self.phase_header(&mut engine, &template, record)?;
        self.phase_parties(&mut engine, record)?;
        self.phase_date_line(&mut engine, &template, record)?;
        self.phase_item_table(&mut engine, &template, record)?;
        self.phase_totals(&mut engine, &template, record)?;
        self.phase_notes(&mut engine, record)?;

        let pages = engine.finish();
        tracing::debug!(
            number = %record.number(),
            pages = pages.len(),
            "rendered document"
        );

        Ok(RenderedDocument {
            number: record.number(),
            totals: record.totals().clone(),
            pages,
        })
    }

    /// Render straight to the finished PDF byte stream.
    pub fn render_pdf(&self, record: &DocumentRecord) -> Result<Vec<u8>, RenderError> {
        let rendered = self.render(record)?;
        let template = DocumentTemplate::for_kind(record.kind());
        pdf::pages_to_pdf(template.title, &self.page_style, &rendered.pages)
    }

    /// `<kind-prefix-lowercase>-<number>.pdf`
    pub fn suggested_filename(record: &DocumentRecord) -> String {
        format!(
            "{}-{}.pdf",
            record.kind().prefix().to_lowercase(),
            record.number()
        )
    }

    fn phase_header(
        &self,
        engine: &mut LayoutEngine,
        template: &DocumentTemplate,
        record: &DocumentRecord,
    ) -> Result<(), RenderError> {
        let left = engine.style().content_left();
        engine.draw_text(left, template.title, TextStyle::TITLE);
        engine.draw_text(130.0, format!("N° {}", record.number()), TextStyle::HEADING);
        engine.advance_row(4.0)?;
        engine.draw_rule();
        engine.new_section(SECTION_GAP)?;
        Ok(())
    }

    fn phase_parties(
        &self,
        engine: &mut LayoutEngine,
        record: &DocumentRecord,
    ) -> Result<(), RenderError> {
        let left = engine.style().content_left();
        let right = 120.0;
        let block_top = engine.cursor_y();

        engine.draw_text(left, "Émetteur", TextStyle::HEADING);
        engine.advance_row(engine.style().row_height)?;
        for line in record.issuer().display_lines() {
            engine.draw_text(left, line, TextStyle::BODY);
            engine.advance_row(LINE_HEIGHT)?;
        }
        let issuer_end = engine.cursor_y();

        engine.rewind_to(block_top);
        engine.draw_text(right, "Client", TextStyle::HEADING);
        engine.advance_row(engine.style().row_height)?;
        for line in record.customer().display_lines() {
            engine.draw_text(right, line, TextStyle::BODY);
            engine.advance_row(LINE_HEIGHT)?;
        }
        let customer_end = engine.cursor_y();

        // The taller block decides where the next phase begins.
        engine.rewind_to(issuer_end.min(customer_end));
        engine.new_section(SECTION_GAP)?;
        Ok(())
    }

    fn phase_date_line(
        &self,
        engine: &mut LayoutEngine,
        template: &DocumentTemplate,
        record: &DocumentRecord,
    ) -> Result<(), RenderError> {
        let left = engine.style().content_left();
        engine.draw_text(
            left,
            format!("Date d'émission: {}", format_date(record.issue_date())),
            TextStyle::BODY,
        );
        if let (Some(label), Some(date)) = (template.secondary_date_label, record.secondary_date())
        {
            engine.draw_text(120.0, format!("{label}: {}", format_date(date)), TextStyle::BODY);
        }
        engine.advance_row(engine.style().row_height)?;
        engine.new_section(4.0)?;
        Ok(())
    }

    fn phase_item_table(
        &self,
        engine: &mut LayoutEngine,
        template: &DocumentTemplate,
        record: &DocumentRecord,
    ) -> Result<(), RenderError> {
        let cols = template.columns;
        let cell = |x: f32, content: &str| HeaderCell {
            x,
            content: content.to_string(),
            style: TextStyle::BODY_BOLD,
        };

        let mut header = vec![
            cell(cols.description, "Désignation"),
            cell(cols.quantity, "Qté"),
            cell(cols.unit_price, "PU HT"),
        ];
        if let Some(x) = cols.tax_rate {
            header.push(cell(x, "TVA %"));
        }
        header.push(cell(cols.total, "Total"));
        engine.begin_table(header)?;

        let row_height = engine.style().row_height;
        for (item, figures) in record.line_items().iter().zip(&record.totals().lines) {
            engine.draw_text(cols.description, item.description.clone(), TextStyle::BODY);
            engine.draw_text(
                cols.quantity,
                item.quantity.normalize().to_string(),
                TextStyle::BODY,
            );
            engine.draw_text(cols.unit_price, fixed2(item.unit_price), TextStyle::BODY);
            if let Some(x) = cols.tax_rate {
                engine.draw_text(
                    x,
                    format!("{}%", item.tax_rate_percent.normalize()),
                    TextStyle::BODY,
                );
            }
            engine.draw_text(cols.total, fixed2(figures.total), TextStyle::BODY_BOLD);
            engine.advance_row(row_height)?;
        }
        engine.end_table();

        engine.draw_rule();
        engine.new_section(SECTION_GAP)?;
        Ok(())
    }

    fn phase_totals(
        &self,
        engine: &mut LayoutEngine,
        template: &DocumentTemplate,
        record: &DocumentRecord,
    ) -> Result<(), RenderError> {
        let totals = record.totals();
        let label_x = 118.0;
        let value_x = template.columns.total;
        let currency = self.config.currency_code.as_str();
        let row_height = engine.style().row_height;

        let mut money_row =
            |engine: &mut LayoutEngine, label: &str, value: Decimal, style: TextStyle| {
                engine.draw_text(label_x, label, style);
                engine.draw_text(value_x, format_amount(value, currency), style);
                engine.advance_row(row_height)
            };

        money_row(engine, "Total HT", totals.subtotal, TextStyle::BODY)?;
        money_row(engine, "TVA", totals.tax_total, TextStyle::BODY)?;
        money_row(engine, "Total TTC", totals.grand_total, TextStyle::BODY_BOLD)?;

        if let Some(fee) = totals.stamp_fee {
            money_row(engine, "Timbre fiscal", fee, TextStyle::BODY)?;
            money_row(engine, "Net à payer", totals.total_payable, TextStyle::BODY_BOLD)?;
        }
        Ok(())
    }

    fn phase_notes(
        &self,
        engine: &mut LayoutEngine,
        record: &DocumentRecord,
    ) -> Result<(), RenderError> {
        let Some(notes) = record.notes().filter(|n| !n.trim().is_empty()) else {
            return Ok(());
        };

        let left = engine.style().content_left();
        engine.new_section(SECTION_GAP)?;
        engine.draw_text(left, "Notes", TextStyle::HEADING);
        engine.advance_row(engine.style().row_height)?;

        // Long notes wrap and paginate; nothing is clipped to one line.
        let max_chars =
            (engine.style().content_width() / TextStyle::BODY.approx_char_width()) as usize;
        for line in wrap_text(notes, max_chars) {
            engine.draw_text(left, line, TextStyle::BODY);
            engine.advance_row(LINE_HEIGHT)?;
        }
        Ok(())
    }
}

fn format_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

fn fixed2(value: Decimal) -> String {
    let mut value = value;
    value.rescale(2);
    value.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filename_uses_lowercase_prefix_and_number() {
        // Exercised end to end in the integration tests; here only the
        // formatting rule.
        assert_eq!(
            format!("{}-{}.pdf", "FACT".to_lowercase(), "FACT202608-0001"),
            "fact-FACT202608-0001.pdf"
        );
    }

    #[test]
    fn dates_render_day_first() {
        let date = NaiveDate::from_ymd_opt(2026, 8, 30).unwrap();
        assert_eq!(format_date(date), "30/08/2026");
    }

    #[test]
    fn fixed2_pads_and_rounds() {
        assert_eq!(fixed2(Decimal::from(3)), "3.00");
        assert_eq!(fixed2(Decimal::new(1995, 3)), "2.00");
    }
}
