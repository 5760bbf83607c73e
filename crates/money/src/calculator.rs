//! Tax-inclusive totals computation.

use rust_decimal::{Decimal, RoundingStrategy};

use facturo_core::{DocumentKind, DomainError, DomainResult, StampPolicy};
use facturo_documents::{DocumentTotals, LineFigures, LineItem};

/// Round a full-precision value to its 2-decimal presentation form.
fn round2(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Computes per-line figures and document totals from line items.
///
/// Accumulation happens at full decimal precision; only the values stored
/// into [`DocumentTotals`] are rounded. Validation is all-or-nothing: a
/// single bad line rejects the whole computation before any totals exist.
#[derive(Debug, Clone)]
pub struct MoneyCalculator {
    policy: StampPolicy,
}

impl MoneyCalculator {
    pub fn new(policy: StampPolicy) -> Self {
        Self { policy }
    }

    pub fn compute(&self, kind: DocumentKind, items: &[LineItem]) -> DomainResult<DocumentTotals> {
        for (index, item) in items.iter().enumerate() {
            item.validate(index)?;
        }

        let overflow = |index: usize| {
            DomainError::validation(format!(
                "line {index}: amount exceeds the representable range"
            ))
        };

        let mut subtotal = Decimal::ZERO;
        let mut tax_total = Decimal::ZERO;
        let mut lines = Vec::with_capacity(items.len());

        for (index, item) in items.iter().enumerate() {
            // Line validation bounds sign and tax range, not magnitude, so
            // every multiply and add here is checked.
            let net = item
                .quantity
                .checked_mul(item.unit_price)
                .ok_or_else(|| overflow(index))?;
            let tax = net
                .checked_mul(item.tax_rate_percent)
                .and_then(|v| v.checked_div(Decimal::ONE_HUNDRED))
                .ok_or_else(|| overflow(index))?;
            let line_total = net.checked_add(tax).ok_or_else(|| overflow(index))?;
            subtotal = subtotal.checked_add(net).ok_or_else(|| overflow(index))?;
            tax_total = tax_total.checked_add(tax).ok_or_else(|| overflow(index))?;
            lines.push(LineFigures {
                net: round2(net),
                tax: round2(tax),
                total: round2(line_total),
            });
        }

        let last = items.len().saturating_sub(1);
        let subtotal = round2(subtotal);
        let tax_total = round2(tax_total);
        // Summing the two presentation figures keeps the printed identity
        // `grand = subtotal + tax` exact.
        let grand_total = subtotal
            .checked_add(tax_total)
            .ok_or_else(|| overflow(last))?;

        // The stamp is a flat, untaxed add-on for invoices and quotes whose
        // grand total reaches the threshold.
        let stamp_fee = (kind.stampable() && grand_total >= self.policy.threshold)
            .then_some(round2(self.policy.fee));
        let total_payable = grand_total
            .checked_add(stamp_fee.unwrap_or(Decimal::ZERO))
            .ok_or_else(|| overflow(last))?;

        Ok(DocumentTotals {
            subtotal,
            tax_total,
            grand_total,
            stamp_fee,
            total_payable,
            lines,
        })
    }
}
