//! Per-kind document templates.
//!
//! One parameterized template replaces per-kind copies of the rendering
//! logic: the kind only decides the title, the label and requirement of the
//! secondary date, and whether the per-line tax column is shown.

use facturo_core::DocumentKind;

/// Fixed x-offsets (mm) for the item table columns. `tax_rate` is absent
/// for kinds that do not render per-line tax.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TableColumns {
    pub description: f32,
    pub quantity: f32,
    pub unit_price: f32,
    pub tax_rate: Option<f32>,
    pub total: f32,
}

/// Everything kind-specific about a rendered document.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DocumentTemplate {
    pub title: &'static str,
    /// Label of the kind's secondary date, if it has one.
    pub secondary_date_label: Option<&'static str>,
    /// Whether a missing secondary date is an input contract violation.
    pub secondary_date_required: bool,
    pub columns: TableColumns,
}

impl DocumentTemplate {
    pub fn for_kind(kind: DocumentKind) -> Self {
        match kind {
            DocumentKind::Invoice => Self {
                title: "FACTURE",
                secondary_date_label: Some("Date d'échéance"),
                secondary_date_required: true,
                columns: TAXED_COLUMNS,
            },
            DocumentKind::Quote => Self {
                title: "DEVIS",
                secondary_date_label: Some("Date de validité"),
                secondary_date_required: true,
                columns: TAXED_COLUMNS,
            },
            DocumentKind::DeliveryNote => Self {
                title: "BON DE LIVRAISON",
                secondary_date_label: None,
                secondary_date_required: false,
                columns: UNTAXED_COLUMNS,
            },
        }
    }

    pub fn shows_line_tax(&self) -> bool {
        self.columns.tax_rate.is_some()
    }
}

const TAXED_COLUMNS: TableColumns = TableColumns {
    description: 15.0,
    quantity: 110.0,
    unit_price: 128.0,
    tax_rate: Some(152.0),
    total: 170.0,
};

const UNTAXED_COLUMNS: TableColumns = TableColumns {
    description: 15.0,
    quantity: 118.0,
    unit_price: 142.0,
    tax_rate: None,
    total: 170.0,
};
