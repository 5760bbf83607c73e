//! The pure draw-operation model.
//!
//! A render pass produces pages of draw operations; the PDF backend replays
//! them verbatim. Keeping this model free of backend types makes a render
//! fully deterministic and directly assertable in tests.

use serde::{Deserialize, Serialize};

use crate::style::TextStyle;

/// One primitive drawing operation on a page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DrawOp {
    /// Text placed with its baseline at `(x, y)`.
    Text {
        x: f32,
        y: f32,
        style: TextStyle,
        content: String,
    },
    /// A horizontal rule from `(x1, y)` to `(x2, y)`.
    Rule { x1: f32, x2: f32, y: f32 },
}

/// One finished page of operations.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Page {
    pub ops: Vec<DrawOp>,
}

impl Page {
    /// The text contents of this page, in draw order.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::Text { content, .. } => Some(content.as_str()),
            DrawOp::Rule { .. } => None,
        })
    }
}
