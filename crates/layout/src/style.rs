//! Page geometry and text styles.
//!
//! All distances are millimetres with the origin at the bottom-left corner
//! of the page (the convention of the PDF backend).

use serde::{Deserialize, Serialize};

/// Fixed page geometry: A4 with uniform margins and a uniform row height
/// applied to header and data rows alike.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PageStyle {
    pub width: f32,
    pub height: f32,
    pub margin_left: f32,
    pub margin_right: f32,
    pub margin_top: f32,
    pub margin_bottom: f32,
    pub row_height: f32,
}

impl Default for PageStyle {
    fn default() -> Self {
        Self {
            width: 210.0,
            height: 297.0,
            margin_left: 15.0,
            margin_right: 15.0,
            margin_top: 12.0,
            margin_bottom: 20.0,
            row_height: 6.0,
        }
    }
}

impl PageStyle {
    /// Y of the first baseline on a fresh page.
    pub fn content_top(&self) -> f32 {
        self.height - self.margin_top
    }

    /// Lowest Y a baseline may sit on before a page break.
    pub fn content_bottom(&self) -> f32 {
        self.margin_bottom
    }

    pub fn content_left(&self) -> f32 {
        self.margin_left
    }

    pub fn content_right(&self) -> f32 {
        self.width - self.margin_right
    }

    pub fn content_width(&self) -> f32 {
        self.content_right() - self.content_left()
    }
}

/// Font role and size for one piece of text. The backend maps `bold` onto
/// its bold font face; there is no other style axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TextStyle {
    /// Font size in points.
    pub size: f32,
    pub bold: bool,
}

impl TextStyle {
    pub const TITLE: Self = Self { size: 24.0, bold: true };
    pub const HEADING: Self = Self { size: 12.0, bold: true };
    pub const BODY: Self = Self { size: 10.0, bold: false };
    pub const BODY_BOLD: Self = Self { size: 10.0, bold: true };
    pub const SMALL: Self = Self { size: 9.0, bold: false };

    /// Rough average glyph advance in millimetres, used to budget how many
    /// characters fit into a given width when wrapping. Half an em is a
    /// conservative estimate for the builtin Helvetica faces.
    pub fn approx_char_width(&self) -> f32 {
        // 1 pt = 0.3528 mm
        self.size * 0.3528 * 0.5
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn a4_content_box_is_consistent() {
        let style = PageStyle::default();
        assert_eq!(style.content_top(), 285.0);
        assert_eq!(style.content_bottom(), 20.0);
        assert_eq!(style.content_width(), 180.0);
        assert!(style.content_left() < style.content_right());
    }

    #[test]
    fn char_budget_scales_with_font_size() {
        assert!(TextStyle::TITLE.approx_char_width() > TextStyle::BODY.approx_char_width());
    }
}
