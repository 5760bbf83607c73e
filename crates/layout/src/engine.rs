//! The page layout engine.
//!
//! Maintains a drawing cursor on a fixed-size page, emits draw operations,
//! and inserts page breaks on overflow. While a table is active, every
//! continuation page re-emits the table's column header row before data
//! rows continue, so an arbitrarily long item list renders correctly across
//! any number of pages with nothing clipped at a boundary.

use thiserror::Error;

use crate::ops::{DrawOp, Page};
use crate::style::{PageStyle, TextStyle};

/// Hard cap on page count; pathological inputs fail instead of growing
/// without bound.
pub const MAX_PAGES: usize = 200;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LayoutError {
    #[error("document exceeds the {0}-page limit")]
    PageLimit(usize),
}

/// One cell of a table header row: x offset, text, style.
#[derive(Debug, Clone, PartialEq)]
pub struct HeaderCell {
    pub x: f32,
    pub content: String,
    pub style: TextStyle,
}

/// Per-render drawing state, owned exclusively by one render invocation.
///
/// The engine is threaded through each layout operation as a value; there is
/// no shared drawing surface to reassign mid-loop. `finish` consumes it and
/// yields the page list.
#[derive(Debug)]
pub struct LayoutEngine {
    style: PageStyle,
    done: Vec<Page>,
    current: Page,
    cursor_y: f32,
    table_header: Option<Vec<HeaderCell>>,
}

impl LayoutEngine {
    pub fn new(style: PageStyle) -> Self {
        let cursor_y = style.content_top();
        Self {
            style,
            done: Vec::new(),
            current: Page::default(),
            cursor_y,
            table_header: None,
        }
    }

    pub fn style(&self) -> &PageStyle {
        &self.style
    }

    /// Current baseline position (mm from the bottom edge).
    pub fn cursor_y(&self) -> f32 {
        self.cursor_y
    }

    /// Pages completed so far, excluding the one under the cursor.
    pub fn completed_pages(&self) -> usize {
        self.done.len()
    }

    /// Move the cursor back up the current page, for drawing a second
    /// column next to an already-drawn block. `y` must lie on this page.
    pub fn rewind_to(&mut self, y: f32) {
        debug_assert!(y <= self.style.content_top());
        self.cursor_y = y;
    }

    /// Place text at the column offset `x` and the current baseline.
    pub fn draw_text(&mut self, x: f32, content: impl Into<String>, style: TextStyle) {
        self.current.ops.push(DrawOp::Text {
            x,
            y: self.cursor_y,
            style,
            content: content.into(),
        });
    }

    /// A horizontal rule across the content width at the current baseline.
    pub fn draw_rule(&mut self) {
        self.current.ops.push(DrawOp::Rule {
            x1: self.style.content_left(),
            x2: self.style.content_right(),
            y: self.cursor_y,
        });
    }

    /// Move the cursor down one row. Crossing the bottom margin closes the
    /// page, opens a new one, re-emits the active table header and resets
    /// the cursor below the top margin.
    pub fn advance_row(&mut self, height: f32) -> Result<(), LayoutError> {
        self.cursor_y -= height;
        if self.cursor_y < self.style.content_bottom() {
            self.break_page(true)?;
        }
        Ok(())
    }

    /// Insert vertical whitespace between sections. Unlike
    /// [`advance_row`](Self::advance_row), an overflow here starts the new
    /// page without repeating any table header.
    pub fn new_section(&mut self, gap: f32) -> Result<(), LayoutError> {
        self.cursor_y -= gap;
        if self.cursor_y < self.style.content_bottom() {
            self.break_page(false)?;
        }
        Ok(())
    }

    /// Begin the item table: emits the column header row (with its rule)
    /// and arms header repetition for subsequent page breaks.
    pub fn begin_table(&mut self, header: Vec<HeaderCell>) -> Result<(), LayoutError> {
        // The header row consumes 1.5 row heights; a break mid-row would
        // strand the header cells at the bottom of the old page.
        let needed = self.style.row_height * 1.5;
        if self.cursor_y - needed < self.style.content_bottom() {
            self.break_page(false)?;
        }
        self.emit_header_row(&header)?;
        self.table_header = Some(header);
        Ok(())
    }

    /// End the item table; later page breaks no longer repeat the header.
    pub fn end_table(&mut self) {
        self.table_header = None;
    }

    /// Consume the engine and return every page, including the current one.
    pub fn finish(mut self) -> Vec<Page> {
        self.done.push(self.current);
        self.done
    }

    fn break_page(&mut self, repeat_header: bool) -> Result<(), LayoutError> {
        if self.done.len() + 1 >= MAX_PAGES {
            return Err(LayoutError::PageLimit(MAX_PAGES));
        }
        let finished = std::mem::take(&mut self.current);
        self.done.push(finished);
        self.cursor_y = self.style.content_top();

        if repeat_header {
            if let Some(header) = self.table_header.take() {
                self.emit_header_row(&header)?;
                self.table_header = Some(header);
            }
        }
        Ok(())
    }

    fn emit_header_row(&mut self, header: &[HeaderCell]) -> Result<(), LayoutError> {
        for cell in header {
            self.draw_text(cell.x, cell.content.clone(), cell.style);
        }
        self.advance_row(self.style.row_height / 2.0)?;
        self.draw_rule();
        self.advance_row(self.style.row_height)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header() -> Vec<HeaderCell> {
        vec![
            HeaderCell {
                x: 15.0,
                content: "Description".to_string(),
                style: TextStyle::BODY_BOLD,
            },
            HeaderCell {
                x: 170.0,
                content: "Total".to_string(),
                style: TextStyle::BODY_BOLD,
            },
        ]
    }

    /// Ops a header row leaves behind: its text cells plus one rule.
    fn header_texts(page: &Page) -> Vec<&str> {
        page.texts().take(2).collect()
    }

    #[test]
    fn single_page_without_overflow() {
        let mut engine = LayoutEngine::new(PageStyle::default());
        engine.draw_text(15.0, "hello", TextStyle::BODY);
        engine.advance_row(6.0).unwrap();

        let pages = engine.finish();
        assert_eq!(pages.len(), 1);
        assert_eq!(pages[0].texts().collect::<Vec<_>>(), vec!["hello"]);
    }

    #[test]
    fn overflow_breaks_page_and_repeats_header() {
        let style = PageStyle::default();
        let usable_rows = ((style.content_top() - style.content_bottom()) / style.row_height) as usize;
        let rows = usable_rows * 2; // guaranteed to spill onto further pages

        let mut engine = LayoutEngine::new(style);
        engine.begin_table(header()).unwrap();
        for i in 0..rows {
            engine.draw_text(15.0, format!("row {i}"), TextStyle::BODY);
            engine.advance_row(style.row_height).unwrap();
        }
        engine.end_table();

        let pages = engine.finish();
        assert!(pages.len() > 1, "expected an overflow, got one page");

        // The column header row appears identically on every page that
        // carries item rows.
        let expected = header_texts(&pages[0]);
        for (idx, page) in pages.iter().enumerate() {
            if page.texts().any(|t| t.starts_with("row ")) {
                assert_eq!(header_texts(page), expected, "page {idx} header differs");
            }
        }

        // Nothing clipped: every row landed on some page.
        let all: Vec<String> = pages
            .iter()
            .flat_map(|p| p.texts().map(str::to_string))
            .collect();
        for i in 0..rows {
            assert!(all.contains(&format!("row {i}")), "row {i} missing");
        }
    }

    #[test]
    fn table_started_near_the_bottom_moves_whole_header_to_the_next_page() {
        let style = PageStyle::default();
        let mut engine = LayoutEngine::new(style);
        // Walk the cursor to within one row height of the bottom margin.
        while engine.cursor_y() - style.row_height >= style.content_bottom() + style.row_height {
            engine.advance_row(style.row_height).unwrap();
        }
        engine.begin_table(header()).unwrap();
        engine.draw_text(15.0, "row 0", TextStyle::BODY);
        engine.advance_row(style.row_height).unwrap();

        let pages = engine.finish();
        assert_eq!(pages.len(), 2);
        // The first page carries no table content at all; header cells, rule
        // and the first data row open the next page together.
        assert_eq!(pages[0].texts().count(), 0);
        let second: Vec<&str> = pages[1].texts().collect();
        assert_eq!(second, vec!["Description", "Total", "row 0"]);
        assert!(pages[1].ops.iter().any(|op| matches!(op, DrawOp::Rule { .. })));
    }

    #[test]
    fn rows_never_cross_the_bottom_margin() {
        let style = PageStyle::default();
        let mut engine = LayoutEngine::new(style);
        engine.begin_table(header()).unwrap();
        for i in 0..500 {
            engine.draw_text(15.0, format!("row {i}"), TextStyle::BODY);
            engine.advance_row(style.row_height).unwrap();
        }
        let pages = engine.finish();
        for page in &pages {
            for op in &page.ops {
                if let DrawOp::Text { y, .. } = op {
                    assert!(*y >= style.content_bottom() - f32::EPSILON);
                    assert!(*y <= style.content_top() + f32::EPSILON);
                }
            }
        }
    }

    #[test]
    fn new_section_does_not_repeat_header() {
        let style = PageStyle::default();
        let mut engine = LayoutEngine::new(style);
        engine.begin_table(header()).unwrap();
        // Force an overflow via a section gap larger than the page.
        engine.new_section(style.height).unwrap();
        engine.draw_text(15.0, "after gap", TextStyle::BODY);

        let pages = engine.finish();
        assert_eq!(pages.len(), 2);
        assert_eq!(pages[1].texts().collect::<Vec<_>>(), vec!["after gap"]);
    }

    #[test]
    fn page_count_is_capped() {
        let style = PageStyle::default();
        let mut engine = LayoutEngine::new(style);
        let result = (0..).try_for_each(|_| engine.advance_row(style.height));
        assert_eq!(result, Err(LayoutError::PageLimit(MAX_PAGES)));
    }

    #[test]
    fn rewind_supports_parallel_columns() {
        let mut engine = LayoutEngine::new(PageStyle::default());
        let top = engine.cursor_y();

        engine.draw_text(15.0, "left 1", TextStyle::BODY);
        engine.advance_row(6.0).unwrap();
        engine.draw_text(15.0, "left 2", TextStyle::BODY);
        engine.advance_row(6.0).unwrap();
        let left_end = engine.cursor_y();

        engine.rewind_to(top);
        engine.draw_text(120.0, "right 1", TextStyle::BODY);
        engine.advance_row(6.0).unwrap();
        let right_end = engine.cursor_y();

        // The taller column decides where the next section begins.
        engine.rewind_to(left_end.min(right_end));
        assert_eq!(engine.cursor_y(), left_end);

        let pages = engine.finish();
        let ys: Vec<f32> = pages[0]
            .ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Text { y, content, .. } if content == "left 1" || content == "right 1" => {
                    Some(*y)
                }
                _ => None,
            })
            .collect();
        // Both columns started on the same baseline.
        assert_eq!(ys[0], ys[1]);
    }

    #[test]
    fn identical_input_produces_identical_pages() {
        let run = || {
            let mut engine = LayoutEngine::new(PageStyle::default());
            engine.begin_table(header()).unwrap();
            for i in 0..100 {
                engine.draw_text(15.0, format!("row {i}"), TextStyle::BODY);
                engine.advance_row(6.0).unwrap();
            }
            engine.finish()
        };
        assert_eq!(run(), run());
    }
}
