//! Character-grid drawing surface for the terminal demo.
//!
//! Maps the cloud's pixel coordinates onto a fixed grid of cells. Each
//! `fill_text` call writes its text centered on the target cell, so later
//! calls paint over earlier ones exactly like a canvas.

use crate::cloud::{Surface, TextStyle};
use crate::ui::theme::Theme;
use std::fmt::Write;

/// Labels fainter than this are rendered with the ANSI dim attribute.
pub const DIM_ALPHA: f64 = 0.75;

#[derive(Debug, Clone, PartialEq)]
struct Cell {
    ch: char,
    color: String,
    dim: bool,
}

#[derive(Debug, Clone)]
pub struct TerminalSurface {
    cols: usize,
    rows: usize,
    /// Pixel space the grid covers.
    width: f64,
    height: f64,
    cells: Vec<Option<Cell>>,
}

impl TerminalSurface {
    /// Creates a `cols` x `rows` grid covering a `width` x `height` pixel area.
    #[must_use]
    pub fn new(cols: usize, rows: usize, width: f64, height: f64) -> Self {
        Self {
            cols,
            rows,
            width,
            height,
            cells: vec![None; cols * rows],
        }
    }

    #[must_use]
    pub const fn grid_size(&self) -> (usize, usize) {
        (self.cols, self.rows)
    }

    /// Plain text of one row, blanks as spaces.
    #[must_use]
    pub fn row_text(&self, row: usize) -> String {
        if row >= self.rows {
            return String::new();
        }
        self.cells[row * self.cols..(row + 1) * self.cols]
            .iter()
            .map(|c| c.as_ref().map_or(' ', |c| c.ch))
            .collect()
    }

    /// Renders the grid as ANSI-colored lines.
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::new();

        for row in 0..self.rows {
            let mut styled: Option<(&str, bool)> = None;
            for cell in &self.cells[row * self.cols..(row + 1) * self.cols] {
                match cell {
                    Some(cell) => {
                        if styled != Some((cell.color.as_str(), cell.dim)) {
                            out.push_str(Theme::reset());
                            if cell.dim {
                                out.push_str(Theme::dim());
                            }
                            out.push_str(&Theme::fg(&cell.color));
                            styled = Some((cell.color.as_str(), cell.dim));
                        }
                        out.push(cell.ch);
                    }
                    None => out.push(' '),
                }
            }
            let _ = writeln!(out, "{}", Theme::reset());
        }
        out
    }

    fn row_for(&self, y: f64) -> Option<usize> {
        if self.height <= 0.0 || !y.is_finite() {
            return None;
        }
        let row = (y / self.height * self.rows as f64).floor();
        if row < 0.0 || row >= self.rows as f64 {
            return None;
        }
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let row = row as usize;
        Some(row)
    }

    fn column_of(&self, x: f64) -> f64 {
        x / self.width * self.cols as f64
    }
}

impl Surface for TerminalSurface {
    fn clear(&mut self) {
        self.cells.fill(None);
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64, style: &TextStyle<'_>) {
        let Some(row) = self.row_for(y) else {
            return;
        };
        if self.width <= 0.0 || !x.is_finite() {
            return;
        }
        let len = text.chars().count() as f64;
        #[allow(clippy::cast_possible_truncation)]
        let start = (self.column_of(x) - len / 2.0).round() as i64;
        let dim = style.alpha < DIM_ALPHA;

        for (i, ch) in text.chars().enumerate() {
            let col = start + i as i64;
            let Ok(col) = usize::try_from(col) else {
                continue;
            };
            if col >= self.cols {
                break;
            }
            self.cells[row * self.cols + col] = Some(Cell {
                ch,
                color: style.color.to_string(),
                dim,
            });
        }
    }
}
