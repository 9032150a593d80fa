// Indicator Decorations
// What actually gets painted into the indicator's rectangle

use std::fmt;

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
};

/// Upper one-eighth block: reads as a line hugging the label row above it
pub const UNDERLINE_SYMBOL: &str = "▔";

/// A paintable asset the indicator positions and draws
pub trait Decoration: fmt::Debug {
    /// Paint into `area`, which is already clipped to the buffer
    fn draw(&self, area: Rect, buf: &mut Buffer);
}

/// Fills every cell of the area with an optional symbol and a style
#[derive(Debug, Clone, PartialEq)]
pub struct FillDecoration {
    /// Replacement symbol; None keeps whatever text is underneath
    pub symbol: Option<String>,
    pub style: Style,
}

impl FillDecoration {
    pub fn new(symbol: Option<String>, style: Style) -> Self {
        Self { symbol, style }
    }

    /// Line drawn with `UNDERLINE_SYMBOL` in the given colour
    pub fn underline(color: Color) -> Self {
        Self::new(Some(UNDERLINE_SYMBOL.to_string()), Style::default().fg(color))
    }

    /// Background colour only, labels underneath stay readable
    pub fn highlight(color: Color) -> Self {
        Self::new(None, Style::default().bg(color))
    }

    pub fn with_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.symbol = Some(symbol.into());
        self
    }
}

impl Decoration for FillDecoration {
    fn draw(&self, area: Rect, buf: &mut Buffer) {
        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                if let Some(cell) = buf.cell_mut((x, y)) {
                    if let Some(symbol) = &self.symbol {
                        cell.set_symbol(symbol);
                    }
                    cell.set_style(self.style);
                }
            }
        }
    }
}
