//! Blits a [`CellBuffer`] onto a ratatui frame.
use delve_core::Color;
use delve_frontend::{CellBuffer, Console};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Color as TermColor,
    widgets::Widget,
};

/// Widget drawing a console cell for cell from the top-left of its area.
/// Cells outside the area are clipped.
pub struct ConsoleView<'a> {
    cells: &'a CellBuffer,
}

impl<'a> ConsoleView<'a> {
    pub fn new(cells: &'a CellBuffer) -> Self {
        Self { cells }
    }
}

impl Widget for ConsoleView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let width = i32::from(area.width).min(self.cells.width());
        let height = i32::from(area.height).min(self.cells.height());

        for y in 0..height {
            for x in 0..width {
                let Some(cell) = self.cells.cell(x, y) else {
                    continue;
                };
                let position = (area.x + x as u16, area.y + y as u16);
                if let Some(target) = buf.cell_mut(position) {
                    target
                        .set_char(cell.glyph)
                        .set_fg(term_color(cell.fg))
                        .set_bg(term_color(cell.bg));
                }
            }
        }
    }
}

fn term_color(color: Color) -> TermColor {
    TermColor::Rgb(color.r, color.g, color.b)
}
