//! Abstract draw surface.

use delve_core::Color;

/// A grid of character cells a frontend can display.
///
/// Implementors only provide cell access; writes outside the grid must be
/// ignored.
pub trait Console {
    fn width(&self) -> i32;

    fn height(&self) -> i32;

    /// Writes a glyph with its foreground color, keeping the background
    /// unless `bg` is given.
    fn put(&mut self, x: i32, y: i32, glyph: char, fg: Color, bg: Option<Color>);

    fn set_fg(&mut self, x: i32, y: i32, fg: Color);

    fn set_bg(&mut self, x: i32, y: i32, bg: Color);

    fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && x < self.width() && y < self.height()
    }

    fn print(&mut self, x: i32, y: i32, text: &str, fg: Color) {
        for (offset, glyph) in (0..).zip(text.chars()) {
            self.put(x + offset, y, glyph, fg, None);
        }
    }

    /// Prints `text` centered within `width` cells starting at `x`.
    fn print_centered(&mut self, x: i32, y: i32, width: i32, text: &str, fg: Color) {
        let length = text.chars().count() as i32;
        self.print(x + (width - length).max(0) / 2, y, text, fg);
    }

    fn fill(&mut self, x: i32, y: i32, width: i32, height: i32, fg: Color, bg: Color) {
        for row in y..y + height {
            for column in x..x + width {
                self.put(column, row, ' ', fg, Some(bg));
            }
        }
    }

    /// Draws a single-line box, optionally clearing its interior and
    /// centering a title on the top edge.
    fn draw_frame(&mut self, frame: Frame<'_>) {
        let Frame {
            x,
            y,
            width,
            height,
            title,
            clear,
            fg,
            bg,
        } = frame;
        if width < 2 || height < 2 {
            return;
        }
        let (right, bottom) = (x + width - 1, y + height - 1);

        if clear {
            self.fill(x, y, width, height, fg, bg.unwrap_or(delve_core::palette::BLACK));
        }
        for column in x + 1..right {
            self.put(column, y, '─', fg, bg);
            self.put(column, bottom, '─', fg, bg);
        }
        for row in y + 1..bottom {
            self.put(x, row, '│', fg, bg);
            self.put(right, row, '│', fg, bg);
        }
        self.put(x, y, '┌', fg, bg);
        self.put(right, y, '┐', fg, bg);
        self.put(x, bottom, '└', fg, bg);
        self.put(right, bottom, '┘', fg, bg);

        if let Some(title) = title {
            self.print_centered(x, y, width, title, fg);
        }
    }
}

/// Parameters of [`Console::draw_frame`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Frame<'a> {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
    pub title: Option<&'a str>,
    pub clear: bool,
    pub fg: Color,
    pub bg: Option<Color>,
}

impl<'a> Frame<'a> {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
            title: None,
            clear: false,
            fg: delve_core::palette::WHITE,
            bg: None,
        }
    }

    pub fn title(mut self, title: &'a str) -> Self {
        self.title = Some(title);
        self
    }

    pub fn cleared(mut self, bg: Color) -> Self {
        self.clear = true;
        self.bg = Some(bg);
        self
    }

    pub fn fg(mut self, fg: Color) -> Self {
        self.fg = fg;
        self
    }
}

/// In-memory console, used by tests and as a staging buffer by frontends.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CellBuffer {
    width: i32,
    height: i32,
    cells: Vec<Cell>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cell {
    pub glyph: char,
    pub fg: Color,
    pub bg: Color,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            glyph: ' ',
            fg: delve_core::palette::WHITE,
            bg: delve_core::palette::BLACK,
        }
    }
}

impl CellBuffer {
    pub fn new(width: i32, height: i32) -> Self {
        let (width, height) = (width.max(0), height.max(0));
        Self {
            width,
            height,
            cells: vec![Cell::default(); (width * height) as usize],
        }
    }

    pub fn clear(&mut self) {
        self.cells.fill(Cell::default());
    }

    pub fn cell(&self, x: i32, y: i32) -> Option<&Cell> {
        self.index(x, y).map(|index| &self.cells[index])
    }

    /// One row as plain text.
    pub fn row_text(&self, y: i32) -> String {
        (0..self.width)
            .filter_map(|x| self.cell(x, y).map(|cell| cell.glyph))
            .collect()
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        self.contains(x, y).then(|| (y * self.width + x) as usize)
    }
}

impl Console for CellBuffer {
    fn width(&self) -> i32 {
        self.width
    }

    fn height(&self) -> i32 {
        self.height
    }

    fn put(&mut self, x: i32, y: i32, glyph: char, fg: Color, bg: Option<Color>) {
        if let Some(index) = self.index(x, y) {
            let cell = &mut self.cells[index];
            cell.glyph = glyph;
            cell.fg = fg;
            if let Some(bg) = bg {
                cell.bg = bg;
            }
        }
    }

    fn set_fg(&mut self, x: i32, y: i32, fg: Color) {
        if let Some(index) = self.index(x, y) {
            self.cells[index].fg = fg;
        }
    }

    fn set_bg(&mut self, x: i32, y: i32, bg: Color) {
        if let Some(index) = self.index(x, y) {
            self.cells[index].bg = bg;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use delve_core::palette;

    #[test]
    fn writes_outside_the_grid_are_ignored() {
        let mut console = CellBuffer::new(4, 2);
        console.print(2, 0, "abcd", palette::WHITE);
        console.put(-1, 1, 'x', palette::WHITE, None);
        assert_eq!(console.row_text(0), "  ab");
        assert_eq!(console.row_text(1), "    ");
    }

    #[test]
    fn frame_has_corners_and_centered_title() {
        let mut console = CellBuffer::new(10, 3);
        console.draw_frame(Frame::new(0, 0, 10, 3).title("Hi").cleared(palette::BLACK));
        assert_eq!(console.row_text(0), "┌───Hi───┐");
        assert_eq!(console.row_text(1), "│        │");
        assert_eq!(console.row_text(2), "└────────┘");
    }
}
