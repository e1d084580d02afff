//! Console renderer: a cursor over a fixed grid of character cells.
//!
//! The cursor is a linear offset into the grid. Writing past the last cell
//! wraps to the top-left corner and overwrites from there; there is no
//! scrolling.

use crate::config::DEFAULT_ATTRIBUTE;
use crate::keyboard::BACKSPACE;
use core::fmt;
use lithax_hal::TextGrid;

/// Renders characters into a [`TextGrid`].
pub struct Console<G> {
    grid: G,
    /// Next cell to write, always below `width * height`.
    cursor: usize,
    attribute: u8,
}

impl<G: TextGrid> Console<G> {
    /// Creates a console with the cursor in the top-left corner.
    ///
    /// The grid's existing contents are left alone.
    pub fn new(grid: G) -> Self {
        assert!(
            grid.width() > 0 && grid.height() > 0,
            "console grid must have at least one cell"
        );
        Self {
            grid,
            cursor: 0,
            attribute: DEFAULT_ATTRIBUTE,
        }
    }

    fn cells(&self) -> usize {
        self.grid.width() * self.grid.height()
    }

    /// Current cursor offset.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Column of the cursor within its row.
    pub fn column(&self) -> usize {
        self.cursor % self.grid.width()
    }

    /// The grid being rendered into.
    pub fn grid(&self) -> &G {
        &self.grid
    }

    /// Sets the attribute byte used for cells written from now on.
    pub fn set_attribute(&mut self, attribute: u8) {
        self.attribute = attribute;
    }

    /// Renders one byte.
    ///
    /// Newline moves to the start of the next row. Backspace is ignored here;
    /// erasing is up to the caller (see [`Console::retreat`]). Anything else
    /// is written at the cursor, which then advances.
    pub fn put(&mut self, byte: u8) {
        let width = self.grid.width();
        match byte {
            b'\n' => self.cursor = (self.cursor / width + 1) * width % self.cells(),
            BACKSPACE => {}
            byte => {
                self.grid.write_cell(self.cursor, byte, self.attribute);
                self.cursor += 1;
                if self.cursor == self.cells() {
                    self.cursor = 0;
                }
            }
        }
    }

    /// Renders every byte of `bytes`.
    pub fn write_bytes(&mut self, bytes: &[u8]) {
        for &byte in bytes {
            self.put(byte);
        }
    }

    /// Renders a string.
    pub fn write_str(&mut self, s: &str) {
        self.write_bytes(s.as_bytes());
    }

    /// Renders a signed decimal integer.
    pub fn write_int(&mut self, n: i32) {
        // sign plus the ten digits of i32::MIN
        let mut digits = [0u8; 11];
        let mut len = 0;

        // unsigned_abs keeps i32::MIN from overflowing
        let mut magnitude = n.unsigned_abs();
        loop {
            digits[len] = b'0' + (magnitude % 10) as u8;
            len += 1;
            magnitude /= 10;
            if magnitude == 0 {
                break;
            }
        }
        if n < 0 {
            digits[len] = b'-';
            len += 1;
        }

        let digits = &mut digits[..len];
        digits.reverse();
        self.write_bytes(digits);
    }

    /// Moves the cursor back one cell within the current row.
    ///
    /// Returns `false`, leaving the cursor alone, at the start of a row.
    pub fn retreat(&mut self) -> bool {
        if self.column() == 0 {
            return false;
        }
        self.cursor -= 1;
        true
    }

    /// Blanks every cell and homes the cursor.
    pub fn clear(&mut self) {
        for offset in 0..self.cells() {
            self.grid.write_cell(offset, b' ', self.attribute);
        }
        self.cursor = 0;
    }
}

impl<G: TextGrid> fmt::Write for Console<G> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        Console::write_str(self, s);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{SCREEN_HEIGHT, SCREEN_WIDTH};
    use crate::testutil::{MemoryGrid, ScreenGrid};

    const CELLS: usize = SCREEN_WIDTH * SCREEN_HEIGHT;

    fn console() -> Console<ScreenGrid> {
        Console::new(ScreenGrid::new())
    }

    #[test]
    fn test_put_writes_cell_and_advances() {
        let mut console = console();
        console.put(b'x');
        assert_eq!(console.cursor(), 1);
        assert_eq!(console.grid().cell(0), (b'x', DEFAULT_ATTRIBUTE));
    }

    #[test]
    fn test_newline_moves_to_next_row() {
        let mut console = console();
        console.write_str("ab\ncd");
        assert_eq!(console.cursor(), SCREEN_WIDTH + 2);
        assert_eq!(console.grid().row_text(0), b"ab");
        assert_eq!(console.grid().row_text(1), b"cd");
    }

    #[test]
    fn test_newline_on_last_row_wraps_to_top() {
        let mut console = console();
        for _ in 0..SCREEN_HEIGHT {
            console.put(b'\n');
        }
        assert_eq!(console.cursor(), 0);
    }

    #[test]
    fn test_long_line_wraps_to_next_row() {
        let mut console = console();
        for _ in 0..SCREEN_WIDTH {
            console.put(b'a');
        }
        console.put(b'b');
        assert_eq!(console.grid().cell(SCREEN_WIDTH).0, b'b');
    }

    #[test]
    fn test_screen_wraps_and_overwrites_top() {
        let mut console = console();
        for _ in 0..CELLS {
            console.put(b'a');
        }
        assert_eq!(console.cursor(), 0);
        console.put(b'z');
        assert_eq!(console.cursor(), 1);
        assert_eq!(console.grid().cell(0).0, b'z');
        assert_eq!(console.grid().cell(1).0, b'a');
    }

    #[test]
    fn test_set_attribute_applies_to_later_cells() {
        let mut console = console();
        console.put(b'a');
        console.set_attribute(0x4f);
        console.put(b'b');
        assert_eq!(console.grid().cell(0), (b'a', DEFAULT_ATTRIBUTE));
        assert_eq!(console.grid().cell(1), (b'b', 0x4f));
    }

    #[test]
    fn test_backspace_is_not_rendered() {
        let mut console = console();
        console.write_bytes(b"ab\x08");
        assert_eq!(console.cursor(), 2);
        assert_eq!(console.grid().row_text(0), b"ab");
    }

    #[test]
    fn test_write_int() {
        let mut console = console();
        console.write_int(0);
        console.put(b' ');
        console.write_int(42);
        console.put(b' ');
        console.write_int(-7);
        console.put(b' ');
        console.write_int(i32::MAX);
        assert_eq!(console.grid().row_text(0), b"0 42 -7 2147483647");
    }

    #[test]
    fn test_write_int_min_value() {
        let mut console = console();
        console.write_int(i32::MIN);
        assert_eq!(console.grid().row_text(0), b"-2147483648");
    }

    #[test]
    fn test_retreat_stops_at_row_start() {
        let mut console = console();
        console.write_str("\nab");
        assert!(console.retreat());
        assert!(console.retreat());
        assert_eq!(console.cursor(), SCREEN_WIDTH);
        assert!(!console.retreat());
        assert_eq!(console.cursor(), SCREEN_WIDTH);
    }

    #[test]
    fn test_clear_blanks_grid() {
        let mut console = Console::new(MemoryGrid::<4, 2>::new());
        console.write_str("abcdef");
        console.clear();
        assert_eq!(console.cursor(), 0);
        assert_eq!(console.grid().row_text(0), b"");
        assert_eq!(console.grid().row_text(1), b"");
    }

    #[test]
    fn test_fmt_write() {
        use core::fmt::Write;

        let mut console = console();
        write!(console, "{}-{}", "tick", 3).unwrap();
        assert_eq!(console.grid().row_text(0), b"tick-3");
    }
}
