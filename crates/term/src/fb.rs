//! Character-cell framebuffer the game view draws into.
//!
//! Every write is clipped to the buffer, so drawing code never has to check
//! the viewport itself. Rows are stored contiguously so the renderer can
//! compare whole rows between frames.

/// 24-bit terminal color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Rgb(r, g, b)
    }
}

/// Foreground, background and weight of one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellStyle {
    pub fg: Rgb,
    pub bg: Rgb,
    pub bold: bool,
}

impl CellStyle {
    /// Light grey on black
    pub const PLAIN: CellStyle = CellStyle::new(Rgb(220, 220, 220), Rgb(0, 0, 0));

    pub const fn new(fg: Rgb, bg: Rgb) -> Self {
        CellStyle {
            fg,
            bg,
            bold: false,
        }
    }

    pub const fn bold(mut self) -> Self {
        self.bold = true;
        self
    }
}

impl Default for CellStyle {
    fn default() -> Self {
        CellStyle::PLAIN
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub style: CellStyle,
}

impl Cell {
    pub const BLANK: Cell = Cell {
        ch: ' ',
        style: CellStyle::PLAIN,
    };
}

impl Default for Cell {
    fn default() -> Self {
        Cell::BLANK
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl FrameBuffer {
    pub fn new(width: u16, height: u16) -> Self {
        let mut fb = FrameBuffer {
            width: 0,
            height: 0,
            cells: Vec::new(),
        };
        fb.resize(width, height);
        fb
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Match the viewport size. A real size change blanks the buffer; an
    /// unchanged size keeps contents and allocation.
    pub fn resize(&mut self, width: u16, height: u16) {
        if (width, height) == (self.width, self.height) {
            return;
        }
        self.width = width;
        self.height = height;
        self.cells.clear();
        self.cells
            .resize(usize::from(width) * usize::from(height), Cell::BLANK);
    }

    /// Blank every cell.
    pub fn clear(&mut self) {
        self.cells.fill(Cell::BLANK);
    }

    pub fn get(&self, x: u16, y: u16) -> Option<Cell> {
        self.row(y).and_then(|row| row.get(usize::from(x))).copied()
    }

    /// Cells of row `y`, `None` below the buffer
    pub fn row(&self, y: u16) -> Option<&[Cell]> {
        if y >= self.height {
            return None;
        }
        let start = usize::from(y) * usize::from(self.width);
        Some(&self.cells[start..start + usize::from(self.width)])
    }

    fn row_mut(&mut self, y: u16) -> Option<&mut [Cell]> {
        if y >= self.height {
            return None;
        }
        let start = usize::from(y) * usize::from(self.width);
        Some(&mut self.cells[start..start + usize::from(self.width)])
    }

    /// `len` copies of `ch` starting at `(x, y)`, clipped at the right edge.
    pub fn hline(&mut self, x: u16, y: u16, len: u16, ch: char, style: CellStyle) {
        if let Some(row) = self.row_mut(y) {
            let start = usize::from(x).min(row.len());
            let end = (start + usize::from(len)).min(row.len());
            row[start..end].fill(Cell { ch, style });
        }
    }

    pub fn fill_rect(&mut self, x: u16, y: u16, w: u16, h: u16, ch: char, style: CellStyle) {
        for dy in 0..h {
            match y.checked_add(dy) {
                Some(row) => self.hline(x, row, w, ch, style),
                None => break,
            }
        }
    }

    pub fn put_char(&mut self, x: u16, y: u16, ch: char, style: CellStyle) {
        self.hline(x, y, 1, ch, style);
    }

    pub fn put_str(&mut self, x: u16, y: u16, s: &str, style: CellStyle) {
        let Some(row) = self.row_mut(y) else {
            return;
        };
        let tail = row.iter_mut().skip(usize::from(x));
        for (cell, ch) in tail.zip(s.chars()) {
            *cell = Cell { ch, style };
        }
    }

    /// Decimal `value` at `(x, y)`, no allocation.
    pub fn put_u32(&mut self, x: u16, y: u16, value: u32, style: CellStyle) {
        let mut digits = [b'0'; 10];
        let mut start = digits.len();
        let mut n = value;
        loop {
            start -= 1;
            digits[start] = b'0' + (n % 10) as u8;
            n /= 10;
            if n == 0 {
                break;
            }
        }
        for (i, &d) in digits[start..].iter().enumerate() {
            self.put_char(x.saturating_add(i as u16), y, char::from(d), style);
        }
    }

    /// Characters of row `y` (tests and debugging)
    pub fn row_text(&self, y: u16) -> String {
        self.row(y)
            .map(|row| row.iter().map(|c| c.ch).collect())
            .unwrap_or_default()
    }
}
