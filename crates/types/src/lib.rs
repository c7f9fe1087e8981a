//! Shared data types and constants.
//!
//! Everything in this crate is plain data with no dependencies, so it can be
//! used by the game engine, the scheduler, the terminal renderer and the input
//! adapter alike.
//!
//! # Board Dimensions
//!
//! The default playfield is 10 columns by 20 rows. Row 0 is the top of the
//! board, column 0 the left edge. Games can be created with other sizes, but
//! a board never changes size after construction.
//!
//! # Timing
//!
//! The game advances on a fixed clock. `TICK_MS` is the reference period
//! between gravity steps (two steps per second).
//!
//! # Examples
//!
//! ```
//! use falling_blocks_types::{Color, GameCommand, ShapeKind, BOARD_COLS, BOARD_ROWS};
//!
//! assert_eq!(ShapeKind::from_str("t"), Some(ShapeKind::T));
//! assert_eq!(Color::from_str("Cyan"), Some(Color::Cyan));
//! assert_eq!(GameCommand::from_str("rotateCw"), Some(GameCommand::RotateCw));
//!
//! assert_eq!(BOARD_COLS, 10);
//! assert_eq!(BOARD_ROWS, 20);
//! ```

/// Default board height in cells (20 rows)
pub const BOARD_ROWS: usize = 20;

/// Default board width in cells (10 columns)
pub const BOARD_COLS: usize = 10;

/// Gravity period in milliseconds (one row every 500ms)
pub const TICK_MS: u32 = 500;

/// Points awarded for every cleared line
pub const LINE_CLEAR_SCORE: u32 = 100;

/// Number of entries in the shape catalog
pub const SHAPE_COUNT: usize = 7;

/// Cell colors, in shape catalog order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Cyan,
    Blue,
    Orange,
    Yellow,
    Green,
    Purple,
    Red,
}

impl Color {
    pub const ALL: [Color; SHAPE_COUNT] = [
        Color::Cyan,
        Color::Blue,
        Color::Orange,
        Color::Yellow,
        Color::Green,
        Color::Purple,
        Color::Red,
    ];

    /// Parse a color name (case-insensitive)
    ///
    /// ```
    /// use falling_blocks_types::Color;
    ///
    /// assert_eq!(Color::from_str("purple"), Some(Color::Purple));
    /// assert_eq!(Color::from_str("RED"), Some(Color::Red));
    /// assert_eq!(Color::from_str("white"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "cyan" => Some(Color::Cyan),
            "blue" => Some(Color::Blue),
            "orange" => Some(Color::Orange),
            "yellow" => Some(Color::Yellow),
            "green" => Some(Color::Green),
            "purple" => Some(Color::Purple),
            "red" => Some(Color::Red),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Color::Cyan => "cyan",
            Color::Blue => "blue",
            Color::Orange => "orange",
            Color::Yellow => "yellow",
            Color::Green => "green",
            Color::Purple => "purple",
            Color::Red => "red",
        }
    }
}

/// The seven tetromino shapes, in catalog order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    I,
    O,
    T,
    S,
    Z,
    L,
    J,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; SHAPE_COUNT] = [
        ShapeKind::I,
        ShapeKind::O,
        ShapeKind::T,
        ShapeKind::S,
        ShapeKind::Z,
        ShapeKind::L,
        ShapeKind::J,
    ];

    /// Parse shape kind from string (case-insensitive)
    ///
    /// ```
    /// use falling_blocks_types::ShapeKind;
    ///
    /// assert_eq!(ShapeKind::from_str("i"), Some(ShapeKind::I));
    /// assert_eq!(ShapeKind::from_str("J"), Some(ShapeKind::J));
    /// assert_eq!(ShapeKind::from_str("x"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(ShapeKind::I),
            "o" => Some(ShapeKind::O),
            "t" => Some(ShapeKind::T),
            "s" => Some(ShapeKind::S),
            "z" => Some(ShapeKind::Z),
            "l" => Some(ShapeKind::L),
            "j" => Some(ShapeKind::J),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ShapeKind::I => "i",
            ShapeKind::O => "o",
            ShapeKind::T => "t",
            ShapeKind::S => "s",
            ShapeKind::Z => "z",
            ShapeKind::L => "l",
            ShapeKind::J => "j",
        }
    }

    /// Position of this shape in the catalog
    pub fn index(&self) -> usize {
        match self {
            ShapeKind::I => 0,
            ShapeKind::O => 1,
            ShapeKind::T => 2,
            ShapeKind::S => 3,
            ShapeKind::Z => 4,
            ShapeKind::L => 5,
            ShapeKind::J => 6,
        }
    }
}

/// A cell on the board
///
/// - `None`: empty
/// - `Some(Color)`: settled block of that color
pub type Cell = Option<Color>;

/// Player commands accepted by the engine
///
/// Any key that does not map to one of these is ignored by the input adapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameCommand {
    /// Shift the active piece one column left
    MoveLeft,
    /// Shift the active piece one column right
    MoveRight,
    /// Rotate the active piece a quarter turn
    RotateCw,
    /// Move the active piece down one row, placing it if it cannot move
    SoftDrop,
}

impl GameCommand {
    pub const ALL: [GameCommand; 4] = [
        GameCommand::MoveLeft,
        GameCommand::MoveRight,
        GameCommand::RotateCw,
        GameCommand::SoftDrop,
    ];

    /// Parse a command name (case-insensitive)
    ///
    /// ```
    /// use falling_blocks_types::GameCommand;
    ///
    /// assert_eq!(GameCommand::from_str("moveLeft"), Some(GameCommand::MoveLeft));
    /// assert_eq!(GameCommand::from_str("SOFTDROP"), Some(GameCommand::SoftDrop));
    /// assert_eq!(GameCommand::from_str("hardDrop"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" => Some(GameCommand::MoveLeft),
            "moveright" => Some(GameCommand::MoveRight),
            "rotatecw" => Some(GameCommand::RotateCw),
            "softdrop" => Some(GameCommand::SoftDrop),
            _ => None,
        }
    }

    /// camelCase name
    pub fn as_str(&self) -> &'static str {
        match self {
            GameCommand::MoveLeft => "moveLeft",
            GameCommand::MoveRight => "moveRight",
            GameCommand::RotateCw => "rotateCw",
            GameCommand::SoftDrop => "softDrop",
        }
    }
}
