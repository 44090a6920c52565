//! Character display trait for the shared LCD

/// Errors that can occur while driving the display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// The serial transport to the display failed
    Communication,
    /// Cursor position outside the controller's address map
    InvalidPosition,
}

/// Number of addressable rows on the controller
pub const DISPLAY_ROWS: u8 = 2;

/// Addressable columns per row (DDRAM, not the visible width)
pub const DISPLAY_COLUMNS: u8 = 40;

/// DDRAM offset of the second row
const ROW_STRIDE: u8 = 0x40;

/// A cursor position on a two-row character display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CursorPosition {
    /// Row number (0-1)
    pub row: u8,
    /// Column number (0-39)
    pub col: u8,
}

impl CursorPosition {
    /// Start of the first row
    pub const HOME: Self = Self::new(0, 0);

    /// Create a position without validating it
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// DDRAM address for this position
    ///
    /// Returns `None` if the position is outside the address map.
    pub fn ddram_address(self) -> Option<u8> {
        if self.row >= DISPLAY_ROWS || self.col >= DISPLAY_COLUMNS {
            return None;
        }
        Some(self.row * ROW_STRIDE + self.col)
    }
}

/// Trait for a text-mode character display
///
/// Every operation is a complete, settled transfer: when a call returns
/// the controller is ready for the next one.
pub trait CharacterDisplay {
    /// Run the controller's power-on initialisation sequence
    fn init(&mut self) -> Result<(), DisplayError>;

    /// Clear the screen and home the cursor
    fn clear(&mut self) -> Result<(), DisplayError>;

    /// Move the cursor to a position
    fn set_cursor(&mut self, pos: CursorPosition) -> Result<(), DisplayError>;

    /// Write one character at the cursor without a trailing settle delay
    fn write_byte(&mut self, byte: u8) -> Result<(), DisplayError>;

    /// Write text at the cursor, settling after every character
    fn print(&mut self, text: &str) -> Result<(), DisplayError>;
}
