//! Character LCD drivers

pub mod hd44780;

pub use hd44780::{nibble_words, Mode, ShiftRegisterLcd};
