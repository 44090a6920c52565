//! Scrolling single-digit counter

use embassy_sync::blocking_mutex::raw::RawMutex;

use crate::config::DisplayLayout;
use crate::coordinator::SharedDisplay;
use crate::traits::{CharacterDisplay, DisplayError};

/// Highest digit before wrapping back to zero
const MAX_DIGIT: u8 = 9;

/// Decimal digit that counts 0..=9 and wraps
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Counter {
    digit: u8,
}

impl Counter {
    pub const fn new() -> Self {
        Self { digit: 0 }
    }

    /// The digit to show this period
    pub const fn current(&self) -> u8 {
        self.digit
    }

    /// The digit as an ASCII character
    pub const fn ascii(&self) -> u8 {
        b'0' | self.digit
    }

    /// Step to the next digit, wrapping 9 -> 0
    pub fn advance(&mut self) {
        self.digit = if self.digit >= MAX_DIGIT {
            0
        } else {
            self.digit + 1
        };
    }
}

/// Show the counter line, then advance the counter
///
/// Cursor move, label and digit go out under one display transaction.
/// The counter advances even if the display write failed, so the shown
/// sequence never stalls on a transient fault.
///
/// Returns the digit that was written.
pub async fn run_counter_cycle<M, D>(
    display: &SharedDisplay<M, D>,
    counter: &mut Counter,
    layout: &DisplayLayout,
) -> Result<u8, DisplayError>
where
    M: RawMutex,
    D: CharacterDisplay,
{
    let digit = counter.current();
    let ascii = counter.ascii();
    counter.advance();

    display
        .transaction(|lcd| {
            lcd.set_cursor(layout.counter_cursor)?;
            lcd.print(layout.counter_label)?;
            lcd.write_byte(ascii)
        })
        .await?;

    Ok(digit)
}
