//! HD44780 LCD in 4-bit mode behind a serial shift register
//!
//! The controller's data and control lines are wired to an 8-bit shift
//! register loaded over SPI, one byte per chip-select frame:
//!
//! ```text
//!  bit  7   6   5   4   3   2   1   0
//!      D7  D6  D5  D4   E  RS   -   -
//! ```
//!
//! Each command or data byte is split into two nibbles. A nibble is
//! presented with E set, then presented again with E cleared; the
//! controller latches it on the falling edge. RS stays valid for both
//! words so it is stable across the edge.
//!
//! There is no read-back path through the shift register, so the busy
//! flag cannot be polled: every transfer is followed by the datasheet's
//! worst-case execution time instead.

use embedded_hal::delay::DelayNs;
use tempsense_core::traits::{CharacterDisplay, CursorPosition, DisplayError};
use tempsense_hal::{OutputPin, SpiBus};

/// Control bits in the shift register word
pub mod flags {
    /// Enable strobe (E)
    pub const ENABLE: u8 = 0x08;
    /// Register select low: instruction register
    pub const COMMAND_MODE: u8 = 0x00;
    /// Register select high (RS): data register
    pub const DATA_MODE: u8 = 0x04;
}

/// HD44780 instructions used by the demo
pub mod cmd {
    /// Function set, 8-bit interface (power-on handshake)
    pub const FUNCTION_SET_8BIT: u8 = 0x30;
    /// Function set, 4-bit interface
    pub const FUNCTION_SET_4BIT: u8 = 0x20;
    /// Function set, 4-bit interface, two lines, 5x8 font
    pub const FUNCTION_SET_4BIT_2LINE: u8 = 0x28;
    /// Display on, cursor off, blink off
    pub const DISPLAY_ON: u8 = 0x0C;
    /// Clear display and home cursor
    pub const CLEAR: u8 = 0x01;
    /// Entry mode: increment, no shift
    pub const ENTRY_MODE: u8 = 0x06;
    /// Set DDRAM address (OR in the 7-bit address)
    pub const SET_DDRAM_ADDR: u8 = 0x80;
}

/// Settle times
pub mod timing {
    /// Wait after power-up before the first instruction (ms)
    pub const POWER_UP_MS: u32 = 40;
    /// Enable pulse width (us)
    pub const ENABLE_PULSE_US: u32 = 1;
    /// Execution time of ordinary instructions (us)
    pub const COMMAND_US: u32 = 37;
    /// Execution time of the clear instruction (us)
    pub const CLEAR_US: u32 = 1520;
    /// Settle after a cursor move or a printed character (us)
    pub const CHAR_US: u32 = 40;
}

/// Register targeted by a transfer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Mode {
    /// Instruction register
    Command,
    /// Data register (characters)
    Data,
}

impl Mode {
    /// RS bit for this mode
    pub const fn bits(self) -> u8 {
        match self {
            Mode::Command => flags::COMMAND_MODE,
            Mode::Data => flags::DATA_MODE,
        }
    }
}

/// The four shift register words that transfer one byte
///
/// High nibble with E set, high nibble with E cleared, then the same for
/// the low nibble.
pub const fn nibble_words(byte: u8, mode: Mode) -> [u8; 4] {
    let rs = mode.bits();
    let hi = byte & 0xF0;
    let lo = (byte << 4) & 0xF0;
    [
        hi | flags::ENABLE | rs,
        hi | rs,
        lo | flags::ENABLE | rs,
        lo | rs,
    ]
}

/// HD44780 driven through a chip-selected SPI shift register
pub struct ShiftRegisterLcd<SPI, CS, D> {
    spi: SPI,
    cs: CS,
    delay: D,
}

impl<SPI, CS, D> ShiftRegisterLcd<SPI, CS, D>
where
    SPI: SpiBus,
    CS: OutputPin,
    D: DelayNs,
{
    /// Create the driver and park chip-select high
    ///
    /// The controller is not touched; call
    /// [`init`](CharacterDisplay::init) before writing.
    pub fn new(spi: SPI, mut cs: CS, delay: D) -> Self {
        cs.set_high();
        Self { spi, cs, delay }
    }

    /// Release the bus, chip-select and delay
    pub fn release(self) -> (SPI, CS, D) {
        (self.spi, self.cs, self.delay)
    }

    /// Send one instruction byte
    ///
    /// No settle time is applied; the caller waits for the instruction's
    /// execution time.
    pub fn write_command(&mut self, command: u8) -> Result<(), DisplayError> {
        self.write_4bit(command, Mode::Command)
    }

    /// Send one character byte, without a settle delay
    pub fn write_data(&mut self, byte: u8) -> Result<(), DisplayError> {
        self.write_4bit(byte, Mode::Data)
    }

    fn write_4bit(&mut self, byte: u8, mode: Mode) -> Result<(), DisplayError> {
        let [hi_e, hi, lo_e, lo] = nibble_words(byte, mode);
        self.strobe(hi_e, hi)?;
        self.strobe(lo_e, lo)
    }

    /// Present a word with E set, hold, then drop E
    fn strobe(&mut self, enabled: u8, latched: u8) -> Result<(), DisplayError> {
        self.shift_out(enabled)?;
        self.delay.delay_us(timing::ENABLE_PULSE_US);
        self.shift_out(latched)
    }

    /// Load one word into the shift register
    fn shift_out(&mut self, word: u8) -> Result<(), DisplayError> {
        self.cs.set_low();
        let result = self.spi.write(&[word]);
        // Always end the frame, even if the transfer failed
        self.cs.set_high();
        result.map_err(|_| DisplayError::Communication)
    }

    fn command_settled(&mut self, command: u8, settle_us: u32) -> Result<(), DisplayError> {
        self.write_command(command)?;
        self.delay.delay_us(settle_us);
        Ok(())
    }
}

impl<SPI, CS, D> CharacterDisplay for ShiftRegisterLcd<SPI, CS, D>
where
    SPI: SpiBus,
    CS: OutputPin,
    D: DelayNs,
{
    fn init(&mut self) -> Result<(), DisplayError> {
        self.delay.delay_ms(timing::POWER_UP_MS);

        // Still in 8-bit mode: only the high nibble is wired, so the
        // 8-bit function set is a single strobe.
        let rs = Mode::Command.bits();
        self.strobe(
            cmd::FUNCTION_SET_8BIT | flags::ENABLE | rs,
            cmd::FUNCTION_SET_8BIT | rs,
        )?;
        self.delay.delay_us(timing::COMMAND_US);

        self.command_settled(cmd::FUNCTION_SET_4BIT, timing::COMMAND_US)?;
        self.command_settled(cmd::FUNCTION_SET_4BIT, timing::COMMAND_US)?;
        self.command_settled(cmd::DISPLAY_ON, timing::COMMAND_US)?;
        self.command_settled(cmd::CLEAR, timing::CLEAR_US)?;
        self.command_settled(cmd::ENTRY_MODE, timing::COMMAND_US)?;
        self.command_settled(cmd::FUNCTION_SET_4BIT_2LINE, timing::COMMAND_US)
    }

    fn clear(&mut self) -> Result<(), DisplayError> {
        self.command_settled(cmd::CLEAR, timing::CLEAR_US)
    }

    fn set_cursor(&mut self, pos: CursorPosition) -> Result<(), DisplayError> {
        let address = pos.ddram_address().ok_or(DisplayError::InvalidPosition)?;
        self.command_settled(cmd::SET_DDRAM_ADDR | address, timing::CHAR_US)
    }

    fn write_byte(&mut self, byte: u8) -> Result<(), DisplayError> {
        self.write_data(byte)
    }

    fn print(&mut self, text: &str) -> Result<(), DisplayError> {
        for byte in text.bytes() {
            self.write_data(byte)?;
            self.delay.delay_us(timing::CHAR_US);
        }
        Ok(())
    }
}
