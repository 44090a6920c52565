//! Fixed-point temperature conversion
//!
//! The sensor reports an unsigned 8.8 fixed-point value in degrees
//! Celsius: the first wire byte is the integer part, the second holds
//! 1/256 degree steps. The display shows the integer part and the first
//! decimal digit, truncated (never rounded), so 0x19 0xF0 (25.9375) is
//! shown as 25.9.

use core::fmt::{self, Write};

use heapless::String;

/// Capacity of the rendered reading ("255.9")
pub const READING_TEXT_LEN: usize = 8;

/// Capacity of a rendered console line ("Temp = 255.9\r\n")
pub const CONSOLE_LINE_LEN: usize = 24;

/// Raw 16-bit sensor value (8 integer bits, 8 fractional bits)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RawTemperature(u16);

impl RawTemperature {
    /// Build from the two bytes as they arrive on the bus (MSB first)
    pub const fn from_be_bytes(bytes: [u8; 2]) -> Self {
        Self(u16::from_be_bytes(bytes))
    }

    /// Build from an already assembled 16-bit value
    pub const fn from_bits(bits: u16) -> Self {
        Self(bits)
    }

    /// The raw 16-bit value
    pub const fn bits(self) -> u16 {
        self.0
    }

    /// Convert to whole degrees and tenths
    pub const fn reading(self) -> TemperatureReading {
        let whole = (self.0 >> 8) as u8;
        let fraction = (self.0 & 0xFF) as u32;
        // fraction / 256 * 10, truncated
        let tenths = ((fraction * 10) >> 8) as u8;
        TemperatureReading { whole, tenths }
    }
}

/// A temperature in whole degrees plus one decimal digit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TemperatureReading {
    whole: u8,
    tenths: u8,
}

impl TemperatureReading {
    /// Integer part in degrees Celsius
    pub const fn whole(self) -> u8 {
        self.whole
    }

    /// First decimal digit (0-9)
    pub const fn tenths(self) -> u8 {
        self.tenths
    }

    /// Temperature in 0.1°C units (e.g. 255 = 25.5°C)
    pub const fn celsius_x10(self) -> u16 {
        self.whole as u16 * 10 + self.tenths as u16
    }

    /// Render as `<int>.<digit>`
    pub fn text(self) -> String<READING_TEXT_LEN> {
        let mut s = String::new();
        // Fits: at most "255.9"
        let _ = write!(s, "{}", self);
        s
    }

    /// Render the fixed-width LCD field
    ///
    /// Keeps the first `N` characters of [`text`](Self::text) and pads
    /// shorter readings with spaces, so "255.0" becomes "255." and "0.0"
    /// becomes "0.0 ". The padding is a space rather than 0x00, which the
    /// controller would draw as CGRAM glyph 0.
    pub fn lcd_field<const N: usize>(self) -> [u8; N] {
        let text = self.text();
        let mut field = [b' '; N];
        for (slot, byte) in field.iter_mut().zip(text.bytes()) {
            *slot = byte;
        }
        field
    }

    /// Render the console report line, including the CR LF terminator
    pub fn console_line(self) -> String<CONSOLE_LINE_LEN> {
        let mut s = String::new();
        let _ = write!(s, "Temp = {}\r\n", self);
        s
    }
}

impl fmt::Display for TemperatureReading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.whole, self.tenths)
    }
}

impl From<RawTemperature> for TemperatureReading {
    fn from(raw: RawTemperature) -> Self {
        raw.reading()
    }
}
