//! Board pin map
//!
//! GPIO numbers for a Raspberry Pi Pico wired to the LCD backpack, the
//! DS1631 breakout and a USB-serial adapter. `main` takes the matching
//! `PIN_n` peripherals; these constants document the wiring and feed the
//! startup log.

/// LCD shift register clock (SPI0 SCK)
pub const LCD_SCK: u8 = 18;
/// LCD shift register data (SPI0 TX)
pub const LCD_MOSI: u8 = 19;
/// LCD shift register chip-select / latch
pub const LCD_CS: u8 = 17;

/// Sensor I2C0 data
pub const SENSOR_SDA: u8 = 4;
/// Sensor I2C0 clock
pub const SENSOR_SCL: u8 = 5;

/// On-board LED
pub const LED: u8 = 25;

/// Console UART0 transmit
pub const CONSOLE_TX: u8 = 0;

/// Check that no two signals share a GPIO
pub const fn pins_are_unique() -> bool {
    let pins = [LCD_SCK, LCD_MOSI, LCD_CS, SENSOR_SDA, SENSOR_SCL, LED, CONSOLE_TX];
    let mut i = 0;
    while i < pins.len() {
        let mut j = i + 1;
        while j < pins.len() {
            if pins[i] == pins[j] {
                return false;
            }
            j += 1;
        }
        i += 1;
    }
    true
}

const _: () = assert!(pins_are_unique());
