//! Tempsense - three-task demo firmware
//!
//! Runs on a Raspberry Pi Pico with an HD44780 LCD behind an SPI shift
//! register, a DS1631 on I2C and a serial console:
//!
//! - LED task blinks the on-board LED
//! - Counter task shows a cycling digit on LCD row 1
//! - Temperature task polls the sensor, logs to the console and shows
//!   the reading on LCD row 0
//!
//! The two LCD writers share one display lock.

#![no_std]
#![no_main]

use core::future::pending;

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::gpio::{Level, Output};
use embassy_rp::i2c::I2c;
use embassy_rp::spi::Spi;
use embassy_rp::uart::UartTx;
use embassy_time::Delay;
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use tempsense_core::traits::CharacterDisplay;
use tempsense_core::{AppConfig, SharedDisplay};
use tempsense_drivers::lcd::ShiftRegisterLcd;
use tempsense_drivers::sensor::Ds1631;
use tempsense_hal_rp2040::gpio::RpOutput;
use tempsense_hal_rp2040::i2c::{i2c_config, RpI2c};
use tempsense_hal_rp2040::pins;
use tempsense_hal_rp2040::spi::{spi_config, RpSpi};
use tempsense_hal_rp2040::uart::{uart_config, RpUartTx};
use tempsense_hal_rp2040::{I2cConfig, SpiConfig, UartConfig};

use crate::board::{BoardDisplay, BoardLcd};

mod board;
mod tasks;

/// Build-time application settings
static APP_CONFIG: AppConfig = AppConfig::DEFAULT;

// Shared LCD (must live forever for task references)
static DISPLAY: StaticCell<BoardDisplay> = StaticCell::new();

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Tempsense firmware starting...");

    let config = &APP_CONFIG;

    // Initialize RP2040 peripherals
    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    // Console: transmit only
    let console_cfg = uart_config(&UartConfig::with_baudrate(config.console_baud));
    let console = RpUartTx::new(UartTx::new_blocking(p.UART0, p.PIN_0, console_cfg));
    info!(
        "Console on GPIO{} at {} baud",
        pins::CONSOLE_TX,
        config.console_baud
    );

    // LCD shift register on SPI0, chip-select parked high
    let spi = Spi::new_blocking_txonly(
        p.SPI0,
        p.PIN_18,
        p.PIN_19,
        spi_config(&SpiConfig::default()),
    );
    let cs = RpOutput::new(Output::new(p.PIN_17, Level::High));
    let mut lcd: BoardLcd = ShiftRegisterLcd::new(RpSpi::new(spi), cs, Delay);

    if let Err(e) = lcd.init() {
        error!("LCD init failed: {:?}", e);
    } else if let Err(e) = lcd.clear() {
        error!("LCD clear failed: {:?}", e);
    } else {
        info!(
            "LCD initialized (SCK GPIO{}, MOSI GPIO{}, CS GPIO{})",
            pins::LCD_SCK,
            pins::LCD_MOSI,
            pins::LCD_CS
        );
    }

    let display: &'static BoardDisplay = DISPLAY.init(SharedDisplay::new(lcd));

    // Temperature sensor on I2C0
    let i2c = I2c::new_blocking(
        p.I2C0,
        p.PIN_5,
        p.PIN_4,
        i2c_config(&I2cConfig::default()),
    );
    let sensor = Ds1631::new(RpI2c::new(i2c), config.sensor_straps);
    info!(
        "DS1631 at 0x{:02x} (SDA GPIO{}, SCL GPIO{})",
        sensor.address(),
        pins::SENSOR_SDA,
        pins::SENSOR_SCL
    );

    let led = RpOutput::new(Output::new(p.PIN_25, Level::Low));

    // Spawn tasks
    info!("Spawning tasks...");

    unwrap!(spawner.spawn(tasks::led_task(led, config.timings.led_period_ms)));
    unwrap!(spawner.spawn(tasks::counter_task(
        display,
        &config.layout,
        config.timings.counter_period_ms,
    )));
    unwrap!(spawner.spawn(tasks::temperature_task(display, sensor, console, config)));

    info!("All tasks spawned");

    pending::<()>().await;
}
