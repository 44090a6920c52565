//! Temperature task
//!
//! Triggers a DS1631 conversion, waits it out, prints the reading on the
//! console and the first LCD row, then idles before the next poll.

use defmt::*;
use embassy_time::{Delay, Timer};
use tempsense_core::config::AppConfig;
use tempsense_core::periodic::run_temperature_cycle;

use crate::board::{BoardConsole, BoardDisplay, BoardSensor};

#[embassy_executor::task]
pub async fn temperature_task(
    display: &'static BoardDisplay,
    mut sensor: BoardSensor,
    mut console: BoardConsole,
    config: &'static AppConfig,
) {
    info!(
        "Temperature task started (sensor 0x{:02x}, {:?})",
        sensor.address(),
        config.lock_scope
    );

    let mut delay = Delay;

    loop {
        match run_temperature_cycle(display, &mut sensor, &mut console, &mut delay, config).await {
            Ok(reading) => info!("Temp = {}.{}", reading.whole(), reading.tenths()),
            Err(e) => warn!("Temperature cycle failed: {:?}", e),
        }
        Timer::after_millis(config.timings.temperature_idle_ms as u64).await;
    }
}
