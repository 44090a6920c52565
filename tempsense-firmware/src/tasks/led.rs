//! Heartbeat LED task

use defmt::*;
use embassy_time::{Duration, Ticker};
use tempsense_core::periodic::Heartbeat;

use crate::board::BoardLed;

/// Toggle the LED once per period
///
/// Never touches the display, so it keeps blinking while the other
/// tasks wait on the lock.
#[embassy_executor::task]
pub async fn led_task(led: BoardLed, period_ms: u32) {
    info!("LED task started ({} ms)", period_ms);

    let mut heartbeat = Heartbeat::new(led);
    let mut ticker = Ticker::every(Duration::from_millis(period_ms as u64));

    loop {
        let lit = heartbeat.toggle();
        trace!("LED {}", lit);
        ticker.next().await;
    }
}
