//! Counter task
//!
//! Shows "Count is N" on the second LCD row, N cycling 0-9.

use defmt::*;
use embassy_time::{Duration, Ticker};
use tempsense_core::config::DisplayLayout;
use tempsense_core::periodic::{run_counter_cycle, Counter};

use crate::board::BoardDisplay;

#[embassy_executor::task]
pub async fn counter_task(
    display: &'static BoardDisplay,
    layout: &'static DisplayLayout,
    period_ms: u32,
) {
    info!("Counter task started ({} ms)", period_ms);

    let mut counter = Counter::new();
    let mut ticker = Ticker::every(Duration::from_millis(period_ms as u64));

    loop {
        match run_counter_cycle(display, &mut counter, layout).await {
            Ok(digit) => trace!("Count is {}", digit),
            Err(e) => warn!("Counter write failed: {:?}", e),
        }
        ticker.next().await;
    }
}
