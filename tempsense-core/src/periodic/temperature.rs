//! Temperature poll, report and render

use embassy_sync::blocking_mutex::raw::RawMutex;
use embedded_hal_async::delay::DelayNs;
use tempsense_hal::UartTx;

use super::CycleError;
use crate::config::{AppConfig, DisplayLayout, LockScope, TEMPERATURE_FIELD_WIDTH};
use crate::coordinator::SharedDisplay;
use crate::temperature::TemperatureReading;
use crate::traits::{CharacterDisplay, DisplayError, SensorError, TemperatureSensor};

/// Write a reading at the temperature cursor
///
/// Emits the cursor move, the fixed-width field and the suffix. The
/// caller must hold the display lock for the whole call.
pub fn render_temperature<D: CharacterDisplay>(
    lcd: &mut D,
    reading: TemperatureReading,
    layout: &DisplayLayout,
) -> Result<(), DisplayError> {
    lcd.set_cursor(layout.temperature_cursor)?;
    for byte in reading.lcd_field::<TEMPERATURE_FIELD_WIDTH>() {
        lcd.write_byte(byte)?;
    }
    lcd.print(layout.temperature_suffix)
}

/// Trigger a conversion, sleep through it and fetch the result
async fn acquire<S, W>(
    sensor: &mut S,
    delay: &mut W,
    conversion_wait_ms: u32,
) -> Result<TemperatureReading, SensorError>
where
    S: TemperatureSensor,
    W: DelayNs,
{
    sensor.start_conversion()?;
    delay.delay_ms(conversion_wait_ms).await;
    Ok(sensor.read_raw()?.reading())
}

fn report<C: UartTx>(console: &mut C, reading: TemperatureReading) -> Result<(), CycleError> {
    console
        .write_str_blocking(&reading.console_line())
        .map_err(|_| CycleError::Console)
}

/// Run one temperature period, excluding the idle wait
///
/// A failed sensor exchange ends the period before anything is shown.
/// A console failure does not stop the LCD render; it is reported after
/// the render has completed.
///
/// With [`LockScope::WholeCycle`] the display lock is taken before the
/// conversion is triggered and held until the render ends. With
/// [`LockScope::RenderOnly`] only the render is locked. In both cases
/// the cursor move and text are one uninterrupted transaction.
pub async fn run_temperature_cycle<M, D, S, C, W>(
    display: &SharedDisplay<M, D>,
    sensor: &mut S,
    console: &mut C,
    delay: &mut W,
    config: &AppConfig,
) -> Result<TemperatureReading, CycleError>
where
    M: RawMutex,
    D: CharacterDisplay,
    S: TemperatureSensor,
    C: UartTx,
    W: DelayNs,
{
    let wait_ms = config.timings.conversion_wait_ms;
    let layout = &config.layout;

    let (reading, reported) = match config.lock_scope {
        LockScope::WholeCycle => {
            let mut lcd = display.lock().await;
            let reading = acquire(sensor, delay, wait_ms).await?;
            let reported = report(console, reading);
            render_temperature(&mut *lcd, reading, layout)?;
            (reading, reported)
        }
        LockScope::RenderOnly => {
            let reading = acquire(sensor, delay, wait_ms).await?;
            let reported = report(console, reading);
            display
                .transaction(|lcd| render_temperature(lcd, reading, layout))
                .await?;
            (reading, reported)
        }
    };

    reported?;
    Ok(reading)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DisplayLayout;
    use crate::periodic::counter::{run_counter_cycle, Counter};
    use crate::periodic::mock::{
        event_log, text_at, Console, Event, EventLog, FakeSensor, RecordingDisplay, YieldingDelay,
    };
    use embassy_futures::{block_on, join::join};
    use embassy_sync::blocking_mutex::raw::NoopRawMutex;

    fn config(lock_scope: LockScope) -> AppConfig {
        AppConfig {
            lock_scope,
            ..AppConfig::DEFAULT
        }
    }

    fn shared(log: &EventLog) -> SharedDisplay<NoopRawMutex, RecordingDisplay> {
        SharedDisplay::new(RecordingDisplay::new(log.clone()))
    }

    fn position(log: &EventLog, event: Event) -> usize {
        log.borrow()
            .iter()
            .position(|e| *e == event)
            .expect("event not recorded")
    }

    #[test]
    fn test_reports_and_renders_reading() {
        let log = event_log();
        let display = shared(&log);
        let mut sensor = FakeSensor::new(log.clone(), [0x19, 0x00]);
        let mut console = Console::default();
        let mut delay = YieldingDelay::default();

        let reading = block_on(run_temperature_cycle(
            &display,
            &mut sensor,
            &mut console,
            &mut delay,
            &AppConfig::DEFAULT,
        ))
        .unwrap();

        assert_eq!(reading.celsius_x10(), 250);
        assert_eq!(console.out, b"Temp = 25.0\r\n");
        assert_eq!(
            text_at(&log, DisplayLayout::DEFAULT.temperature_cursor),
            b"25.0 degrees C"
        );
    }

    #[test]
    fn test_waits_for_conversion_before_fetch() {
        let log = event_log();
        let display = shared(&log);
        let mut sensor = FakeSensor::new(log.clone(), [0x19, 0x80]);
        let mut console = Console::default();
        let mut delay = YieldingDelay::default();

        block_on(run_temperature_cycle(
            &display,
            &mut sensor,
            &mut console,
            &mut delay,
            &AppConfig::DEFAULT,
        ))
        .unwrap();

        assert_eq!(delay.waits_ms, [500]);
        let events = log.borrow();
        assert_eq!(events[0], Event::Trigger);
        assert_eq!(events[1], Event::Fetch);
        assert_eq!(events[2], Event::Cursor(DisplayLayout::DEFAULT.temperature_cursor));
    }

    #[test]
    fn test_sensor_fault_skips_render() {
        let log = event_log();
        let display = shared(&log);
        let mut sensor = FakeSensor::new(log.clone(), [0x19, 0x00]);
        sensor.fail_read = true;
        let mut console = Console::default();
        let mut delay = YieldingDelay::default();

        let result = block_on(run_temperature_cycle(
            &display,
            &mut sensor,
            &mut console,
            &mut delay,
            &AppConfig::DEFAULT,
        ));

        assert_eq!(result, Err(CycleError::Sensor(SensorError::Communication)));
        assert!(console.out.is_empty());
        assert_eq!(*log.borrow(), [Event::Trigger]);
    }

    #[test]
    fn test_trigger_fault_skips_wait() {
        let log = event_log();
        let display = shared(&log);
        let mut sensor = FakeSensor::new(log.clone(), [0x19, 0x00]);
        sensor.fail_start = true;
        let mut console = Console::default();
        let mut delay = YieldingDelay::default();

        let result = block_on(run_temperature_cycle(
            &display,
            &mut sensor,
            &mut console,
            &mut delay,
            &config(LockScope::WholeCycle),
        ));

        assert_eq!(result, Err(CycleError::Sensor(SensorError::Communication)));
        assert!(delay.waits_ms.is_empty());
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn test_console_fault_still_renders() {
        let log = event_log();
        let display = shared(&log);
        let mut sensor = FakeSensor::new(log.clone(), [0x19, 0x00]);
        let mut console = Console {
            fail: true,
            ..Console::default()
        };
        let mut delay = YieldingDelay::default();

        let result = block_on(run_temperature_cycle(
            &display,
            &mut sensor,
            &mut console,
            &mut delay,
            &AppConfig::DEFAULT,
        ));

        assert_eq!(result, Err(CycleError::Console));
        assert_eq!(
            text_at(&log, DisplayLayout::DEFAULT.temperature_cursor),
            b"25.0 degrees C"
        );
    }

    #[test]
    fn test_display_fault_is_reported() {
        let log = event_log();
        let mut lcd = RecordingDisplay::new(log.clone());
        lcd.fail = true;
        let display: SharedDisplay<NoopRawMutex, _> = SharedDisplay::new(lcd);
        let mut sensor = FakeSensor::new(log.clone(), [0x19, 0x00]);
        let mut console = Console::default();
        let mut delay = YieldingDelay::default();

        let result = block_on(run_temperature_cycle(
            &display,
            &mut sensor,
            &mut console,
            &mut delay,
            &AppConfig::DEFAULT,
        ));

        assert_eq!(result, Err(CycleError::Display(DisplayError::Communication)));
        assert_eq!(console.out, b"Temp = 25.0\r\n");
    }

    /// Run one temperature cycle and one counter cycle concurrently,
    /// temperature first, and return the combined event log.
    fn race(lock_scope: LockScope) -> EventLog {
        let log = event_log();
        let display = shared(&log);
        let mut sensor = FakeSensor::new(log.clone(), [0x19, 0x00]);
        let mut console = Console::default();
        let mut delay = YieldingDelay::default();
        let mut counter = Counter::new();
        let config = config(lock_scope);

        let temperature =
            run_temperature_cycle(&display, &mut sensor, &mut console, &mut delay, &config);
        let count = run_counter_cycle(&display, &mut counter, &config.layout);
        let (temp_result, count_result) = block_on(join(temperature, count));

        assert!(temp_result.is_ok());
        assert_eq!(count_result, Ok(0));
        log
    }

    fn assert_render_contiguous(log: &EventLog) {
        let layout = DisplayLayout::DEFAULT;
        let start = position(log, Event::Cursor(layout.temperature_cursor));
        let rendered = b"25.0 degrees C";
        let events = log.borrow();
        for (offset, byte) in rendered.iter().enumerate() {
            assert_eq!(events[start + 1 + offset], Event::Data(*byte));
        }
    }

    #[test]
    fn test_whole_cycle_lock_blocks_counter_until_render_done() {
        let log = race(LockScope::WholeCycle);
        let layout = DisplayLayout::DEFAULT;

        let trigger = position(&log, Event::Trigger);
        let temp_cursor = position(&log, Event::Cursor(layout.temperature_cursor));
        let counter_cursor = position(&log, Event::Cursor(layout.counter_cursor));
        let render_end = temp_cursor + 1 + b"25.0 degrees C".len();

        assert!(trigger < temp_cursor);
        assert_eq!(counter_cursor, render_end);
        assert_render_contiguous(&log);
        assert_eq!(text_at(&log, layout.counter_cursor), b"Count is 0");
    }

    #[test]
    fn test_render_only_lock_lets_counter_run_during_conversion() {
        let log = race(LockScope::RenderOnly);
        let layout = DisplayLayout::DEFAULT;

        let trigger = position(&log, Event::Trigger);
        let fetch = position(&log, Event::Fetch);
        let counter_cursor = position(&log, Event::Cursor(layout.counter_cursor));

        // The counter got the display while the conversion was pending
        assert!(trigger < counter_cursor && counter_cursor < fetch);
        assert_render_contiguous(&log);
        assert_eq!(text_at(&log, layout.counter_cursor), b"Count is 0");
    }
}
