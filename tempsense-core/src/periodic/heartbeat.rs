//! Indicator LED blinker

use tempsense_hal::OutputPin;

/// Blinks the on-board LED to show the scheduler is alive
pub struct Heartbeat<P> {
    led: P,
}

impl<P: OutputPin> Heartbeat<P> {
    /// Take the LED pin and switch it off
    pub fn new(mut led: P) -> Self {
        led.set_low();
        Self { led }
    }

    /// Flip the LED, returning true if it is now lit
    pub fn toggle(&mut self) -> bool {
        self.led.toggle();
        self.led.is_set_high()
    }

    /// Check if the LED is lit
    pub fn is_lit(&self) -> bool {
        self.led.is_set_high()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct MockPin {
        high: bool,
    }

    impl OutputPin for MockPin {
        fn set_high(&mut self) {
            self.high = true;
        }

        fn set_low(&mut self) {
            self.high = false;
        }

        fn is_set_high(&self) -> bool {
            self.high
        }
    }

    #[test]
    fn test_starts_dark() {
        let heartbeat = Heartbeat::new(MockPin { high: true });
        assert!(!heartbeat.is_lit());
    }

    #[test]
    fn test_toggle_alternates() {
        let mut heartbeat = Heartbeat::new(MockPin { high: false });

        assert!(heartbeat.toggle());
        assert!(!heartbeat.toggle());
        assert!(heartbeat.toggle());
        assert!(heartbeat.is_lit());
    }
}
