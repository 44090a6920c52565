//! GPIO output abstraction
//!
//! The demo only drives outputs: the indicator LED and the LCD shift
//! register's chip-select line.

/// Digital output pin
///
/// Pin writes on the supported chips cannot fail, so unlike the bus
/// traits this one has no error type.
pub trait OutputPin {
    /// Set the pin high (logic 1)
    fn set_high(&mut self);

    /// Set the pin low (logic 0)
    fn set_low(&mut self);

    /// Check if the pin is currently driven high
    fn is_set_high(&self) -> bool;

    /// Invert the driven level
    fn toggle(&mut self) {
        if self.is_set_high() {
            self.set_low();
        } else {
            self.set_high();
        }
    }
}
