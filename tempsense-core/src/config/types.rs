//! Configuration type definitions
//!
//! Periods, screen layout and locking policy for the three tasks.
//! [`AppConfig::DEFAULT`] reproduces the classic demo's cadence.

use crate::traits::CursorPosition;

/// Width of the temperature field on the LCD, in characters
pub const TEMPERATURE_FIELD_WIDTH: usize = 4;

/// Task periods and waits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TaskTimings {
    /// LED toggle interval (ms)
    pub led_period_ms: u32,
    /// Counter refresh interval (ms)
    pub counter_period_ms: u32,
    /// Time between triggering a conversion and fetching it (ms)
    pub conversion_wait_ms: u32,
    /// Idle time after each temperature report (ms)
    pub temperature_idle_ms: u32,
}

impl TaskTimings {
    pub const DEFAULT: Self = Self {
        led_period_ms: 500,
        counter_period_ms: 1000,
        conversion_wait_ms: 500,
        temperature_idle_ms: 1000,
    };
}

impl Default for TaskTimings {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Where each task writes on the LCD
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DisplayLayout {
    /// Cursor for the counter line (command 0xC0)
    pub counter_cursor: CursorPosition,
    /// Text printed before the counter digit
    pub counter_label: &'static str,
    /// Cursor for the temperature line
    ///
    /// Row 0, column 0: the set-DDRAM command is the literal 0x80, not
    /// the second-line 0xC0 used by the counter.
    pub temperature_cursor: CursorPosition,
    /// Text printed after the temperature field
    pub temperature_suffix: &'static str,
}

impl DisplayLayout {
    pub const DEFAULT: Self = Self {
        counter_cursor: CursorPosition::new(1, 0),
        counter_label: "Count is ",
        temperature_cursor: CursorPosition::HOME,
        temperature_suffix: " degrees C",
    };
}

impl Default for DisplayLayout {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// How long the temperature task holds the display lock
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LockScope {
    /// Lock only around the cursor move and the rendered text
    #[default]
    RenderOnly,
    /// Lock from the conversion trigger until the render completes
    ///
    /// The counter task stalls for the whole conversion wait.
    WholeCycle,
}

/// Sensor address pins A2..A0 as wired on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SensorStraps {
    pub a2: bool,
    pub a1: bool,
    pub a0: bool,
}

impl SensorStraps {
    /// All address pins tied to ground
    pub const GROUNDED: Self = Self {
        a2: false,
        a1: false,
        a0: false,
    };
}

/// Complete application configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AppConfig {
    pub timings: TaskTimings,
    pub layout: DisplayLayout,
    pub lock_scope: LockScope,
    pub sensor_straps: SensorStraps,
    /// Console baud rate
    pub console_baud: u32,
}

impl AppConfig {
    pub const DEFAULT: Self = Self {
        timings: TaskTimings::DEFAULT,
        layout: DisplayLayout::DEFAULT,
        lock_scope: LockScope::RenderOnly,
        sensor_straps: SensorStraps::GROUNDED,
        console_baud: 9600,
    };
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}
