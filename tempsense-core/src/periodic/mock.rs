//! Recording devices shared by the task tests

use std::cell::RefCell;
use std::rc::Rc;
use std::vec::Vec;

use embassy_futures::yield_now;
use embedded_hal_async::delay::DelayNs;
use tempsense_hal::UartTx;

use crate::temperature::RawTemperature;
use crate::traits::{CharacterDisplay, CursorPosition, DisplayError, SensorError, TemperatureSensor};

/// Everything observable on the shared devices, in order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    Trigger,
    Fetch,
    Cursor(CursorPosition),
    Data(u8),
}

pub type EventLog = Rc<RefCell<Vec<Event>>>;

pub fn event_log() -> EventLog {
    Rc::new(RefCell::new(Vec::new()))
}

/// Text written after the given cursor move, up to the next cursor move
pub fn text_at(log: &EventLog, pos: CursorPosition) -> Vec<u8> {
    let events = log.borrow();
    let start = events
        .iter()
        .position(|e| *e == Event::Cursor(pos))
        .expect("cursor never moved there");
    events[start + 1..]
        .iter()
        .take_while(|e| matches!(e, Event::Data(_)))
        .map(|e| match e {
            Event::Data(b) => *b,
            _ => unreachable!(),
        })
        .collect()
}

pub struct RecordingDisplay {
    pub log: EventLog,
    pub fail: bool,
}

impl RecordingDisplay {
    pub fn new(log: EventLog) -> Self {
        Self { log, fail: false }
    }

    fn push(&mut self, event: Event) -> Result<(), DisplayError> {
        if self.fail {
            return Err(DisplayError::Communication);
        }
        self.log.borrow_mut().push(event);
        Ok(())
    }
}

impl CharacterDisplay for RecordingDisplay {
    fn init(&mut self) -> Result<(), DisplayError> {
        Ok(())
    }

    fn clear(&mut self) -> Result<(), DisplayError> {
        Ok(())
    }

    fn set_cursor(&mut self, pos: CursorPosition) -> Result<(), DisplayError> {
        self.push(Event::Cursor(pos))
    }

    fn write_byte(&mut self, byte: u8) -> Result<(), DisplayError> {
        self.push(Event::Data(byte))
    }

    fn print(&mut self, text: &str) -> Result<(), DisplayError> {
        for byte in text.bytes() {
            self.push(Event::Data(byte))?;
        }
        Ok(())
    }
}

pub struct FakeSensor {
    pub log: EventLog,
    pub bytes: [u8; 2],
    pub fail_start: bool,
    pub fail_read: bool,
}

impl FakeSensor {
    pub fn new(log: EventLog, bytes: [u8; 2]) -> Self {
        Self {
            log,
            bytes,
            fail_start: false,
            fail_read: false,
        }
    }
}

impl TemperatureSensor for FakeSensor {
    fn start_conversion(&mut self) -> Result<(), SensorError> {
        if self.fail_start {
            return Err(SensorError::Communication);
        }
        self.log.borrow_mut().push(Event::Trigger);
        Ok(())
    }

    fn read_raw(&mut self) -> Result<RawTemperature, SensorError> {
        if self.fail_read {
            return Err(SensorError::Communication);
        }
        self.log.borrow_mut().push(Event::Fetch);
        Ok(RawTemperature::from_be_bytes(self.bytes))
    }
}

#[derive(Default)]
pub struct Console {
    pub out: Vec<u8>,
    pub fail: bool,
}

impl UartTx for Console {
    type Error = ();

    fn write_blocking(&mut self, data: &[u8]) -> Result<(), ()> {
        if self.fail {
            return Err(());
        }
        self.out.extend_from_slice(data);
        Ok(())
    }

    fn flush(&mut self) -> Result<(), ()> {
        Ok(())
    }
}

/// Async delay that records the requested wait and yields once
#[derive(Default)]
pub struct YieldingDelay {
    pub waits_ms: Vec<u32>,
}

impl DelayNs for YieldingDelay {
    async fn delay_ns(&mut self, _ns: u32) {
        yield_now().await;
    }

    async fn delay_ms(&mut self, ms: u32) {
        self.waits_ms.push(ms);
        yield_now().await;
    }
}
