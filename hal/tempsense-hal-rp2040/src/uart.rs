//! UART transmitter for the diagnostic console

use embassy_rp::uart::{self, Blocking, UartTx as EmbassyUartTx};
use tempsense_hal::uart::{DataBits, Parity, StopBits, UartConfig};
use tempsense_hal::UartTx;

/// Error from UART operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum UartBusError {
    /// Framing error
    Framing,
    /// Break condition
    Break,
    /// Overrun error
    Overrun,
    /// Parity error
    Parity,
    /// Other error
    Other,
}

impl From<uart::Error> for UartBusError {
    fn from(e: uart::Error) -> Self {
        match e {
            uart::Error::Framing => UartBusError::Framing,
            uart::Error::Break => UartBusError::Break,
            uart::Error::Overrun => UartBusError::Overrun,
            uart::Error::Parity => UartBusError::Parity,
            #[allow(unreachable_patterns)]
            _ => UartBusError::Other,
        }
    }
}

/// Convert the shared UART configuration to embassy-rp's
pub fn uart_config(config: &UartConfig) -> uart::Config {
    let mut cfg = uart::Config::default();
    cfg.baudrate = config.baudrate;
    cfg.data_bits = match config.data_bits {
        DataBits::Seven => uart::DataBits::DataBits7,
        DataBits::Eight => uart::DataBits::DataBits8,
    };
    cfg.parity = match config.parity {
        Parity::None => uart::Parity::ParityNone,
        Parity::Even => uart::Parity::ParityEven,
        Parity::Odd => uart::Parity::ParityOdd,
    };
    cfg.stop_bits = match config.stop_bits {
        StopBits::One => uart::StopBits::STOP1,
        StopBits::Two => uart::StopBits::STOP2,
    };
    cfg
}

/// Blocking UART transmitter
pub struct RpUartTx<'d> {
    tx: EmbassyUartTx<'d, Blocking>,
}

impl<'d> RpUartTx<'d> {
    pub fn new(tx: EmbassyUartTx<'d, Blocking>) -> Self {
        Self { tx }
    }
}

impl UartTx for RpUartTx<'_> {
    type Error = UartBusError;

    fn write_blocking(&mut self, data: &[u8]) -> Result<(), UartBusError> {
        self.tx.blocking_write(data)?;
        Ok(())
    }

    fn flush(&mut self) -> Result<(), UartBusError> {
        self.tx.blocking_flush()?;
        Ok(())
    }
}
