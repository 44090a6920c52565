//! UART transmit abstraction
//!
//! Used for the human-readable diagnostic console.

/// UART transmitter
pub trait UartTx {
    /// Error type for transmit operations
    type Error;

    /// Write data to the UART
    ///
    /// Blocks until all data has been queued or an error occurs.
    fn write_blocking(&mut self, data: &[u8]) -> Result<(), Self::Error>;

    /// Block until the transmit FIFO has drained
    fn flush(&mut self) -> Result<(), Self::Error>;

    /// Write a string followed by a flush
    fn write_str_blocking(&mut self, text: &str) -> Result<(), Self::Error> {
        self.write_blocking(text.as_bytes())?;
        self.flush()
    }
}

/// UART configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct UartConfig {
    /// Baud rate in bits per second
    pub baudrate: u32,
    /// Number of data bits (typically 8)
    pub data_bits: DataBits,
    /// Parity mode
    pub parity: Parity,
    /// Number of stop bits
    pub stop_bits: StopBits,
}

impl Default for UartConfig {
    fn default() -> Self {
        Self {
            baudrate: 115200,
            data_bits: DataBits::Eight,
            parity: Parity::None,
            stop_bits: StopBits::One,
        }
    }
}

impl UartConfig {
    /// 8N1 at the given baud rate
    pub const fn with_baudrate(baudrate: u32) -> Self {
        Self {
            baudrate,
            data_bits: DataBits::Eight,
            parity: Parity::None,
            stop_bits: StopBits::One,
        }
    }
}

/// Number of data bits per frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DataBits {
    Seven,
    Eight,
}

/// Parity mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Parity {
    None,
    Even,
    Odd,
}

/// Number of stop bits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StopBits {
    One,
    Two,
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Sink {
        buf: [u8; 32],
        len: usize,
        flushed: bool,
    }

    impl UartTx for Sink {
        type Error = ();

        fn write_blocking(&mut self, data: &[u8]) -> Result<(), ()> {
            let end = self.len + data.len();
            if end > self.buf.len() {
                return Err(());
            }
            self.buf[self.len..end].copy_from_slice(data);
            self.len = end;
            Ok(())
        }

        fn flush(&mut self) -> Result<(), ()> {
            self.flushed = true;
            Ok(())
        }
    }

    #[test]
    fn test_write_str_flushes() {
        let mut sink = Sink {
            buf: [0; 32],
            len: 0,
            flushed: false,
        };

        sink.write_str_blocking("Temp = 1.0\r\n").unwrap();
        assert_eq!(&sink.buf[..sink.len], b"Temp = 1.0\r\n");
        assert!(sink.flushed);
    }

    #[test]
    fn test_with_baudrate_is_8n1() {
        let config = UartConfig::with_baudrate(9600);
        assert_eq!(config.baudrate, 9600);
        assert_eq!(config.data_bits, DataBits::Eight);
        assert_eq!(config.parity, Parity::None);
        assert_eq!(config.stop_bits, StopBits::One);
    }
}
