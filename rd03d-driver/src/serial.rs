use crate::constants::{
    COMMAND_SETTLE_MS, MULTI_TARGET_CMD, RD03D_BAUD_RATE, READ_CHUNK_SIZE, SERIAL_READ_TIMEOUT_MS,
};
use crate::error::Rd03dError;
use crate::numeric::to_string;
use crate::source::ByteSource;
use crate::time::sleep_ms;
use serialport::{DataBits, Parity, SerialPort, StopBits};
use std::io::{self, Read, Write};

/// Opens a serial port with the line settings of the RD-03D (256000 8N1).
pub fn open_port(port_name: &str) -> Result<Box<dyn SerialPort>, Rd03dError> {
    let port = serialport::new(port_name, RD03D_BAUD_RATE)
        .data_bits(DataBits::Eight)
        .parity(Parity::None)
        .stop_bits(StopBits::One)
        .timeout(std::time::Duration::from_millis(SERIAL_READ_TIMEOUT_MS))
        .open()?;
    Ok(port)
}

pub(crate) fn send_command<S: ByteSource + ?Sized>(
    source: &mut S,
    command: &[u8],
) -> Result<(), Rd03dError> {
    log::debug!("Sending command {}", to_string(command));
    source.write_all(command)?;
    Ok(())
}

/// Switches the sensor into multi-target reporting.
pub fn enable_multi_target<S: ByteSource + ?Sized>(source: &mut S) -> Result<(), Rd03dError> {
    send_command(source, &MULTI_TARGET_CMD)?;
    if !cfg!(test) {
        sleep_ms(COMMAND_SETTLE_MS);
    }
    Ok(())
}

/// Discards everything already buffered by the source.
pub fn flush<S: ByteSource + ?Sized>(source: &mut S) -> Result<usize, Rd03dError> {
    let mut discarded = 0;
    let mut chunk = [0u8; READ_CHUNK_SIZE];
    loop {
        let n_read = source.bytes_available()?;
        if n_read == 0 {
            return Ok(discarded);
        }
        let n = source.read_bytes(&mut chunk[..n_read.min(READ_CHUNK_SIZE)])?;
        if n == 0 {
            return Ok(discarded);
        }
        discarded += n;
    }
}

impl ByteSource for Box<dyn SerialPort> {
    fn bytes_available(&mut self) -> io::Result<usize> {
        let n_u32: u32 = self.bytes_to_read()?;
        Ok(n_u32.try_into().unwrap_or(0))
    }

    fn read_byte(&mut self) -> io::Result<u8> {
        let mut buf = [0u8; 1];
        self.read_exact(&mut buf)?;
        Ok(buf[0])
    }

    fn read_bytes(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let n = self.read(buf)?;
        log::trace!("Radar raw read: {} bytes: {:02X?}", n, &buf[..n.min(32)]);
        Ok(n)
    }

    fn write_all(&mut self, data: &[u8]) -> io::Result<()> {
        Write::write_all(self, data)?;
        self.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serialport::TTYPort;
    use std::io::{Read, Write};

    #[test]
    fn test_enable_multi_target() {
        let (mut master, slave) = TTYPort::pair().expect("Unable to create ptty pair");
        let mut slave_ptr = Box::new(slave) as Box<dyn SerialPort>;
        enable_multi_target(&mut slave_ptr).unwrap();

        sleep_ms(10);

        let mut buf = [0u8; 12];
        master.read_exact(&mut buf).unwrap();
        assert_eq!(
            buf,
            [0xFD, 0xFC, 0xFB, 0xFA, 0x02, 0x00, 0x90, 0x00, 0x04, 0x03, 0x02, 0x01]
        );
    }

    #[test]
    fn test_flush() {
        let (mut master, slave) = TTYPort::pair().expect("Unable to create ptty pair");
        master.write_all(&[0x01; 100]).unwrap();
        sleep_ms(10);

        let mut slave_ptr = Box::new(slave) as Box<dyn SerialPort>;
        assert_eq!(flush(&mut slave_ptr).unwrap(), 100);
        assert_eq!(slave_ptr.bytes_available().unwrap(), 0);
    }

    #[test]
    fn test_read_bytes() {
        let (mut master, slave) = TTYPort::pair().expect("Unable to create ptty pair");
        master.write_all(&[0xAA, 0xFF, 0x03, 0x00]).unwrap();
        sleep_ms(10);

        let mut slave_ptr = Box::new(slave) as Box<dyn SerialPort>;
        assert_eq!(slave_ptr.bytes_available().unwrap(), 4);
        assert_eq!(slave_ptr.read_byte().unwrap(), 0xAA);
        let mut buf = [0u8; 8];
        assert_eq!(ByteSource::read_bytes(&mut slave_ptr, &mut buf).unwrap(), 3);
        assert_eq!(buf[..3], [0xFF, 0x03, 0x00]);
    }
}
