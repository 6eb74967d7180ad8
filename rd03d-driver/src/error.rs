use std::error::Error;
use std::fmt::Display;
use std::{fmt, io};

#[derive(Debug)]
pub enum Rd03dError {
    InvalidTail(u8, u8),
    SerialError(serialport::Error),
    IoError(io::Error),
}

impl fmt::Display for Rd03dError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Rd03dError::InvalidTail(b0, b1) => write!(f, "Frame tail must be 0x55 0xCC. Observed = {:02X} {:02X}.", b0, b1),
            Rd03dError::IoError(err) => Display::fmt(&err, f),
            Rd03dError::SerialError(err) => Display::fmt(&err, f),
        }
    }
}

impl Error for Rd03dError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Rd03dError::IoError(err) => Some(err),
            Rd03dError::SerialError(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for Rd03dError {
    fn from(err: io::Error) -> Self {
        Rd03dError::IoError(err)
    }
}

impl From<serialport::Error> for Rd03dError {
    fn from(err: serialport::Error) -> Self {
        Rd03dError::SerialError(err)
    }
}
