use std::io;
use std::time::Instant;

/// Byte stream the radar is read from and written to.
///
/// Reads never wait: callers check `bytes_available` first and only read
/// what is already buffered.
pub trait ByteSource {
    fn bytes_available(&mut self) -> io::Result<usize>;

    fn read_byte(&mut self) -> io::Result<u8>;

    /// Reads up to `buf.len()` already-buffered bytes.
    fn read_bytes(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        for (i, slot) in buf.iter_mut().enumerate() {
            if self.bytes_available()? == 0 {
                return Ok(i);
            }
            *slot = self.read_byte()?;
        }
        Ok(buf.len())
    }

    fn write_all(&mut self, data: &[u8]) -> io::Result<()>;
}

/// Monotonic millisecond clock.
pub trait Clock {
    fn now_ms(&self) -> u64;
}

impl<F: Fn() -> u64> Clock for F {
    fn now_ms(&self) -> u64 {
        self()
    }
}

/// Milliseconds since the clock was created.
#[derive(Clone, Copy, Debug)]
pub struct MonotonicClock {
    start: Instant,
}

impl MonotonicClock {
    pub fn new() -> MonotonicClock {
        MonotonicClock {
            start: Instant::now(),
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    fn now_ms(&self) -> u64 {
        self.start.elapsed().as_millis() as u64
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::collections::VecDeque;

    /// In-memory byte source for driving the monitor in tests.
    #[derive(Default)]
    pub(crate) struct MemorySource {
        pub(crate) rx: VecDeque<u8>,
        pub(crate) tx: Vec<u8>,
    }

    impl MemorySource {
        pub(crate) fn push(&mut self, bytes: &[u8]) {
            self.rx.extend(bytes);
        }
    }

    impl ByteSource for MemorySource {
        fn bytes_available(&mut self) -> io::Result<usize> {
            Ok(self.rx.len())
        }

        fn read_byte(&mut self) -> io::Result<u8> {
            self.rx
                .pop_front()
                .ok_or_else(|| io::Error::from(io::ErrorKind::WouldBlock))
        }

        fn write_all(&mut self, data: &[u8]) -> io::Result<()> {
            self.tx.extend_from_slice(data);
            Ok(())
        }
    }

    #[test]
    fn test_default_read_bytes() {
        let mut source = MemorySource::default();
        source.push(&[1, 2, 3]);
        let mut buf = [0u8; 8];
        assert_eq!(source.read_bytes(&mut buf).unwrap(), 3);
        assert_eq!(buf[..3], [1, 2, 3]);
        assert_eq!(source.read_bytes(&mut buf).unwrap(), 0);
    }

    #[test]
    fn test_closure_clock() {
        let clock = || 42u64;
        assert_eq!(clock.now_ms(), 42);
    }

    #[test]
    fn test_monotonic_clock() {
        let clock = MonotonicClock::new();
        let a = clock.now_ms();
        let b = clock.now_ms();
        assert!(b >= a);
    }
}
