//! Link health around the frame parser: inter-byte timeout recovery, frame
//! and error counters, and the "connected" liveness query.

use crate::constants::{CONNECTED_WINDOW_MS, DEFAULT_TIMEOUT_MS, READ_CHUNK_SIZE};
use crate::error::Rd03dError;
use crate::parser::{Feed, FrameParser, ParserState};
use crate::serial::{enable_multi_target, flush};
use crate::source::{ByteSource, Clock};
use rd03d_data::{Frame, Target, MAX_TARGETS};

/// Snapshot of the link counters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LinkStats {
    pub frame_count: u32,
    pub error_count: u32,
    pub connected: bool,
}

/// RD-03D radar on top of a byte source.
///
/// Single-threaded and polled: call [`Radar::drain`] often enough that the
/// source's receive buffer never overflows. The frame callback runs inline
/// inside `drain` and must not call back into the radar.
pub struct Radar<S: ByteSource, C: Clock> {
    source: S,
    clock: C,
    parser: FrameParser,
    on_frame: Option<Box<dyn FnMut(&Frame) + Send>>,
    timeout_ms: u64,
    last_byte_ms: u64,
    last_frame_ms: Option<u64>,
    frame_count: u32,
    error_count: u32,
}

impl<S: ByteSource, C: Clock> Radar<S, C> {
    /// Wraps `source` without touching the device.
    pub fn new(source: S, clock: C) -> Radar<S, C> {
        let now = clock.now_ms();
        Radar {
            source,
            clock,
            parser: FrameParser::new(),
            on_frame: None,
            timeout_ms: DEFAULT_TIMEOUT_MS,
            last_byte_ms: now,
            last_frame_ms: None,
            frame_count: 0,
            error_count: 0,
        }
    }

    /// Discards stale input, puts the sensor in multi-target mode and starts
    /// from a clean parser.
    pub fn initialize(source: S, clock: C, timeout_ms: u64) -> Result<Radar<S, C>, Rd03dError> {
        let mut radar = Radar::new(source, clock);
        radar.timeout_ms = timeout_ms;
        let stale = flush(&mut radar.source)?;
        if stale > 0 {
            log::debug!("Discarded {} stale bytes", stale);
        }
        radar.enable_multi_target()?;
        radar.parser.reset();
        radar.last_byte_ms = radar.clock.now_ms();
        Ok(radar)
    }

    /// Sends the multi-target mode command again.
    pub fn enable_multi_target(&mut self) -> Result<(), Rd03dError> {
        enable_multi_target(&mut self.source)
    }

    /// Feeds every byte the source currently holds through the parser.
    ///
    /// A partial frame older than the timeout is dropped first. Returns the
    /// number of bytes consumed. Parse errors are only counted; the only
    /// error returned is a failure of the byte source itself.
    pub fn drain(&mut self) -> Result<usize, Rd03dError> {
        let now = self.clock.now_ms();
        self.check_timeout(now);

        let mut consumed = 0;
        let mut chunk = [0u8; READ_CHUNK_SIZE];
        loop {
            let n_read = self.source.bytes_available()?;
            if n_read == 0 {
                break;
            }
            let n = self.source.read_bytes(&mut chunk[..n_read.min(READ_CHUNK_SIZE)])?;
            if n == 0 {
                break;
            }
            for &byte in &chunk[..n] {
                self.process_byte(byte, now);
            }
            consumed += n;
        }
        Ok(consumed)
    }

    /// Registers the callback run after each accepted frame, replacing any
    /// previous one.
    pub fn on_frame(&mut self, callback: impl FnMut(&Frame) + Send + 'static) {
        self.on_frame = Some(Box::new(callback));
    }

    /// Target slot of the last accepted frame. `None` for an index past the
    /// third slot.
    pub fn target(&self, index: usize) -> Option<&Target> {
        self.parser.frame().target(index)
    }

    pub fn targets(&self) -> &[Target; MAX_TARGETS] {
        self.parser.frame().targets()
    }

    pub fn frame(&self) -> &Frame {
        self.parser.frame()
    }

    pub fn target_count(&self) -> usize {
        self.parser.frame().valid_count()
    }

    pub fn frame_count(&self) -> u32 {
        self.frame_count
    }

    pub fn error_count(&self) -> u32 {
        self.error_count
    }

    /// True if a frame was accepted within the last second.
    pub fn is_connected(&self) -> bool {
        match self.last_frame_ms {
            Some(last) => self.clock.now_ms().saturating_sub(last) < CONNECTED_WINDOW_MS,
            None => false,
        }
    }

    pub fn stats(&self) -> LinkStats {
        LinkStats {
            frame_count: self.frame_count,
            error_count: self.error_count,
            connected: self.is_connected(),
        }
    }

    /// Applies from the next `drain` on.
    pub fn set_timeout_ms(&mut self, timeout_ms: u64) {
        self.timeout_ms = timeout_ms;
    }

    pub fn timeout_ms(&self) -> u64 {
        self.timeout_ms
    }

    pub fn parser_state(&self) -> ParserState {
        self.parser.state()
    }

    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    pub fn into_inner(self) -> S {
        self.source
    }

    fn check_timeout(&mut self, now: u64) {
        if self.parser.state() != ParserState::ReadingBody {
            return;
        }
        let elapsed = now.saturating_sub(self.last_byte_ms);
        if elapsed > self.timeout_ms {
            log::debug!("Partial frame dropped after {} ms without a byte", elapsed);
            self.error_count = self.error_count.saturating_add(1);
            self.parser.reset();
        }
    }

    fn process_byte(&mut self, byte: u8, now: u64) {
        self.last_byte_ms = now;
        match self.parser.push(byte) {
            Feed::Pending => (),
            Feed::Frame(frame) => {
                self.frame_count = self.frame_count.saturating_add(1);
                self.last_frame_ms = Some(now);
                if let Some(callback) = self.on_frame.as_mut() {
                    callback(frame);
                }
            }
            Feed::Rejected(err) => {
                log::debug!("Frame rejected: {}", err);
                self.error_count = self.error_count.saturating_add(1);
            }
        }
    }
}
