//! Driver for the Ai-Thinker RD-03D 24GHz mmWave radar.
//!
//! The radar streams fixed 30-byte frames carrying up to three targets.
//! [`Radar`] pulls bytes from a [`ByteSource`], decodes frames with a
//! [`FrameParser`] and keeps link health counters. [`run_driver`] runs the
//! whole thing on a serial port in a background thread.

mod constants;
mod driver_threads;
mod error;
mod monitor;
mod numeric;
mod parser;
mod serial;
mod source;
mod target;
mod time;

use crate::driver_threads::poll_radar;
use crate::time::sleep_ms;
use crossbeam_channel::bounded;
use crossbeam_utils::atomic::AtomicCell;
use std::sync::{mpsc, Arc};

pub use crate::constants::{DEFAULT_TIMEOUT_MS, MULTI_TARGET_CMD, RD03D_BAUD_RATE};
pub use crate::driver_threads::{join, DriverThreads};
pub use crate::error::Rd03dError;
pub use crate::monitor::{LinkStats, Radar};
pub use crate::parser::{Feed, FrameParser, ParserState};
pub use crate::serial::{enable_multi_target, flush, open_port};
pub use crate::source::{ByteSource, Clock, MonotonicClock};
pub use rd03d_data::{Frame, Target, MAX_TARGETS};

/// Function to launch the RD-03D.
/// # Arguments
///
/// * `port_name` - Serial port name such as `/dev/ttyUSB0`.
/// * `timeout_ms` - Inter-byte timeout inside a frame.
pub fn run_driver(
    port_name: &str,
    timeout_ms: u64,
) -> Result<(DriverThreads, mpsc::Receiver<Frame>), Rd03dError> {
    let port = open_port(port_name)?;

    // Give the sensor time to boot before talking to it.
    if !cfg!(test) {
        sleep_ms(100);
    }
    let radar = Radar::initialize(port, MonotonicClock::new(), timeout_ms)?;

    let (poller_terminator_tx, poller_terminator_rx) = bounded(10);
    let (frame_tx, frame_rx) = mpsc::sync_channel::<Frame>(10);
    let stats = Arc::new(AtomicCell::new(LinkStats::default()));

    let shared_stats = Arc::clone(&stats);
    let poller_thread = Some(std::thread::spawn(move || {
        poll_radar(radar, frame_tx, poller_terminator_rx, shared_stats);
    }));

    let driver_threads = DriverThreads {
        poller_terminator_tx,
        poller_thread,
        stats,
    };

    Ok((driver_threads, frame_rx))
}
