use crate::monitor::{LinkStats, Radar};
use crate::source::{ByteSource, Clock};
use crate::time::sleep_ms;
use crossbeam_channel::{Receiver, Sender};
use crossbeam_utils::atomic::AtomicCell;
use rd03d_data::Frame;
use std::sync::mpsc;
use std::sync::Arc;
use std::thread::JoinHandle;

/// Struct that contains the driver thread.
pub struct DriverThreads {
    pub(crate) poller_terminator_tx: Sender<bool>,
    pub(crate) poller_thread: Option<JoinHandle<()>>,
    pub(crate) stats: Arc<AtomicCell<LinkStats>>,
}

impl DriverThreads {
    /// Latest link counters published by the polling thread.
    pub fn stats(&self) -> LinkStats {
        self.stats.load()
    }
}

pub(crate) fn poll_radar<S: ByteSource, C: Clock>(
    mut radar: Radar<S, C>,
    frame_tx: mpsc::SyncSender<Frame>,
    poller_terminator_rx: Receiver<bool>,
    stats: Arc<AtomicCell<LinkStats>>,
) {
    radar.on_frame(move |frame| {
        if let Err(e) = frame_tx.try_send(*frame) {
            match e {
                mpsc::TrySendError::Full(_) => log::warn!("Frame dropped, receiver is lagging"),
                mpsc::TrySendError::Disconnected(_) => log::debug!("Frame receiver is gone"),
            }
        }
    });

    loop {
        if do_terminate(&poller_terminator_rx) {
            return;
        }

        match radar.drain() {
            Ok(0) => sleep_ms(1),
            Ok(_) => (),
            Err(e) => {
                log::error!("{e}");
                sleep_ms(10);
            }
        }
        stats.store(radar.stats());
    }
}

pub(crate) fn do_terminate(terminator_rx: &Receiver<bool>) -> bool {
    terminator_rx.try_recv().unwrap_or(false)
}

/// Function to join the driver thread.
/// This function is automatically called when `driver_threads` is dropped.
pub fn join(driver_threads: &mut DriverThreads) {
    // The poller may already be gone, in which case there is nothing to stop.
    let _ = driver_threads.poller_terminator_tx.send(true);

    if let Some(thread) = driver_threads.poller_thread.take() {
        if thread.join().is_err() {
            log::error!("Radar polling thread panicked");
        }
    }
}

impl Drop for DriverThreads {
    fn drop(&mut self) {
        join(self);
    }
}
