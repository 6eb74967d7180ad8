//! Byte-at-a-time synchronizer for RD-03D report frames.
//!
//! ```text
//! AA FF 03 00 | target 0 (8) | target 1 (8) | target 2 (8) | 55 CC
//! ```

use crate::constants::{
    FRAME_HEADER, FRAME_SIZE, FRAME_TAIL, HEADER_SIZE, TAIL_INDEX, TARGET_DATA_SIZE,
};
use crate::error::Rd03dError;
use crate::target::Rd03dTarget;
use rd03d_data::{Frame, Target, MAX_TARGETS};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParserState {
    /// Looking for the `AA FF 03 00` header.
    SyncingHeader,
    /// Header matched, collecting target blocks and tail.
    ReadingBody,
}

/// Outcome of pushing one byte into the parser.
#[derive(Debug)]
pub enum Feed<'a> {
    Pending,
    Frame(&'a Frame),
    Rejected(Rd03dError),
}

/// Incremental frame decoder. The frame buffer and the decoded targets are
/// reused in place, so pushing bytes never allocates.
pub struct FrameParser {
    state: ParserState,
    buffer: [u8; FRAME_SIZE],
    sync_index: usize,
    frame_index: usize,
    frame: Frame,
}

impl FrameParser {
    pub fn new() -> FrameParser {
        FrameParser {
            state: ParserState::SyncingHeader,
            buffer: [0; FRAME_SIZE],
            sync_index: 0,
            frame_index: 0,
            frame: Frame::default(),
        }
    }

    pub fn state(&self) -> ParserState {
        self.state
    }

    /// Targets of the last accepted frame.
    pub fn frame(&self) -> &Frame {
        &self.frame
    }

    /// Drops any partial frame and goes back to header search.
    pub fn reset(&mut self) {
        self.state = ParserState::SyncingHeader;
        self.sync_index = 0;
        self.frame_index = 0;
    }

    pub fn push(&mut self, byte: u8) -> Feed<'_> {
        match self.state {
            ParserState::SyncingHeader => {
                self.sync_header(byte);
                Feed::Pending
            }
            ParserState::ReadingBody => self.read_body(byte),
        }
    }

    fn sync_header(&mut self, byte: u8) {
        if byte == FRAME_HEADER[self.sync_index] {
            self.buffer[self.sync_index] = byte;
            self.sync_index += 1;
            if self.sync_index == HEADER_SIZE {
                self.state = ParserState::ReadingBody;
                self.frame_index = HEADER_SIZE;
            }
        } else if byte == FRAME_HEADER[0] {
            // Only one byte of lookback: this byte may open a new header.
            self.buffer[0] = byte;
            self.sync_index = 1;
        } else {
            self.sync_index = 0;
        }
    }

    fn read_body(&mut self, byte: u8) -> Feed<'_> {
        self.buffer[self.frame_index] = byte;
        self.frame_index += 1;
        if self.frame_index < FRAME_SIZE {
            return Feed::Pending;
        }

        self.reset();
        let tail = [self.buffer[TAIL_INDEX], self.buffer[TAIL_INDEX + 1]];
        if tail != FRAME_TAIL {
            return Feed::Rejected(Rd03dError::InvalidTail(tail[0], tail[1]));
        }

        for slot in 0..MAX_TARGETS {
            let start = target_index(slot);
            let data = &self.buffer[start..start + TARGET_DATA_SIZE];
            self.frame.targets[slot] = Target::from_slot(data);
        }
        Feed::Frame(&self.frame)
    }
}

impl Default for FrameParser {
    fn default() -> Self {
        Self::new()
    }
}

pub(crate) fn target_index(slot: usize) -> usize {
    HEADER_SIZE + slot * TARGET_DATA_SIZE
}
