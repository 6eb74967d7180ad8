pub(crate) const FRAME_HEADER: [u8; 4] = [0xAA, 0xFF, 0x03, 0x00];
pub(crate) const FRAME_TAIL: [u8; 2] = [0x55, 0xCC];
pub(crate) const HEADER_SIZE: usize = 4;
pub(crate) const TARGET_DATA_SIZE: usize = 8;
pub(crate) const FRAME_SIZE: usize = 30;
pub(crate) const TAIL_INDEX: usize = 28;
/// Enable multi-target tracking: preamble, length, command 0x0090, postamble.
pub const MULTI_TARGET_CMD: [u8; 12] = [
    0xFD, 0xFC, 0xFB, 0xFA, 0x02, 0x00, 0x90, 0x00, 0x04, 0x03, 0x02, 0x01,
];
pub const RD03D_BAUD_RATE: u32 = 256000;
pub const DEFAULT_TIMEOUT_MS: u64 = 100;
pub(crate) const CONNECTED_WINDOW_MS: u64 = 1000;
// The sensor needs a moment after power-up and after a mode change.
pub(crate) const COMMAND_SETTLE_MS: u64 = 100;
pub(crate) const READ_CHUNK_SIZE: usize = 64;
pub(crate) const SERIAL_READ_TIMEOUT_MS: u64 = 10;
