use crate::target::Target;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Number of target slots carried by one frame.
pub const MAX_TARGETS: usize = 3;

/// Struct to hold the targets of one radar frame.
///
/// Slots keep their wire position: slot 0 is always the first target block
/// of the frame, whether or not it holds a detection.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Frame {
    /// Target slots in wire order.
    pub targets: [Target; MAX_TARGETS],
}

impl Frame {
    pub fn target(&self, index: usize) -> Option<&Target> {
        self.targets.get(index)
    }

    pub fn targets(&self) -> &[Target; MAX_TARGETS] {
        &self.targets
    }

    /// Number of slots that hold a detection.
    pub fn valid_count(&self) -> usize {
        self.targets.iter().filter(|t| t.is_valid()).count()
    }

    /// Valid targets together with their slot index.
    pub fn valid_targets(&self) -> impl Iterator<Item = (usize, &Target)> {
        self.targets.iter().enumerate().filter(|(_, t)| t.is_valid())
    }
}
