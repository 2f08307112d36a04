//! Color channel selection masks.
//!
//! Convolution can recompute a subset of the color channels and pass the
//! rest through untouched. The mask is a plain bit set: red = 4, green = 2,
//! blue = 1, combinable with `|`.
//!
//! # Example
//!
//! ```rust
//! use spektr_core::channel::ChannelMask;
//!
//! let mask = ChannelMask::RED | ChannelMask::GREEN;
//! assert!(mask.contains(ChannelMask::RED));
//! assert!(!mask.contains(ChannelMask::BLUE));
//! ```

use std::ops::{BitOr, BitOrAssign};

/// Bit flags selecting which color channels an operation recomputes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChannelMask(u8);

impl ChannelMask {
    /// The red channel.
    pub const RED: ChannelMask = ChannelMask(4);
    /// The green channel.
    pub const GREEN: ChannelMask = ChannelMask(2);
    /// The blue channel.
    pub const BLUE: ChannelMask = ChannelMask(1);
    /// All three color channels.
    pub const ALL: ChannelMask = ChannelMask(7);
    /// No channel selected; every channel copies through.
    pub const NONE: ChannelMask = ChannelMask(0);

    /// `true` when every flag of `other` is set in `self`.
    #[inline]
    pub fn contains(self, other: ChannelMask) -> bool {
        self.0 & other.0 == other.0
    }

    /// Raw flag bits.
    #[inline]
    pub fn bits(self) -> u8 {
        self.0
    }
}

impl BitOr for ChannelMask {
    type Output = ChannelMask;

    #[inline]
    fn bitor(self, rhs: ChannelMask) -> ChannelMask {
        ChannelMask(self.0 | rhs.0)
    }
}

impl BitOrAssign for ChannelMask {
    #[inline]
    fn bitor_assign(&mut self, rhs: ChannelMask) {
        self.0 |= rhs.0;
    }
}

impl Default for ChannelMask {
    fn default() -> Self {
        Self::ALL
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_values() {
        assert_eq!(ChannelMask::RED.bits(), 4);
        assert_eq!(ChannelMask::GREEN.bits(), 2);
        assert_eq!(ChannelMask::BLUE.bits(), 1);
        assert_eq!(ChannelMask::ALL.bits(), 7);
    }

    #[test]
    fn test_combination() {
        let m = ChannelMask::RED | ChannelMask::BLUE;
        assert!(m.contains(ChannelMask::RED));
        assert!(m.contains(ChannelMask::BLUE));
        assert!(!m.contains(ChannelMask::GREEN));
        assert!(!m.contains(ChannelMask::ALL));
        assert!(ChannelMask::ALL.contains(m));
    }
}
