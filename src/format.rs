use crate::constants::{MAX_RANK, UNIT_BASE, UNIT_LABELS};
use std::fmt;

/// Power-of-1024 index of the display unit for `bytes`, clamped at TB.
pub fn rank(bytes: u64) -> u32 {
    if bytes == 0 {
        return 0;
    }
    // Integer log avoids the float rounding at exact powers of 1024.
    (bytes.ilog2() / UNIT_BASE.ilog2()).min(MAX_RANK)
}

pub fn unit_label(rank: u32) -> &'static str {
    usize::try_from(rank)
        .ok()
        .and_then(|r| UNIT_LABELS.get(r))
        .copied()
        .unwrap_or("")
}

#[allow(clippy::cast_precision_loss, clippy::cast_possible_wrap)]
pub fn scale(bytes: u64, rank: u32) -> f64 {
    bytes as f64 / (UNIT_BASE as f64).powi(rank as i32)
}

/// A byte count scaled to its display unit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Size {
    pub value: f64,
    pub unit: &'static str,
    bytes: u64,
}

pub fn format(bytes: u64) -> Size {
    let rank = rank(bytes);
    Size {
        value: scale(bytes, rank),
        unit: unit_label(rank),
        bytes,
    }
}

impl fmt::Display for Size {
    /// Three significant digits, no exponent: `2.00KB`, `97.8KB`, `1000KB`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.unit == UNIT_LABELS[0] {
            return write!(f, "{}{}", self.bytes, self.unit);
        }
        // Decide on the rounded value so 9.999 prints as 10.0, not 10.00.
        let decimals = if (self.value * 100.0).round() < 1000.0 {
            2
        } else if (self.value * 10.0).round() < 1000.0 {
            1
        } else {
            0
        };
        write!(f, "{:.decimals$}{}", self.value, self.unit)
    }
}
