//! Progress math

use crate::render::format::{round_half_up, to_fixed};
use serde::{Deserialize, Serialize};

/// A single progress update for the active request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressReport {
    /// Bytes handed to the transport so far
    pub loaded: u64,
    /// Total bytes of the request body
    pub total: u64,
    /// Percentage in `[0, 100]`, rounded to two decimals
    pub percent: f64,
    /// Status line, e.g. `Uploading... 42.50%`
    pub text: String,
}

impl ProgressReport {
    /// Report for a request that has not sent anything yet
    pub fn start(total: u64) -> Self {
        report(0, total)
    }

    /// Width of a progress bar of `width` cells, proportional to `percent`
    pub fn bar_cells(&self, width: usize) -> usize {
        ((self.percent / 100.0) * width as f64).round() as usize
    }
}

/// Compute the progress report for `loaded` of `total` bytes
///
/// A zero `total` reports 0%. Values past `total` are clamped to 100%.
pub fn report(loaded: u64, total: u64) -> ProgressReport {
    let raw = if total > 0 {
        loaded as f64 / total as f64 * 100.0
    } else {
        0.0
    };

    let percent = round_half_up(raw.clamp(0.0, 100.0), 2);

    ProgressReport {
        loaded,
        total,
        percent,
        text: format!("Uploading... {}%", to_fixed(percent, 2)),
    }
}
