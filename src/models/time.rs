//! Duration values parsed from compact time queries.

use serde::{Deserialize, Serialize};

/// A parsed time offset: total seconds plus a canonical rendering.
///
/// The rendering is recomputed from the total and drops zero-valued
/// components, so it need not equal the string it was parsed from:
/// `"70s"` parses to 70 seconds and renders as `"1m10s"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeInfo {
    /// Total elapsed duration in seconds.
    pub seconds: u64,

    /// Canonical `<H>h<M>m<S>s` rendering, empty for zero seconds.
    pub string: String,
}

impl TimeInfo {
    /// Build a `TimeInfo` from a total, re-rendering the canonical string
    /// by floor-division into hours, minutes, and seconds.
    pub fn from_seconds(seconds: u64) -> Self {
        let hours = seconds / 3600;
        let minutes = (seconds % 3600) / 60;
        let secs = seconds % 60;

        let mut string = String::new();
        if hours > 0 {
            string.push_str(&format!("{}h", hours));
        }
        if minutes > 0 {
            string.push_str(&format!("{}m", minutes));
        }
        if secs > 0 {
            string.push_str(&format!("{}s", secs));
        }

        Self { seconds, string }
    }
}
