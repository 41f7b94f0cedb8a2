//! The structured result of parsing a full YouTube video URL.

use serde::{Deserialize, Serialize};

/// A reference to a YouTube video: the 11-character identifier and an
/// optional playback start offset in seconds.
///
/// `start_time` is `None` both when the URL carries no `t` parameter and
/// when the offset is zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoReference {
    pub video_id: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<u64>,
}
