//! The fixed URL templates YouTube has used historically to reference a video.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the known YouTube video URL shapes.
///
/// Exactly one shape matches a valid video URL; the matcher in
/// [`crate::classify`] evaluates its rules in a fixed order so the shapes
/// never overlap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VideoUrlShape {
    /// `youtu.be/[id]`
    #[serde(rename = "youtu.be/[id]")]
    ShortId,

    /// `youtu.be/watch?v=[id]`
    #[serde(rename = "youtu.be/watch?v=[id]")]
    ShortWatch,

    /// `youtube.com/watch?v=[id]`
    #[serde(rename = "youtube.com/watch?v=[id]")]
    Watch,

    /// `youtube.com/v/[id]`
    #[serde(rename = "youtube.com/v/[id]")]
    VPath,

    /// `youtube.com/e/[id]`
    #[serde(rename = "youtube.com/e/[id]")]
    EPath,

    /// `youtube.com/embed/[id]`
    #[serde(rename = "youtube.com/embed/[id]")]
    Embed,

    /// `youtube.com/attribution_link?u=/watch%3Fv%3D[id]`
    #[serde(rename = "youtube.com/attribution_link?u=/watch%3Fv%3D[id]")]
    AttributionLink,

    /// `youtube-nocookie.com/embed/[id]`
    #[serde(rename = "youtube-nocookie.com/embed/[id]")]
    NoCookieEmbed,
}

impl VideoUrlShape {
    /// The canonical URL template this shape stands for.
    pub fn template(&self) -> &'static str {
        match self {
            VideoUrlShape::ShortId => "youtu.be/[id]",
            VideoUrlShape::ShortWatch => "youtu.be/watch?v=[id]",
            VideoUrlShape::Watch => "youtube.com/watch?v=[id]",
            VideoUrlShape::VPath => "youtube.com/v/[id]",
            VideoUrlShape::EPath => "youtube.com/e/[id]",
            VideoUrlShape::Embed => "youtube.com/embed/[id]",
            VideoUrlShape::AttributionLink => {
                "youtube.com/attribution_link?u=/watch%3Fv%3D[id]"
            }
            VideoUrlShape::NoCookieEmbed => "youtube-nocookie.com/embed/[id]",
        }
    }
}

impl fmt::Display for VideoUrlShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.template())
    }
}
