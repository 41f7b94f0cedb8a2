//! Video-id extraction, validation, and the aggregate video-URL parser.
//!
//! Extraction dispatches on the matched shape. The attribution-link shape
//! needs a second decomposition pass: its `u` parameter carries a full
//! percent-encoded `/watch?v=ID` path and query, which is decoded, given a
//! neutral placeholder origin, and re-parsed as a URL of its own.

use percent_encoding::percent_decode_str;
use regex::Regex;
use tracing::debug;

use crate::classify::video_url_type;
use crate::decompose::decompose;
use crate::error::{Error, Result};
use crate::models::{VideoReference, VideoUrlShape};
use crate::time::parse_time_query;

/// Whether `id` matches the 11-character identifier format
/// (`[A-Za-z0-9_-]`, exactly 11). Pure predicate, never fails.
pub fn is_valid_video_id(id: &str) -> bool {
    let re = Regex::new(r"^[A-Za-z0-9_-]{11}$").unwrap();
    re.is_match(id)
}

/// Extract the video identifier from a YouTube video URL.
///
/// Classification failures propagate; a URL whose shape matched but whose
/// id field is absent (e.g. `youtube.com/watch` with no `v`) fails with
/// [`Error::NotAVideoUrl`].
pub fn video_id(url: &str) -> Result<String> {
    let shape = video_url_type(url)?;
    let parts = decompose(url)?;

    let id = match shape {
        VideoUrlShape::ShortId => {
            // Tolerated historical malformation: a query glued onto the
            // path with "&" instead of "?". Truncate at the first "&".
            let segment = parts.segment(0).unwrap_or("");
            segment.split('&').next().unwrap_or(segment).to_string()
        }
        VideoUrlShape::ShortWatch | VideoUrlShape::Watch => parts
            .first_query("v")
            .map(str::to_string)
            .ok_or_else(|| Error::NotAVideoUrl(url.to_string()))?,
        VideoUrlShape::VPath
        | VideoUrlShape::EPath
        | VideoUrlShape::Embed
        | VideoUrlShape::NoCookieEmbed => parts
            .segment(1)
            .map(str::to_string)
            .ok_or_else(|| Error::NotAVideoUrl(url.to_string()))?,
        VideoUrlShape::AttributionLink => {
            let nested = parts
                .first_query("u")
                .ok_or_else(|| Error::NestedUrlDecode("missing u parameter".to_string()))?;
            let decoded = percent_decode_str(nested)
                .decode_utf8()
                .map_err(|e| Error::NestedUrlDecode(e.to_string()))?;
            debug!("attribution link embeds {}", decoded);

            // The decoded value is a bare path+query; give it a neutral
            // origin so it can be decomposed as a URL in its own right.
            let reparsed = decompose(&format!("http://localhost{}", decoded))
                .map_err(|e| Error::NestedUrlDecode(e.to_string()))?;
            reparsed
                .first_query("v")
                .map(str::to_string)
                .ok_or_else(|| {
                    Error::NestedUrlDecode(format!("no v parameter in {}", decoded))
                })?
        }
    };

    Ok(id)
}

/// Whether `url` is a YouTube video URL with a well-formed id.
///
/// This is the one designated error-swallowing boundary: extraction or
/// validation failures of any kind yield `false` instead of propagating.
pub fn is_video_url(url: &str) -> bool {
    match video_id(url) {
        Ok(id) => is_valid_video_id(&id),
        Err(_) => false,
    }
}

/// Start-time offset of a video URL, in seconds.
///
/// Reads the first `t` query parameter through the time-query parser;
/// returns 0 when the parameter is absent or empty. Requires a valid
/// video URL.
pub fn time_seconds(url: &str) -> Result<u64> {
    if url.is_empty() {
        return Err(Error::MissingInput);
    }
    if !is_video_url(url) {
        return Err(Error::NotAVideoUrl(url.to_string()));
    }

    let parts = decompose(url)?;
    match parts.first_query("t") {
        Some(query) if !query.is_empty() => Ok(parse_time_query(query)?.seconds),
        _ => Ok(0),
    }
}

/// Parse a full YouTube video URL into a [`VideoReference`].
///
/// `start_time` is set only when the URL carries a nonzero `t` offset.
pub fn parse_video_url(url: &str) -> Result<VideoReference> {
    if url.is_empty() {
        return Err(Error::MissingInput);
    }
    if !is_video_url(url) {
        return Err(Error::NotAVideoUrl(url.to_string()));
    }

    let id = video_id(url)?;
    if !is_valid_video_id(&id) {
        return Err(Error::InvalidVideoId(id));
    }

    let seconds = time_seconds(url)?;

    Ok(VideoReference {
        video_id: id,
        start_time: (seconds != 0).then_some(seconds),
    })
}
