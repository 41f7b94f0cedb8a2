//! Host classification and URL shape matching.
//!
//! The shape matcher is an explicit ordered list of (shape, predicate)
//! rules evaluated over the decomposed URL fields; the first matching rule
//! wins. The order is a contract: `youtube.com` hosts must hit the
//! `embed` rule before the trailing path-only fallback, otherwise
//! `youtube.com/embed/..` URLs would classify as the nocookie shape.

use tracing::debug;

use crate::decompose::{decompose, DecomposedUrl};
use crate::error::{Error, Result};
use crate::models::VideoUrlShape;

/// Hostnames accepted by [`is_youtube_url`].
///
/// Note the asymmetry with the shape matcher: the bare
/// `youtube-nocookie.com` (without `www.`) is deliberately absent here even
/// though the matcher's fallback rule accepts it.
const YOUTUBE_HOSTNAMES: [&str; 5] = [
    "youtube.com",
    "www.youtube.com",
    "m.youtube.com",
    "www.youtube-nocookie.com",
    "youtu.be",
];

/// The `youtube.com` hostname variants the main dispatch rules apply to.
fn is_main_host(hostname: &str) -> bool {
    matches!(hostname, "youtube.com" | "www.youtube.com" | "m.youtube.com")
}

type ShapePredicate = fn(&DecomposedUrl) -> bool;

/// Ordered shape rules, first match wins.
///
/// The `youtu.be` rules come first, then the main-host dispatch on the
/// leading path segment, and finally the permissive nocookie fallback that
/// matches on hostname *or* an `embed` leading segment regardless of host.
const SHAPE_RULES: &[(VideoUrlShape, ShapePredicate)] = &[
    (VideoUrlShape::ShortWatch, |u| {
        u.hostname == "youtu.be"
            && u.segment(0) == Some("watch")
            && u.first_query("v").is_some_and(|v| !v.is_empty())
    }),
    (VideoUrlShape::ShortId, |u| {
        u.hostname == "youtu.be" && u.segments.len() == 1 && u.segment(0) != Some("watch")
    }),
    (VideoUrlShape::Watch, |u| {
        is_main_host(&u.hostname) && u.segment(0) == Some("watch")
    }),
    (VideoUrlShape::VPath, |u| {
        is_main_host(&u.hostname) && u.segment(0) == Some("v")
    }),
    (VideoUrlShape::EPath, |u| {
        is_main_host(&u.hostname) && u.segment(0) == Some("e")
    }),
    (VideoUrlShape::Embed, |u| {
        is_main_host(&u.hostname) && u.segment(0) == Some("embed")
    }),
    (VideoUrlShape::AttributionLink, |u| {
        is_main_host(&u.hostname) && u.segment(0) == Some("attribution_link")
    }),
    (VideoUrlShape::NoCookieEmbed, |u| {
        u.hostname == "youtube-nocookie.com" || u.segment(0) == Some("embed")
    }),
];

/// Whether the URL's hostname belongs to the known YouTube domain set.
///
/// Decomposition failures propagate; this is a host check, not a video-URL
/// check (use [`crate::video::is_video_url`] for that).
pub fn is_youtube_url(url: &str) -> Result<bool> {
    let parts = decompose(url)?;
    Ok(YOUTUBE_HOSTNAMES.contains(&parts.hostname.as_str()))
}

/// Classify a URL into one of the known video URL shapes.
///
/// Fails with [`Error::UnrecognizedShape`] when no rule matches.
pub fn video_url_type(url: &str) -> Result<VideoUrlShape> {
    let parts = decompose(url)?;

    for (shape, matches) in SHAPE_RULES {
        if matches(&parts) {
            debug!("{} matched shape {}", url, shape);
            return Ok(*shape);
        }
    }

    Err(Error::UnrecognizedShape(url.to_string()))
}
