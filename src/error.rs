//! Crate-wide error type.
//!
//! Every public function propagates failures to its caller, with one
//! exception: `video::is_video_url` is the designated boundary that
//! converts any failure into `false`.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while classifying or parsing a YouTube URL.
#[derive(Debug, Error)]
pub enum Error {
    /// An empty string was passed where a non-empty URL or query is required.
    #[error("input is empty")]
    MissingInput,

    /// The string could not be decomposed as a URL.
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// No shape rule matched the URL.
    #[error("{0} does not match any known YouTube video URL shape")]
    UnrecognizedShape(String),

    /// The URL is not a valid YouTube video URL.
    #[error("{0} is not a valid YouTube video URL")]
    NotAVideoUrl(String),

    /// The extracted ID does not match the 11-character format.
    #[error("{0} is not a valid YouTube video ID")]
    InvalidVideoId(String),

    /// The embedded attribution-link URL could not be decoded or re-parsed.
    #[error("could not decode nested attribution URL: {0}")]
    NestedUrlDecode(String),
}
