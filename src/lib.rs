//! # youtube-url
//!
//! Identify and decompose YouTube video URLs: classify a URL into one of
//! the known historical URL shapes, extract the 11-character video id and
//! optional start-time offset, and parse compact `1h2m3s` time queries.
//!
//! ## Architecture
//!
//! - **models**: Core value types (URL shapes, time info, video references)
//! - **decompose**: URL decomposition into an immutable field structure
//! - **classify**: Hostname allow-list and the ordered shape-rule matcher
//! - **video**: Video-id extraction, validation, and the aggregate parser
//! - **time**: Compact time-query parsing
//! - **error**: The crate-wide error type
//!
//! ## Example
//!
//! ```
//! use youtube_url::parse_video_url;
//!
//! let video = parse_video_url("https://youtu.be/dQw4w9WgXcQ?t=1m30s").unwrap();
//! assert_eq!(video.video_id, "dQw4w9WgXcQ");
//! assert_eq!(video.start_time, Some(90));
//! ```

pub mod classify;
pub mod decompose;
pub mod error;
pub mod models;
pub mod time;
pub mod video;

pub use classify::{is_youtube_url, video_url_type};
pub use decompose::{decompose, DecomposedUrl};
pub use error::{Error, Result};
pub use models::{TimeInfo, VideoReference, VideoUrlShape};
pub use time::parse_time_query;
pub use video::{is_valid_video_id, is_video_url, parse_video_url, time_seconds, video_id};
