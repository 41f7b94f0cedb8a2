//! Core value types for YouTube URL parsing.

mod shape;
mod time;
mod video;

pub use shape::*;
pub use time::*;
pub use video::*;
