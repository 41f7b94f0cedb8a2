//! Compact time-query parsing.
//!
//! Parses the `<H>h<M>m<S>s` duration strings YouTube uses in `t` query
//! parameters. Each component is optional and unbounded; `90m` is legal
//! and normalizes to `1h30m` in the canonical rendering.

use regex::Regex;

use crate::error::{Error, Result};
use crate::models::TimeInfo;

/// Parse a duration string into total seconds plus a canonical rendering.
///
/// Unmatched components default to 0, so a string with no `h`/`m`/`s`
/// component at all still parses successfully to zero seconds with an
/// empty rendering. Fails with [`Error::MissingInput`] on an empty string.
pub fn parse_time_query(query: &str) -> Result<TimeInfo> {
    if query.is_empty() {
        return Err(Error::MissingInput);
    }

    let re = Regex::new(r"(?i)^(?:(\d+)h)?(?:(\d+)m)?(?:(\d+)s)?").unwrap();
    let component = |captures: &regex::Captures, index: usize| -> u64 {
        captures
            .get(index)
            .and_then(|m| m.as_str().parse().ok())
            .unwrap_or(0)
    };

    // Components are unbounded, so the scaling can exceed u64; saturate
    // instead of wrapping.
    let seconds = match re.captures(query) {
        Some(captures) => component(&captures, 1)
            .saturating_mul(3600)
            .saturating_add(component(&captures, 2).saturating_mul(60))
            .saturating_add(component(&captures, 3)),
        None => 0,
    };

    Ok(TimeInfo::from_seconds(seconds))
}
