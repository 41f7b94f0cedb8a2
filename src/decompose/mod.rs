//! URL decomposition.
//!
//! Wraps the `url` crate parser in an immutable value type exposing the
//! fields the shape matcher and extractors work over: hostname, non-empty
//! path segments, and query parameters as an ordered multi-map (a parameter
//! name may repeat, so each name maps to an ordered list of values).

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{Error, Result};

/// Structured breakdown of a URL string. Immutable once produced by
/// [`decompose`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecomposedUrl {
    /// Scheme without the trailing colon (e.g. "https").
    pub scheme: String,

    /// Host including the port when one is present.
    pub host: String,

    /// Host without the port.
    pub hostname: String,

    /// Full path string, leading slash included.
    pub path: String,

    /// Non-empty path segments, in order.
    pub segments: Vec<String>,

    /// Query parameters: name to ordered list of decoded values.
    pub query: Vec<(String, Vec<String>)>,

    /// Fragment, without the leading `#`.
    pub fragment: Option<String>,
}

impl DecomposedUrl {
    /// Path segment at `index`, if present.
    pub fn segment(&self, index: usize) -> Option<&str> {
        self.segments.get(index).map(String::as_str)
    }

    /// All values recorded for query parameter `name`.
    pub fn query_values(&self, name: &str) -> Option<&[String]> {
        self.query
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, values)| values.as_slice())
    }

    /// First value of query parameter `name`, if the parameter is present
    /// with at least one value.
    pub fn first_query(&self, name: &str) -> Option<&str> {
        self.query_values(name)
            .and_then(|values| values.first())
            .map(String::as_str)
    }
}

/// Decompose a URL string into its structured fields.
///
/// Fails with [`Error::MissingInput`] on an empty string and
/// [`Error::InvalidUrl`] when the string cannot be parsed as a URL.
pub fn decompose(url: &str) -> Result<DecomposedUrl> {
    if url.is_empty() {
        return Err(Error::MissingInput);
    }

    let parsed = Url::parse(url)?;

    let hostname = parsed.host_str().unwrap_or("").to_string();
    let host = match parsed.port() {
        Some(port) => format!("{}:{}", hostname, port),
        None => hostname.clone(),
    };

    let path = parsed.path().to_string();
    let segments: Vec<String> = path
        .split('/')
        .filter(|segment| !segment.is_empty())
        .map(str::to_string)
        .collect();

    // Preserve first-appearance order of names; repeated names append to
    // the existing entry's value list.
    let mut query: Vec<(String, Vec<String>)> = Vec::new();
    for (name, value) in parsed.query_pairs() {
        match query.iter_mut().find(|(key, _)| *key == name) {
            Some((_, values)) => values.push(value.into_owned()),
            None => query.push((name.into_owned(), vec![value.into_owned()])),
        }
    }

    Ok(DecomposedUrl {
        scheme: parsed.scheme().to_string(),
        host,
        hostname,
        path,
        segments,
        query,
        fragment: parsed.fragment().map(str::to_string),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_decompose_basic_fields() {
        let parts = decompose("https://www.youtube.com/watch?v=dQw4w9WgXcQ").unwrap();
        assert_eq!(parts.scheme, "https");
        assert_eq!(parts.hostname, "www.youtube.com");
        assert_eq!(parts.host, "www.youtube.com");
        assert_eq!(parts.path, "/watch");
        assert_eq!(parts.segments, vec!["watch".to_string()]);
        assert_eq!(parts.first_query("v"), Some("dQw4w9WgXcQ"));
        assert_eq!(parts.fragment, None);
    }

    #[test]
    fn test_decompose_host_includes_port() {
        let parts = decompose("http://localhost:8080/embed/dQw4w9WgXcQ").unwrap();
        assert_eq!(parts.hostname, "localhost");
        assert_eq!(parts.host, "localhost:8080");
    }

    #[test]
    fn test_decompose_drops_empty_segments() {
        let parts = decompose("https://youtube.com//embed//dQw4w9WgXcQ/").unwrap();
        assert_eq!(parts.segments, vec!["embed", "dQw4w9WgXcQ"]);
    }

    #[test]
    fn test_decompose_repeated_query_parameter() {
        let parts = decompose("https://youtube.com/watch?v=first&v=second").unwrap();
        assert_eq!(
            parts.query_values("v"),
            Some(&["first".to_string(), "second".to_string()][..])
        );
        assert_eq!(parts.first_query("v"), Some("first"));
    }

    #[test]
    fn test_decompose_query_values_are_decoded() {
        let parts =
            decompose("https://youtube.com/attribution_link?u=/watch%3Fv%3DdQw4w9WgXcQ").unwrap();
        assert_eq!(parts.first_query("u"), Some("/watch?v=dQw4w9WgXcQ"));
    }

    #[test]
    fn test_decompose_fragment() {
        let parts = decompose("https://youtube.com/watch?v=dQw4w9WgXcQ#top").unwrap();
        assert_eq!(parts.fragment.as_deref(), Some("top"));
    }

    #[test]
    fn test_decompose_empty_input() {
        assert!(matches!(decompose(""), Err(Error::MissingInput)));
    }

    #[test]
    fn test_decompose_invalid_url() {
        assert!(matches!(
            decompose("not a url"),
            Err(Error::InvalidUrl(_))
        ));
    }

    #[test]
    fn test_decompose_missing_query_parameter() {
        let parts = decompose("https://youtube.com/watch").unwrap();
        assert_eq!(parts.first_query("v"), None);
        assert_eq!(parts.query_values("v"), None);
    }
}
