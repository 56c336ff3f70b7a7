//! Reconstruction of document URLs from request path segments.
//!
//! Any request path is reinterpreted as a URL to fetch. A browser turns
//! `/https://example.com/doc.md` into the segments `https:`, `example.com`
//! and `doc.md`; a first segment ending in `:` is treated as the protocol
//! and the `//` separator is restored.

use percent_encoding::percent_decode_str;

/// Rebuilds a URL from path segments.
///
/// Returns an empty string when there are no segments. No validation or
/// canonicalization is performed beyond the protocol colon heuristic.
///
/// # Examples
///
/// ```
/// use notetaker::reconstruct_url;
///
/// let url = reconstruct_url(&["https:", "example.com", "doc.md"]);
/// assert_eq!(url, "https://example.com/doc.md");
/// ```
pub fn reconstruct_url<S: AsRef<str>>(segments: &[S]) -> String {
    let Some((first, rest)) = segments.split_first() else {
        return String::new();
    };

    let first = first.as_ref();
    let rest: Vec<&str> = rest.iter().map(AsRef::as_ref).collect();

    if first.ends_with(':') {
        format!("{}//{}", first, rest.join("/"))
    } else {
        let mut url = String::from(first);
        for segment in rest {
            url.push('/');
            url.push_str(segment);
        }
        url
    }
}

/// Splits a request path into its non-empty segments.
pub fn split_path(path: &str) -> Vec<&str> {
    path.split('/').filter(|s| !s.is_empty()).collect()
}

/// Splits a request path and percent-decodes every segment.
///
/// Invalid UTF-8 sequences are replaced rather than rejected.
pub fn decode_segments(path: &str) -> Vec<String> {
    split_path(path)
        .into_iter()
        .map(|segment| percent_decode_str(segment).decode_utf8_lossy().into_owned())
        .collect()
}

/// Builds the document URL for a request path and optional query string.
///
/// The query string is appended verbatim so that URLs such as
/// `https://host/doc.md?raw=true` survive the round trip through the route.
pub fn url_from_request(path: &str, query: Option<&str>) -> String {
    let mut url = reconstruct_url(&decode_segments(path));

    if let Some(query) = query.filter(|q| !q.is_empty()) {
        url.push('?');
        url.push_str(query);
    }

    url
}
