//! Path segmentation and parameter extraction.
//!
//! A path is a sequence of non-empty segments: empty segments produced by
//! leading, trailing or doubled slashes are discarded and never matched.

use crate::params::Params;

/// Separator between path segments.
pub const SEPARATOR: char = '/';

/// Prefix marking a dynamic segment key, e.g. `:id`.
pub const DYNAMIC_PREFIX: char = ':';

/// Split `path` into its non-empty segments.
///
/// ```rust
/// use burrow_core::path::segments;
///
/// assert_eq!(segments("/a//b/"), vec!["a", "b"]);
/// assert_eq!(segments("/a/b"), vec!["a", "b"]);
/// assert!(segments("/").is_empty());
/// ```
pub fn segments(path: &str) -> Vec<&str> {
    path.split(SEPARATOR).filter(|s| !s.is_empty()).collect()
}

/// Whether a route key is a dynamic segment.
pub fn is_dynamic(key: &str) -> bool {
    key.starts_with(DYNAMIC_PREFIX)
}

/// The parameter name of a dynamic key, without the leading `:`.
pub fn param_name(key: &str) -> Option<&str> {
    key.strip_prefix(DYNAMIC_PREFIX)
}

/// Bind every dynamic segment of `canonical` to the segment of `path` at
/// the same index.
///
/// Both paths are expected to have the same number of segments. When they
/// don't, dynamic segments with no literal counterpart are left unbound.
pub fn extract_params(path: &str, canonical: &str) -> Params {
    let literal = segments(path);
    let mut params = Params::new();

    for (index, part) in segments(canonical).into_iter().enumerate() {
        let Some(name) = param_name(part) else {
            continue;
        };
        if let Some(value) = literal.get(index) {
            params.insert(name, *value);
        }
    }

    params
}
