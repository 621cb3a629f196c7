//! Path naming contract.
//!
//! The data source encodes audit direction and checkpoint-ness as bare
//! substrings of the slash-delimited `path` column. That convention is
//! external to us and unconfirmed by the schema, so it lives behind this
//! one module; swap the policy here without touching the aggregations.

/// Substring classification of a transaction path.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PathClass {
    pub up: bool,
    pub down: bool,
    pub checkpoint: bool,
}

/// Classify a path by the exact substring contract. A path may match
/// several classes at once; callers decide what that means.
#[inline]
pub fn classify(path: &str) -> PathClass {
    PathClass {
        up: path.contains("up"),
        down: path.contains("down"),
        checkpoint: path.contains("checkpoint"),
    }
}

/// Last slash-delimited segment of a path, used as the project name.
#[inline]
pub fn project_name(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}
