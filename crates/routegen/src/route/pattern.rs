/// Segment grammar for the page-folder naming convention
///
/// The whole convention is a closed set of four shapes, parsed in one
/// place so the route materializer and the layout merger agree on it:
///
/// - `[...name]` — catch-all segment
/// - `[name]` — dynamic segment (named route parameter)
/// - `(name)` — layout group (absorbed, no URL segment)
/// - anything else — literal segment, taken verbatim

/// Classification of one `/`-delimited folder-name segment
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SegmentKind {
    /// `[...name]` — matches any remaining path
    CatchAll(String),
    /// `[name]` — a named route parameter
    Dynamic(String),
    /// `(name)` — a layout group folder
    Layout(String),
    /// Plain text, used verbatim (malformed brackets land here too)
    Literal(String),
}

/// Classifies a single segment
///
/// Malformed syntax (`[x`, `x]`, `()`, `[]`) is not an error: it falls
/// through to [`SegmentKind::Literal`] and passes into the route
/// unchanged.
///
/// # Examples
///
/// ```
/// use routegen::route::pattern::{classify_segment, SegmentKind};
///
/// assert_eq!(classify_segment("history"), SegmentKind::Literal("history".into()));
/// assert_eq!(classify_segment("[id]"), SegmentKind::Dynamic("id".into()));
/// assert_eq!(classify_segment("[...custom]"), SegmentKind::CatchAll("custom".into()));
/// assert_eq!(classify_segment("(team-details)"), SegmentKind::Layout("team-details".into()));
/// assert_eq!(classify_segment("[oops"), SegmentKind::Literal("[oops".into()));
/// ```
pub fn classify_segment(segment: &str) -> SegmentKind {
    if let Some(inner) = segment.strip_prefix('[').and_then(|s| s.strip_suffix(']')) {
        if let Some(name) = inner.strip_prefix("...") {
            if !name.is_empty() {
                return SegmentKind::CatchAll(name.to_string());
            }
        } else if !inner.is_empty() {
            return SegmentKind::Dynamic(inner.to_string());
        }
    }

    if let Some(inner) = segment.strip_prefix('(').and_then(|s| s.strip_suffix(')')) {
        if !inner.is_empty() {
            return SegmentKind::Layout(inner.to_string());
        }
    }

    SegmentKind::Literal(segment.to_string())
}
