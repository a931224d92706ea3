/*!
# Match Paths

A path locates a node relative to the document root. It is kept as a stack of
[`PathSegment`]s while walking and rendered to its textual form only once a
match is found, e.g. `data[3].user.name`.
*/
use std::fmt::{self, Write as _};

/// A single step from a parent node to one of its children.
#[derive(Hash, PartialEq, Eq, Debug, Clone, Copy)]
pub enum PathSegment<'a> {
    /// A key access in an object, rendered as `.key`
    Field(&'a str),
    /// A position in an array, rendered as `[idx]`
    Index(usize),
}

impl fmt::Display for PathSegment<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Field(key) => write!(f, ".{key}"),
            Self::Index(idx) => write!(f, "[{idx}]"),
        }
    }
}

/// Render a segment stack as a path string, appended to `prefix`.
///
/// A field directly under an empty path is written bare (`key` rather than
/// `.key`), so a document rooted at an object produces `a.b` and one rooted
/// at an array produces `[0].b`. Keys are written verbatim; a key containing
/// `.` or `[` is not escaped.
///
/// ```rust
/// use jsonsift::search::{PathSegment, render_path};
///
/// let segments = [
///     PathSegment::Field("a"),
///     PathSegment::Index(0),
///     PathSegment::Field("b"),
/// ];
/// assert_eq!(render_path("", &segments), "a[0].b");
/// assert_eq!(render_path("root", &segments), "root.a[0].b");
/// ```
#[must_use]
pub fn render_path(prefix: &str, segments: &[PathSegment<'_>]) -> String {
    let mut rendered = String::from(prefix);
    for segment in segments {
        match segment {
            PathSegment::Field(key) if rendered.is_empty() => {
                rendered.push_str(key);
            }
            // NOTE: writing into a `String` never fails.
            _ => {
                let _ = write!(rendered, "{segment}");
            }
        }
    }
    rendered
}
