/*!
# Path Searcher

Depth-first search over a JSON document that reports every scalar whose
textual form matches a [`Pattern`].

```rust
use jsonsift::search::{Pattern, PathSearcher};
use serde_json::json;

let doc = json!({"a": {"x": "facilis"}, "b": ["nofacilis"]});
let searcher = PathSearcher::new(Pattern::new("facilis").unwrap());
let found: Vec<String> =
    searcher.search(&doc).iter().map(ToString::to_string).collect();
assert_eq!(found, ["a.x: facilis", "b[0]: nofacilis"]);
```
*/
use log::trace;
use serde_json::Value;
use std::fmt;

use crate::search::path::{PathSegment, render_path};
use crate::search::pattern::Pattern;

/// A scalar in the document whose text matched the search pattern.
#[derive(PartialEq, Eq, Debug, Clone)]
pub struct Match {
    /// Location of the scalar, e.g. `[0].title`
    pub path: String,
    /// The scalar rendered as text, see [`scalar_text`]
    pub value: String,
}

impl fmt::Display for Match {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path, self.value)
    }
}

/// Returns the text a scalar is matched against, or `None` for objects and
/// arrays.
///
/// Strings are taken as-is without quotes or escaping, numbers keep the digits
/// they were written with in the document, booleans are `true`/`false` and
/// null is `null`.
#[must_use]
pub fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null => Some("null".to_string()),
        Value::Array(_) | Value::Object(_) => None,
    }
}

/// Searches the scalars of a JSON document for a pattern.
#[derive(Debug, Clone)]
pub struct PathSearcher {
    pattern: Pattern,
}

impl PathSearcher {
    /// Constructs a searcher for the given pattern.
    #[must_use]
    pub const fn new(pattern: Pattern) -> Self {
        Self { pattern }
    }

    /// The pattern this searcher tests scalars against.
    #[must_use]
    pub const fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    /// Returns all matches in `json` in document order.
    ///
    /// A document that is itself a scalar has no path to report and always
    /// yields an empty result.
    #[must_use]
    pub fn search(&self, json: &Value) -> Vec<Match> {
        self.search_from(json, "")
    }

    /// Like [`PathSearcher::search`], with every reported path starting at
    /// `prefix` instead of the document root.
    #[must_use]
    pub fn search_from(&self, json: &Value, prefix: &str) -> Vec<Match> {
        let mut results = Vec::new();
        let mut path = Vec::new();

        if matches!(json, Value::Object(_) | Value::Array(_)) {
            self.traverse_json(prefix, &mut path, json, &mut results);
        }

        results
    }

    /// Walks the children of a container depth-first, testing leaves and
    /// recursing into nested containers.
    fn traverse_json<'a>(
        &self,
        prefix: &str,
        path: &mut Vec<PathSegment<'a>>,
        value: &'a Value,
        results: &mut Vec<Match>,
    ) {
        match value {
            Value::Object(map) => {
                for (key, child) in map {
                    path.push(PathSegment::Field(key.as_str()));
                    self.visit_child(prefix, path, child, results);
                    path.pop();
                }
            }
            Value::Array(items) => {
                for (idx, child) in items.iter().enumerate() {
                    path.push(PathSegment::Index(idx));
                    self.visit_child(prefix, path, child, results);
                    path.pop();
                }
            }
            Value::Null | Value::Bool(_) | Value::Number(_) | Value::String(_) => {}
        }
    }

    fn visit_child<'a>(
        &self,
        prefix: &str,
        path: &mut Vec<PathSegment<'a>>,
        child: &'a Value,
        results: &mut Vec<Match>,
    ) {
        let Some(text) = scalar_text(child) else {
            self.traverse_json(prefix, path, child, results);
            return;
        };

        if self.pattern.is_match(&text) {
            let found = Match {
                path: render_path(prefix, path),
                value: text,
            };
            trace!("matched {found}");
            results.push(found);
        }
    }
}

/// Convenience wrapper around [`PathSearcher::search`].
#[must_use]
pub fn search(json: &Value, pattern: &Pattern) -> Vec<Match> {
    PathSearcher::new(pattern.clone()).search(json)
}
