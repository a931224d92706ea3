/*!
# Search Patterns

Compiles the user supplied pattern into a [`Pattern`] that is tested against
the textual form of every scalar in a document.

By default a pattern is a case-insensitive, unanchored regular expression, so a
plain word behaves as a substring search:

```rust
use jsonsift::search::Pattern;

let pattern = Pattern::new("FACILIS").expect("valid pattern");
assert!(pattern.is_match("nofacilis"));
assert!(!pattern.is_match("facile"));
```

Malformed expressions are rejected up front:

```rust
use jsonsift::search::{Pattern, PatternError};

let result = Pattern::new("(unclosed");
assert!(matches!(result, Err(PatternError::InvalidRegex { .. })));
```
*/
use regex::{Regex, RegexBuilder};
use std::error::Error;
use std::fmt;

/// Flags that adjust how a raw pattern string is compiled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PatternOptions {
    /// Match case exactly instead of folding case
    pub case_sensitive: bool,
    /// Treat the pattern as a literal string, escaping regex metacharacters
    pub literal: bool,
}

/// Represents errors that can occur while compiling a search pattern.
#[derive(Debug, Clone)]
pub enum PatternError {
    /// The pattern is not a valid regular expression.
    InvalidRegex {
        /// The pattern as given by the user
        pattern: String,
        /// The underlying compilation error
        source: regex::Error,
    },
}

impl Error for PatternError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidRegex { source, .. } => Some(source),
        }
    }
}

impl fmt::Display for PatternError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidRegex { pattern, .. } => {
                write!(f, "Invalid pattern `{pattern}`")
            }
        }
    }
}

/// A compiled search pattern.
#[derive(Debug, Clone)]
pub struct Pattern {
    /// The pattern as given, before any escaping
    raw: String,
    regex: Regex,
}

impl Pattern {
    /// Compile a case-insensitive regular expression.
    ///
    /// # Errors
    ///
    /// Returns [`PatternError::InvalidRegex`] if `pattern` does not compile.
    pub fn new(pattern: &str) -> Result<Self, PatternError> {
        Self::with_options(pattern, PatternOptions::default())
    }

    /// Compile `pattern` according to `options`.
    ///
    /// # Errors
    ///
    /// Returns [`PatternError::InvalidRegex`] if `pattern` does not compile.
    pub fn with_options(
        pattern: &str,
        options: PatternOptions,
    ) -> Result<Self, PatternError> {
        let source = if options.literal {
            regex::escape(pattern)
        } else {
            pattern.to_string()
        };

        let regex = RegexBuilder::new(&source)
            .case_insensitive(!options.case_sensitive)
            .build()
            .map_err(|source| PatternError::InvalidRegex {
                pattern: pattern.to_string(),
                source,
            })?;

        Ok(Self {
            raw: pattern.to_string(),
            regex,
        })
    }

    /// Returns whether the pattern occurs anywhere in `text`.
    #[must_use]
    pub fn is_match(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }

    /// The pattern as originally given.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.raw
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.raw)
    }
}

impl std::str::FromStr for Pattern {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}
