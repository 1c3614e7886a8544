//! Single-pass `${NAME}` expansion with path separator normalization.
//!
//! ```
//! use std::collections::HashMap;
//! use strexpand::{Expander, Separators};
//!
//! let vars = HashMap::from([("RESULT".to_string(), "Success".to_string())]);
//! let expander = Expander::new(vars).with_separators(Separators::unix());
//!
//! assert_eq!(expander.expand("The result is ${RESULT}"), "The result is Success");
//! assert_eq!(expander.expand("$RESULT\\allan"), "$RESULT/allan");
//! ```

mod buffer;
mod error;
mod expander;
mod placeholder;
mod separator;
mod variables;

pub use buffer::CHUNK_CAPACITY;
pub use error::ExpandError;
pub use expander::Expander;
pub use placeholder::{parse_placeholder, Placeholder};
pub use separator::{normalize, Separators};
pub use variables::{from_fn, FromFn, Lookup, ProcessEnv};

/// Expand `input` against `lookup`, replacing `foreign_separator` with
/// `separator` in the result.
pub fn expand<L: Lookup>(input: &str, lookup: L, separator: char, foreign_separator: char) -> String {
    Expander::new(lookup)
        .with_separators(Separators::new(separator, foreign_separator))
        .expand(input)
}

/// Expand `input` against the process environment with the native
/// separator pair.
///
/// Callers must not modify the environment from another thread while this
/// runs.
pub fn expand_string(input: &str) -> String {
    Expander::new(ProcessEnv).expand(input)
}
