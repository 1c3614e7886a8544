use tracing::{debug, trace};

use crate::buffer::OutputBuffer;
use crate::error::ExpandError;
use crate::placeholder::parse_placeholder;
use crate::separator::Separators;
use crate::variables::Lookup;

/// Expands `${NAME}` placeholders and normalizes path separators.
///
/// Only the braced form is recognized. `$NAME`, a trailing `$` and an
/// unterminated `${` are copied through unchanged. A name the lookup does not
/// know expands to nothing. Substituted values are never scanned again.
#[derive(Debug, Clone)]
pub struct Expander<L> {
    lookup: L,
    separators: Separators,
}

impl<L: Lookup> Expander<L> {
    /// Expander using the native separator pair.
    pub fn new(lookup: L) -> Self {
        Self {
            lookup,
            separators: Separators::native(),
        }
    }

    pub fn with_separators(mut self, separators: Separators) -> Self {
        self.separators = separators;
        self
    }

    pub fn separators(&self) -> Separators {
        self.separators
    }

    pub fn lookup(&self) -> &L {
        &self.lookup
    }

    /// Expand `input`.
    ///
    /// # Panics
    ///
    /// Panics if the output buffer cannot be grown, like any std collection.
    /// Use [`Expander::try_expand`] to get the failure as a value.
    pub fn expand(&self, input: &str) -> String {
        match self.try_expand(input) {
            Ok(expanded) => expanded,
            Err(err) => panic!("{err}"),
        }
    }

    /// Expand `input`, reporting allocation failure instead of panicking.
    pub fn try_expand(&self, input: &str) -> Result<String, ExpandError> {
        if input.is_empty() {
            return Ok(String::new());
        }

        let mut out = OutputBuffer::with_capacity(input.len())?;
        let mut cursor = 0;
        let mut substitutions = 0usize;

        while cursor < input.len() {
            let rest = &input[cursor..];
            let Some(dollar) = rest.find('$') else {
                out.push_literal(rest)?;
                break;
            };
            out.push_literal(&rest[..dollar])?;

            let at = &rest[dollar..];
            match parse_placeholder(at) {
                Some(placeholder) => {
                    let value = self.lookup.lookup(placeholder.name);
                    trace!(
                        name = placeholder.name,
                        found = value.is_some(),
                        "resolved placeholder"
                    );
                    if let Some(value) = value {
                        out.push_value(&value)?;
                    }
                    substitutions += 1;
                    cursor += dollar + placeholder.len;
                }
                None if at.starts_with("${") => {
                    // No `}` anywhere after this point, so nothing later can
                    // be a placeholder either.
                    debug!(offset = cursor + dollar, "unterminated placeholder");
                    out.push_literal(at)?;
                    break;
                }
                None => {
                    out.push_literal("$")?;
                    cursor += dollar + 1;
                }
            }
        }

        let flushes = out.flushes();
        let mut result = out.finish()?;
        self.separators.normalize_in_place(&mut result);

        debug!(
            input_len = input.len(),
            output_len = result.len(),
            substitutions,
            flushes,
            "expanded string"
        );
        Ok(result)
    }

    /// Expand every input in order.
    pub fn expand_all<'a, I>(&'a self, inputs: I) -> impl Iterator<Item = String> + 'a
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
        I::IntoIter: 'a,
    {
        inputs.into_iter().map(move |input| self.expand(input.as_ref()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::CHUNK_CAPACITY;
    use crate::variables::from_fn;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;

    fn expander(vars: &[(&str, &str)]) -> Expander<HashMap<String, String>> {
        let vars = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Expander::new(vars).with_separators(Separators::unix())
    }

    #[test]
    fn test_substitutes_braced_name() {
        let e = expander(&[("NAME", "Success")]);
        assert_eq!(e.expand("${NAME}"), "Success");
        assert_eq!(e.expand("The result is ${NAME}"), "The result is Success");
        assert_eq!(e.expand("${NAME} starts this sentence"), "Success starts this sentence");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(expander(&[]).expand(""), "");
    }

    #[test]
    fn test_bare_dollar_is_literal() {
        let e = expander(&[("NAME", "Success")]);
        assert_eq!(e.expand("$NAME"), "$NAME");
        assert_eq!(e.expand("cost: 5$"), "cost: 5$");
        assert_eq!(e.expand("$$"), "$$");
        assert_eq!(e.expand("$(NAME)"), "$(NAME)");
    }

    #[test]
    fn test_unterminated_is_verbatim() {
        let e = expander(&[("NAME", "Success")]);
        assert_eq!(e.expand("The result is ${NAME"), "The result is ${NAME");
        assert_eq!(e.expand("${NAME} and ${NAME"), "Success and ${NAME");
        assert_eq!(e.expand("${"), "${");
        assert_eq!(e.expand("${${${"), "${${${");
    }

    #[test]
    fn test_unknown_name_is_deleted() {
        let e = expander(&[]);
        assert_eq!(e.expand("${UNKNOWN_VAR_XYZ}"), "");
        assert_eq!(e.expand("a${UNKNOWN}b"), "ab");
    }

    #[test]
    fn test_empty_name() {
        let seen = std::cell::RefCell::new(Vec::new());
        let lookup = from_fn(|name: &str| {
            seen.borrow_mut().push(name.to_string());
            None
        });
        let e = Expander::new(lookup);
        assert_eq!(e.expand("x${}y"), "xy");
        assert_eq!(*seen.borrow(), vec![String::new()]);
    }

    #[test]
    fn test_first_brace_terminates_name() {
        let e = expander(&[("A${B", "odd"), ("B", "bee")]);
        assert_eq!(e.expand("${A${B}}"), "odd}");
        assert_eq!(expander(&[("B", "bee")]).expand("${A${B}}"), "}");
    }

    #[test]
    fn test_consecutive_placeholders() {
        let e = expander(&[("A", "1"), ("B", "2")]);
        assert_eq!(e.expand("${A}${B}${A}"), "121");
    }

    #[test]
    fn test_no_rescan_of_values() {
        let e = expander(&[("A", "${B}"), ("B", "bee")]);
        assert_eq!(e.expand("${A}"), "${B}");
    }

    #[test]
    fn test_normalizes_separators() {
        let e = expander(&[("DIR", r"C:\tools")]);
        assert_eq!(e.expand("$NAME\\x"), "$NAME/x");
        assert_eq!(e.expand(r"${DIR}\bin"), "C:/tools/bin");

        let win = expander(&[("DIR", "/opt/tools")]).with_separators(Separators::windows());
        assert_eq!(win.expand("${DIR}/bin"), r"\opt\tools\bin");
    }

    #[test]
    fn test_long_input_crosses_chunks() {
        let e = expander(&[("V", "value")]);
        let filler = "y".repeat(CHUNK_CAPACITY + 13);
        let input = format!("{filler}${{V}}{filler}$tail");
        assert_eq!(e.expand(&input), format!("{filler}value{filler}$tail"));
    }

    #[test]
    fn test_long_value() {
        let long = "v".repeat(CHUNK_CAPACITY * 3);
        let e = expander(&[("LONG", long.as_str())]);
        assert_eq!(e.expand("<${LONG}>"), format!("<{long}>"));
    }

    #[test]
    fn test_unicode_passthrough() {
        let e = expander(&[("WHO", "wörld")]);
        assert_eq!(e.expand("héllo ${WHO} ✓"), "héllo wörld ✓");
    }

    #[test]
    fn test_expand_all() {
        let e = expander(&[("A", "1")]);
        let out: Vec<_> = e.expand_all(["${A}", "$A", ""]).collect();
        assert_eq!(out, vec!["1", "$A", ""]);
    }

    #[test]
    fn test_try_expand_ok() {
        assert_eq!(expander(&[]).try_expand("plain"), Ok("plain".to_string()));
    }
}
