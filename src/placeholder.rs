/// A well-formed `${NAME}` found at the start of a slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placeholder<'a> {
    /// Text between `{` and the first `}`. May be empty.
    pub name: &'a str,
    /// Bytes of markup consumed, `${` and `}` included.
    pub len: usize,
}

/// Parse a placeholder at the start of `rest`, which must begin at a `$`.
///
/// Returns `None` for a bare `$`, a `$` at the end of input, or a `${` with
/// no closing `}`. Braces do not nest: the first `}` ends the name.
pub fn parse_placeholder(rest: &str) -> Option<Placeholder<'_>> {
    let body = rest.strip_prefix("${")?;
    let close = body.find('}')?;

    Some(Placeholder {
        name: &body[..close],
        len: close + 3,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_well_formed() {
        assert_eq!(
            parse_placeholder("${NAME} tail"),
            Some(Placeholder { name: "NAME", len: 7 })
        );
    }

    #[test]
    fn test_empty_name() {
        assert_eq!(parse_placeholder("${}"), Some(Placeholder { name: "", len: 3 }));
    }

    #[test]
    fn test_not_a_trigger() {
        assert_eq!(parse_placeholder("$NAME"), None);
        assert_eq!(parse_placeholder("$"), None);
        assert_eq!(parse_placeholder("$(NAME)"), None);
    }

    #[test]
    fn test_unterminated() {
        assert_eq!(parse_placeholder("${NAME"), None);
        assert_eq!(parse_placeholder("${"), None);
    }

    #[test]
    fn test_first_brace_terminates() {
        assert_eq!(
            parse_placeholder("${A${B}}"),
            Some(Placeholder { name: "A${B", len: 7 })
        );
        assert_eq!(
            parse_placeholder("${NAME:-default}"),
            Some(Placeholder { name: "NAME:-default", len: 16 })
        );
    }
}
