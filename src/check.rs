use colored::Colorize;
use std::collections::HashMap;
use strexpand::{Expander, Separators};

/// Input and expected output with `RESULT=Success`, written for `/` as the
/// canonical separator.
const CASES: &[(&str, &str)] = &[
    ("The result is ${RESULT}", "The result is Success"),
    ("The result is ${RESULT", "The result is ${RESULT"),
    ("${RESULT}", "Success"),
    ("$RESULT", "$RESULT"),
    ("${RESULT} starts this sentence", "Success starts this sentence"),
    ("", ""),
    ("${UNKNOWN_VAR_XYZ}", ""),
    ("$RESULT\\allan", "$RESULT/allan"),
];

fn quoted(s: &str) -> String {
    format!("\"{}\"", s)
}

/// Run the built-in cases and print one line per case. Returns the number of
/// failures.
pub fn run(separators: Separators) -> usize {
    let vars = HashMap::from([("RESULT".to_string(), "Success".to_string())]);
    let expander = Expander::new(vars).with_separators(separators);

    let mut failures = 0;
    for (input, expected) in CASES {
        let expected = separators.normalize(expected);
        let translated = expander.expand(input);

        if translated == expected {
            println!("FOUND:    {:<40}{}", quoted(&translated), "OK".green());
        } else {
            failures += 1;
            println!("FAIL:     {:<40}{}", quoted(&translated), "FAIL".red().bold());
            println!("EXPECTED: {:<40}", quoted(&expected));
        }
    }

    failures
}
