use std::fs;

use opcalc::{ErrorKind, evaluate};
use walkdir::WalkDir;

/// Expected outcome of one fixture line.
enum Expected {
    Value(f64),
    Error(ErrorKind),
}

/// Fixture files live in `tests/cases`. Each non-empty line that does not
/// start with `#` reads `<expression> => <value>` or
/// `<expression> => error: syntax|overflow|underflow`.
#[test]
fn fixture_cases_evaluate_as_recorded() {
    let mut count = 0;

    for entry in WalkDir::new("tests/cases").into_iter()
                                            .filter_map(Result::ok)
                                            .filter(|e| {
                                                e.path()
                                                 .extension()
                                                 .is_some_and(|ext| ext == "txt")
                                            })
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for (number, line) in content.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            count += 1;

            let (source, expected) = parse_case(line).unwrap_or_else(|| {
                                                         panic!("{path:?}:{}: malformed case",
                                                                number + 1)
                                                     });
            check(path, number + 1, source, &expected);
        }
    }

    assert!(count > 0, "No cases found in tests/cases");
}

fn parse_case(line: &str) -> Option<(&str, Expected)> {
    let (source, expected) = line.split_once("=>")?;
    let expected = expected.trim();

    let expected = match expected.strip_prefix("error:") {
        Some(kind) => Expected::Error(match kind.trim() {
                                          "syntax" => ErrorKind::Syntax,
                                          "overflow" => ErrorKind::StackOverflow,
                                          "underflow" => ErrorKind::StackUnderflow,
                                          _ => return None,
                                      }),
        None => Expected::Value(expected.parse().ok()?),
    };

    Some((source.trim(), expected))
}

fn check(path: &std::path::Path, line: usize, source: &str, expected: &Expected) {
    let result = evaluate(source);
    match (expected, result) {
        (Expected::Value(want), Ok(got)) => {
            let same = if want.is_nan() {
                got.is_nan()
            } else if want.is_infinite() {
                got == *want
            } else {
                (got - want).abs() <= 1e-9 * want.abs().max(1.0)
            };
            assert!(same, "{path:?}:{line}: {source} gave {got}, expected {want}");
        },
        (Expected::Error(want), Err(e)) => {
            assert_eq!(e.kind(), *want, "{path:?}:{line}: {source} failed with {e}");
        },
        (Expected::Value(want), Err(e)) => {
            panic!("{path:?}:{line}: {source} failed with {e}, expected {want}")
        },
        (Expected::Error(want), Ok(got)) => {
            panic!("{path:?}:{line}: {source} gave {got}, expected a {want:?} error")
        },
    }
}
