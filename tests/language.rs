use std::fs;

use rcalc::{Environment, Matrix, Value, error::ErrorKind, interpret, interpret_with};
use walkdir::WalkDir;

#[test]
fn docs_examples_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("docs").into_iter()
                            .filter_map(Result::ok)
                            .filter(|e| e.path().extension().is_some_and(|ext| ext == "md"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for (i, session) in extract_sessions(&content).into_iter().enumerate() {
            count += 1;
            let mut env = Environment::new();
            for line in session.lines() {
                let (source, expected) = match line.split_once("# =>") {
                    Some((source, expected)) => (source, Some(expected.trim())),
                    None => (line, None),
                };
                match interpret(source, &env) {
                    Ok(outcome) => {
                        if let Some(expected) = expected {
                            let shown = outcome.value.map(|v| v.to_string()).unwrap_or_default();
                            assert_eq!(shown.trim_end(),
                                       expected,
                                       "Session {} in {:?} printed the wrong value for '{}'",
                                       i + 1,
                                       path,
                                       source.trim());
                        }
                        env = outcome.environment;
                    },
                    Err(e) => panic!("Session {} in {:?} failed at '{}':\nError: {:?}",
                                     i + 1,
                                     path,
                                     line,
                                     e),
                }
            }
        }
    }

    assert!(count > 0, "No sessions found in docs");
}

fn extract_sessions(content: &str) -> Vec<String> {
    let mut blocks = Vec::new();
    let mut inside = false;
    let mut buf = String::new();

    for line in content.lines() {
        let trimmed = line.trim_start();
        if trimmed.starts_with("```rcalc") {
            inside = true;
            buf.clear();
            continue;
        }
        if inside && trimmed.starts_with("```") {
            inside = false;
            blocks.push(buf.clone());
            continue;
        }
        if inside {
            buf.push_str(line);
            buf.push('\n');
        }
    }

    blocks
}

/// Runs each line in order against one environment and returns the final
/// environment together with the value of the last line.
fn run(env: &Environment, lines: &[&str]) -> (Environment, Option<Value>) {
    let mut env = env.clone();
    let mut last = None;
    for line in lines {
        match interpret(line, &env) {
            Ok(outcome) => {
                last = outcome.value;
                env = outcome.environment;
            },
            Err(e) => panic!("'{line}' failed: {e}"),
        }
    }
    (env, last)
}

fn env_with(bindings: &[(&str, Value)]) -> Environment {
    bindings.iter().cloned().collect()
}

fn assert_value(env: &Environment, src: &str, expected: impl Into<Value>) {
    match interpret(src, env) {
        Ok(outcome) => assert_eq!(outcome.value, Some(expected.into()), "'{src}'"),
        Err(e) => panic!("'{src}' failed: {e}"),
    }
}

fn assert_failure(env: &Environment, src: &str, kind: ErrorKind) {
    match interpret(src, env) {
        Ok(outcome) => panic!("'{src}' succeeded with {:?} but was expected to fail",
                              outcome.value),
        Err(e) => assert_eq!(e.kind(), kind, "'{src}': {e}"),
    }
}

fn vector(values: &[f64]) -> Value {
    Value::from(values.to_vec())
}

#[test]
fn assignment_in_both_directions() {
    let (env, last) = run(&Environment::new(), &["a <- 1", "5 -> b"]);
    assert_eq!(last, None);
    assert_eq!(env.get("a"), Some(&Value::Number(1.0)));
    assert_eq!(env.get("b"), Some(&Value::Number(5.0)));

    let (env, _) = run(&env_with(&[("b", 2.0.into())]), &["a <- b", "a -> c"]);
    assert_eq!(env.get("a"), Some(&Value::Number(2.0)));
    assert_eq!(env.get("c"), Some(&Value::Number(2.0)));
}

#[test]
fn unicode_arrows_assign() {
    let (env, _) = run(&Environment::new(), &["a ← 2 × 3", "a ÷ 2 → b"]);
    assert_eq!(env.get("a"), Some(&Value::Number(6.0)));
    assert_eq!(env.get("b"), Some(&Value::Number(3.0)));
}

#[test]
fn assignment_of_evaluation() {
    let (env, _) = run(&Environment::new(), &["a <- 1 + 3", "5 * 2 -> b"]);
    assert_eq!(env.get("a"), Some(&Value::Number(4.0)));
    assert_eq!(env.get("b"), Some(&Value::Number(10.0)));
}

#[test]
fn assignment_of_ranges() {
    let (env, _) = run(&Environment::new(), &["a <- 1:3", "5:9 -> b"]);
    assert_eq!(env.get("a"), Some(&vector(&[1.0, 2.0, 3.0])));
    assert_eq!(env.get("b"), Some(&vector(&[5.0, 6.0, 7.0, 8.0, 9.0])));
}

#[test]
fn round_trip_of_every_shape() {
    let (env, _) = run(&Environment::new(),
                       &["n <- 2.5", "s <- \"text\"", "v <- 1:4", "m <- identity(2)"]);
    assert_value(&env, "n", 2.5);
    assert_value(&env, "s", "text");
    assert_value(&env, "v", vector(&[1.0, 2.0, 3.0, 4.0]));
    assert_value(&env, "m", Matrix::identity(2));
}

#[test]
fn scalar_arithmetic() {
    let env = Environment::new();
    assert_value(&env, "2 + 1", 3.0);
    assert_value(&env, "2 - 3", -1.0);
    assert_value(&env, "2 * 8", 16.0);
    assert_value(&env, "16 / 8", 2.0);
    assert_value(&env, "2 ^ 8", 256.0);
    assert_value(&env, "2 + 8 - 5", 5.0);
}

#[test]
fn chains_have_no_precedence() {
    let env = Environment::new();
    assert_value(&env, "1 + 2 * 3", 9.0);
    assert_value(&env, "2 ^ 3 - 1 / 7", 1.0);
}

#[test]
fn scalar_comparison_and_logic() {
    let env = Environment::new();
    assert_value(&env, "1 < 2", true);
    assert_value(&env, "2 ≤ 2", true);
    assert_value(&env, "3 ⩾ 4", false);
    assert_value(&env, "1 ≠ 1", false);
    assert_value(&env, "0 && 1", false);
    assert_value(&env, "0 || 1", true);
    assert_failure(&env, "1 & 1", ErrorKind::UnrecognisedOperator);
    assert_failure(&env, "1 | 0", ErrorKind::UnrecognisedOperator);
}

#[test]
fn ranges() {
    let env = env_with(&[("a", 5.0.into()), ("b", 7.0.into())]);
    assert_value(&env, "1:5", vector(&[1.0, 2.0, 3.0, 4.0, 5.0]));
    assert_value(&env, "1:2:5", vector(&[1.0, 3.0, 5.0]));
    assert_value(&env, "6:2", vector(&[6.0, 5.0, 4.0, 3.0, 2.0]));
    assert_value(&env, "9:3:1", vector(&[9.0, 6.0, 3.0]));
    assert_value(&env, "a:10", vector(&[5.0, 6.0, 7.0, 8.0, 9.0, 10.0]));
    assert_value(&env, "2:a", vector(&[2.0, 3.0, 4.0, 5.0]));
    assert_value(&env, "b:a", vector(&[7.0, 6.0, 5.0]));
    assert_failure(&env, "1:0:5", ErrorKind::InvalidExpression);
    assert_failure(&env, "1:\"x\"", ErrorKind::TypeMismatch);
}

#[test]
fn ranges_bind_tighter_than_operators() {
    let env = Environment::new();
    assert_value(&env, "1:3 + 1", vector(&[2.0, 3.0, 4.0]));
    assert_value(&env, "10 - 1:3", vector(&[9.0, 8.0, 7.0]));
}

#[test]
fn strings() {
    let env = Environment::new();
    assert_value(&env, "\"a\"", "a");
    assert_value(&env, "\"a\" + \"b\"", "ab");
    assert_value(&env, "\"a\" * 2", "aa");
    assert_value(&env, "2 * \"a\"", "aa");
    assert_value(&env, "\"a\" * 3", "aaa");
    assert_value(&env, "\"aa\" / 2", "a");
    assert_value(&env, "\"ccccc\" / 5", "c");
    assert_value(&env, "\"a\" + 2", "aaa");
    assert_value(&env, "\"aaaa\" - 2", "aa");
    assert_failure(&env, "\"a\" == \"a\"", ErrorKind::InvalidExpression);
    assert_failure(&env, "\"a\" ^ 2", ErrorKind::UnrecognisedOperator);

    let (env, _) = run(&env, &["\"a\" -> b"]);
    assert_value(&env, "b", "a");
}

#[test]
fn vectors() {
    let env = env_with(&[("a", vector(&[1.0, 2.0, 3.0])), ("b", vector(&[4.0, 5.0, 6.0]))]);
    assert_value(&env, "a + b", vector(&[5.0, 7.0, 9.0]));
    assert_value(&env, "a - b", vector(&[-3.0, -3.0, -3.0]));
    assert_value(&env, "a * b", vector(&[4.0, 10.0, 18.0]));
    assert_value(&env, "a < b", Value::from(vec![true, true, true]));
    assert_value(&env, "a && b", true);

    let env = env_with(&[("a", vector(&[10.0, 20.0, 18.0])), ("b", vector(&[4.0, 5.0, 6.0]))]);
    assert_value(&env, "a / b", vector(&[2.5, 4.0, 3.0]));
    assert_failure(&env, "a + 1:2", ErrorKind::ShapeMismatch);
}

#[test]
fn vector_scalar_broadcast() {
    let env = env_with(&[("a", vector(&[1.0, 2.0, 3.0]))]);
    assert_value(&env, "a + 2", vector(&[3.0, 4.0, 5.0]));
    assert_value(&env, "2 + a", vector(&[3.0, 4.0, 5.0]));
    assert_value(&env, "a - 4", vector(&[-3.0, -2.0, -1.0]));
    assert_value(&env, "4 - a", vector(&[3.0, 2.0, 1.0]));
    assert_value(&env, "a * 3", vector(&[3.0, 6.0, 9.0]));
    assert_value(&env, "3 * a", vector(&[3.0, 6.0, 9.0]));
    assert_value(&env, "2 > a", Value::from(vec![true, false, false]));

    let env = env_with(&[("a", vector(&[2.0, 4.0, 6.0]))]);
    assert_value(&env, "a / 2", vector(&[1.0, 2.0, 3.0]));
    assert_value(&env, "12 / a", vector(&[6.0, 3.0, 2.0]));
}

#[test]
fn boolean_vectors_feed_arithmetic() {
    let env = env_with(&[("a", vector(&[1.0, 2.0, 3.0]))]);
    assert_value(&env, "a > 1 + 1", vector(&[1.0, 2.0, 2.0]));
}

#[test]
fn vector_index() {
    let env = env_with(&[("a", vector(&[1.0, 2.0, 3.0])), ("b", 3.0.into())]);
    assert_value(&env, "a[2]", 2.0);
    assert_value(&env, "a[b]", 3.0);
    assert_value(&env, "a[3]", 3.0);
    assert_value(&env, "a[2:3]", vector(&[2.0, 3.0]));
    assert_value(&env, "a[2:1]", vector(&[2.0, 1.0]));
    assert_value(&env, "a[2] * 10", 20.0);
    assert_failure(&env, "a[0]", ErrorKind::IndexOutOfRange);
    assert_failure(&env, "a[4]", ErrorKind::IndexOutOfRange);
    assert_failure(&env, "a[0:2]", ErrorKind::IndexOutOfRange);
    assert_failure(&env, "b[1]", ErrorKind::TypeMismatch);
}

#[test]
fn index_error_reports_index_and_length() {
    let env = env_with(&[("a", vector(&[1.0, 2.0, 3.0]))]);
    let err = interpret("a[7]", &env).unwrap_err();
    assert_eq!(err.to_string(), "Index out of range: 7/3");
}

#[test]
fn matrix() {
    let env = env_with(&[("a", 2.0.into())]);
    let Some(Value::Matrix(m)) = interpret("identity(3)", &env).unwrap().value else {
        panic!("expected a matrix");
    };
    assert_eq!(m.as_slice().len(), 9);
    assert_value(&env, "identity(a)", Matrix::identity(2));
    assert_value(&env, "identity(a) * 3", Matrix::identity(2).map(|x| x * 3.0));
    assert_failure(&env, "identity(1.5)", ErrorKind::TypeMismatch);

    let (env, _) = run(&env, &["m <- identity(2) * 2", "v <- 1:2"]);
    assert_value(&env, "m * v", vector(&[2.0, 4.0]));
    assert_failure(&env, "m + v", ErrorKind::UnrecognisedOperator);
    assert_failure(&env, "m * 1:3", ErrorKind::ShapeMismatch);
    assert_value(&env, "m < 1", Value::from(vec![false, true, true, false]));
}

#[test]
fn matrix_comparisons_flatten_column_major() {
    let (env, _) = run(&Environment::new(), &["m <- identity(2) * 3"]);
    let diagonal = Value::from(vec![true, false, false, true]);
    assert_value(&env, "m > 0", diagonal.clone());
    assert_value(&env, "0 < m", diagonal.clone());
    assert_value(&env, "3 == m", diagonal);
    assert_value(&env, "m && 1", false);
    assert_value(&env, "m || 0", true);
    assert_value(&env, "m > 0 + 1", vector(&[2.0, 1.0, 1.0, 2.0]));
}

#[test]
fn vector_scalar_logic_reduces() {
    let env = env_with(&[("a", vector(&[1.0, 0.0, 3.0])), ("z", vector(&[0.0, 0.0]))]);
    assert_value(&env, "a && 1", false);
    assert_value(&env, "1 && a", false);
    assert_value(&env, "a || 0", true);
    assert_value(&env, "0 || z", false);
    assert_value(&env, "z || 1", true);
    assert_value(&env, "a & 1", Value::from(vec![true, false, true]));
    assert_value(&env, "0 | z", Value::from(vec![false, false]));
}

#[test]
fn removal() {
    let env = env_with(&[("a", 1.0.into())]);
    let (env, last) = run(&env, &["rm(a)"]);
    assert_eq!(last, None);
    assert!(!env.contains("a"));
    assert_failure(&env, "a", ErrorKind::SymbolNotFound);

    let (after, _) = run(&env, &["rm(zzz)"]);
    assert_eq!(after, env);
}

#[test]
fn callback_reports_only_changes() {
    let env = env_with(&[("a", 1.0.into())]);
    let mut calls = Vec::new();

    assert_eq!(interpret_with("a + 1", &env, |next| calls.push(next)).unwrap(),
               Some(Value::Number(2.0)));
    assert_eq!(interpret_with("rm(zzz)", &env, |next| calls.push(next)).unwrap(), None);
    assert!(calls.is_empty());

    assert_eq!(interpret_with("rm(a)", &env, |next| calls.push(next)).unwrap(), None);
    assert_eq!(calls.len(), 1);
    assert!(calls[0].is_empty());

    assert!(interpret_with("b <- zzz", &env, |next| calls.push(next)).is_err());
    assert_eq!(calls.len(), 1);
}

#[test]
fn empty_input() {
    let env = env_with(&[("a", 1.0.into())]);
    for src in ["", "   ", "\t", "\u{a0}"] {
        let outcome = interpret(src, &env).unwrap();
        assert_eq!(outcome.value, None);
        assert_eq!(outcome.environment, env);
    }
}

#[test]
fn unicode_whitespace_between_tokens() {
    let env = Environment::new();
    assert_value(&env, "1\u{a0}+\u{a0}1", 2.0);
    assert_value(&env, "1\u{b}+ 1", 2.0);
    assert_value(&env, "\u{a0}1:3\u{a0}", vector(&[1.0, 2.0, 3.0]));
}

#[test]
fn errors() {
    let env = Environment::new();
    assert_failure(&env, "@", ErrorKind::LexError);
    assert_failure(&env, "a", ErrorKind::SymbolNotFound);
    assert_failure(&env, "rm(1)", ErrorKind::InvalidExpression);
    assert_failure(&env, "+", ErrorKind::InvalidExpression);
    assert_failure(&env, "1 && 2 + 3", ErrorKind::InvalidExpression);
    assert_failure(&env, "foo(1)", ErrorKind::CommandNotRecognised);
    for src in ["a b", "a b c", "a b c d", "a b c d e", "a b c d e f"] {
        assert_failure(&env, src, ErrorKind::CommandNotRecognised);
    }
}

#[test]
fn error_messages_quote_the_input() {
    let env = Environment::new();
    assert_eq!(interpret("1 + @abcdefghijk", &env).unwrap_err().to_string(),
               "Unrecognised input: @abcdefghi");
    assert_eq!(interpret("a b", &env).unwrap_err().to_string(),
               "Command not recognised: 'a b'");
}

#[test]
fn failed_assignment_keeps_environment() {
    let env = env_with(&[("a", 1.0.into())]);
    let mut replaced = false;
    assert!(interpret_with("a <- missing", &env, |_| replaced = true).is_err());
    assert!(!replaced);
    assert_value(&env, "a", 1.0);
}
