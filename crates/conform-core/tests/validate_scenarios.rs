use std::collections::BTreeSet;
use std::path::PathBuf;
use std::sync::Arc;
use std::thread;

use conform_core::{compile, compile_yaml, Error, Validator};
use serde::Serialize;

#[derive(Serialize)]
struct TestObj {
    name: String,
    email: String,
    age: i64,
}

impl TestObj {
    fn new(name: &str, email: &str, age: i64) -> Self {
        Self {
            name: name.to_string(),
            email: email.to_string(),
            age,
        }
    }
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn read_testdata(file: &str) -> String {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/testdata")
        .join(file);
    std::fs::read_to_string(path).unwrap()
}

fn test_validator() -> Validator {
    init_tracing();
    compile(&read_testdata("validate_test.json")).unwrap()
}

fn message_set(err: &Error) -> BTreeSet<String> {
    err.to_string().split('\n').map(str::to_string).collect()
}

fn expected(lines: &[&str]) -> BTreeSet<String> {
    lines.iter().map(|line| line.to_string()).collect()
}

#[test]
fn test_short_name_and_long_email_both_reported() {
    let validator = test_validator();
    let obj = TestObj::new("lessName", "too long name greater than 10", 12);

    let err = validator.validate(&obj).unwrap_err();
    assert_eq!(
        message_set(&err),
        expected(&[
            "name: String length must be greater than or equal to 10",
            "email: String length must be less than or equal to 10",
        ])
    );
}

#[test]
fn test_conforming_object_passes() {
    let validator = test_validator();
    let obj = TestObj::new("a sufficiently long name", "short", 12);
    assert!(validator.validate(&obj).is_ok());
}

#[test]
fn test_single_violation_has_no_trailing_newline() {
    let validator = test_validator();
    let obj = TestObj::new("a sufficiently long name", "short", -1);

    let err = validator.validate(&obj).unwrap_err();
    assert_eq!(err.to_string(), "age: Must be greater than or equal to 0");
}

#[test]
fn test_validate_is_idempotent() {
    let validator = test_validator();
    let obj = TestObj::new("lessName", "too long name greater than 10", 12);

    let first = validator.validate(&obj).unwrap_err();
    let second = validator.validate(&obj).unwrap_err();
    assert_eq!(message_set(&first), message_set(&second));
}

#[test]
fn test_recompiled_schema_behaves_the_same() {
    let a = test_validator();
    let b = test_validator();

    let objects = [
        TestObj::new("lessName", "too long name greater than 10", 12),
        TestObj::new("a sufficiently long name", "short", 12),
        TestObj::new("0123456789", "0123456789", 0),
        TestObj::new("", "", -5),
    ];
    for obj in &objects {
        assert_eq!(a.is_valid(obj), b.is_valid(obj));
        assert_eq!(a.report(obj).unwrap(), b.report(obj).unwrap());
    }
}

#[test]
fn test_exact_bounds_pass_and_one_off_fails() {
    let validator = test_validator();

    assert!(validator
        .validate(&TestObj::new("0123456789", "0123456789", 1))
        .is_ok());

    let err = validator
        .validate(&TestObj::new("012345678", "0123456789A", 1))
        .unwrap_err();
    assert_eq!(
        message_set(&err),
        expected(&[
            "name: String length must be greater than or equal to 10",
            "email: String length must be less than or equal to 10",
        ])
    );
}

#[test]
fn test_yaml_schema_matches_json_schema() {
    init_tracing();
    let json = compile(&read_testdata("validate_test.json")).unwrap();
    let yaml = compile_yaml(&read_testdata("validate_test.yaml")).unwrap();

    assert_eq!(json.schema().field_paths(), yaml.schema().field_paths());

    let obj = TestObj::new("lessName", "too long name greater than 10", 12);
    assert_eq!(json.report(&obj).unwrap(), yaml.report(&obj).unwrap());
}

#[test]
fn test_shared_validator_across_threads() {
    let validator = Arc::new(test_validator());

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let validator = Arc::clone(&validator);
            thread::spawn(move || {
                let name = if i % 2 == 0 { "lessName" } else { "a sufficiently long name" };
                let obj = TestObj::new(name, "short", 12);
                validator.report(&obj).unwrap().len()
            })
        })
        .collect();

    let counts: Vec<usize> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(counts, vec![1, 0, 1, 0]);
}
