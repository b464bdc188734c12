//! Golden tests: run every case in `tests/golden/cases.json` through a fresh
//! engine and compare the output exactly.
//!
//! Run: cargo test -p betacode-engine --test golden

use std::path::PathBuf;

use betacode_engine::{BetaError, Engine, Options, transliterate};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct Case {
    name: String,
    input: String,
    expected: String,
    #[serde(default)]
    options: Options,
}

fn load_cases() -> Vec<Case> {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/golden/cases.json");
    let contents = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("failed to read golden file {}: {}", path.display(), e));
    serde_json::from_str(&contents)
        .unwrap_or_else(|e| panic!("failed to parse golden file {}: {}", path.display(), e))
}

fn codepoints(s: &str) -> Vec<String> {
    s.chars().map(|c| format!("U+{:04X}", c as u32)).collect()
}

#[test]
fn golden_cases() {
    let cases = load_cases();
    assert!(!cases.is_empty());

    let mut failures = Vec::new();
    for case in &cases {
        match transliterate(&case.input, case.options) {
            Ok(actual) if actual == case.expected => {}
            Ok(actual) => failures.push(format!(
                "{}: input {:?}\n  expected {:?}\n  actual   {:?}",
                case.name,
                case.input,
                codepoints(&case.expected),
                codepoints(&actual),
            )),
            Err(e) => failures.push(format!("{}: unexpected error: {e}", case.name)),
        }
    }
    assert!(
        failures.is_empty(),
        "{} of {} golden cases failed:\n{}",
        failures.len(),
        cases.len(),
        failures.join("\n")
    );
}

#[test]
fn golden_cases_byte_at_a_time_after_reset() {
    // Replaying through one engine with resets must match fresh engines.
    for case in load_cases() {
        let mut engine = Engine::new(case.options);
        for _ in 0..2 {
            let mut out = String::new();
            for &byte in case.input.as_bytes() {
                engine.feed(byte, &mut out).unwrap();
            }
            engine.finish(&mut out);
            assert_eq!(out, case.expected, "{}", case.name);
            engine.reset();
        }
    }
}

#[test]
fn every_domain_byte_is_accepted_in_every_alphabet() {
    let all: Vec<u8> = (0x20..=0x7f).collect();
    for prefix in [&b""[..], &b"$"[..]] {
        let mut input = prefix.to_vec();
        input.extend_from_slice(&all);
        let out = transliterate(&input, Options::default()).unwrap();
        assert!(!out.contains('\0'));
    }
}

#[test]
fn control_bytes_are_rejected() {
    for byte in (0x00..0x20).chain(0x80..=0xff) {
        let err = transliterate([b'$', b'a', byte], Options::default()).unwrap_err();
        assert_eq!(err, BetaError::OutOfDomain { byte, offset: 2 });
    }
}

#[test]
fn independent_engines_in_parallel() {
    let cases = load_cases();
    std::thread::scope(|scope| {
        for case in &cases {
            scope.spawn(move || {
                let actual = transliterate(&case.input, case.options).unwrap();
                assert_eq!(actual, case.expected, "{}", case.name);
            });
        }
    });
}
