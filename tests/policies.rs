//! Policy pipeline behavior: chaining, default/extra merging, vetoes,
//! classification, and the built-in catalog.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use cleave::catalog::{DOUBLE_QUOTES, DOUBLE_QUOTES_DOUBLE_ESCAPED};
use cleave::policy::builtins::{
    ignore_empties, ignore_empty_first, ignore_empty_last, no_contiguous_quotes, no_empties,
    no_empties_msg, no_multi_quotes, no_multis, not_empty_first, not_empty_inners, not_empty_last,
    strip_quotes, trim, trim_spaces, unescape_quotes,
};
use cleave::{PartContext, PolicyRef, SplitError, SplitErrorKind, Splitter, Verdict};
use similar_asserts::assert_eq;

fn plain(separator: char) -> Splitter {
    Splitter::new(separator, &[]).unwrap()
}

fn quoted(separator: char) -> Splitter {
    Splitter::new(separator, &[DOUBLE_QUOTES]).unwrap()
}

#[test]
fn test_later_policy_sees_earlier_output() {
    // The reject decision must be based on the trimmed value, proving the
    // chain threads each policy's output into the next.
    let splitter = plain('/');
    let err = splitter
        .split_with(" / / ", &[trim_spaces(), no_empties()])
        .unwrap_err();
    assert_eq!(err.kind(), SplitErrorKind::PolicyFailed);
    assert_eq!(err.to_string(), "split items cannot be empty");
}

#[test]
fn test_trim_spaces_alone_keeps_empty_parts() {
    let splitter = plain('/');
    let parts = splitter.split_with(" / / ", &[trim_spaces()]).unwrap();
    assert_eq!(parts, vec!["", "", ""]);
}

#[test]
fn test_trim_with_ignored_outer_empties() {
    let splitter = plain('/');
    let chain = [trim_spaces(), ignore_empty_first(), ignore_empty_last()];

    let parts = splitter.split_with(" / / ", &chain).unwrap();
    assert_eq!(parts, vec![""]);

    let parts = splitter.split_with(" / /", &chain).unwrap();
    assert_eq!(parts, vec![""]);

    let parts = splitter.split_with(" / ", &chain).unwrap();
    assert!(parts.is_empty());

    let parts = splitter.split_with(" ", &chain).unwrap();
    assert!(parts.is_empty());

    let parts = splitter.split_with("", &chain).unwrap();
    assert!(parts.is_empty());
}

#[test]
fn test_trim_custom_cutset() {
    let splitter = plain('/');
    let parts = splitter
        .split_with("\t a /\nb\t/ c ", &[trim(" \t\n")])
        .unwrap();
    assert_eq!(parts, vec!["a", "b", "c"]);
}

#[test]
fn test_no_empties() {
    let splitter = plain('/');
    assert_eq!(
        splitter.split_with("a/b/c", &[no_empties()]).unwrap(),
        vec!["a", "b", "c"]
    );
    let err = splitter.split_with("a//c", &[no_empties()]).unwrap_err();
    assert_eq!(err.to_string(), "split items cannot be empty");
    assert_eq!(err.position(), 2);
}

#[test]
fn test_no_empties_custom_message() {
    let splitter = plain('/');
    let err = splitter
        .split_with("a//c", &[no_empties_msg("whoops")])
        .unwrap_err();
    assert_eq!(err.to_string(), "whoops");
}

#[test]
fn test_ignore_empties() {
    let splitter = plain('/');
    let chain = [ignore_empties()];
    assert_eq!(
        splitter.split_with("/a/b/c", &chain).unwrap(),
        vec!["a", "b", "c"]
    );
    assert_eq!(splitter.split_with("//b/c", &chain).unwrap(), vec!["b", "c"]);
    assert_eq!(splitter.split_with("///c", &chain).unwrap(), vec!["c"]);
    assert!(splitter.split_with("///", &chain).unwrap().is_empty());
}

#[test]
fn test_first_and_last_classification() {
    let splitter = plain('/');

    let err = splitter.split_with("/a", &[not_empty_first()]).unwrap_err();
    assert_eq!(err.to_string(), "first split item cannot be empty");
    assert!(splitter.split_with("a/", &[not_empty_first()]).is_ok());

    let err = splitter.split_with("a/", &[not_empty_last()]).unwrap_err();
    assert_eq!(err.to_string(), "last split item cannot be empty");
    assert!(splitter.split_with("/a", &[not_empty_last()]).is_ok());

    // Outer empties are fine for the inners guard.
    assert!(splitter.split_with("/a/", &[not_empty_inners()]).is_ok());
    let err = splitter.split_with("a//b", &[not_empty_inners()]).unwrap_err();
    assert_eq!(err.to_string(), "inner items cannot be empty");
}

#[test]
fn test_is_last_applies_only_to_final_flush() {
    let splitter = plain('/');
    let parts = splitter.split_with("a//", &[ignore_empty_last()]).unwrap();
    assert_eq!(parts, vec!["a", ""]);
}

#[test]
fn test_vetoed_parts_count_toward_first_classification() {
    let splitter = plain('/');
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    let recorder: PolicyRef = Arc::new(
        move |text: String, part: &PartContext<'_>| -> Result<Verdict, SplitError> {
            sink.lock()
                .unwrap()
                .push((part.retained(), part.vetoed(), part.is_first()));
            Ok(Verdict::Keep(text))
        },
    );

    let parts = splitter
        .split_with("//a", &[recorder, ignore_empties()])
        .unwrap();
    assert_eq!(parts, vec!["a"]);
    assert_eq!(
        *seen.lock().unwrap(),
        vec![(0, 0, true), (0, 1, false), (0, 2, false)]
    );
}

#[test]
fn test_duplicate_policy_handles_run_once() {
    let applications = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&applications);
    let counting: PolicyRef = Arc::new(
        move |text: String, _part: &PartContext<'_>| -> Result<Verdict, SplitError> {
            counter.fetch_add(1, Ordering::SeqCst);
            Ok(Verdict::Keep(text))
        },
    );

    let mut splitter = plain('/');
    splitter.add_default_policies([Arc::clone(&counting), Arc::clone(&counting)]);

    // Two parts, and the same handle passed again as an extra: one
    // application per part.
    splitter.split_with("a/b", &[counting]).unwrap();
    assert_eq!(applications.load(Ordering::SeqCst), 2);
}

#[test]
fn test_default_policies_apply_to_every_call() {
    let mut splitter = plain('/');
    splitter.add_default_policies([ignore_empties()]);
    assert_eq!(splitter.split("/a/b/c/").unwrap(), vec!["a", "b", "c"]);
    assert_eq!(
        splitter.split_with("/a/", &[ignore_empty_first()]).unwrap(),
        vec!["a"]
    );
}

#[test]
fn test_policy_error_aborts_the_call() {
    let splitter = plain(',');
    let failing: PolicyRef = Arc::new(
        |_text: String, part: &PartContext<'_>| -> Result<Verdict, SplitError> {
            Err(SplitError::wrap(
                std::io::Error::other("external failure"),
                part.start(),
            ))
        },
    );
    let err = splitter.split_with("a,b", &[failing]).unwrap_err();
    assert_eq!(err.kind(), SplitErrorKind::Wrapped);
    assert_eq!(err.to_string(), "external failure");
    assert!(err.wrapped().is_some());
}

#[test]
fn test_no_contiguous_quotes() {
    let splitter = quoted(',');
    assert!(splitter
        .split_with("\"a\"x\"b\",c", &[no_contiguous_quotes()])
        .is_ok());
    let err = splitter
        .split_with("\"a\"\"b\",c", &[no_contiguous_quotes()])
        .unwrap_err();
    assert_eq!(err.to_string(), "split item cannot have contiguous quotes");
    // The error points at the second quote segment.
    assert_eq!(err.position(), 3);
    assert_eq!(err.character(), Some('"'));
}

#[test]
fn test_no_multi_quotes_allows_separated_singles() {
    let splitter = quoted(',');
    assert!(splitter
        .split_with("\"a\",\"b\"", &[no_multi_quotes()])
        .is_ok());
    let err = splitter
        .split_with("\"a\"x\"b\"", &[no_multi_quotes()])
        .unwrap_err();
    assert_eq!(err.to_string(), "split item cannot have multiple quotes");
    assert_eq!(err.position(), 4);
}

#[test]
fn test_no_multis_rejects_any_second_segment() {
    let splitter = quoted(',');
    assert!(splitter.split_with("\"a\",b", &[no_multis()]).is_ok());
    let err = splitter.split_with("\"a\"b", &[no_multis()]).unwrap_err();
    assert_eq!(err.to_string(), "split item cannot have multiple parts");
    assert_eq!(err.position(), 3);
}

#[test]
fn test_strip_quotes() {
    let splitter = quoted(',');
    let parts = splitter
        .split_with("\"aaa\",bb,x\"y\"z", &[strip_quotes()])
        .unwrap();
    assert_eq!(parts, vec!["aaa", "bb", "xyz"]);
}

#[test]
fn test_unescape_quotes_collapses_doubled_end_chars() {
    let splitter = Splitter::new(',', &[DOUBLE_QUOTES_DOUBLE_ESCAPED]).unwrap();
    let parts = splitter
        .split_with("\"aaa\",\"cc\"\"cc\"", &[unescape_quotes()])
        .unwrap();
    assert_eq!(parts, vec!["aaa", "cc\"cc"]);
}

#[test]
fn test_failure_returns_no_partial_result() {
    let splitter = plain('/');
    let result = splitter.split_with("a/b//c", &[no_empties()]);
    assert!(result.is_err());
}
