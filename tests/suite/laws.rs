//! Algebraic laws the combinators obey.

use attempt_core::{Attempt, Cause, PredicateRejected, failure, run, success};

use crate::common::{Calls, init_tracing};

fn sample_failure() -> (Attempt<i32>, Cause) {
    let cause = Cause::msg("sample");
    (failure(cause.clone()), cause)
}

#[test]
fn success_holds_its_value() {
    for value in [-3, 0, 7] {
        let attempt = success(value);
        assert!(attempt.is_success());
        assert_eq!(attempt.unwrap(), value);
    }
}

#[test]
fn run_matches_factory_constructors() {
    assert_eq!(run(|| 5), success(5));

    let cause = Cause::msg("raised");
    let raised = cause.clone();
    assert_eq!(run(move || -> i32 { failure(raised).unwrap() }), failure(cause));
}

#[test]
fn map_identity() {
    assert_eq!(success(5).map(|x| x), success(5));
    let (attempt, cause) = sample_failure();
    assert_eq!(attempt.map(|x| x), failure(cause));
}

#[test]
fn flat_map_identity() {
    assert_eq!(success(5).flat_map(success), success(5));
}

#[test]
fn map_composition() {
    let f = |x: i32| x + 1;
    let g = |x: i32| x * 2;

    assert_eq!(success(3).map(f).map(g), success(3).map(|x| g(f(x))));

    let (left, cause) = sample_failure();
    let right = failure::<i32>(cause.clone());
    assert_eq!(left.map(f).map(g), right.map(|x| g(f(x))));
}

#[test]
fn failure_short_circuits_every_transform() {
    init_tracing();
    let calls = Calls::default();
    let (attempt, cause) = sample_failure();

    let result = attempt
        .map(|x| {
            calls.hit();
            x
        })
        .filter(|_| {
            calls.hit();
            true
        })
        .flat_map(|x| {
            calls.hit();
            success(x)
        });

    assert_eq!(result, failure(cause));
    assert_eq!(calls.count(), 0);
}

#[test]
fn filter_law() {
    assert_eq!(success(12).filter(|x| *x > 10), success(12));

    let rejected = success(4).filter(|x| *x > 10);
    assert!(rejected.is_failure());
    assert!(
        rejected
            .cause()
            .is_some_and(|cause| cause.is::<PredicateRejected>())
    );
}

#[test]
fn recovery_law() {
    let (attempt, _) = sample_failure();
    assert_eq!(attempt.recover(|_| 9), success(9));
    assert_eq!(success(1).recover(|_| 9), success(1));
}

#[test]
fn or_else_law() {
    assert_eq!(success(1).or_else(|| success(2)), success(1));
    let (attempt, _) = sample_failure();
    assert_eq!(attempt.or_else(|| success(2)), success(2));
}

#[test]
fn optional_round_trip() {
    assert_eq!(success(1).to_maybe(), Some(1));
    assert_eq!(sample_failure().0.to_maybe(), None);
}
