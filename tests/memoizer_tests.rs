#![cfg(feature = "memo")]
//! Unit tests for the memoization cache.
//!
//! Tests cover:
//! - At-most-one invocation per distinct key
//! - clear() forcing recomputation
//! - has/get/set cache surface
//! - Unhashable arguments rejected before the function runs
//! - Keyword-argument keys via CallKeyBuilder

use funky::memo::{CallKeyBuilder, Memoizer, ToCacheKey, memoize};
use rstest::rstest;
use std::cell::Cell;

// =============================================================================
// Invocation counting
// =============================================================================

#[rstest]
fn repeated_call_invokes_the_function_once() {
    let invocations = Cell::new(0);
    let mut doubled = Memoizer::new(|&(n,): &(i32,)| {
        invocations.set(invocations.get() + 1);
        n * 2
    });

    assert_eq!(doubled.call((21,)).unwrap(), 42);
    assert_eq!(doubled.call((21,)).unwrap(), 42);
    assert_eq!(doubled.call((21,)).unwrap(), 42);
    assert_eq!(invocations.get(), 1);
}

#[rstest]
fn distinct_arguments_compute_independently() {
    let invocations = Cell::new(0);
    let mut doubled = Memoizer::new(|&(n,): &(i32,)| {
        invocations.set(invocations.get() + 1);
        n * 2
    });

    assert_eq!(doubled.call((1,)).unwrap(), 2);
    assert_eq!(doubled.call((2,)).unwrap(), 4);
    assert_eq!(doubled.call((1,)).unwrap(), 2);
    assert_eq!(invocations.get(), 2);
}

#[rstest]
fn multi_argument_calls_key_on_the_whole_tuple() {
    let invocations = Cell::new(0);
    let mut join = Memoizer::new(|(a, b): &(String, String)| {
        invocations.set(invocations.get() + 1);
        format!("{a}/{b}")
    });

    assert_eq!(join.call(("x".into(), "y".into())).unwrap(), "x/y");
    // swapped arguments are a different key
    assert_eq!(join.call(("y".into(), "x".into())).unwrap(), "y/x");
    assert_eq!(join.call(("x".into(), "y".into())).unwrap(), "x/y");
    assert_eq!(invocations.get(), 2);
}

#[rstest]
fn clear_forces_recomputation() {
    let invocations = Cell::new(0);
    let mut doubled = Memoizer::new(|&(n,): &(i32,)| {
        invocations.set(invocations.get() + 1);
        n * 2
    });

    doubled.call((5,)).unwrap();
    doubled.call((5,)).unwrap();
    assert_eq!(invocations.get(), 1);

    doubled.clear();
    doubled.call((5,)).unwrap();
    assert_eq!(invocations.get(), 2);
}

#[rstest]
fn independent_memoizers_keep_independent_caches() {
    let invocations = Cell::new(0);
    let count = |&(n,): &(i32,)| {
        invocations.set(invocations.get() + 1);
        n
    };

    let mut left = Memoizer::new(count);
    let mut right = Memoizer::new(count);

    left.call((1,)).unwrap();
    right.call((1,)).unwrap();
    assert_eq!(invocations.get(), 2); // no shared state between instances
}

// =============================================================================
// Cache surface: has / get / set
// =============================================================================

#[rstest]
fn has_and_get_agree_on_presence() {
    let mut memo = memoize(|&(n,): &(u32,)| n + 1);
    let key = (3_u32,).to_cache_key().unwrap();

    assert!(!memo.has(key));
    assert_eq!(memo.get(key), None);

    memo.call((3,)).unwrap();
    assert!(memo.has(key));
    assert_eq!(memo.get(key), Some(&4));
}

#[rstest]
fn set_seeds_the_cache_without_invoking() {
    let invocations = Cell::new(0);
    let mut memo = Memoizer::new(|&(n,): &(i32,)| {
        invocations.set(invocations.get() + 1);
        n
    });

    let key = (9,).to_cache_key().unwrap();
    memo.set(key, 100);

    // call() hits the seeded entry; the function never runs
    assert_eq!(memo.call((9,)).unwrap(), 100);
    assert_eq!(invocations.get(), 0);
}

#[rstest]
fn len_tracks_distinct_keys() {
    let mut memo = memoize(|&(n,): &(i32,)| n);
    assert!(memo.is_empty());

    memo.call((1,)).unwrap();
    memo.call((2,)).unwrap();
    memo.call((1,)).unwrap();
    assert_eq!(memo.len(), 2);
}

// =============================================================================
// Unhashable arguments
// =============================================================================

#[rstest]
fn nan_argument_is_rejected_before_invocation() {
    let invocations = Cell::new(0);
    let mut memo = Memoizer::new(|&(x,): &(f64,)| {
        invocations.set(invocations.get() + 1);
        x * 2.0
    });

    let error = memo.call((f64::NAN,)).unwrap_err();
    assert_eq!(error.argument, "f64");
    assert_eq!(invocations.get(), 0); // the wrapped function never ran

    // ordinary floats still work
    assert_eq!(memo.call((1.5,)).unwrap(), 3.0);
    assert_eq!(invocations.get(), 1);
}

#[rstest]
fn equal_floats_share_a_key() {
    let invocations = Cell::new(0);
    let mut memo = Memoizer::new(|&(x,): &(f64,)| {
        invocations.set(invocations.get() + 1);
        x
    });

    memo.call((0.0,)).unwrap();
    memo.call((-0.0,)).unwrap(); // 0.0 == -0.0, so this is a hit
    assert_eq!(invocations.get(), 1);
}

// =============================================================================
// Keyword-argument keys
// =============================================================================

#[rstest]
fn keyword_supply_order_does_not_change_the_key() {
    let forward = CallKeyBuilder::new()
        .positional(&"job")
        .unwrap()
        .keyword("retries", &3)
        .unwrap()
        .keyword("verbose", &true)
        .unwrap()
        .finish();

    let reversed = CallKeyBuilder::new()
        .positional(&"job")
        .unwrap()
        .keyword("verbose", &true)
        .unwrap()
        .keyword("retries", &3)
        .unwrap()
        .finish();

    assert_eq!(forward, reversed);
}

#[rstest]
fn builder_keys_drive_the_manual_cache_surface() {
    let mut memo = memoize(|&(n,): &(i32,)| n);

    let key = CallKeyBuilder::new()
        .positional(&7)
        .unwrap()
        .keyword("scale", &2)
        .unwrap()
        .finish();

    assert!(!memo.has(key));
    memo.set(key, 14);
    assert_eq!(memo.get(key), Some(&14));
}

#[rstest]
fn builder_rejects_unhashable_keyword_values() {
    let result = CallKeyBuilder::new().keyword("x", &f64::NAN);
    assert!(result.is_err());
}
