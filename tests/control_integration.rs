#![cfg(all(feature = "recursive", feature = "function"))]
//! Integration tests across modules.
//!
//! These tests verify that recursive adapters behave as ordinary functions
//! and predicates, and compose with the plain function interfaces.

use rstest::rstest;
use std::cell::RefCell;
use tailfn::prelude::*;

// =============================================================================
// Recursive Functions + F Combinators
// =============================================================================

#[rstest]
fn recursive_adapter_then() {
    let factorial = rf2::of(|n: u64, accumulator: u64, this| {
        if n <= 1 {
            TailCall::complete(accumulator)
        } else {
            TailCall::call(move || this.apply(n - 1, accumulator * n))
        }
    });
    let digits = factorial.then(|value| value.to_string().len());
    assert_eq!(digits(20, 1), 19);
}

#[rstest]
fn recursive_adapter_partial_and_flip() {
    let gcd = rf2::of(|left: u64, right: u64, this| {
        if right == 0 {
            TailCall::complete(left)
        } else {
            TailCall::call(move || this.apply(right, left % right))
        }
    });
    let flipped_power = rf2::of(|exponent: u32, base: u64, this| {
        if exponent == 0 {
            TailCall::complete(1_u64)
        } else {
            TailCall::call(move || this.apply(exponent - 1, base)).map(move |value: u64| value * base)
        }
    })
    .flip();

    let gcd_with_84 = gcd.partial(84);
    assert_eq!(gcd_with_84(36), 12);
    assert_eq!(gcd_with_84(25), 1);
    assert_eq!(flipped_power(2, 10), 1_024);
}

#[rstest]
fn recursive_adapter_compose() {
    let collatz_steps = rf1::of(|state: (u64, u32), this| {
        let (n, steps) = state;
        if n <= 1 {
            TailCall::complete(steps)
        } else if n % 2 == 0 {
            TailCall::call(move || this.apply((n / 2, steps + 1)))
        } else {
            TailCall::call(move || this.apply((3 * n + 1, steps + 1)))
        }
    });
    let steps_from = collatz_steps.compose(|n: u64| (n, 0));
    assert_eq!(steps_from(27), 111);
    assert_eq!(steps_from(1), 0);
}

#[rstest]
fn recursive_adapter_as_supplier_reruns_chain() {
    let calls = RefCell::new(0);
    let fibonacci = rf3::of(|n: u32, current: u64, next: u64, this| {
        *calls.borrow_mut() += 1;
        if n == 0 {
            TailCall::complete(current)
        } else {
            TailCall::call(move || this.apply(n - 1, next, current + next))
        }
    });
    let fib_30 = fibonacci.partial(30).partial(0).as_supplier(1);

    assert_eq!(fib_30(), 832_040);
    assert_eq!(fib_30(), 832_040);
    assert_eq!(*calls.borrow(), 62);
}

#[rstest]
fn recursive_adapter_boxed_in_collection() {
    let sum = rf2::of(|n: u64, total: u64, this| {
        if n == 0 {
            TailCall::complete(total)
        } else {
            TailCall::call(move || this.apply(n - 1, total + n))
        }
    });
    let product = rf2::of(|n: u64, total: u64, this| {
        if n == 0 {
            TailCall::complete(total)
        } else {
            TailCall::call(move || this.apply(n - 1, total * n))
        }
    });
    let reducers = [sum.partial(10).boxed(), product.partial(5).boxed()];
    let results: Vec<u64> = reducers.iter().map(|reduce| reduce(1)).collect();
    assert_eq!(results, vec![56, 120]);
}

// =============================================================================
// Recursive Predicates + P Combinators
// =============================================================================

#[rstest]
#[case(0, false)]
#[case(3, true)]
#[case(9, false)]
#[case(15, true)]
#[case(22, false)]
fn recursive_predicates_combine(#[case] input: u32, #[case] expected: bool) {
    let is_odd = rp1::of(|n: u32, this| match n {
        0 => BoolTailCall::FALSE,
        1 => BoolTailCall::TRUE,
        _ => BoolTailCall::call(move || this.test(n - 2)),
    });
    let multiple_of_nine = rp1::of(|n: u32, this| {
        if n < 9 {
            BoolTailCall::complete(n == 0)
        } else {
            BoolTailCall::call(move || this.test(n - 9))
        }
    });
    let odd_but_not_nine_multiple = is_odd.and(multiple_of_nine.negate());
    assert_eq!(odd_but_not_nine_multiple(input), expected);
}

#[rstest]
fn recursive_predicate_xor_and_or() {
    let contains = |needle: u8| {
        rp2::of(move |haystack: &'static [u8], index: usize, this| match haystack.get(index) {
            None => BoolTailCall::FALSE,
            Some(value) if *value == needle => BoolTailCall::TRUE,
            Some(_) => BoolTailCall::call(move || this.test(haystack, index + 1)),
        })
    };
    let exactly_one = contains(b'a').xor(contains(b'z'));
    assert!(exactly_one(b"banana".as_slice(), 0));
    assert!(exactly_one(b"buzz".as_slice(), 0));
    assert!(!exactly_one(b"pizza".as_slice(), 0));
    assert!(!exactly_one(b"none".as_slice(), 0));

    let either = contains(b'a').or(contains(b'z'));
    assert!(either(b"pizza".as_slice(), 0));
    assert!(!either(b"none".as_slice(), 0));
}

// =============================================================================
// Consumers
// =============================================================================

#[rstest]
fn recursive_adapter_feeds_consumers() {
    let log = RefCell::new(Vec::new());
    let digit_sum = rf2::of(|n: u64, total: u64, this| {
        if n == 0 {
            TailCall::complete(total)
        } else {
            TailCall::call(move || this.apply(n / 10, total + n % 10))
        }
    });
    let record = |value: u64| log.borrow_mut().push(value);
    let report = digit_sum.as_consumer(record);

    report(1_234, 0);
    report(99_999, 0);
    assert_eq!(*log.borrow(), vec![10, 45]);
}

#[rstest]
fn consumers_chain_in_order() {
    let log = RefCell::new(Vec::new());
    let first = |name: String, count: usize| log.borrow_mut().push(format!("{name}:{count}"));
    let second = |name: String, count: usize| log.borrow_mut().push(name.repeat(count));
    first.and_then(second)("ab".to_string(), 2);
    assert_eq!(*log.borrow(), vec!["ab:2".to_string(), "abab".to_string()]);
}
