//! Deferred results and the trampoline evaluator.
//!
//! This module provides the two-state values that recursive code returns
//! instead of recursing on the call stack:
//!
//! - [`TailCall`]: a finished value or a pending step producing the next link
//! - [`BoolTailCall`]: the same, specialized to predicate answers
//!
//! Both are resolved by an iterative loop (`evaluate`) that runs in constant
//! stack space however long the chain is.
//!
//! # Examples
//!
//! ## Stack-Safe Recursion
//!
//! ```rust
//! use tailfn::control::TailCall;
//!
//! fn factorial(n: u64) -> u64 {
//!     factorial_helper(n, 1).evaluate()
//! }
//!
//! fn factorial_helper(n: u64, accumulator: u64) -> TailCall<'static, u64> {
//!     if n <= 1 {
//!         TailCall::complete(accumulator)
//!     } else {
//!         TailCall::call(move || factorial_helper(n - 1, n * accumulator))
//!     }
//! }
//!
//! assert_eq!(factorial(10), 3_628_800);
//! ```
//!
//! ## Predicates
//!
//! ```rust
//! use tailfn::control::BoolTailCall;
//!
//! fn all_positive<'a>(values: &'a [i64]) -> BoolTailCall<'a> {
//!     match values.split_first() {
//!         None => BoolTailCall::TRUE,
//!         Some((head, _)) if *head <= 0 => BoolTailCall::FALSE,
//!         Some((_, tail)) => BoolTailCall::call(move || all_positive(tail)),
//!     }
//! }
//!
//! assert!(all_positive(&[1, 2, 3]).evaluate());
//! assert!(!all_positive(&[1, -2, 3]).evaluate());
//! ```

mod bool_tail_call;
mod tail_call;
mod trace;

pub use bool_tail_call::BoolTailCall;
pub use tail_call::TailCall;
