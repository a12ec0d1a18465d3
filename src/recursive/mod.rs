//! Self-referencing recursive closures evaluated by trampoline.
//!
//! A closure cannot name itself, so the recursive family passes the closure
//! to itself as an explicit last parameter, `this`. The closure returns a
//! deferred result instead of a value: a base case completes, a recursive
//! case returns a pending step that calls `this` again. The adapter produced
//! by `of` resolves the chain iteratively, so recursion depth never touches
//! the call stack.
//!
//! | Arity | Function | Predicate |
//! |---|---|---|
//! | 1 | [`RF1`], [`rf1`] | [`RP1`], [`rp1`] |
//! | 2 | [`RF2`], [`rf2`] | [`RP2`], [`rp2`] |
//! | 3 | [`RF3`], [`rf3`] | [`RP3`], [`rp3`] |
//!
//! Values moved into a pending step must live as long as the chain. Data
//! the recursion only reads is best captured by the closure itself, leaving
//! the arguments to carry indices and accumulators.
//!
//! # Examples
//!
//! ## Factorial
//!
//! ```rust
//! use tailfn::control::TailCall;
//! use tailfn::recursive::rf2;
//!
//! let factorial = rf2::of(|n: u64, accumulator: u64, this| {
//!     if n <= 1 {
//!         TailCall::complete(accumulator)
//!     } else {
//!         TailCall::call(move || this.apply(n - 1, accumulator * n))
//!     }
//! });
//!
//! assert_eq!(factorial(5, 1), 120);
//! assert_eq!(factorial(20, 1), 2_432_902_008_176_640_000);
//! ```
//!
//! ## Membership
//!
//! ```rust
//! use tailfn::control::BoolTailCall;
//! use tailfn::recursive::rp2;
//!
//! let values: Vec<u32> = (0..100_000).collect();
//! let contains = rp2::of(|target: u32, index: usize, this| match values.get(index) {
//!     None => BoolTailCall::FALSE,
//!     Some(value) if *value == target => BoolTailCall::TRUE,
//!     Some(_) => BoolTailCall::call(move || this.test(target, index + 1)),
//! });
//!
//! assert!(contains(99_999, 0));
//! assert!(!contains(100_000, 0));
//! ```
//!
//! ## Driving the chain by hand
//!
//! ```rust
//! use tailfn::control::TailCall;
//! use tailfn::recursive::{rf1, RF1};
//!
//! let halve = rf1::new(|n: u32, this| {
//!     if n <= 1 {
//!         TailCall::complete(n)
//!     } else {
//!         TailCall::call(move || this.apply(n / 2))
//!     }
//! });
//!
//! let mut chain = halve.apply(64);
//! let mut steps = 0;
//! let result = loop {
//!     match chain.step() {
//!         std::ops::ControlFlow::Break(value) => break value,
//!         std::ops::ControlFlow::Continue(next) => {
//!             steps += 1;
//!             chain = next;
//!         }
//!     }
//! };
//! assert_eq!((result, steps), (1, 6));
//! ```

mod function;
mod predicate;

pub use function::{RF1, RF2, RF3, rf1, rf2, rf3};
pub use predicate::{RP1, RP2, RP3, rp1, rp2, rp3};
