//! # tailfn
//!
//! Arity-parameterized functions, predicates and consumers, and
//! self-referencing recursive closures that run in constant stack space.
//!
//! ## Overview
//!
//! Rust does not guarantee tail call optimization, and a closure has no name
//! to call itself by. This library addresses both:
//!
//! - **Deferred Results**: [`TailCall`](control::TailCall) and
//!   [`BoolTailCall`](control::BoolTailCall), resolved by an iterative
//!   trampoline loop
//! - **Recursive Closures**: `RF1`..`RF3` and `RP1`..`RP3`, closures that
//!   receive themselves as an explicit `this` parameter
//! - **Plain Function Interfaces**: `F1`..`F3`, `P1`..`P3`, `C1`..`C3`
//!   combinators over ordinary closures
//!
//! ## Feature Flags
//!
//! - `control`: Deferred results and the evaluator
//! - `recursive`: The recursive function and predicate family
//! - `function`: Plain function, predicate and consumer interfaces
//! - `tracing`: Emit a `trace!` event with the step count of every resolved chain
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! # #[cfg(all(feature = "recursive", feature = "function"))]
//! # {
//! use tailfn::prelude::*;
//!
//! let sum_below = rf2::of(|n: u64, total: u64, this| {
//!     if n == 0 {
//!         TailCall::complete(total)
//!     } else {
//!         TailCall::call(move || this.apply(n - 1, total + n - 1))
//!     }
//! });
//!
//! assert_eq!(sum_below(1_000_000, 0), 499_999_500_000);
//! assert_eq!(sum_below.then(|total| total % 7)(10, 0), 3);
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use tailfn::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "control")]
    pub use crate::control::*;

    #[cfg(feature = "recursive")]
    pub use crate::recursive::*;

    #[cfg(feature = "function")]
    pub use crate::function::*;
}

#[cfg(feature = "control")]
pub mod control;

#[cfg(feature = "recursive")]
pub mod recursive;

#[cfg(feature = "function")]
pub mod function;
