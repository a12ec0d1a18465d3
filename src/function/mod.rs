//! Plain functions, predicates and consumers.
//!
//! Extension traits for ordinary closures of arity 1 to 3. Each trait is a
//! subtrait of the matching `Fn` signature with a blanket implementation, so
//! closures, function items and the adapters built by `rfN::of` and
//! `rpN::of` all pick up the combinators:
//!
//! - [`F1`], [`F2`], [`F3`]: `then`, `compose`, `partial`, `flip`, supplier
//!   and consumer views, `boxed`
//! - [`P1`], [`P2`], [`P3`]: `and`, `or`, `xor`, `negate`
//! - [`C1`], [`C2`], [`C3`]: `and_then`
//!
//! Composition is strictly sequential and panics pass through to the caller.
//!
//! # Examples
//!
//! ```rust
//! use tailfn::function::{F1, F2, P1};
//!
//! let scale = |factor: u32, value: u32| factor * value;
//! let triple = scale.partial(3);
//! assert_eq!(triple(14), 42);
//!
//! let describe = triple.then(|value| format!("<{value}>"));
//! assert_eq!(describe(2), "<6>");
//!
//! let small = |value: u32| value < 10;
//! let even = |value: u32| value % 2 == 0;
//! let small_odd = small.and(even.negate());
//! assert!(small_odd(7));
//! assert!(!small_odd(8));
//! ```

mod consumer;
mod predicate;
mod transform;

pub use consumer::{C1, C2, C3};
pub use predicate::{P1, P2, P3};
pub use transform::{F1, F2, F3};
