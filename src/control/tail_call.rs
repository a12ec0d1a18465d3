//! Deferred results for stack-safe tail recursion.
//!
//! A [`TailCall`] is either a finished value or a pending step that produces
//! the next link of the chain. Recursive code returns a pending step instead
//! of calling itself, and [`TailCall::evaluate`] unwinds the chain in a loop,
//! so the physical call stack stays flat however deep the logical recursion
//! goes.
//!
//! # Examples
//!
//! ```rust
//! use tailfn::control::TailCall;
//!
//! fn sum_to(n: u64, accumulator: u64) -> TailCall<'static, u64> {
//!     if n == 0 {
//!         TailCall::complete(accumulator)
//!     } else {
//!         TailCall::call(move || sum_to(n - 1, accumulator + n))
//!     }
//! }
//!
//! // Far deeper than native recursion would survive.
//! assert_eq!(sum_to(1_000_000, 0).evaluate(), 500_000_500_000);
//! ```

use std::fmt;
use std::ops::ControlFlow;

use super::trace::StepCounter;

/// A computation that has either finished or knows its next step.
///
/// The lifetime `'a` bounds everything a pending step borrows. Steps built by
/// the recursive function family borrow the recursive function
/// itself, so the chain can never outlive the function driving it.
///
/// # Laws
///
/// - `TailCall::complete(v).evaluate() == v`, and no step runs.
/// - `TailCall::call(|| TailCall::complete(v)).evaluate() == v`, and exactly
///   one step runs.
/// - Steps run in chain order, each exactly once.
///
/// # Examples
///
/// ```rust
/// use tailfn::control::TailCall;
///
/// assert_eq!(TailCall::complete(42).evaluate(), 42);
/// assert_eq!(TailCall::call(|| TailCall::complete(42)).evaluate(), 42);
/// ```
pub enum TailCall<'a, R> {
    /// The chain has finished with a value.
    Done(R),
    /// One more step is needed; invoking the thunk yields the next link.
    Pending(Box<dyn FnOnce() -> TailCall<'a, R> + 'a>),
}

impl<'a, R> TailCall<'a, R> {
    /// Creates a finished link holding `value`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tailfn::control::TailCall;
    ///
    /// let finished = TailCall::complete("done");
    /// assert!(finished.is_complete());
    /// assert_eq!(finished.evaluate(), "done");
    /// ```
    #[inline]
    pub const fn complete(value: R) -> Self {
        Self::Done(value)
    }

    /// Creates a pending link whose next state is produced by `step`.
    ///
    /// `step` is not invoked here; it runs during evaluation only.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::cell::Cell;
    /// use tailfn::control::TailCall;
    ///
    /// let invoked = Cell::new(false);
    /// let pending = TailCall::call(|| {
    ///     invoked.set(true);
    ///     TailCall::complete(1)
    /// });
    /// assert!(!invoked.get());
    /// assert_eq!(pending.evaluate(), 1);
    /// assert!(invoked.get());
    /// ```
    #[inline]
    pub fn call<F>(step: F) -> Self
    where
        F: FnOnce() -> Self + 'a,
    {
        Self::Pending(Box::new(step))
    }

    /// Returns `true` if this link already holds the final value.
    #[inline]
    pub const fn is_complete(&self) -> bool {
        matches!(self, Self::Done(_))
    }

    /// Drives the chain to completion and returns the final value.
    ///
    /// Runs in constant stack space. A panic raised by any step propagates to
    /// the caller unchanged; the steps before it have already run once.
    /// A chain that never reaches [`TailCall::Done`] loops forever.
    pub fn evaluate(self) -> R {
        let mut counter = StepCounter::default();
        let mut current = self;

        loop {
            match current {
                Self::Done(value) => {
                    counter.finish("value");
                    return value;
                }
                Self::Pending(step) => {
                    counter.record();
                    current = step();
                }
            }
        }
    }

    /// Advances the chain by at most one step.
    ///
    /// Returns `Break(value)` without invoking anything if the chain is
    /// finished, otherwise invokes the pending step exactly once and returns
    /// `Continue` with the next link.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::ops::ControlFlow;
    /// use tailfn::control::TailCall;
    ///
    /// let chain = TailCall::call(|| TailCall::complete(7));
    /// let ControlFlow::Continue(next) = chain.step() else {
    ///     panic!("a pending link needs one more step");
    /// };
    /// assert!(matches!(next.step(), ControlFlow::Break(7)));
    /// ```
    pub fn step(self) -> ControlFlow<R, Self> {
        match self {
            Self::Done(value) => ControlFlow::Break(value),
            Self::Pending(step) => ControlFlow::Continue(step()),
        }
    }

    /// Transforms the final value once the chain finishes.
    ///
    /// Nothing runs until evaluation; `function` is applied after the last
    /// step of the original chain.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tailfn::control::TailCall;
    ///
    /// let chain = TailCall::call(|| TailCall::complete(21)).map(|value| value * 2);
    /// assert_eq!(chain.evaluate(), 42);
    /// ```
    pub fn map<B, F>(self, function: F) -> TailCall<'a, B>
    where
        F: FnOnce(R) -> B + 'a,
        R: 'a,
    {
        match self {
            Self::Done(value) => TailCall::call(move || TailCall::Done(function(value))),
            Self::Pending(step) => TailCall::call(move || step().map(function)),
        }
    }
}

impl<'a, T, E> TailCall<'a, Result<T, E>> {
    /// Finishes a fallible chain successfully.
    #[inline]
    pub const fn succeed(value: T) -> Self {
        Self::Done(Ok(value))
    }

    /// Finishes a fallible chain with `error`.
    #[inline]
    pub const fn fail(error: E) -> Self {
        Self::Done(Err(error))
    }

    /// Creates a pending link whose step may fail.
    ///
    /// An `Err` returned by `step` finishes the whole chain with that error;
    /// no later step runs.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tailfn::control::TailCall;
    ///
    /// fn parse_all(inputs: Vec<&'static str>, index: usize, total: i64)
    ///     -> TailCall<'static, Result<i64, std::num::ParseIntError>>
    /// {
    ///     if index == inputs.len() {
    ///         return TailCall::succeed(total);
    ///     }
    ///     TailCall::try_call(move || {
    ///         let value: i64 = inputs[index].parse()?;
    ///         Ok(parse_all(inputs, index + 1, total + value))
    ///     })
    /// }
    ///
    /// assert_eq!(parse_all(vec!["1", "2", "3"], 0, 0).evaluate(), Ok(6));
    /// assert!(parse_all(vec!["1", "x", "3"], 0, 0).evaluate().is_err());
    /// ```
    #[inline]
    pub fn try_call<F>(step: F) -> Self
    where
        F: FnOnce() -> Result<Self, E> + 'a,
    {
        Self::call(move || step().unwrap_or_else(Self::fail))
    }
}

impl<R: fmt::Debug> fmt::Debug for TailCall<'_, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Done(value) => formatter.debug_tuple("Done").field(value).finish(),
            Self::Pending(_) => formatter.debug_tuple("Pending").field(&"<thunk>").finish(),
        }
    }
}

static_assertions::assert_not_impl_any!(TailCall<'static, u64>: Send, Sync);
static_assertions::assert_impl_all!(TailCall<'static, u64>: fmt::Debug);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cell::Cell;

    fn count_down(n: u64) -> TailCall<'static, u64> {
        if n == 0 {
            TailCall::complete(0)
        } else {
            TailCall::call(move || count_down(n - 1))
        }
    }

    #[rstest]
    fn complete_evaluates_to_value() {
        assert_eq!(TailCall::complete(42).evaluate(), 42);
    }

    #[rstest]
    fn call_is_not_eager() {
        let invocations = Cell::new(0);
        let pending = TailCall::call(|| {
            invocations.set(invocations.get() + 1);
            TailCall::complete("value")
        });
        assert_eq!(invocations.get(), 0);
        assert_eq!(pending.evaluate(), "value");
        assert_eq!(invocations.get(), 1);
    }

    #[rstest]
    fn step_on_done_breaks_immediately() {
        assert!(matches!(TailCall::complete(3).step(), ControlFlow::Break(3)));
    }

    #[rstest]
    fn step_on_pending_runs_one_thunk() {
        let chain = TailCall::call(|| TailCall::call(|| TailCall::complete(1)));
        let ControlFlow::Continue(next) = chain.step() else {
            panic!("expected a pending link");
        };
        assert!(!next.is_complete());
        let ControlFlow::Continue(last) = next.step() else {
            panic!("expected a pending link");
        };
        assert!(last.is_complete());
    }

    #[rstest]
    fn deep_chain_evaluates() {
        assert_eq!(count_down(1_000_000).evaluate(), 0);
    }

    #[rstest]
    fn map_applies_after_chain() {
        assert_eq!(count_down(10).map(|value| value + 5).evaluate(), 5);
        assert_eq!(TailCall::complete(2).map(|value| value * 3).evaluate(), 6);
    }

    #[rstest]
    fn try_call_short_circuits() {
        let ran_after = Cell::new(false);
        let chain: TailCall<'_, Result<u8, &str>> = TailCall::try_call(|| {
            Err::<(), _>("boom")?;
            Ok(TailCall::call(|| {
                ran_after.set(true);
                TailCall::succeed(1)
            }))
        });
        assert_eq!(chain.evaluate(), Err("boom"));
        assert!(!ran_after.get());
    }

    #[rstest]
    fn debug_hides_thunk() {
        assert_eq!(format!("{:?}", TailCall::complete(1)), "Done(1)");
        assert_eq!(
            format!("{:?}", TailCall::call(|| TailCall::complete(1))),
            "Pending(\"<thunk>\")"
        );
    }
}
