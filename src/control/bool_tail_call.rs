//! Deferred results specialized to `bool`.
//!
//! [`BoolTailCall`] is the return type of recursive predicates. Literal
//! answers are the constants [`BoolTailCall::TRUE`] and
//! [`BoolTailCall::FALSE`], so base cases read as plain booleans and never
//! allocate.

use std::fmt;
use std::ops::{ControlFlow, Not};

use super::tail_call::TailCall;
use super::trace::StepCounter;

/// A predicate computation that has either answered or knows its next step.
///
/// Semantics match [`TailCall`]: [`BoolTailCall::call`] defers its step,
/// [`BoolTailCall::evaluate`] resolves the chain in constant stack space.
///
/// # Examples
///
/// ```rust
/// use tailfn::control::BoolTailCall;
///
/// fn is_even(n: u64) -> BoolTailCall<'static> {
///     match n {
///         0 => BoolTailCall::TRUE,
///         1 => BoolTailCall::FALSE,
///         _ => BoolTailCall::call(move || is_even(n - 2)),
///     }
/// }
///
/// assert!(is_even(1_000_000).evaluate());
/// assert!(!is_even(999_999).evaluate());
/// ```
pub enum BoolTailCall<'a> {
    /// The predicate has answered.
    Done(bool),
    /// One more step is needed; invoking the thunk yields the next link.
    Pending(Box<dyn FnOnce() -> BoolTailCall<'a> + 'a>),
}

impl<'a> BoolTailCall<'a> {
    /// A finished link answering `true`.
    pub const TRUE: Self = Self::Done(true);

    /// A finished link answering `false`.
    pub const FALSE: Self = Self::Done(false);

    /// Creates a finished link holding `value`.
    #[inline]
    pub const fn complete(value: bool) -> Self {
        Self::Done(value)
    }

    /// Creates a pending link whose next state is produced by `step`.
    ///
    /// `step` is not invoked here; it runs during evaluation only.
    #[inline]
    pub fn call<F>(step: F) -> Self
    where
        F: FnOnce() -> Self + 'a,
    {
        Self::Pending(Box::new(step))
    }

    /// Returns `true` if this link already holds the answer.
    #[inline]
    pub const fn is_complete(&self) -> bool {
        matches!(self, Self::Done(_))
    }

    /// Drives the chain to completion and returns the answer.
    ///
    /// Runs in constant stack space; panics raised by a step propagate
    /// unchanged.
    pub fn evaluate(self) -> bool {
        let mut counter = StepCounter::default();
        let mut current = self;

        loop {
            match current {
                Self::Done(value) => {
                    counter.finish("bool");
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
    /// See [`TailCall::step`].
    pub fn step(self) -> ControlFlow<bool, Self> {
        match self {
            Self::Done(value) => ControlFlow::Break(value),
            Self::Pending(step) => ControlFlow::Continue(step()),
        }
    }

    /// Continues with `other` only if this chain answers `true`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tailfn::control::BoolTailCall;
    ///
    /// let answer = BoolTailCall::FALSE.and(|| panic!("never evaluated"));
    /// assert!(!answer.evaluate());
    ///
    /// let answer = BoolTailCall::call(|| BoolTailCall::TRUE).and(|| BoolTailCall::TRUE);
    /// assert!(answer.evaluate());
    /// ```
    #[must_use]
    pub fn and<F>(self, other: F) -> Self
    where
        F: FnOnce() -> Self + 'a,
    {
        match self {
            Self::Done(true) => Self::call(other),
            Self::Done(false) => Self::FALSE,
            Self::Pending(step) => Self::call(move || step().and(other)),
        }
    }

    /// Continues with `other` only if this chain answers `false`.
    #[must_use]
    pub fn or<F>(self, other: F) -> Self
    where
        F: FnOnce() -> Self + 'a,
    {
        match self {
            Self::Done(true) => Self::TRUE,
            Self::Done(false) => Self::call(other),
            Self::Pending(step) => Self::call(move || step().or(other)),
        }
    }
}

impl Not for BoolTailCall<'_> {
    type Output = Self;

    /// Negates the eventual answer.
    fn not(self) -> Self {
        match self {
            Self::Done(value) => Self::Done(!value),
            Self::Pending(step) => Self::call(move || !step()),
        }
    }
}

impl From<bool> for BoolTailCall<'_> {
    fn from(value: bool) -> Self {
        Self::Done(value)
    }
}

impl<'a> From<BoolTailCall<'a>> for TailCall<'a, bool> {
    fn from(predicate: BoolTailCall<'a>) -> Self {
        match predicate {
            BoolTailCall::Done(value) => TailCall::Done(value),
            BoolTailCall::Pending(step) => TailCall::call(move || step().into()),
        }
    }
}

impl<'a> From<TailCall<'a, bool>> for BoolTailCall<'a> {
    fn from(chain: TailCall<'a, bool>) -> Self {
        match chain {
            TailCall::Done(value) => BoolTailCall::Done(value),
            TailCall::Pending(step) => BoolTailCall::call(move || step().into()),
        }
    }
}

impl fmt::Debug for BoolTailCall<'_> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Done(value) => formatter.debug_tuple("Done").field(value).finish(),
            Self::Pending(_) => formatter.debug_tuple("Pending").field(&"<thunk>").finish(),
        }
    }
}

static_assertions::assert_not_impl_any!(BoolTailCall<'static>: Send, Sync);
