//! Plain predicates of arity 1 to 3.
//!
//! Combinators evaluate left to right and short-circuit like `&&` and `||`.
//! Arguments are cloned when both operands need them.

/// A predicate over `T1`.
///
/// # Examples
///
/// ```rust
/// use tailfn::function::P1;
///
/// let positive = |value: i32| value > 0;
/// let even = |value: i32| value % 2 == 0;
/// let positive_even = positive.and(even);
/// assert!(positive_even(4));
/// assert!(!positive_even(-4));
/// ```
pub trait P1<T1>: Fn(T1) -> bool {
    /// Both predicates hold.
    fn and<Q>(self, other: Q) -> impl Fn(T1) -> bool
    where
        Self: Sized,
        Q: Fn(T1) -> bool,
        T1: Clone,
    {
        move |t1| self(t1.clone()) && other(t1)
    }

    /// At least one predicate holds.
    fn or<Q>(self, other: Q) -> impl Fn(T1) -> bool
    where
        Self: Sized,
        Q: Fn(T1) -> bool,
        T1: Clone,
    {
        move |t1| self(t1.clone()) || other(t1)
    }

    /// Exactly one predicate holds.
    fn xor<Q>(self, other: Q) -> impl Fn(T1) -> bool
    where
        Self: Sized,
        Q: Fn(T1) -> bool,
        T1: Clone,
    {
        move |t1| self(t1.clone()) ^ other(t1)
    }

    /// The predicate does not hold.
    fn negate(self) -> impl Fn(T1) -> bool
    where
        Self: Sized,
    {
        move |t1| !self(t1)
    }
}

impl<T1, P> P1<T1> for P where P: Fn(T1) -> bool {}

/// A predicate over `T1` and `T2`.
pub trait P2<T1, T2>: Fn(T1, T2) -> bool {
    /// Both predicates hold.
    fn and<Q>(self, other: Q) -> impl Fn(T1, T2) -> bool
    where
        Self: Sized,
        Q: Fn(T1, T2) -> bool,
        T1: Clone,
        T2: Clone,
    {
        move |t1, t2| self(t1.clone(), t2.clone()) && other(t1, t2)
    }

    /// At least one predicate holds.
    fn or<Q>(self, other: Q) -> impl Fn(T1, T2) -> bool
    where
        Self: Sized,
        Q: Fn(T1, T2) -> bool,
        T1: Clone,
        T2: Clone,
    {
        move |t1, t2| self(t1.clone(), t2.clone()) || other(t1, t2)
    }

    /// Exactly one predicate holds.
    fn xor<Q>(self, other: Q) -> impl Fn(T1, T2) -> bool
    where
        Self: Sized,
        Q: Fn(T1, T2) -> bool,
        T1: Clone,
        T2: Clone,
    {
        move |t1, t2| self(t1.clone(), t2.clone()) ^ other(t1, t2)
    }

    /// The predicate does not hold.
    fn negate(self) -> impl Fn(T1, T2) -> bool
    where
        Self: Sized,
    {
        move |t1, t2| !self(t1, t2)
    }
}

impl<T1, T2, P> P2<T1, T2> for P where P: Fn(T1, T2) -> bool {}

/// A predicate over `T1`, `T2` and `T3`.
pub trait P3<T1, T2, T3>: Fn(T1, T2, T3) -> bool {
    /// Both predicates hold.
    fn and<Q>(self, other: Q) -> impl Fn(T1, T2, T3) -> bool
    where
        Self: Sized,
        Q: Fn(T1, T2, T3) -> bool,
        T1: Clone,
        T2: Clone,
        T3: Clone,
    {
        move |t1, t2, t3| self(t1.clone(), t2.clone(), t3.clone()) && other(t1, t2, t3)
    }

    /// At least one predicate holds.
    fn or<Q>(self, other: Q) -> impl Fn(T1, T2, T3) -> bool
    where
        Self: Sized,
        Q: Fn(T1, T2, T3) -> bool,
        T1: Clone,
        T2: Clone,
        T3: Clone,
    {
        move |t1, t2, t3| self(t1.clone(), t2.clone(), t3.clone()) || other(t1, t2, t3)
    }

    /// Exactly one predicate holds.
    fn xor<Q>(self, other: Q) -> impl Fn(T1, T2, T3) -> bool
    where
        Self: Sized,
        Q: Fn(T1, T2, T3) -> bool,
        T1: Clone,
        T2: Clone,
        T3: Clone,
    {
        move |t1, t2, t3| self(t1.clone(), t2.clone(), t3.clone()) ^ other(t1, t2, t3)
    }

    /// The predicate does not hold.
    fn negate(self) -> impl Fn(T1, T2, T3) -> bool
    where
        Self: Sized,
    {
        move |t1, t2, t3| !self(t1, t2, t3)
    }
}

impl<T1, T2, T3, P> P3<T1, T2, T3> for P where P: Fn(T1, T2, T3) -> bool {}
