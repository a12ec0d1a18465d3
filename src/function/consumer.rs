//! Plain consumers of arity 1 to 3.

/// A consumer of `T1`.
///
/// # Examples
///
/// ```rust
/// use std::cell::RefCell;
/// use tailfn::function::C1;
///
/// let log = RefCell::new(Vec::new());
/// let first = |value: u8| log.borrow_mut().push(value);
/// let second = |value: u8| log.borrow_mut().push(value * 10);
/// first.and_then(second)(4);
/// assert_eq!(*log.borrow(), vec![4, 40]);
/// ```
pub trait C1<T1>: Fn(T1) {
    /// Returns a consumer that runs `self`, then `after`, on the same input.
    fn and_then<C>(self, after: C) -> impl Fn(T1)
    where
        Self: Sized,
        C: Fn(T1),
        T1: Clone,
    {
        move |t1| {
            self(t1.clone());
            after(t1);
        }
    }
}

impl<T1, C> C1<T1> for C where C: Fn(T1) {}

/// A consumer of `T1` and `T2`.
pub trait C2<T1, T2>: Fn(T1, T2) {
    /// Returns a consumer that runs `self`, then `after`, on the same inputs.
    fn and_then<C>(self, after: C) -> impl Fn(T1, T2)
    where
        Self: Sized,
        C: Fn(T1, T2),
        T1: Clone,
        T2: Clone,
    {
        move |t1, t2| {
            self(t1.clone(), t2.clone());
            after(t1, t2);
        }
    }
}

impl<T1, T2, C> C2<T1, T2> for C where C: Fn(T1, T2) {}

/// A consumer of `T1`, `T2` and `T3`.
pub trait C3<T1, T2, T3>: Fn(T1, T2, T3) {
    /// Returns a consumer that runs `self`, then `after`, on the same inputs.
    fn and_then<C>(self, after: C) -> impl Fn(T1, T2, T3)
    where
        Self: Sized,
        C: Fn(T1, T2, T3),
        T1: Clone,
        T2: Clone,
        T3: Clone,
    {
        move |t1, t2, t3| {
            self(t1.clone(), t2.clone(), t3.clone());
            after(t1, t2, t3);
        }
    }
}

impl<T1, T2, T3, C> C3<T1, T2, T3> for C where C: Fn(T1, T2, T3) {}
