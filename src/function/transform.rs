//! Plain functions of arity 1 to 3.

/// A function from `T1` to `R`.
///
/// Implemented for every `Fn(T1) -> R`, including the adapters returned by
/// `rf1::of`.
///
/// # Examples
///
/// ```rust
/// use tailfn::function::F1;
///
/// let parse = |text: &'static str| text.len();
/// let doubled_length = parse.then(|length| length * 2);
/// assert_eq!(doubled_length("four"), 8);
/// ```
pub trait F1<T1, R>: Fn(T1) -> R {
    /// Returns a function that applies `self`, then `after` to its result.
    fn then<V, G>(self, after: G) -> impl Fn(T1) -> V
    where
        Self: Sized,
        G: Fn(R) -> V,
    {
        move |t1| after(self(t1))
    }

    /// Returns a function that applies `before`, then `self` to its result.
    fn compose<V1, G>(self, before: G) -> impl Fn(V1) -> R
    where
        Self: Sized,
        G: Fn(V1) -> T1,
    {
        move |v1| self(before(v1))
    }

    /// Returns a supplier producing `self(t1)` on every call.
    fn as_supplier(self, t1: T1) -> impl Fn() -> R
    where
        Self: Sized,
        T1: Clone,
    {
        move || self(t1.clone())
    }

    /// Returns a consumer that feeds the result of `self` to `after`.
    fn as_consumer<C>(self, after: C) -> impl Fn(T1)
    where
        Self: Sized,
        C: Fn(R),
    {
        move |t1| after(self(t1))
    }

    /// Erases the function type.
    fn boxed<'a>(self) -> Box<dyn Fn(T1) -> R + 'a>
    where
        Self: Sized + 'a,
    {
        Box::new(self)
    }
}

impl<T1, R, F> F1<T1, R> for F where F: Fn(T1) -> R {}

/// A function from `T1` and `T2` to `R`.
///
/// # Examples
///
/// ```rust
/// use tailfn::function::F2;
///
/// let subtract = |left: i32, right: i32| left - right;
/// let from_ten = subtract.partial(10);
/// assert_eq!(from_ten(3), 7);
/// assert_eq!(subtract.flip()(3, 10), 7);
/// ```
pub trait F2<T1, T2, R>: Fn(T1, T2) -> R {
    /// Returns a function that applies `self`, then `after` to its result.
    fn then<V, G>(self, after: G) -> impl Fn(T1, T2) -> V
    where
        Self: Sized,
        G: Fn(R) -> V,
    {
        move |t1, t2| after(self(t1, t2))
    }

    /// Fixes the first argument.
    fn partial(self, t1: T1) -> impl Fn(T2) -> R
    where
        Self: Sized,
        T1: Clone,
    {
        move |t2| self(t1.clone(), t2)
    }

    /// Swaps the two arguments.
    fn flip(self) -> impl Fn(T2, T1) -> R
    where
        Self: Sized,
    {
        move |t2, t1| self(t1, t2)
    }

    /// Returns a supplier producing `self(t1, t2)` on every call.
    fn as_supplier(self, t1: T1, t2: T2) -> impl Fn() -> R
    where
        Self: Sized,
        T1: Clone,
        T2: Clone,
    {
        move || self(t1.clone(), t2.clone())
    }

    /// Returns a consumer that feeds the result of `self` to `after`.
    fn as_consumer<C>(self, after: C) -> impl Fn(T1, T2)
    where
        Self: Sized,
        C: Fn(R),
    {
        move |t1, t2| after(self(t1, t2))
    }

    /// Erases the function type.
    fn boxed<'a>(self) -> Box<dyn Fn(T1, T2) -> R + 'a>
    where
        Self: Sized + 'a,
    {
        Box::new(self)
    }
}

impl<T1, T2, R, F> F2<T1, T2, R> for F where F: Fn(T1, T2) -> R {}

/// A function from `T1`, `T2` and `T3` to `R`.
pub trait F3<T1, T2, T3, R>: Fn(T1, T2, T3) -> R {
    /// Returns a function that applies `self`, then `after` to its result.
    fn then<V, G>(self, after: G) -> impl Fn(T1, T2, T3) -> V
    where
        Self: Sized,
        G: Fn(R) -> V,
    {
        move |t1, t2, t3| after(self(t1, t2, t3))
    }

    /// Fixes the first argument.
    fn partial(self, t1: T1) -> impl Fn(T2, T3) -> R
    where
        Self: Sized,
        T1: Clone,
    {
        move |t2, t3| self(t1.clone(), t2, t3)
    }

    /// Returns a supplier producing `self(t1, t2, t3)` on every call.
    fn as_supplier(self, t1: T1, t2: T2, t3: T3) -> impl Fn() -> R
    where
        Self: Sized,
        T1: Clone,
        T2: Clone,
        T3: Clone,
    {
        move || self(t1.clone(), t2.clone(), t3.clone())
    }

    /// Returns a consumer that feeds the result of `self` to `after`.
    fn as_consumer<C>(self, after: C) -> impl Fn(T1, T2, T3)
    where
        Self: Sized,
        C: Fn(R),
    {
        move |t1, t2, t3| after(self(t1, t2, t3))
    }

    /// Erases the function type.
    fn boxed<'a>(self) -> Box<dyn Fn(T1, T2, T3) -> R + 'a>
    where
        Self: Sized + 'a,
    {
        Box::new(self)
    }
}

impl<T1, T2, T3, R, F> F3<T1, T2, T3, R> for F where F: Fn(T1, T2, T3) -> R {}
