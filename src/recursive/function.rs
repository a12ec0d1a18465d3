//! Self-recursive functions of arity 1 to 3.

use crate::control::TailCall;

/// Generates the recursive function trait `RF<n>` and its adapter module
/// `rf<n>` for one arity.
macro_rules! recursive_function {
    ($arity:literal; $($argument:ident: $parameter:ident),+) => {
        paste::paste! {
            #[doc = concat!("A recursive function of ", stringify!($arity), " argument(s) returning `R`.")]
            ///
            /// The defining method receives the arguments together with a
            /// reference to the function itself and returns a [`TailCall`]
            /// instead of a value. A base case returns
            /// [`TailCall::complete`]; a recursive case returns
            /// `TailCall::call(move || this.apply(...))`, so every
            /// self-call becomes one step of an iterative chain.
            ///
            /// Every closure with the matching shape implements this trait.
            #[doc = concat!("Build one with [`rf", stringify!($arity), "::new`] or adapt it to a plain")]
            #[doc = concat!("function with [`rf", stringify!($arity), "::of`].")]
            pub trait [<RF $arity>]<$($parameter,)+ R> {
                /// Applies the function with an explicit self-reference.
                ///
                /// `this` must be this very function; passing any other
                /// function is unspecified and not checked.
                fn apply_with<'a>(
                    &'a self,
                    $($argument: $parameter,)+
                    this: &'a dyn [<RF $arity>]<$($parameter,)+ R>,
                ) -> TailCall<'a, R>;

                /// Returns this function as its own self-reference.
                fn as_dyn(&self) -> &dyn [<RF $arity>]<$($parameter,)+ R>;

                /// Applies the function with itself as the self-reference.
                ///
                /// This is the entry point of a top-level evaluation and the
                /// call recursive cases defer.
                #[inline]
                fn apply<'a>(&'a self, $($argument: $parameter),+) -> TailCall<'a, R>
                where
                    $($parameter: 'a,)+
                    R: 'a,
                {
                    self.apply_with($($argument,)+ self.as_dyn())
                }
            }

            impl<$($parameter,)+ R, F> [<RF $arity>]<$($parameter,)+ R> for F
            where
                F: for<'a> Fn($($parameter,)+ &'a dyn [<RF $arity>]<$($parameter,)+ R>) -> TailCall<'a, R>,
            {
                #[inline]
                fn apply_with<'a>(
                    &'a self,
                    $($argument: $parameter,)+
                    this: &'a dyn [<RF $arity>]<$($parameter,)+ R>,
                ) -> TailCall<'a, R> {
                    (self)($($argument,)+ this)
                }

                #[inline]
                fn as_dyn(&self) -> &dyn [<RF $arity>]<$($parameter,)+ R> {
                    self
                }
            }

            #[doc = concat!("Constructors and the plain-function adapter for [`RF", stringify!($arity), "`].")]
            pub mod [<rf $arity>] {
                use super::{[<RF $arity>], TailCall};

                /// Returns `function` unchanged, pinning its signature as a
                /// recursive function.
                ///
                /// A closure stored in a `let` binding cannot infer the
                /// higher-ranked lifetime of its self-parameter on its own;
                /// routing it through this function supplies that signature.
                #[inline]
                pub fn new<$($parameter,)+ R, F>(function: F) -> F
                where
                    F: for<'a> Fn($($parameter,)+ &'a dyn [<RF $arity>]<$($parameter,)+ R>) -> TailCall<'a, R>,
                {
                    function
                }

                /// Adapts a recursive function into a plain function.
                ///
                /// Evaluation is deferred until the returned function is
                /// called; every call runs a fresh chain from the top and
                /// nothing is cached between calls.
                pub fn of<$($parameter,)+ R, F>(function: F) -> impl Fn($($parameter),+) -> R
                where
                    F: for<'a> Fn($($parameter,)+ &'a dyn [<RF $arity>]<$($parameter,)+ R>) -> TailCall<'a, R>,
                {
                    move |$($argument),+| [<RF $arity>]::apply(&function, $($argument),+).evaluate()
                }
            }
        }
    };
}

recursive_function!(1; t1: T1);
recursive_function!(2; t1: T1, t2: T2);
recursive_function!(3; t1: T1, t2: T2, t3: T3);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn rf1_counts_down() {
        let count_down = rf1::of(|n: u64, this| {
            if n == 0 {
                TailCall::complete("finished")
            } else {
                TailCall::call(move || this.apply(n - 1))
            }
        });
        assert_eq!(count_down(100_000), "finished");
    }

    #[rstest]
    fn rf2_apply_matches_apply_with_self() {
        let power = rf2::new(|base: u64, exponent: u32, this| {
            if exponent == 0 {
                TailCall::complete(1_u64)
            } else {
                TailCall::call(move || this.apply(base, exponent - 1).map(move |rest| rest * base))
            }
        });
        assert_eq!(power.apply(3, 4).evaluate(), 81);
        assert_eq!(power.apply_with(3, 4, &power).evaluate(), 81);
    }

    fn longest_word<'s>(words: &'s [&'s str]) -> &'s str {
        let longest = rf3::new(|words: &'s [&'s str], index: usize, best: &'s str, this| {
            match words.get(index) {
                None => TailCall::complete(best),
                Some(word) => {
                    let best = if word.len() > best.len() { *word } else { best };
                    TailCall::call(move || this.apply(words, index + 1, best))
                }
            }
        });
        longest.apply(words, 0, "").evaluate()
    }

    #[rstest]
    fn apply_accepts_borrowed_arguments() {
        let text = String::from("a tail call chain of borrowed words");
        let words: Vec<&str> = text.split(' ').collect();
        assert_eq!(longest_word(&words), "borrowed");
        assert_eq!(longest_word(&[]), "");
    }

    #[rstest]
    fn rf3_threads_all_arguments() {
        let fibonacci = rf3::of(|n: u64, current: u64, next: u64, this| {
            if n == 0 {
                TailCall::complete(current)
            } else {
                TailCall::call(move || this.apply(n - 1, next, current + next))
            }
        });
        assert_eq!(fibonacci(10, 0, 1), 55);
        assert_eq!(fibonacci(90, 0, 1), 2_880_067_194_370_816_120);
    }
}
