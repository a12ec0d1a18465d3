//! Self-recursive predicates of arity 1 to 3.

use crate::control::BoolTailCall;

/// Generates the recursive predicate trait `RP<n>` and its adapter module
/// `rp<n>` for one arity.
macro_rules! recursive_predicate {
    ($arity:literal; $($argument:ident: $parameter:ident),+) => {
        paste::paste! {
            #[doc = concat!("A recursive predicate of ", stringify!($arity), " argument(s).")]
            ///
            /// Mirrors the recursive function family but answers with a
            /// [`BoolTailCall`]: base cases return [`BoolTailCall::TRUE`] or
            /// [`BoolTailCall::FALSE`], recursive cases return
            /// `BoolTailCall::call(move || this.test(...))`.
            #[doc = concat!("Adapt one to a plain predicate with [`rp", stringify!($arity), "::of`].")]
            pub trait [<RP $arity>]<$($parameter),+> {
                /// Tests the arguments with an explicit self-reference.
                ///
                /// `this` must be this very predicate; passing any other
                /// predicate is unspecified and not checked.
                fn test_with<'a>(
                    &'a self,
                    $($argument: $parameter,)+
                    this: &'a dyn [<RP $arity>]<$($parameter),+>,
                ) -> BoolTailCall<'a>;

                /// Returns this predicate as its own self-reference.
                fn as_dyn(&self) -> &dyn [<RP $arity>]<$($parameter),+>;

                /// Tests the arguments with itself as the self-reference.
                #[inline]
                fn test<'a>(&'a self, $($argument: $parameter),+) -> BoolTailCall<'a>
                where
                    $($parameter: 'a,)+
                {
                    self.test_with($($argument,)+ self.as_dyn())
                }
            }

            impl<$($parameter,)+ P> [<RP $arity>]<$($parameter),+> for P
            where
                P: for<'a> Fn($($parameter,)+ &'a dyn [<RP $arity>]<$($parameter),+>) -> BoolTailCall<'a>,
            {
                #[inline]
                fn test_with<'a>(
                    &'a self,
                    $($argument: $parameter,)+
                    this: &'a dyn [<RP $arity>]<$($parameter),+>,
                ) -> BoolTailCall<'a> {
                    (self)($($argument,)+ this)
                }

                #[inline]
                fn as_dyn(&self) -> &dyn [<RP $arity>]<$($parameter),+> {
                    self
                }
            }

            #[doc = concat!("Constructors and the plain-predicate adapter for [`RP", stringify!($arity), "`].")]
            pub mod [<rp $arity>] {
                use super::{[<RP $arity>], BoolTailCall};

                /// Returns `predicate` unchanged, pinning its signature as a
                /// recursive predicate.
                #[inline]
                pub fn new<$($parameter,)+ P>(predicate: P) -> P
                where
                    P: for<'a> Fn($($parameter,)+ &'a dyn [<RP $arity>]<$($parameter),+>) -> BoolTailCall<'a>,
                {
                    predicate
                }

                /// Adapts a recursive predicate into a plain predicate.
                ///
                /// Every call of the returned predicate runs a fresh chain.
                pub fn of<$($parameter,)+ P>(predicate: P) -> impl Fn($($parameter),+) -> bool
                where
                    P: for<'a> Fn($($parameter,)+ &'a dyn [<RP $arity>]<$($parameter),+>) -> BoolTailCall<'a>,
                {
                    move |$($argument),+| [<RP $arity>]::test(&predicate, $($argument),+).evaluate()
                }
            }
        }
    };
}

recursive_predicate!(1; t1: T1);
recursive_predicate!(2; t1: T1, t2: T2);
recursive_predicate!(3; t1: T1, t2: T2, t3: T3);
