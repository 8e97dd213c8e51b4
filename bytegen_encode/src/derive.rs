//! `derive_encode!` wraps a struct or enum definition, re-emits it unchanged, and implements
//! [`crate::Generic`] and [`crate::Encode`] for it.
//!
//! ```text
//! bytegen_encode::derive_encode! {
//!     #[derive(Debug)]
//!     pub struct Record {
//!         pub id: u8,
//!         pub flag: bool,
//!     }
//! }
//! ```
//!
//! Supported:
//! - Structs with named fields, positional fields (up to 12), or none.
//! - Enums whose variants have named fields, positional fields (up to 12), or none.
//!   Fieldless variants may carry explicit discriminants; these do not affect the encoding.
//! - Enums without variants. Their representation is [`crate::repr::Void`].
//! - Plain type parameters, e.g. `struct Pair<A, B>`. Each gets an [`crate::Encode`] bound.
//!
//! Not supported: lifetimes, bounds or defaults on type parameters, `where` clauses.
//!
//! Fields and variants are visited in declaration order.
//! Products and sums nest to the right, so that `{ a, b, c }` is
//! `Product<a, Product<b, c>>`, and variants `A | B | C` are `Sum<A, Sum<B, C>>`.

#[macro_export]
macro_rules! derive_encode {
    /* Struct, named fields. */
    (
        $(#[$attr:meta])*
        $vis:vis struct $name:ident $(< $($gen:ident),+ $(,)? >)? {
            $( $(#[$fattr:meta])* $fvis:vis $field:ident : $fty:ty ),* $(,)?
        }
    ) => {
        $(#[$attr])*
        $vis struct $name $(< $($gen),+ >)? {
            $( $(#[$fattr])* $fvis $field : $fty ),*
        }

        impl $(< $($gen: $crate::Encode),+ >)? $crate::Generic for $name $(< $($gen),+ >)? {
            type Repr<'a> = $crate::repr::Named<
                $crate::__product_ty!($( $crate::repr::Named<$crate::repr::Field<'a, $fty>> ),*)
            >
            where
                Self: 'a;

            fn repr(&self) -> Self::Repr<'_> {
                $crate::__con_val!($name; $( $field => &self.$field ),*)
            }
        }

        $crate::__impl_encode!($name $(< $($gen),+ >)?);
    };

    /* Struct, positional fields. */
    (
        $(#[$attr:meta])*
        $vis:vis struct $name:ident $(< $($gen:ident),+ $(,)? >)? (
            $( $(#[$fattr:meta])* $fvis:vis $fty:ty ),* $(,)?
        );
    ) => {
        $(#[$attr])*
        $vis struct $name $(< $($gen),+ >)? (
            $( $(#[$fattr])* $fvis $fty ),*
        );

        impl $(< $($gen: $crate::Encode),+ >)? $crate::Generic for $name $(< $($gen),+ >)? {
            type Repr<'a> = $crate::repr::Named<
                $crate::__product_ty!($( $crate::repr::Named<$crate::repr::Field<'a, $fty>> ),*)
            >
            where
                Self: 'a;

            fn repr(&self) -> Self::Repr<'_> {
                $crate::__positional_struct!(
                    self $name [] [$($fty),*]
                    [__f0 __f1 __f2 __f3 __f4 __f5 __f6 __f7 __f8 __f9 __f10 __f11]
                )
            }
        }

        $crate::__impl_encode!($name $(< $($gen),+ >)?);
    };

    /* Struct, no fields. */
    (
        $(#[$attr:meta])*
        $vis:vis struct $name:ident;
    ) => {
        $(#[$attr])*
        $vis struct $name;

        impl $crate::Generic for $name {
            type Repr<'a> = $crate::repr::Named<$crate::repr::Unit>;

            fn repr(&self) -> Self::Repr<'_> {
                $crate::repr::Named::constructor(stringify!($name), $crate::repr::Unit)
            }
        }

        $crate::__impl_encode!($name);
    };

    /* Enum, no variants. */
    (
        $(#[$attr:meta])*
        $vis:vis enum $name:ident {}
    ) => {
        $(#[$attr])*
        $vis enum $name {}

        impl $crate::Generic for $name {
            type Repr<'a> = $crate::repr::Void;

            fn repr(&self) -> Self::Repr<'_> {
                match *self {}
            }
        }

        $crate::__impl_encode!($name);
    };

    /* Enum. */
    (
        $(#[$attr:meta])*
        $vis:vis enum $name:ident $(< $($gen:ident),+ $(,)? >)? {
            $($body:tt)+
        }
    ) => {
        $(#[$attr])*
        $vis enum $name $(< $($gen),+ >)? {
            $($body)+
        }

        impl $(< $($gen: $crate::Encode),+ >)? $crate::Generic for $name $(< $($gen),+ >)? {
            type Repr<'a> = $crate::__enum_ty!(@ty 'a [] $($body)+)
            where
                Self: 'a;

            fn repr(&self) -> Self::Repr<'_> {
                $crate::__enum_arms!(@arms self [] [] $($body)+)
            }
        }

        $crate::__impl_encode!($name $(< $($gen),+ >)?);
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __impl_encode {
    ($name:ident $(< $($gen:ident),+ >)?) => {
        impl $(< $($gen: $crate::Encode),+ >)? $crate::Encode for $name $(< $($gen),+ >)? {
            fn encode<S: $crate::Sink>(&self, s: &mut S) -> $crate::anyhow::Result<()> {
                $crate::encode_generic(self, s)
            }
        }
    };
}

/// Right-nested product type of the given member types.
#[doc(hidden)]
#[macro_export]
macro_rules! __product_ty {
    () => {
        $crate::repr::Unit
    };
    ($t:ty) => {
        $t
    };
    ($t:ty, $($rest:ty),+) => {
        $crate::repr::Product<$t, $crate::__product_ty!($($rest),+)>
    };
}

/// Right-nested product value of the given member values.
#[doc(hidden)]
#[macro_export]
macro_rules! __product_val {
    () => {
        $crate::repr::Unit
    };
    ($e:expr) => {
        $e
    };
    ($e:expr, $($rest:expr),+) => {
        $crate::repr::Product($e, $crate::__product_val!($($rest),+))
    };
}

/// Right-nested sum type of the given alternative types.
#[doc(hidden)]
#[macro_export]
macro_rules! __sum_ty {
    () => {
        $crate::repr::Void
    };
    ($t:ty) => {
        $t
    };
    ($t:ty, $($rest:ty),+) => {
        $crate::repr::Sum<$t, $crate::__sum_ty!($($rest),+)>
    };
}

/// A constructor's representation value, from `label => &field` pairs.
/// Positional fields use the empty label.
#[doc(hidden)]
#[macro_export]
macro_rules! __con_val {
    ($con:ident; $( $label:tt => $bind:expr ),*) => {
        $crate::repr::Named::constructor(
            stringify!($con),
            $crate::__product_val!($(
                $crate::repr::Named::selector(
                    $crate::__label!($label),
                    $crate::repr::Field($bind),
                )
            ),*),
        )
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __label {
    (_) => {
        ""
    };
    ($field:ident) => {
        stringify!($field)
    };
}

/// Applies `Sum::Right` once per `R` marker, innermost last.
#[doc(hidden)]
#[macro_export]
macro_rules! __wrap {
    ([] $e:expr) => {
        $e
    };
    ([R $($rest:tt)*] $e:expr) => {
        $crate::repr::Sum::Right($crate::__wrap!([$($rest)*] $e))
    };
}

/// Binds a tuple struct's fields, pairing each field type with one of the given idents.
#[doc(hidden)]
#[macro_export]
macro_rules! __positional_struct {
    ($this:ident $name:ident [$($b:ident)*] [] [$($unused:ident)*]) => {{
        let Self($($b),*) = $this;
        $crate::__con_val!($name; $( _ => $b ),*)
    }};
    ($this:ident $name:ident [$($b:ident)*] [$t:ty $(, $ts:ty)*] [$id:ident $($ids:ident)*]) => {
        $crate::__positional_struct!($this $name [$($b)* $id] [$($ts),*] [$($ids)*])
    };
}

/// The representation type of an enum body.
///
/// Munches variants one by one, collecting each constructor's type, then folds them into a sum.
#[doc(hidden)]
#[macro_export]
macro_rules! __enum_ty {
    (@ty $lt:lifetime [$($done:ty),*]) => {
        $crate::__sum_ty!($($done),*)
    };

    /* Named fields. */
    (@ty $lt:lifetime [$($done:ty),*]
        $(#[$vattr:meta])* $v:ident { $( $(#[$fattr:meta])* $f:ident : $t:ty ),* $(,)? }
        $(, $($rest:tt)*)?
    ) => {
        $crate::__enum_ty!(@ty $lt [
            $($done,)*
            $crate::repr::Named<
                $crate::__product_ty!($( $crate::repr::Named<$crate::repr::Field<$lt, $t>> ),*)
            >
        ] $($($rest)*)?)
    };

    /* Positional fields. */
    (@ty $lt:lifetime [$($done:ty),*]
        $(#[$vattr:meta])* $v:ident ( $( $(#[$fattr:meta])* $t:ty ),* $(,)? )
        $(, $($rest:tt)*)?
    ) => {
        $crate::__enum_ty!(@ty $lt [
            $($done,)*
            $crate::repr::Named<
                $crate::__product_ty!($( $crate::repr::Named<$crate::repr::Field<$lt, $t>> ),*)
            >
        ] $($($rest)*)?)
    };

    /* No fields. */
    (@ty $lt:lifetime [$($done:ty),*]
        $(#[$vattr:meta])* $v:ident $(= $disc:expr)?
        $(, $($rest:tt)*)?
    ) => {
        $crate::__enum_ty!(@ty $lt [
            $($done,)*
            $crate::repr::Named<$crate::repr::Unit>
        ] $($($rest)*)?)
    };
}

/// The representation value of an enum, as a `match` over its variants.
///
/// State: `$this [arms so far] [one R per variant so far] remaining body`.
/// Variant `k` of `n` is wrapped in `k` `Sum::Right`s, then in a `Sum::Left` unless it is last.
#[doc(hidden)]
#[macro_export]
macro_rules! __enum_arms {
    (@arms $this:ident [$($arms:tt)*] [$($wrap:tt)*]) => {
        match $this {
            $($arms)*
        }
    };

    /* Named fields. */
    (@arms $this:ident [$($arms:tt)*] [$($wrap:tt)*]
        $(#[$vattr:meta])* $v:ident { $( $(#[$fattr:meta])* $f:ident : $t:ty ),* $(,)? }
        , $($rest:tt)+
    ) => {
        $crate::__enum_arms!(@arms $this [
            $($arms)*
            Self::$v { $($f),* } => $crate::__wrap!([$($wrap)*] $crate::repr::Sum::Left(
                $crate::__con_val!($v; $( $f => $f ),*)
            )),
        ] [$($wrap)* R] $($rest)+)
    };
    (@arms $this:ident [$($arms:tt)*] [$($wrap:tt)*]
        $(#[$vattr:meta])* $v:ident { $( $(#[$fattr:meta])* $f:ident : $t:ty ),* $(,)? }
        $(,)?
    ) => {
        $crate::__enum_arms!(@arms $this [
            $($arms)*
            Self::$v { $($f),* } => $crate::__wrap!([$($wrap)*]
                $crate::__con_val!($v; $( $f => $f ),*)
            ),
        ] [])
    };

    /* Positional fields: bind them first. */
    (@arms $this:ident [$($arms:tt)*] [$($wrap:tt)*]
        $(#[$vattr:meta])* $v:ident ( $( $(#[$fattr:meta])* $t:ty ),* $(,)? )
        , $($rest:tt)+
    ) => {
        $crate::__enum_arms!(@tuple $this [$($arms)*] [$($wrap)*] $v [Left] [] [$($t),*]
            [__f0 __f1 __f2 __f3 __f4 __f5 __f6 __f7 __f8 __f9 __f10 __f11]
            $($rest)+)
    };
    (@arms $this:ident [$($arms:tt)*] [$($wrap:tt)*]
        $(#[$vattr:meta])* $v:ident ( $( $(#[$fattr:meta])* $t:ty ),* $(,)? )
        $(,)?
    ) => {
        $crate::__enum_arms!(@tuple $this [$($arms)*] [$($wrap)*] $v [Last] [] [$($t),*]
            [__f0 __f1 __f2 __f3 __f4 __f5 __f6 __f7 __f8 __f9 __f10 __f11])
    };

    /* No fields. */
    (@arms $this:ident [$($arms:tt)*] [$($wrap:tt)*]
        $(#[$vattr:meta])* $v:ident $(= $disc:expr)?
        , $($rest:tt)+
    ) => {
        $crate::__enum_arms!(@arms $this [
            $($arms)*
            Self::$v => $crate::__wrap!([$($wrap)*] $crate::repr::Sum::Left(
                $crate::__con_val!($v;)
            )),
        ] [$($wrap)* R] $($rest)+)
    };
    (@arms $this:ident [$($arms:tt)*] [$($wrap:tt)*]
        $(#[$vattr:meta])* $v:ident $(= $disc:expr)?
        $(,)?
    ) => {
        $crate::__enum_arms!(@arms $this [
            $($arms)*
            Self::$v => $crate::__wrap!([$($wrap)*] $crate::__con_val!($v;)),
        ] [])
    };

    /* Positional binding, done. */
    (@tuple $this:ident [$($arms:tt)*] [$($wrap:tt)*] $v:ident [Left] [$($b:ident)*] []
        [$($unused:ident)*] $($rest:tt)*
    ) => {
        $crate::__enum_arms!(@arms $this [
            $($arms)*
            Self::$v($($b),*) => $crate::__wrap!([$($wrap)*] $crate::repr::Sum::Left(
                $crate::__con_val!($v; $( _ => $b ),*)
            )),
        ] [$($wrap)* R] $($rest)*)
    };
    (@tuple $this:ident [$($arms:tt)*] [$($wrap:tt)*] $v:ident [Last] [$($b:ident)*] []
        [$($unused:ident)*]
    ) => {
        $crate::__enum_arms!(@arms $this [
            $($arms)*
            Self::$v($($b),*) => $crate::__wrap!([$($wrap)*]
                $crate::__con_val!($v; $( _ => $b ),*)
            ),
        ] [])
    };
    /* Positional binding, one more. */
    (@tuple $this:ident [$($arms:tt)*] [$($wrap:tt)*] $v:ident [$mode:ident] [$($b:ident)*]
        [$t:ty $(, $ts:ty)*] [$id:ident $($ids:ident)*] $($rest:tt)*
    ) => {
        $crate::__enum_arms!(@tuple $this [$($arms)*] [$($wrap)*] $v [$mode] [$($b)* $id]
            [$($ts),*] [$($ids)*] $($rest)*)
    };
}
