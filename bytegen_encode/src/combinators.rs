use crate::generic::{encode_generic, encode_generic1, Generic, Generic1};
use crate::repr::{Field, Named, Param, Product, Sum, Unit};
use crate::Encode;
use anyhow::{anyhow, Result};
use bytegen_sink::Sink;
use itertools::Either;

/// Writes the element count as a native word, then each element in order.
///
/// The count is a `usize`, so it always fits the native word.
/// The iterator must yield exactly as many elements as it reports; otherwise this fails,
/// leaving whatever was already written in the sink.
pub fn encode_sequence<I, S, F>(s: &mut S, items: I, mut encode_elem: F) -> Result<()>
where
    I: IntoIterator,
    I::IntoIter: ExactSizeIterator,
    S: Sink,
    F: FnMut(I::Item, &mut S) -> Result<()>,
{
    let iter = items.into_iter();
    let count = iter.len();
    s.write_word_host(count)?;

    let mut written = 0;
    for item in iter {
        if written == count {
            return Err(anyhow!("Sequence yielded more than its reported {count} elements"));
        }
        encode_elem(item, s)?;
        written += 1;
    }
    if written != count {
        return Err(anyhow!(
            "Sequence reported {count} elements but yielded {written}"
        ));
    }
    Ok(())
}

/// Same bytes as a sequence of `u8`s, written as one block.
pub fn encode_bytes<S: Sink>(s: &mut S, bytes: &[u8]) -> Result<()> {
    s.write_word_host(bytes.len())?;
    s.write_bytes(bytes)
}

/* Sequences. */

impl<T: Encode> Encode for [T] {
    fn encode<S: Sink>(&self, s: &mut S) -> Result<()> {
        encode_sequence(s, self, |t, s| t.encode(s))
    }
}

impl<T: Encode> Encode for Vec<T> {
    fn encode<S: Sink>(&self, s: &mut S) -> Result<()> {
        self.as_slice().encode(s)
    }
}

impl Encode for str {
    fn encode<S: Sink>(&self, s: &mut S) -> Result<()> {
        encode_bytes(s, self.as_bytes())
    }
}

impl Encode for String {
    fn encode<S: Sink>(&self, s: &mut S) -> Result<()> {
        self.as_str().encode(s)
    }
}

/* Optional values. */

impl<T> Generic1 for Option<T> {
    type Item = T;
    type Repr<'a> = Sum<Named<Unit>, Named<Param<'a, T>>>
    where
        Self: 'a;

    fn repr1(&self) -> Self::Repr<'_> {
        match self {
            None => Sum::Left(Named::constructor("None", Unit)),
            Some(t) => Sum::Right(Named::constructor("Some", Param(t))),
        }
    }
}

impl<T: Encode> Encode for Option<T> {
    fn encode<S: Sink>(&self, s: &mut S) -> Result<()> {
        encode_generic1(self, s, |t, s| t.encode(s))
    }
}

/* Two-case alternatives. The parameter is the right-hand type. */

impl<L: Encode, R> Generic1 for Either<L, R> {
    type Item = R;
    type Repr<'a> = Sum<Named<Field<'a, L>>, Named<Param<'a, R>>>
    where
        Self: 'a;

    fn repr1(&self) -> Self::Repr<'_> {
        match self {
            Either::Left(l) => Sum::Left(Named::constructor("Left", Field(l))),
            Either::Right(r) => Sum::Right(Named::constructor("Right", Param(r))),
        }
    }
}

impl<L: Encode, R: Encode> Encode for Either<L, R> {
    fn encode<S: Sink>(&self, s: &mut S) -> Result<()> {
        encode_generic1(self, s, |r, s| r.encode(s))
    }
}

/* Tuples, as products. */

impl<A: Encode, B: Encode> Generic for (A, B) {
    type Repr<'a> = Product<Field<'a, A>, Field<'a, B>>
    where
        Self: 'a;

    fn repr(&self) -> Self::Repr<'_> {
        Product(Field(&self.0), Field(&self.1))
    }
}

impl<A: Encode, B: Encode, C: Encode> Generic for (A, B, C) {
    type Repr<'a> = Product<Field<'a, A>, Product<Field<'a, B>, Field<'a, C>>>
    where
        Self: 'a;

    fn repr(&self) -> Self::Repr<'_> {
        Product(Field(&self.0), Product(Field(&self.1), Field(&self.2)))
    }
}

impl<A: Encode, B: Encode, C: Encode, D: Encode> Generic for (A, B, C, D) {
    type Repr<'a> =
        Product<Field<'a, A>, Product<Field<'a, B>, Product<Field<'a, C>, Field<'a, D>>>>
    where
        Self: 'a;

    fn repr(&self) -> Self::Repr<'_> {
        Product(
            Field(&self.0),
            Product(Field(&self.1), Product(Field(&self.2), Field(&self.3))),
        )
    }
}

macro_rules! encode_tuple {
    ($($T:ident),+) => {
        impl<$($T: Encode),+> Encode for ($($T,)+) {
            fn encode<S: Sink>(&self, s: &mut S) -> Result<()> {
                encode_generic(self, s)
            }
        }
    };
}

encode_tuple!(A, B);
encode_tuple!(A, B, C);
encode_tuple!(A, B, C, D);
