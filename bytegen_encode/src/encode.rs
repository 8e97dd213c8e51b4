use anyhow::Result;
use bytegen_sink::{ByteCounter, Sink};

/// A value which knows how to write itself into any [`Sink`].
///
/// Primitives implement this directly (see [`crate::scalar`]).
/// Algebraic data types usually get it from [`crate::derive_encode!`],
/// or by implementing [`crate::Generic`] and delegating to [`crate::encode_generic`].
pub trait Encode {
    fn encode<S: Sink>(&self, s: &mut S) -> Result<()>;

    fn encode_to_vec(&self) -> Result<Vec<u8>> {
        let mut buf = vec![];
        self.encode(&mut buf)?;
        Ok(buf)
    }

    fn encoded_len(&self) -> Result<usize> {
        let mut counter = ByteCounter::default();
        self.encode(&mut counter)?;
        Ok(*counter)
    }
}

impl<T: Encode + ?Sized> Encode for &T {
    fn encode<S: Sink>(&self, s: &mut S) -> Result<()> {
        (**self).encode(s)
    }
}

impl<T: Encode + ?Sized> Encode for Box<T> {
    fn encode<S: Sink>(&self, s: &mut S) -> Result<()> {
        (**self).encode(s)
    }
}
