//! Default encodings of primitives.
//!
//! Every multi-byte primitive is written in host order at its fixed width, whatever its
//! magnitude. Signed integers are written as their unsigned bit patterns.
//! Callers who need a portable layout should call the `_le`/`_be` sink operations directly.

use crate::Encode;
use anyhow::Result;
use bytegen_sink::Sink;

impl Encode for () {
    fn encode<S: Sink>(&self, _s: &mut S) -> Result<()> {
        Ok(())
    }
}

impl Encode for u8 {
    fn encode<S: Sink>(&self, s: &mut S) -> Result<()> {
        s.write_u8(*self)
    }
}

impl Encode for i8 {
    fn encode<S: Sink>(&self, s: &mut S) -> Result<()> {
        s.write_u8(*self as u8)
    }
}

impl Encode for bool {
    fn encode<S: Sink>(&self, s: &mut S) -> Result<()> {
        u8::from(*self).encode(s)
    }
}

impl Encode for char {
    fn encode<S: Sink>(&self, s: &mut S) -> Result<()> {
        s.write_u32_host(u32::from(*self))
    }
}

macro_rules! encode_host_int {
    ($T:ty, $U:ty, $write:ident) => {
        impl Encode for $T {
            fn encode<S: Sink>(&self, s: &mut S) -> Result<()> {
                s.$write(*self as $U)
            }
        }
    };
}

encode_host_int!(u16, u16, write_u16_host);
encode_host_int!(i16, u16, write_u16_host);
encode_host_int!(u32, u32, write_u32_host);
encode_host_int!(i32, u32, write_u32_host);
encode_host_int!(u64, u64, write_u64_host);
encode_host_int!(i64, u64, write_u64_host);
encode_host_int!(usize, usize, write_word_host);
encode_host_int!(isize, usize, write_word_host);
