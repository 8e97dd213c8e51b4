//! A reader that mirrors the default layout, used only to check that encoded bytes carry back
//! exactly what was written.

use anyhow::{anyhow, Result};
use bytegen_encode::repr::{Branch, BranchTag};
use std::any;

pub struct Reader<'b> {
    buf: &'b [u8],
    pos: usize,
}

impl<'b> Reader<'b> {
    pub fn new(buf: &'b [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    pub fn take(&mut self, len: usize) -> Result<&'b [u8]> {
        let end = self.pos + len;
        if end > self.buf.len() {
            return Err(anyhow!(
                "Short buffer: wanted {len} bytes at {}, have {}",
                self.pos,
                self.buf.len()
            ));
        }
        let bytes = &self.buf[self.pos..end];
        self.pos = end;
        Ok(bytes)
    }

    pub fn take_array<const N: usize>(&mut self) -> Result<[u8; N]> {
        let mut arr = [0u8; N];
        arr.copy_from_slice(self.take(N)?);
        Ok(arr)
    }

    pub fn branch(&mut self) -> Result<Branch> {
        let [tag] = self.take_array::<1>()?;
        Branch::try_from(BranchTag::from(tag))
    }

    pub fn is_done(&self) -> bool {
        self.pos == self.buf.len()
    }
}

pub trait Decode: Sized {
    fn decode(r: &mut Reader) -> Result<Self>;
}

/// Decodes one value, and insists that it consumed the whole buffer.
pub fn decode_all<T: Decode>(buf: &[u8]) -> Result<T> {
    let mut r = Reader::new(buf);
    let t = T::decode(&mut r)?;
    if !r.is_done() {
        return Err(anyhow!(
            "Trailing bytes after {}: {:?}",
            any::type_name::<T>(),
            &buf[r.pos..]
        ));
    }
    Ok(t)
}

macro_rules! decode_host_int {
    ($($T:ty),+) => {
        $(
            impl Decode for $T {
                fn decode(r: &mut Reader) -> Result<Self> {
                    Ok(<$T>::from_ne_bytes(r.take_array()?))
                }
            }
        )+
    };
}

decode_host_int!(u8, i8, u16, i16, u32, i32, u64, i64, usize, isize);

impl Decode for bool {
    fn decode(r: &mut Reader) -> Result<Self> {
        match u8::decode(r)? {
            0 => Ok(false),
            1 => Ok(true),
            b => Err(anyhow!("Invalid bool {b}")),
        }
    }
}

impl Decode for char {
    fn decode(r: &mut Reader) -> Result<Self> {
        let u = u32::decode(r)?;
        char::from_u32(u).ok_or(anyhow!("Invalid char {u:#x}"))
    }
}

impl<T: Decode> Decode for Vec<T> {
    fn decode(r: &mut Reader) -> Result<Self> {
        let count = usize::decode(r)?;
        (0..count).map(|_| T::decode(r)).collect()
    }
}

impl Decode for String {
    fn decode(r: &mut Reader) -> Result<Self> {
        let bytes = Vec::<u8>::decode(r)?;
        Ok(String::from_utf8(bytes)?)
    }
}

impl<T: Decode> Decode for Option<T> {
    fn decode(r: &mut Reader) -> Result<Self> {
        match r.branch()? {
            Branch::Left => Ok(None),
            Branch::Right => Ok(Some(T::decode(r)?)),
        }
    }
}

impl<A: Decode, B: Decode> Decode for (A, B) {
    fn decode(r: &mut Reader) -> Result<Self> {
        let a = A::decode(r)?;
        let b = B::decode(r)?;
        Ok((a, b))
    }
}
