use crate::Sink;
use anyhow::Result;
use derive_more::Deref;

/// Discards bytes, keeping only how many were written.
#[derive(Deref, Default, Clone, Copy, Debug)]
pub struct ByteCounter(usize);

impl Sink for ByteCounter {
    fn write_bytes(&mut self, buf: &[u8]) -> Result<()> {
        self.0 += buf.len();
        Ok(())
    }

    fn write_u8(&mut self, _byte: u8) -> Result<()> {
        self.0 += 1;
        Ok(())
    }
}
