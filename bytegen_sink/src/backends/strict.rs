use crate::Sink;
use anyhow::Result;

/// The strict backend: one contiguous, growing block.
impl Sink for Vec<u8> {
    fn write_bytes(&mut self, buf: &[u8]) -> Result<()> {
        self.extend_from_slice(buf);
        Ok(())
    }

    fn write_u8(&mut self, byte: u8) -> Result<()> {
        self.push(byte);
        Ok(())
    }

    fn write_chunks<'c, I>(&mut self, chunks: I) -> Result<()>
    where
        I: IntoIterator<Item = &'c [u8]>,
    {
        for chunk in chunks {
            self.extend_from_slice(chunk);
        }
        Ok(())
    }
}
