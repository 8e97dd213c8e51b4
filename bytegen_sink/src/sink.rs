use anyhow::Result;
use std::mem;

/// Width in bytes of a native machine word, as written by [`Sink::write_word_host`].
pub const WORD_WIDTH: usize = mem::size_of::<usize>();

/// An append-only byte destination.
///
/// Only [`Sink::write_bytes`] is required. Every other operation has a default built on it,
/// which backends may override for speed, but never in a way that changes the bytes
/// observed by the destination.
///
/// Writes do not return anything on success. A backend whose transport can fail
/// (see `IoSink`) surfaces that failure as an error, which callers propagate unchanged.
///
/// Host-order operations produce bytes that only round-trip on a machine of the same
/// endianness and word width. Use the `_le`/`_be` operations for a portable layout.
pub trait Sink {
    fn write_bytes(&mut self, buf: &[u8]) -> Result<()>;

    fn write_u8(&mut self, byte: u8) -> Result<()> {
        self.write_bytes(&[byte])
    }

    /// Writes a block which the source already holds as a series of chunks.
    fn write_chunks<'c, I>(&mut self, chunks: I) -> Result<()>
    where
        I: IntoIterator<Item = &'c [u8]>,
    {
        for chunk in chunks {
            self.write_bytes(chunk)?;
        }
        Ok(())
    }

    /// Forces a chunk boundary on chunk-oriented sinks, and pushes buffered bytes downstream
    /// on streaming sinks. A no-op on single-buffer sinks.
    fn flush(&mut self) -> Result<()> {
        Ok(())
    }

    /* Explicit little-endian. */
    fn write_u16_le(&mut self, x: u16) -> Result<()> {
        self.write_bytes(&x.to_le_bytes())
    }
    fn write_u32_le(&mut self, x: u32) -> Result<()> {
        self.write_bytes(&x.to_le_bytes())
    }
    fn write_u64_le(&mut self, x: u64) -> Result<()> {
        self.write_bytes(&x.to_le_bytes())
    }

    /* Explicit big-endian. */
    fn write_u16_be(&mut self, x: u16) -> Result<()> {
        self.write_bytes(&x.to_be_bytes())
    }
    fn write_u32_be(&mut self, x: u32) -> Result<()> {
        self.write_bytes(&x.to_be_bytes())
    }
    fn write_u64_be(&mut self, x: u64) -> Result<()> {
        self.write_bytes(&x.to_be_bytes())
    }

    /* Host order. */
    fn write_u16_host(&mut self, x: u16) -> Result<()> {
        self.write_bytes(&x.to_ne_bytes())
    }
    fn write_u32_host(&mut self, x: u32) -> Result<()> {
        self.write_bytes(&x.to_ne_bytes())
    }
    fn write_u64_host(&mut self, x: u64) -> Result<()> {
        self.write_bytes(&x.to_ne_bytes())
    }
    fn write_word_host(&mut self, x: usize) -> Result<()> {
        self.write_bytes(&x.to_ne_bytes())
    }
}
