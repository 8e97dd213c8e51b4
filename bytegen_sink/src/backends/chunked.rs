use crate::{Sink, SinkConfig};
use anyhow::Result;
use std::mem;

/// A streaming backend which accumulates bytes into a list of chunks.
///
/// Bytes fill the current chunk until it reaches `chunk_size`, at which point the chunk is
/// sealed and a new one begins. Chunk boundaries are never observable in the
/// concatenation of all chunks.
///
/// - [`Sink::flush`] seals the current chunk early, if it holds anything.
/// - [`Sink::write_chunks`] seals the current chunk, then keeps each non-empty input chunk
///   as a chunk of its own, without copying it into the current one.
pub struct ChunkedSink {
    chunk_size: usize,
    sealed: Vec<Vec<u8>>,
    cur: Vec<u8>,
}

impl Default for ChunkedSink {
    fn default() -> Self {
        Self::with_config(&SinkConfig::default())
    }
}

impl ChunkedSink {
    pub fn with_config(conf: &SinkConfig) -> Self {
        let chunk_size = conf.chunk_size.max(1);
        Self {
            chunk_size,
            sealed: vec![],
            cur: Vec::with_capacity(chunk_size),
        }
    }

    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    /// Sealed chunks only; the partially filled chunk is not included.
    pub fn sealed_chunks(&self) -> &[Vec<u8>] {
        &self.sealed
    }

    pub fn into_chunks(mut self) -> Vec<Vec<u8>> {
        self.seal();
        self.sealed
    }

    /// All bytes written so far, as one block.
    pub fn to_vec(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(self.len());
        for chunk in self.sealed.iter() {
            buf.extend_from_slice(chunk);
        }
        buf.extend_from_slice(&self.cur);
        buf
    }

    pub fn len(&self) -> usize {
        self.sealed.iter().map(|chunk| chunk.len()).sum::<usize>() + self.cur.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn seal(&mut self) {
        if self.cur.is_empty() {
            return;
        }
        let chunk = mem::replace(&mut self.cur, Vec::with_capacity(self.chunk_size));
        log::trace!("Sealing chunk #{} of {} bytes", self.sealed.len(), chunk.len());
        self.sealed.push(chunk);
    }
}

impl Sink for ChunkedSink {
    fn write_bytes(&mut self, mut buf: &[u8]) -> Result<()> {
        while !buf.is_empty() {
            let room = self.chunk_size - self.cur.len();
            let (head, tail) = buf.split_at(room.min(buf.len()));
            self.cur.extend_from_slice(head);
            if self.cur.len() == self.chunk_size {
                self.seal();
            }
            buf = tail;
        }
        Ok(())
    }

    fn write_u8(&mut self, byte: u8) -> Result<()> {
        self.cur.push(byte);
        if self.cur.len() == self.chunk_size {
            self.seal();
        }
        Ok(())
    }

    fn write_chunks<'c, I>(&mut self, chunks: I) -> Result<()>
    where
        I: IntoIterator<Item = &'c [u8]>,
    {
        self.seal();
        for chunk in chunks {
            if !chunk.is_empty() {
                self.sealed.push(chunk.to_vec());
            }
        }
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.seal();
        Ok(())
    }
}
