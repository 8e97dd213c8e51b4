use crate::{Sink, SinkConfig};
use anyhow::Result;
use derive_more::From;
use std::io::{BufWriter, Write};

/// A streaming backend over any [`Write`].
///
/// Failures of the underlying writer surface unchanged from whichever sink operation hit them.
/// Bytes accepted before the failure are not rolled back.
#[derive(From)]
pub struct IoSink<W: Write> {
    w: BufWriter<W>,
}

impl<W: Write> IoSink<W> {
    pub fn new(w: W) -> Self {
        Self::with_config(w, &SinkConfig::default())
    }

    pub fn with_config(w: W, conf: &SinkConfig) -> Self {
        Self {
            w: BufWriter::with_capacity(conf.io_buf_capacity, w),
        }
    }

    pub fn get_ref(&self) -> &W {
        self.w.get_ref()
    }

    /// Flushes, then hands back the writer.
    pub fn into_inner(self) -> Result<W> {
        let w = self.w.into_inner().map_err(|e| e.into_error())?;
        Ok(w)
    }
}

impl<W: Write> Sink for IoSink<W> {
    fn write_bytes(&mut self, buf: &[u8]) -> Result<()> {
        self.w.write_all(buf)?;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        log::debug!("Flushing {} buffered bytes", self.w.buffer().len());
        self.w.flush()?;
        Ok(())
    }
}
