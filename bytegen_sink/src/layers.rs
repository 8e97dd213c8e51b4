//! Layers wrap an inner sink and add an effect which is orthogonal to writing bytes.
//!
//! Anything implementing [`Layer`] is a [`Sink`], forwarding every operation unchanged to
//! its inner sink. Encoders written against [`Sink`] therefore work through any number of
//! stacked layers, and produce the same bytes as they would against the innermost sink.

use crate::Sink;
use anyhow::Result;

pub trait Layer {
    type Inner: Sink;

    fn inner_mut(&mut self) -> &mut Self::Inner;
}

impl<L: Layer> Sink for L {
    fn write_bytes(&mut self, buf: &[u8]) -> Result<()> {
        self.inner_mut().write_bytes(buf)
    }
    fn write_u8(&mut self, byte: u8) -> Result<()> {
        self.inner_mut().write_u8(byte)
    }
    fn write_chunks<'c, I>(&mut self, chunks: I) -> Result<()>
    where
        I: IntoIterator<Item = &'c [u8]>,
    {
        self.inner_mut().write_chunks(chunks)
    }
    fn flush(&mut self) -> Result<()> {
        self.inner_mut().flush()
    }

    fn write_u16_le(&mut self, x: u16) -> Result<()> {
        self.inner_mut().write_u16_le(x)
    }
    fn write_u32_le(&mut self, x: u32) -> Result<()> {
        self.inner_mut().write_u32_le(x)
    }
    fn write_u64_le(&mut self, x: u64) -> Result<()> {
        self.inner_mut().write_u64_le(x)
    }

    fn write_u16_be(&mut self, x: u16) -> Result<()> {
        self.inner_mut().write_u16_be(x)
    }
    fn write_u32_be(&mut self, x: u32) -> Result<()> {
        self.inner_mut().write_u32_be(x)
    }
    fn write_u64_be(&mut self, x: u64) -> Result<()> {
        self.inner_mut().write_u64_be(x)
    }

    fn write_u16_host(&mut self, x: u16) -> Result<()> {
        self.inner_mut().write_u16_host(x)
    }
    fn write_u32_host(&mut self, x: u32) -> Result<()> {
        self.inner_mut().write_u32_host(x)
    }
    fn write_u64_host(&mut self, x: u64) -> Result<()> {
        self.inner_mut().write_u64_host(x)
    }
    fn write_word_host(&mut self, x: usize) -> Result<()> {
        self.inner_mut().write_word_host(x)
    }
}

/// Carries a read-only context alongside the sink.
pub struct WithContext<C, S> {
    ctx: C,
    inner: S,
}

impl<C, S: Sink> WithContext<C, S> {
    pub fn new(ctx: C, inner: S) -> Self {
        Self { ctx, inner }
    }
    pub fn context(&self) -> &C {
        &self.ctx
    }
    pub fn inner(&self) -> &S {
        &self.inner
    }
    pub fn into_inner(self) -> S {
        self.inner
    }
}

impl<C, S: Sink> Layer for WithContext<C, S> {
    type Inner = S;
    fn inner_mut(&mut self) -> &mut S {
        &mut self.inner
    }
}

/// Accumulates a log of entries alongside the sink.
pub struct WithLog<L, S> {
    log: Vec<L>,
    inner: S,
}

impl<L, S: Sink> WithLog<L, S> {
    pub fn new(inner: S) -> Self {
        Self { log: vec![], inner }
    }
    pub fn tell(&mut self, entry: L) {
        self.log.push(entry);
    }
    pub fn log(&self) -> &[L] {
        &self.log
    }
    pub fn inner(&self) -> &S {
        &self.inner
    }
    pub fn into_parts(self) -> (Vec<L>, S) {
        (self.log, self.inner)
    }
}

impl<L, S: Sink> Layer for WithLog<L, S> {
    type Inner = S;
    fn inner_mut(&mut self) -> &mut S {
        &mut self.inner
    }
}

/// Carries mutable state alongside the sink.
pub struct WithState<T, S> {
    state: T,
    inner: S,
}

impl<T, S: Sink> WithState<T, S> {
    pub fn new(state: T, inner: S) -> Self {
        Self { state, inner }
    }
    pub fn state(&self) -> &T {
        &self.state
    }
    pub fn state_mut(&mut self) -> &mut T {
        &mut self.state
    }
    pub fn inner(&self) -> &S {
        &self.inner
    }
    pub fn into_parts(self) -> (T, S) {
        (self.state, self.inner)
    }
}

impl<T, S: Sink> Layer for WithState<T, S> {
    type Inner = S;
    fn inner_mut(&mut self) -> &mut S {
        &mut self.inner
    }
}
