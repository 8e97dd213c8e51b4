//! Structural binary encoding for algebraic data types, written against
//! [`bytegen_sink::Sink`] so that it runs unchanged on any backend or stack of layers.
//!
//! - [`Encode`] is what callers use.
//! - [`scalar`] pins the encodings of primitives.
//! - [`repr`] and [`generic`] turn any type's shape into bytes; [`derive_encode!`] writes the
//!   shape for you.
//! - [`combinators`] covers sequences, optional values, two-case alternatives and tuples.
//!
//! The default layout is host order at native word width, and round-trips only between
//! builds of the same architecture.

pub mod combinators;
mod derive;
mod encode;
pub mod generic;
pub mod repr;
pub mod scalar;

pub use combinators::{encode_bytes, encode_sequence};
pub use encode::*;
pub use generic::{encode_generic, encode_generic1, Generic, Generic1};

pub use anyhow;
pub use bytegen_sink::Sink;
