//! The byte sink interface which all `bytegen` encoders are written against,
//! together with the backends and layers that implement it.
//!
//! | backend | shape |
//! |---|---|
//! | `Vec<u8>` | one growing block |
//! | [`ChunkedSink`] | a list of chunks; [`Sink::flush`] forces a boundary |
//! | [`IoSink`] | buffered, streaming into any [`std::io::Write`] |
//! | [`ByteCounter`] | length only |
//!
//! All backends observe identical bytes for identical calls.

mod backends;
pub mod config;
mod layers;
mod sink;

pub use backends::*;
pub use config::SinkConfig;
pub use layers::*;
pub use sink::*;
