//! Streaming transforms for request bodies.
//!
//! - [`encoder`] - Base64 encoding on a background thread
//! - [`pipe`] - Bounded reader/writer pair connecting producer and consumer

pub mod encoder;
pub mod pipe;

pub use encoder::{encode_reader, CHUNK_SIZE, PIPE_CAPACITY};
pub use pipe::{is_reader_closed, pipe, PipeReader, PipeWriter};
