//! Streaming base64 encoder.
//!
//! [`encode_reader`] turns any byte source into a reader of its standard
//! base64 encoding. A background thread pulls from the source and pushes
//! encoded chunks through a bounded [`pipe`], so memory use stays flat no
//! matter how large the source is.

use std::io::{self, BufWriter, Read};
use std::thread;

use base64::engine::general_purpose::STANDARD;
use base64::write::EncoderWriter;

use super::pipe::{is_reader_closed, pipe, PipeReader, PipeWriter};

/// Maximum number of encoded chunks queued between producer and reader.
pub const PIPE_CAPACITY: usize = 8;

/// Size in bytes of each encoded chunk handed to the pipe.
pub const CHUNK_SIZE: usize = 8 * 1024;

/// Wrap `source` in a reader that yields its base64 (standard alphabet,
/// padded) encoding.
///
/// Encoding happens on a dedicated thread as the returned reader is
/// consumed. A read error from `source` is delivered to the reader after
/// the bytes encoded so far. Dropping the reader stops the thread and
/// drops `source`.
///
/// # Example
///
/// ```
/// use std::io::Read;
///
/// let mut encoded = String::new();
/// checkepub::stream::encode_reader(&b"Hello, world"[..])
///     .read_to_string(&mut encoded)
///     .unwrap();
/// assert_eq!(encoded, "SGVsbG8sIHdvcmxk");
/// ```
pub fn encode_reader<R>(source: R) -> PipeReader
where
    R: Read + Send + 'static,
{
    let (reader, writer) = pipe(PIPE_CAPACITY);
    let errors = writer.clone();
    let spawn_failed = writer.clone();

    let spawned = thread::Builder::new()
        .name("base64-encoder".to_string())
        .spawn(move || match encode_into(source, writer) {
            Ok(read) => {
                tracing::debug!(
                    "Encoded {} source bytes into {} base64 bytes",
                    read,
                    read.div_ceil(3) * 4
                );
            }
            Err(err) if is_reader_closed(&err) => {
                tracing::debug!("Encoded stream reader went away; stopping encoder");
            }
            Err(err) => {
                tracing::warn!("Failed to read encoder source: {}", err);
                errors.close_with_error(err);
            }
        });

    if let Err(err) = spawned {
        spawn_failed.close_with_error(err);
    }

    reader
}

fn encode_into<R: Read>(mut source: R, writer: PipeWriter) -> io::Result<u64> {
    let mut encoder = EncoderWriter::new(BufWriter::with_capacity(CHUNK_SIZE, writer), &STANDARD);
    let read = io::copy(&mut source, &mut encoder)?;
    encoder
        .finish()?
        .into_inner()
        .map_err(|err| err.into_error())?;
    Ok(read)
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::Engine as _;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::mpsc;
    use std::sync::Arc;
    use std::time::Duration;

    fn encode_all(input: Vec<u8>) -> Vec<u8> {
        let mut out = Vec::new();
        encode_reader(io::Cursor::new(input))
            .read_to_end(&mut out)
            .unwrap();
        out
    }

    /// Deterministic filler so large inputs cover every byte value.
    fn sample_bytes(len: usize) -> Vec<u8> {
        (0..len).map(|i| (i.wrapping_mul(31) ^ (i >> 7)) as u8).collect()
    }

    #[test]
    fn encodes_hello_world() {
        let out = encode_all(b"Hello, world".to_vec());
        assert_eq!(out, b"SGVsbG8sIHdvcmxk");
    }

    #[test]
    fn empty_input_produces_empty_output() {
        assert!(encode_all(Vec::new()).is_empty());
    }

    #[test]
    fn pads_short_inputs() {
        assert_eq!(encode_all(b"f".to_vec()), b"Zg==");
        assert_eq!(encode_all(b"fo".to_vec()), b"Zm8=");
        assert_eq!(encode_all(b"foo".to_vec()), b"Zm9v");
    }

    #[test]
    fn matches_standard_encoding_across_lengths() {
        for len in [0, 1, 2, 3, 4, 767, 768, 769, CHUNK_SIZE, CHUNK_SIZE + 1, 200_001] {
            let input = sample_bytes(len);
            let out = encode_all(input.clone());
            assert_eq!(out, STANDARD.encode(&input).into_bytes(), "length {}", len);
            assert_eq!(STANDARD.decode(&out).unwrap(), input, "length {}", len);
        }
    }

    #[test]
    fn tiny_reads_see_the_same_stream() {
        let input = sample_bytes(10_000);
        let mut reader = encode_reader(io::Cursor::new(input.clone()));
        let mut out = Vec::new();
        let mut buf = [0u8; 3];
        loop {
            let n = reader.read(&mut buf).unwrap();
            if n == 0 {
                break;
            }
            out.extend_from_slice(&buf[..n]);
        }
        assert_eq!(out, STANDARD.encode(&input).into_bytes());
    }

    /// Yields `good` bytes, then fails.
    struct FailingSource {
        good: usize,
    }

    impl Read for FailingSource {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            if self.good == 0 {
                return Err(io::Error::new(io::ErrorKind::InvalidData, "bad sector"));
            }
            let n = self.good.min(buf.len());
            buf[..n].fill(b'a');
            self.good -= n;
            Ok(n)
        }
    }

    #[test]
    fn source_error_reaches_reader() {
        let mut reader = encode_reader(FailingSource { good: 30_000 });
        let mut out = Vec::new();
        let err = reader.read_to_end(&mut out).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
        assert_eq!(err.to_string(), "bad sector");
    }

    /// Yields `good` bytes, then fails the way a dropped socket does.
    struct BrokenSource {
        good: usize,
    }

    impl Read for BrokenSource {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            if self.good == 0 {
                return Err(io::Error::new(
                    io::ErrorKind::BrokenPipe,
                    "upstream socket closed",
                ));
            }
            let n = self.good.min(buf.len());
            buf[..n].fill(b'a');
            self.good -= n;
            Ok(n)
        }
    }

    #[test]
    fn broken_pipe_from_source_reaches_reader() {
        let mut reader = encode_reader(BrokenSource { good: 5 });
        let mut out = Vec::new();
        let err = reader.read_to_end(&mut out).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
        assert_eq!(err.to_string(), "upstream socket closed");
    }

    #[test]
    fn immediate_source_error_reaches_reader() {
        let mut reader = encode_reader(FailingSource { good: 0 });
        let mut out = Vec::new();
        let err = reader.read_to_end(&mut out).unwrap_err();
        assert_eq!(err.to_string(), "bad sector");
    }

    /// Endless source that reports when it is dropped and counts bytes read.
    struct TrackedSource {
        read: Arc<AtomicUsize>,
        dropped: mpsc::Sender<()>,
    }

    impl Read for TrackedSource {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            buf.fill(b'z');
            self.read.fetch_add(buf.len(), Ordering::SeqCst);
            Ok(buf.len())
        }
    }

    impl Drop for TrackedSource {
        fn drop(&mut self) {
            let _ = self.dropped.send(());
        }
    }

    #[test]
    fn dropping_reader_stops_encoder_thread() {
        let (dropped_tx, dropped_rx) = mpsc::channel();
        let source = TrackedSource {
            read: Arc::new(AtomicUsize::new(0)),
            dropped: dropped_tx,
        };

        let mut reader = encode_reader(source);
        let mut buf = [0u8; 64];
        reader.read_exact(&mut buf).unwrap();
        assert_eq!(&buf[..4], b"enp6");
        drop(reader);

        dropped_rx
            .recv_timeout(Duration::from_secs(10))
            .expect("encoder thread should drop its source once the reader is gone");
    }

    #[test]
    fn slow_reader_bounds_read_ahead() {
        let (dropped_tx, _dropped_rx) = mpsc::channel();
        let read = Arc::new(AtomicUsize::new(0));
        let source = TrackedSource {
            read: Arc::clone(&read),
            dropped: dropped_tx,
        };

        let mut reader = encode_reader(source);
        let mut buf = [0u8; 16];
        reader.read_exact(&mut buf).unwrap();
        std::thread::sleep(Duration::from_millis(200));

        // Queue, buffers and one in-flight copy: far below a megabyte.
        let ahead = read.load(Ordering::SeqCst);
        assert!(
            ahead < 1024 * 1024,
            "encoder read {} bytes ahead of a stalled reader",
            ahead
        );
    }
}
