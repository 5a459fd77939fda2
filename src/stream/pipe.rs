//! Bounded in-memory pipe.
//!
//! A [`PipeWriter`] and [`PipeReader`] pair connected by a bounded
//! `sync_channel`. Writes block once `capacity` chunks are queued; dropping
//! either end unblocks the other.

use std::fmt;
use std::io::{self, Read, Write};
use std::sync::mpsc::{self, Receiver, SyncSender};

type Chunk = io::Result<Vec<u8>>;

/// Payload of the error a [`PipeWriter`] returns once its reader is gone.
#[derive(Debug)]
struct ReaderClosed;

impl fmt::Display for ReaderClosed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("pipe reader closed")
    }
}

impl std::error::Error for ReaderClosed {}

/// Whether `err` came from writing to a pipe whose reader was dropped.
///
/// Matches only errors raised by [`PipeWriter`], never a `BrokenPipe` from
/// some other source.
pub fn is_reader_closed(err: &io::Error) -> bool {
    err.get_ref()
        .is_some_and(|inner| inner.downcast_ref::<ReaderClosed>().is_some())
}

/// Create a pipe that queues at most `capacity` chunks.
pub fn pipe(capacity: usize) -> (PipeReader, PipeWriter) {
    let (tx, rx) = mpsc::sync_channel(capacity);
    (
        PipeReader {
            rx,
            current: Vec::new(),
            pos: 0,
            failure: None,
        },
        PipeWriter { tx },
    )
}

/// The writing half of a [`pipe`].
///
/// The pipe is closed once every clone of the writer has been dropped.
#[derive(Debug, Clone)]
pub struct PipeWriter {
    tx: SyncSender<Chunk>,
}

impl PipeWriter {
    /// Close the pipe so the reader's next read fails with `err`.
    ///
    /// Data already written is still delivered first.
    pub fn close_with_error(self, err: io::Error) {
        // A vanished reader has nobody to report to.
        let _ = self.tx.send(Err(err));
    }
}

impl Write for PipeWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if buf.is_empty() {
            return Ok(0);
        }
        self.tx
            .send(Ok(buf.to_vec()))
            .map_err(|_| io::Error::new(io::ErrorKind::BrokenPipe, ReaderClosed))?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// The reading half of a [`pipe`].
#[derive(Debug)]
pub struct PipeReader {
    rx: Receiver<Chunk>,
    current: Vec<u8>,
    pos: usize,
    failure: Option<(io::ErrorKind, String)>,
}

impl Read for PipeReader {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if buf.is_empty() {
            return Ok(0);
        }

        while self.pos >= self.current.len() {
            if let Some((kind, message)) = &self.failure {
                return Err(io::Error::new(*kind, message.clone()));
            }
            match self.rx.recv() {
                Ok(Ok(chunk)) => {
                    self.current = chunk;
                    self.pos = 0;
                }
                Ok(Err(err)) => {
                    self.failure = Some((err.kind(), err.to_string()));
                    return Err(err);
                }
                // Every writer is gone: clean end of stream.
                Err(_) => return Ok(0),
            }
        }

        let available = &self.current[self.pos..];
        let n = available.len().min(buf.len());
        buf[..n].copy_from_slice(&available[..n]);
        self.pos += n;
        Ok(n)
    }
}
