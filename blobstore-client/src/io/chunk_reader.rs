/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */
use std::cmp;
use std::ops::DerefMut;
use std::sync::Mutex;

use bytes::{Buf, Bytes, BytesMut};

use crate::io::error::Error;
use crate::io::path_body::PathBody;
use crate::io::stream::RawInputStream;
use crate::io::InputStream;
use crate::metrics::unit::ByteUnit;

/// Builder for creating a `ChunkReader`
#[derive(Debug)]
pub(crate) struct Builder {
    stream: Option<RawInputStream>,
    window_size: usize,
}

impl Builder {
    pub(crate) fn new() -> Self {
        Self {
            stream: None,
            window_size: ByteUnit::Mebibyte.as_bytes_usize(),
        }
    }

    /// Set the input stream to read from.
    pub(crate) fn stream(mut self, stream: InputStream) -> Self {
        self.stream = Some(stream.into_raw());
        self
    }

    /// Set the fixed window size used when reading data.
    ///
    /// All windows except possibly the last one are of this size.
    #[cfg(test)]
    pub(crate) fn window_size(mut self, window_size: usize) -> Self {
        self.window_size = window_size;
        self
    }

    pub(crate) fn build(self) -> ChunkReader {
        let stream = self.stream.expect("input stream set");
        ChunkReader::new(stream, self.window_size)
    }
}

/// Reads an input stream sequentially in fixed-size windows.
#[derive(Debug)]
pub(crate) struct ChunkReader {
    inner: Inner,
    window_size: usize,
}

impl ChunkReader {
    fn new(raw: RawInputStream, window_size: usize) -> Self {
        let inner = match raw {
            RawInputStream::Buf(buf) => Inner::Bytes(BytesChunkReader::new(buf)),
            RawInputStream::Fs(path_body) => Inner::Fs(PathBodyChunkReader::new(path_body)),
        };
        Self { inner, window_size }
    }

    /// Read the next window of data off the stream.
    ///
    /// Returns [None] once the stream is exhausted.
    pub(crate) async fn next_chunk(&self) -> Result<Option<Bytes>, Error> {
        match &self.inner {
            Inner::Bytes(bytes) => bytes.next_chunk(self.window_size).await,
            Inner::Fs(path_body) => path_body.next_chunk(self.window_size).await,
        }
    }
}

#[derive(Debug)]
enum Inner {
    Bytes(BytesChunkReader),
    Fs(PathBodyChunkReader),
}

#[derive(Debug)]
struct ChunkReaderState {
    // current start offset
    offset: u64,
    // total number of bytes remaining to be read
    remaining: u64,
}

impl ChunkReaderState {
    fn new(content_length: u64) -> Self {
        Self {
            offset: 0,
            remaining: content_length,
        }
    }
}

/// Implementation for in-memory input streams.
#[derive(Debug)]
struct BytesChunkReader {
    buf: Bytes,
    state: Mutex<ChunkReaderState>, // std Mutex
}

impl BytesChunkReader {
    fn new(buf: Bytes) -> Self {
        let content_length = buf.remaining() as u64;
        Self {
            buf,
            state: Mutex::new(ChunkReaderState::new(content_length)),
        }
    }

    async fn next_chunk(&self, window_size: usize) -> Result<Option<Bytes>, Error> {
        let mut state = self.state.lock().expect("lock valid");
        if state.remaining == 0 {
            return Ok(None);
        }

        let start = state.offset as usize;
        let end = cmp::min(start + window_size, self.buf.len());
        let data = self.buf.slice(start..end);
        state.offset += data.len() as u64;
        state.remaining -= data.len() as u64;
        Ok(Some(data))
    }
}

/// Implementation for path based input streams.
#[derive(Debug)]
struct PathBodyChunkReader {
    body: PathBody,
    state: Mutex<ChunkReaderState>, // std Mutex
}

impl PathBodyChunkReader {
    fn new(body: PathBody) -> Self {
        let content_length = body.length;
        Self {
            body,
            state: Mutex::new(ChunkReaderState::new(content_length)),
        }
    }

    async fn next_chunk(&self, window_size: usize) -> Result<Option<Bytes>, Error> {
        let (offset, window_size) = {
            let mut state = self.state.lock().expect("lock valid");
            if state.remaining == 0 {
                return Ok(None);
            }
            let offset = state.offset;
            let window_size = cmp::min(window_size as u64, state.remaining);
            state.offset += window_size;
            state.remaining -= window_size;
            (offset, window_size)
        };

        let path = self.body.path.clone();
        let handle = tokio::task::spawn_blocking(move || {
            let mut dst = BytesMut::with_capacity(window_size as usize);
            // set the length so the raw &[u8] slice has the correct size; on
            // success exactly window_size bytes are read from the file
            unsafe { dst.set_len(dst.capacity()) }
            file_util::read_file_chunk_sync(dst.deref_mut(), path, offset)?;
            Ok::<Bytes, Error>(dst.freeze())
        });

        handle.await?.map(Some)
    }
}

mod file_util {
    #[cfg(unix)]
    pub(super) use unix::read_file_chunk_sync;
    #[cfg(windows)]
    pub(super) use windows::read_file_chunk_sync;

    #[cfg(unix)]
    mod unix {
        use std::fs::File;
        use std::io;
        use std::os::unix::fs::FileExt;
        use std::path::Path;

        pub(crate) fn read_file_chunk_sync(
            dst: &mut [u8],
            path: impl AsRef<Path>,
            offset: u64,
        ) -> Result<(), io::Error> {
            let file = File::open(path)?;
            file.read_exact_at(dst, offset)
        }
    }

    #[cfg(windows)]
    mod windows {
        use std::fs::File;
        use std::io;
        use std::io::{Read, Seek, SeekFrom};
        use std::path::Path;

        pub(crate) fn read_file_chunk_sync(
            dst: &mut [u8],
            path: impl AsRef<Path>,
            offset: u64,
        ) -> Result<(), io::Error> {
            let mut file = File::open(path)?;
            file.seek(SeekFrom::Start(offset))?;
            file.read_exact(dst)
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use bytes::{Buf, Bytes};
    use tempfile::NamedTempFile;

    use super::{Builder, ChunkReader};
    use crate::io::InputStream;

    async fn collect_chunks(reader: ChunkReader) -> Vec<Bytes> {
        let mut chunks = Vec::new();
        while let Some(chunk) = reader.next_chunk().await.unwrap() {
            chunks.push(chunk);
        }
        chunks
    }

    #[tokio::test]
    async fn test_bytes_chunk_reader() {
        let data = Bytes::from("a lep is a ball, a tay is a hammer, a flix is a comb");
        let stream = InputStream::from(data.clone());
        let expected = data.chunks(5).collect::<Vec<_>>();
        let reader = Builder::new().window_size(5).stream(stream).build();
        let chunks = collect_chunks(reader).await;
        let actual = chunks.iter().map(|c| c.chunk()).collect::<Vec<_>>();

        assert_eq!(expected, actual);
    }

    #[tokio::test]
    async fn test_path_chunk_reader() {
        let mut tmp = NamedTempFile::new().unwrap();
        let data = Bytes::from("a lep is a ball, a tay is a hammer, a flix is a comb");
        tmp.write_all(data.chunk()).unwrap();

        let stream = InputStream::from_path(tmp.path()).unwrap();
        let expected = data.chunks(5).collect::<Vec<_>>();
        let reader = Builder::new().window_size(5).stream(stream).build();
        let chunks = collect_chunks(reader).await;
        let actual = chunks.iter().map(|c| c.chunk()).collect::<Vec<_>>();

        assert_eq!(expected, actual);
    }

    #[tokio::test]
    async fn test_empty_stream_yields_no_chunks() {
        let reader = Builder::new()
            .window_size(5)
            .stream(InputStream::default())
            .build();
        assert!(collect_chunks(reader).await.is_empty());
    }
}
