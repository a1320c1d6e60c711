/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::sync::OnceLock;

use bytes::Bytes;

use crate::checksum::{ChecksumCalculator, UploadChecksum};
use crate::io::chunk_reader::{self, ChunkReader};
use crate::io::InputStream;
use crate::types::ComputedChecksum;

/// Streaming request body handed to a [`StorageBackend`](crate::storage::StorageBackend).
///
/// A `StorageBody` yields the content sequentially in fixed-size windows.
/// When the body was decorated with a checksum decision, the digest is
/// computed over exactly the bytes yielded and becomes readable through
/// [`trailer_checksum`](Self::trailer_checksum) once the stream is
/// exhausted — trailer semantics: the checksum rides behind the content but
/// is logically part of the same request. Dropping the body mid-stream
/// discards the partial digest state.
#[derive(Debug)]
pub struct StorageBody {
    reader: ChunkReader,
    calculator: Option<ChecksumCalculator>,
    precalculated: Option<ComputedChecksum>,
    trailer: OnceLock<ComputedChecksum>,
    content_length: u64,
}

impl StorageBody {
    /// Wrap a body so the resolved checksum decision is carried out while
    /// the content streams. Buffered and file-backed streams are wrapped
    /// uniformly.
    pub(crate) fn decorated(
        stream: InputStream,
        checksum: UploadChecksum,
        content_length: u64,
    ) -> Self {
        let (calculator, precalculated) = match checksum {
            UploadChecksum::Calculate(algorithm) => (Some(ChecksumCalculator::new(algorithm)), None),
            UploadChecksum::Precalculated(value) => (None, Some(value)),
            UploadChecksum::Skip => (None, None),
        };
        Self {
            reader: chunk_reader::Builder::new().stream(stream).build(),
            calculator,
            precalculated,
            trailer: OnceLock::new(),
            content_length,
        }
    }

    /// Create a plain body over in-memory content, with no checksum
    /// attached. This is how backends build response bodies.
    pub fn from_bytes(bytes: Bytes) -> Self {
        let content_length = bytes.len() as u64;
        Self {
            reader: chunk_reader::Builder::new()
                .stream(InputStream::from(bytes))
                .build(),
            calculator: None,
            precalculated: None,
            trailer: OnceLock::new(),
            content_length,
        }
    }

    /// Pull the next window of content off the body.
    ///
    /// Returns [None] once the body is exhausted.
    pub async fn next(&mut self) -> Option<Result<Bytes, crate::error::Error>> {
        match self.reader.next_chunk().await {
            Ok(Some(chunk)) => {
                if let Some(calculator) = self.calculator.as_mut() {
                    calculator.update(&chunk);
                }
                Some(Ok(chunk))
            }
            Ok(None) => {
                self.attach_trailer();
                None
            }
            Err(err) => Some(Err(err.into())),
        }
    }

    /// The total length of the body in bytes.
    pub fn content_length(&self) -> u64 {
        self.content_length
    }

    /// The checksum logically attached to this request.
    ///
    /// [None] until the body has been fully consumed, and permanently
    /// [None] for bodies carrying no checksum.
    pub fn trailer_checksum(&self) -> Option<&ComputedChecksum> {
        self.trailer.get()
    }

    fn attach_trailer(&mut self) {
        let checksum = match (self.calculator.take(), self.precalculated.take()) {
            (Some(calculator), _) => Some(calculator.finalize()),
            (None, Some(precalculated)) => Some(precalculated),
            (None, None) => None,
        };
        if let Some(checksum) = checksum {
            tracing::trace!(algorithm = %checksum.algorithm(), "attaching trailer checksum");
            let _ = self.trailer.set(checksum);
        }
    }
}
