/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use bytes::Bytes;

use crate::checksum::ChecksumCalculator;
use crate::error::{self, ChecksumMismatch};
use crate::operation::download::context::DownloadContext;
use crate::operation::download::trailing_meta::{TrailingMetadata, TrailingMetadataOnceLock};
use crate::operation::download::{ChecksumValidation, SkipReason};
use crate::storage::StorageBody;
use crate::types::ComputedChecksum;

/// Stream of binary data representing a downloaded object's contents.
///
/// When validation is enabled for the request, every chunk pulled off this
/// body also feeds a checksum calculator; the final compare happens at end
/// of stream, so the object is never buffered whole. A mismatch is yielded
/// as the last item of the stream and the body produces nothing further.
#[derive(Debug)]
pub struct Body {
    inner: StorageBody,
    calculator: Option<ChecksumCalculator>,
    expected: Option<ComputedChecksum>,
    trailing: TrailingMetadataOnceLock,
    ctx: DownloadContext,
    failed: bool,
}

impl Body {
    pub(crate) fn new(
        ctx: DownloadContext,
        inner: StorageBody,
        expected: Option<ComputedChecksum>,
        trailing: TrailingMetadataOnceLock,
    ) -> Self {
        let calculator = expected
            .as_ref()
            .map(|checksum| ChecksumCalculator::new(checksum.algorithm()));
        Self {
            inner,
            calculator,
            expected,
            trailing,
            ctx,
            failed: false,
        }
    }

    /// Pull the next chunk of data off the stream.
    ///
    /// Returns [None] when there is no more data. A validation mismatch is
    /// surfaced as the final `Err` item; it is never silently ignored.
    pub async fn next(&mut self) -> Option<Result<Bytes, crate::error::Error>> {
        if self.failed {
            return None;
        }

        match self.inner.next().await {
            Some(Ok(chunk)) => {
                if let Some(calculator) = self.calculator.as_mut() {
                    calculator.update(&chunk);
                }
                self.ctx
                    .handle
                    .metrics
                    .add_bytes_downloaded(chunk.len() as u64);
                Some(Ok(chunk))
            }
            Some(Err(err)) => {
                self.failed = true;
                Some(Err(err))
            }
            None => self.finish(),
        }
    }

    /// Compare at end of stream and record the trailing outcome.
    fn finish(&mut self) -> Option<Result<Bytes, crate::error::Error>> {
        match (self.calculator.take(), self.expected.take()) {
            (Some(calculator), Some(expected)) => {
                let actual = calculator.finalize();
                if actual.value() == expected.value() {
                    tracing::trace!(algorithm = %expected.algorithm(), "download validated");
                    self.ctx.handle.metrics.increment_checksums_validated();
                    let _ = self.trailing.set(TrailingMetadata {
                        checksum_validation: ChecksumValidation::Passed(expected.algorithm()),
                    });
                    None
                } else {
                    self.failed = true;
                    Some(Err(error::checksum_mismatch(ChecksumMismatch::new(
                        expected.algorithm(),
                        expected.value(),
                        actual.value(),
                    ))))
                }
            }
            _ => {
                let _ = self.trailing.set(TrailingMetadata {
                    checksum_validation: ChecksumValidation::Skipped(
                        SkipReason::ValidationDisabled,
                    ),
                });
                None
            }
        }
    }
}
