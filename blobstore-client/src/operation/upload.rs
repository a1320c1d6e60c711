/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// Operation builders
pub mod builders;
mod checksum_strategy;
mod input;
mod output;

mod context;
mod handle;

pub use checksum_strategy::{ChecksumStrategy, ChecksumStrategyBuilder};

use std::sync::Arc;

use crate::checksum::resolver::resolve_upload_checksum;
use crate::checksum::UploadChecksum;
use crate::error;
use crate::io::InputStream;
use crate::storage::{PutObjectRequest, StorageBody};
use context::UploadContext;
pub use handle::UploadHandle;
/// Request type for uploads
pub use input::{UploadInput, UploadInputBuilder};
/// Response type for uploads
pub use output::{UploadOutput, UploadOutputBuilder};

/// Operation struct for single object upload
#[derive(Clone, Default, Debug)]
pub(crate) struct Upload;

impl Upload {
    /// Execute a single `Upload` operation
    pub(crate) fn orchestrate(
        handle: Arc<crate::client::Handle>,
        mut input: UploadInput,
    ) -> Result<UploadHandle, error::Error> {
        let stream = input.take_body();

        // The whole-object path needs to know the full content length up
        // front; the upper `size_hint` is exact for both buffered and
        // file-backed streams.
        let content_length = stream
            .size_hint()
            .upper()
            .ok_or_else(crate::io::error::Error::upper_bound_size_hint_required)?;

        // Resolve the checksum decision before any bytes move so that an
        // incompatible override fails fast.
        let body_splits = content_length >= handle.mpu_threshold_bytes();
        let checksum = resolve_upload_checksum(
            input.checksum_strategy(),
            handle.config.request_checksum_calculation(),
            false,
            body_splits,
        )?;
        tracing::trace!(
            algorithm = ?checksum.algorithm(),
            content_length,
            "resolved upload checksum"
        );

        handle.metrics.increment_operations_initiated();
        if matches!(checksum, UploadChecksum::Calculate(_)) {
            handle.metrics.increment_checksums_calculated();
        }

        let ctx = UploadContext {
            handle,
            request: Arc::new(input),
        };
        Ok(UploadHandle::new(
            ctx.clone(),
            tokio::spawn(send_upload(ctx, stream, checksum, content_length)),
        ))
    }
}

async fn send_upload(
    ctx: UploadContext,
    stream: InputStream,
    checksum: UploadChecksum,
    content_length: u64,
) -> Result<UploadOutput, error::Error> {
    let body = StorageBody::decorated(stream, checksum, content_length);
    let request = PutObjectRequest::new(
        ctx.request().bucket().expect("bucket is available"),
        ctx.request().key().expect("key is available"),
        body,
    );

    match ctx.store().put_object(request).await {
        Ok(response) => {
            ctx.handle.metrics.add_bytes_uploaded(content_length);
            ctx.handle.metrics.increment_operations_completed();
            Ok(UploadOutputBuilder::from(response).build())
        }
        Err(err) => {
            ctx.handle.metrics.increment_operations_failed();
            Err(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use blobstore_mock::MemoryStore;
    use bytes::Bytes;

    use blobstore_client::error::ErrorKind;
    use blobstore_client::io::InputStream;
    use blobstore_client::metrics::unit::ByteUnit;
    use blobstore_client::operation::upload::ChecksumStrategy;
    use blobstore_client::types::PartSize;

    fn test_client(store: Arc<MemoryStore>) -> blobstore_client::Client {
        let config = blobstore_client::Config::builder().store(store).build();
        blobstore_client::Client::new(config)
    }

    #[tokio::test]
    async fn test_basic_upload_object() {
        let store = Arc::new(MemoryStore::new());
        let client = test_client(store.clone());
        let body = Bytes::from_static(b"every adolescent dog goes bonkers early");

        let handle = client
            .upload()
            .bucket("test-bucket")
            .key("test-key")
            .body(InputStream::from(body))
            .initiate()
            .unwrap();
        let response = handle.join().await.unwrap();

        assert!(response.e_tag().is_some());
        // default policy computes CRC32 and nothing else
        assert!(response.checksum_crc32().is_some());
        assert!(response.checksum_sha1().is_none());
    }

    #[tokio::test]
    async fn test_split_body_rejects_override_before_transfer() {
        let store = Arc::new(MemoryStore::new());
        let config = blobstore_client::Config::builder()
            .store(store)
            .multipart_threshold(PartSize::Target(5 * ByteUnit::Mebibyte.as_bytes_u64()))
            .build();
        let client = blobstore_client::Client::new(config);

        let payload = vec![7u8; 5 * ByteUnit::Mebibyte.as_bytes_usize()];
        let err = client
            .upload()
            .bucket("test-bucket")
            .key("test-key")
            .body(InputStream::from(payload))
            .checksum_strategy(ChecksumStrategy::with_calculated_sha256())
            .initiate()
            .unwrap_err();

        assert_eq!(err.kind(), &ErrorKind::UnsupportedAlgorithmForOperation);
    }

    #[tokio::test]
    async fn test_upload_metrics() {
        let store = Arc::new(MemoryStore::new());
        let client = test_client(store);

        assert_eq!(client.metrics().operations_initiated(), 0);
        assert_eq!(client.metrics().active_operations(), 0);

        let body = Bytes::from_static(b"test data for metrics");
        let handle = client
            .upload()
            .bucket("test-bucket")
            .key("test-key")
            .body(InputStream::from(body.clone()))
            .initiate()
            .unwrap();

        assert_eq!(client.metrics().operations_initiated(), 1);
        assert_eq!(client.metrics().active_operations(), 1);

        let _result = handle.join().await.unwrap();

        assert_eq!(client.metrics().operations_completed(), 1);
        assert_eq!(client.metrics().bytes_uploaded(), body.len() as u64);
        assert_eq!(client.metrics().checksums_calculated(), 1);
        assert_eq!(client.metrics().active_operations(), 0);
        assert_eq!(client.metrics().operations_failed(), 0);
    }
}
