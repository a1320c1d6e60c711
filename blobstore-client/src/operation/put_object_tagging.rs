/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// Operation builders
pub mod builders;

mod context;
mod handle;
mod input;
mod output;

use std::sync::Arc;

use crate::checksum::resolver::resolve_upload_checksum;
use crate::error;
use crate::io::InputStream;
use crate::operation::upload::ChecksumStrategy;
use crate::storage::{PutObjectTaggingRequest, StorageBody};
use context::PutObjectTaggingContext;
pub use handle::PutObjectTaggingHandle;
/// Request type for tag set replacement
pub use input::{PutObjectTaggingInput, PutObjectTaggingInputBuilder};
/// Response type for tag set replacement
pub use output::{PutObjectTaggingOutput, PutObjectTaggingOutputBuilder};

/// Operation struct for replacing the tag set of an object
#[derive(Clone, Default, Debug)]
pub(crate) struct PutObjectTagging;

impl PutObjectTagging {
    /// Execute a single `PutObjectTagging` operation
    pub(crate) fn orchestrate(
        handle: Arc<crate::client::Handle>,
        input: PutObjectTaggingInput,
    ) -> Result<PutObjectTaggingHandle, error::Error> {
        let payload = input
            .tagging()
            .expect("tagging is available")
            .to_payload();
        let content_length = payload.len() as u64;

        // This operation mandates a checksum over the tag payload. The
        // payload never splits, so an override is honored unconditionally
        // and the checksum is computed even under `WhenRequired`.
        let strategy = input
            .checksum_algorithm()
            .map(|algorithm| ChecksumStrategy::builder().algorithm(algorithm).build())
            .transpose()?;
        let checksum = resolve_upload_checksum(
            strategy.as_ref(),
            handle.config.request_checksum_calculation(),
            true,
            false,
        )?;
        tracing::trace!(
            algorithm = ?checksum.algorithm(),
            content_length,
            "resolved tag payload checksum"
        );

        handle.metrics.increment_operations_initiated();
        handle.metrics.increment_checksums_calculated();

        let ctx = PutObjectTaggingContext {
            handle,
            request: Arc::new(input),
        };
        Ok(PutObjectTaggingHandle::new(
            ctx.clone(),
            tokio::spawn(send_put_object_tagging(ctx, payload, checksum)),
        ))
    }
}

async fn send_put_object_tagging(
    ctx: PutObjectTaggingContext,
    payload: bytes::Bytes,
    checksum: crate::checksum::UploadChecksum,
) -> Result<PutObjectTaggingOutput, error::Error> {
    let content_length = payload.len() as u64;
    let body = StorageBody::decorated(InputStream::from(payload), checksum, content_length);
    let request = PutObjectTaggingRequest::new(
        ctx.request().bucket().expect("bucket is available"),
        ctx.request().key().expect("key is available"),
        ctx.request()
            .tagging()
            .expect("tagging is available")
            .clone(),
        body,
    );

    match ctx.store().put_object_tagging(request).await {
        Ok(response) => {
            ctx.handle.metrics.increment_operations_completed();
            Ok(PutObjectTaggingOutputBuilder::from(response).build())
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

    use blobstore_client::io::InputStream;
    use blobstore_client::types::{ChecksumAlgorithm, RequestChecksumCalculation, Tag, Tagging};

    async fn put_test_object(client: &blobstore_client::Client) {
        client
            .upload()
            .bucket("test-bucket")
            .key("test-key")
            .body(InputStream::from(Bytes::from_static(b"tagged object")))
            .initiate()
            .unwrap()
            .join()
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_tagging_always_carries_checksum() {
        let store = Arc::new(MemoryStore::new());
        let config = blobstore_client::Config::builder()
            .store(store.clone())
            .request_checksum_calculation(RequestChecksumCalculation::WhenRequired)
            .build();
        let client = blobstore_client::Client::new(config);
        put_test_object(&client).await;

        let tagging = Tagging::builder().tag_set(Tag::new("env", "dev")).build();
        let output = client
            .put_object_tagging()
            .bucket("test-bucket")
            .key("test-key")
            .tagging(tagging.clone())
            .initiate()
            .unwrap()
            .join()
            .await
            .unwrap();

        // mandatory checksum defaults to CRC32 even under WhenRequired
        assert!(output.checksums().crc32().is_some());
        assert_eq!(store.tag_set("test-bucket", "test-key"), tagging.tag_set());
    }

    #[tokio::test]
    async fn test_tagging_honors_algorithm_override() {
        let store = Arc::new(MemoryStore::new());
        let config = blobstore_client::Config::builder().store(store).build();
        let client = blobstore_client::Client::new(config);
        put_test_object(&client).await;

        let tagging = Tagging::builder()
            .tag_set(Tag::new("team", "storage"))
            .build();
        let output = client
            .put_object_tagging()
            .bucket("test-bucket")
            .key("test-key")
            .tagging(tagging)
            .checksum_algorithm(ChecksumAlgorithm::Sha256)
            .initiate()
            .unwrap()
            .join()
            .await
            .unwrap();

        assert!(output.checksums().sha256().is_some());
        assert!(output.checksums().crc32().is_none());
    }

    #[tokio::test]
    async fn test_tagging_missing_object() {
        let store = Arc::new(MemoryStore::new());
        let config = blobstore_client::Config::builder().store(store).build();
        let client = blobstore_client::Client::new(config);

        let tagging = Tagging::builder().tag_set(Tag::new("env", "dev")).build();
        let err = client
            .put_object_tagging()
            .bucket("test-bucket")
            .key("missing-key")
            .tagging(tagging)
            .initiate()
            .unwrap()
            .join()
            .await
            .unwrap_err();

        assert_eq!(err.kind(), &blobstore_client::error::ErrorKind::NotFound);
    }
}
