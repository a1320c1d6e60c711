/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// Operation builders
pub mod builders;

/// Abstractions for response bodies and consuming data streams
pub mod body;
mod checksums;
mod context;
mod handle;
mod input;
mod output;
mod trailing_meta;

use std::sync::Arc;

use crate::checksum::resolver::resolve_response_validation;
use crate::error;
use crate::storage::GetObjectRequest;
pub use body::Body;
pub use checksums::{ChecksumValidation, SkipReason};
use context::DownloadContext;
pub use handle::DownloadHandle;
/// Request type for downloads
pub use input::{DownloadInput, DownloadInputBuilder};
/// Response type for downloads
pub use output::DownloadOutput;
pub use trailing_meta::TrailingMetadata;
use trailing_meta::TrailingMetadataOnceLock;

/// Operation struct for single object download
#[derive(Clone, Default, Debug)]
pub(crate) struct Download;

impl Download {
    /// Execute a single `Download` transfer operation
    pub(crate) fn orchestrate(
        handle: Arc<crate::client::Handle>,
        input: DownloadInput,
    ) -> Result<DownloadHandle, error::Error> {
        handle.metrics.increment_operations_initiated();

        let ctx = DownloadContext {
            handle,
            request: Arc::new(input),
        };
        let trailing = TrailingMetadata::new_oncelock();
        Ok(DownloadHandle::new(
            ctx.clone(),
            tokio::spawn(send_download(ctx, trailing)),
        ))
    }
}

async fn send_download(
    ctx: DownloadContext,
    trailing: TrailingMetadataOnceLock,
) -> Result<DownloadOutput, error::Error> {
    let request = GetObjectRequest::new(
        ctx.request().bucket().expect("bucket is available"),
        ctx.request().key().expect("key is available"),
    );

    let response = match ctx.store().get_object(request).await {
        Ok(response) => response,
        Err(err) => {
            ctx.handle.metrics.increment_operations_failed();
            return Err(err);
        }
    };

    // The validation decision is made from the response metadata before the
    // first chunk is read, so a response with no usable checksum fails here
    // rather than after the body has been consumed.
    let expected = match resolve_response_validation(
        ctx.handle.config.response_checksum_validation(),
        &response.metadata.checksums,
    ) {
        Ok(expected) => expected,
        Err(err) => {
            ctx.handle.metrics.increment_operations_failed();
            return Err(err);
        }
    };
    tracing::trace!(
        algorithm = ?expected.as_ref().map(|c| c.algorithm()),
        content_length = response.metadata.content_length,
        "resolved response validation"
    );

    let body = Body::new(ctx.clone(), response.body, expected, trailing.clone());
    ctx.handle.metrics.increment_operations_completed();

    Ok(DownloadOutput {
        object_meta: response.metadata,
        body,
        trailing,
    })
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use blobstore_mock::MemoryStore;
    use bytes::Bytes;

    use blobstore_client::error::ErrorKind;
    use blobstore_client::io::InputStream;
    use blobstore_client::operation::download::{ChecksumValidation, SkipReason};
    use blobstore_client::types::{ChecksumAlgorithm, ResponseChecksumValidation};

    fn test_client(store: Arc<MemoryStore>) -> blobstore_client::Client {
        let config = blobstore_client::Config::builder().store(store).build();
        blobstore_client::Client::new(config)
    }

    async fn put_test_object(client: &blobstore_client::Client, body: Bytes) {
        client
            .upload()
            .bucket("test-bucket")
            .key("test-key")
            .body(InputStream::from(body))
            .initiate()
            .unwrap()
            .join()
            .await
            .unwrap();
    }

    async fn drain(body: &mut blobstore_client::operation::download::Body) -> Result<Bytes, blobstore_client::error::Error> {
        let mut collected = Vec::new();
        while let Some(chunk) = body.next().await {
            collected.extend_from_slice(&chunk?);
        }
        Ok(Bytes::from(collected))
    }

    #[tokio::test]
    async fn test_basic_download_object() {
        let store = Arc::new(MemoryStore::new());
        let client = test_client(store);
        let payload = Bytes::from_static(b"quick download check");
        put_test_object(&client, payload.clone()).await;

        let mut output = client
            .download()
            .bucket("test-bucket")
            .key("test-key")
            .initiate()
            .unwrap()
            .join()
            .await
            .unwrap();

        assert!(output.checksum_validation().is_none());
        let data = drain(output.body_mut()).await.unwrap();
        assert_eq!(data, payload);
        assert_eq!(
            output.checksum_validation(),
            Some(&ChecksumValidation::Passed(ChecksumAlgorithm::Crc32))
        );
    }

    #[tokio::test]
    async fn test_download_detects_corruption() {
        let store = Arc::new(MemoryStore::new());
        let client = test_client(store.clone());
        put_test_object(&client, Bytes::from_static(b"pristine payload")).await;
        store.corrupt_object("test-bucket", "test-key");

        let mut output = client
            .download()
            .bucket("test-bucket")
            .key("test-key")
            .initiate()
            .unwrap()
            .join()
            .await
            .unwrap();

        let err = drain(output.body_mut()).await.unwrap_err();
        assert!(matches!(err.kind(), ErrorKind::ChecksumMismatch(_)));
        assert!(output.checksum_validation().is_none());
    }

    #[tokio::test]
    async fn test_download_skips_validation_when_not_required() {
        let store = Arc::new(MemoryStore::new());
        let upload_client = test_client(store.clone());
        put_test_object(&upload_client, Bytes::from_static(b"no strings attached")).await;

        let config = blobstore_client::Config::builder()
            .store(store)
            .response_checksum_validation(ResponseChecksumValidation::WhenRequired)
            .build();
        let client = blobstore_client::Client::new(config);

        let mut output = client
            .download()
            .bucket("test-bucket")
            .key("test-key")
            .initiate()
            .unwrap()
            .join()
            .await
            .unwrap();

        drain(output.body_mut()).await.unwrap();
        assert_eq!(
            output.checksum_validation(),
            Some(&ChecksumValidation::Skipped(SkipReason::ValidationDisabled))
        );
        assert_eq!(client.metrics().checksums_validated(), 0);
    }

    #[tokio::test]
    async fn test_download_missing_object() {
        let store = Arc::new(MemoryStore::new());
        let client = test_client(store);

        let err = client
            .download()
            .bucket("test-bucket")
            .key("missing-key")
            .initiate()
            .unwrap()
            .join()
            .await
            .unwrap_err();

        assert_eq!(err.kind(), &ErrorKind::NotFound);
        assert_eq!(client.metrics().operations_failed(), 1);
    }
}
