/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::sync::Arc;

use crate::metrics::aggregators::ClientMetrics;
use crate::metrics::unit::ByteUnit;
use crate::types::PartSize;
use crate::Config;

/// Object storage client with end-to-end checksum based data integrity.
#[derive(Debug, Clone)]
pub struct Client {
    pub(crate) handle: Arc<Handle>,
}

/// Whatever is needed to carry out operations, e.g. config, store, metrics
#[derive(Debug)]
pub(crate) struct Handle {
    pub(crate) config: crate::Config,
    pub(crate) metrics: ClientMetrics,
}

impl Handle {
    /// Get the concrete minimum object size in bytes at which a body leaves
    /// the whole-object path and is handed to multipart orchestration.
    pub(crate) fn mpu_threshold_bytes(&self) -> u64 {
        match self.config.multipart_threshold() {
            PartSize::Auto => 16 * ByteUnit::Mebibyte.as_bytes_u64(),
            PartSize::Target(explicit) => *explicit,
        }
    }
}

impl Drop for Handle {
    fn drop(&mut self) {
        // Log final metrics summary when the client is dropped
        tracing::debug!(
            "Client metrics summary - Operations initiated: {}, completed: {}, failed: {}, bytes uploaded: {}, bytes downloaded: {}, checksums calculated: {}, validated: {}",
            self.metrics.operations_initiated(),
            self.metrics.operations_completed(),
            self.metrics.operations_failed(),
            self.metrics.bytes_uploaded(),
            self.metrics.bytes_downloaded(),
            self.metrics.checksums_calculated(),
            self.metrics.checksums_validated()
        );
    }
}

impl Client {
    /// Creates a new client from a client config.
    pub fn new(config: Config) -> Client {
        let metrics = ClientMetrics::new();
        let handle = Arc::new(Handle { config, metrics });
        Client { handle }
    }

    /// Returns the client's configuration
    pub fn config(&self) -> &Config {
        &self.handle.config
    }

    /// Returns the client's metrics
    pub fn metrics(&self) -> &ClientMetrics {
        &self.handle.metrics
    }

    /// Upload a single object to the storage backend.
    ///
    /// Constructs a fluent builder for the
    /// [`Upload`](crate::operation::upload::builders::UploadFluentBuilder) operation.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use std::error::Error;
    /// use std::path::Path;
    /// use blobstore_client::io::InputStream;
    ///
    /// async fn upload_file(
    ///     client: &blobstore_client::Client,
    ///     path: impl AsRef<Path>
    /// ) -> Result<(), Box<dyn Error>> {
    ///     let stream = InputStream::from_path(path)?;
    ///     let handle = client.upload()
    ///         .bucket("my-bucket")
    ///         .key("my-key")
    ///         .body(stream)
    ///         .initiate()?;
    ///
    ///     // initiate() will return before the upload is complete.
    ///     // Call the `join()` method on the returned handle to drive the upload to completion.
    ///     let response = handle.join().await?;
    ///     // ... do something with response
    ///     Ok(())
    /// }
    /// ```
    pub fn upload(&self) -> crate::operation::upload::builders::UploadFluentBuilder {
        crate::operation::upload::builders::UploadFluentBuilder::new(self.handle.clone())
    }

    /// Download a single object from the storage backend.
    ///
    /// Received bytes stream through the response validator; when client
    /// policy enables validation the body fails with a checksum mismatch
    /// error rather than yielding corrupted content silently.
    ///
    /// Constructs a fluent builder for the
    /// [`Download`](crate::operation::download::builders::DownloadFluentBuilder) operation.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use std::error::Error;
    ///
    /// async fn get_object(client: &blobstore_client::Client) -> Result<(), Box<dyn Error>> {
    ///     let handle = client
    ///         .download()
    ///         .bucket("my-bucket")
    ///         .key("my-key")
    ///         .initiate()?;
    ///
    ///     let mut output = handle.join().await?;
    ///
    ///     // process data off the body...
    ///     while let Some(chunk) = output.body_mut().next().await {
    ///         let _chunk = chunk?;
    ///     }
    ///
    ///     Ok(())
    /// }
    /// ```
    pub fn download(&self) -> crate::operation::download::builders::DownloadFluentBuilder {
        crate::operation::download::builders::DownloadFluentBuilder::new(self.handle.clone())
    }

    /// Replace the tag set of an object.
    ///
    /// This is a mandatory-checksum operation: a checksum over the serialized
    /// tag payload is always computed and sent, even when the client policy
    /// would otherwise skip request checksums.
    ///
    /// Constructs a fluent builder for the
    /// [`PutObjectTagging`](crate::operation::put_object_tagging::builders::PutObjectTaggingFluentBuilder)
    /// operation.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use std::error::Error;
    /// use blobstore_client::types::{Tag, Tagging};
    ///
    /// async fn tag_object(client: &blobstore_client::Client) -> Result<(), Box<dyn Error>> {
    ///     let tagging = Tagging::builder()
    ///         .tag_set(Tag::new("env", "dev"))
    ///         .build();
    ///
    ///     let handle = client
    ///         .put_object_tagging()
    ///         .bucket("my-bucket")
    ///         .key("my-key")
    ///         .tagging(tagging)
    ///         .initiate()?;
    ///
    ///     let response = handle.join().await?;
    ///     println!("verified: {:?}", response.checksums());
    ///     Ok(())
    /// }
    /// ```
    pub fn put_object_tagging(
        &self,
    ) -> crate::operation::put_object_tagging::builders::PutObjectTaggingFluentBuilder {
        crate::operation::put_object_tagging::builders::PutObjectTaggingFluentBuilder::new(
            self.handle.clone(),
        )
    }
}
