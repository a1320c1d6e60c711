/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use crate::error;
use crate::operation::download::DownloadHandle;

/// Input type for downloading a single object
#[non_exhaustive]
#[derive(Debug, Clone, Default)]
pub struct DownloadInput {
    /// The bucket containing the object.
    pub(crate) bucket: Option<String>,

    /// The key of the object.
    pub(crate) key: Option<String>,
}

impl DownloadInput {
    /// Create a new builder for `DownloadInput`
    pub fn builder() -> DownloadInputBuilder {
        DownloadInputBuilder::default()
    }

    /// The bucket containing the object.
    pub fn bucket(&self) -> Option<&str> {
        self.bucket.as_deref()
    }

    /// The key of the object.
    pub fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }
}

/// A builder for [`DownloadInput`]
#[non_exhaustive]
#[derive(Debug, Clone, Default)]
pub struct DownloadInputBuilder {
    bucket: Option<String>,
    key: Option<String>,
}

impl DownloadInputBuilder {
    /// The bucket containing the object.
    pub fn bucket(mut self, input: impl Into<String>) -> Self {
        self.bucket = Some(input.into());
        self
    }

    /// The bucket containing the object.
    pub fn set_bucket(mut self, input: Option<String>) -> Self {
        self.bucket = input;
        self
    }

    /// The key of the object.
    pub fn key(mut self, input: impl Into<String>) -> Self {
        self.key = Some(input.into());
        self
    }

    /// The key of the object.
    pub fn set_key(mut self, input: Option<String>) -> Self {
        self.key = input;
        self
    }

    /// Consume the builder and construct a [`DownloadInput`]
    pub fn build(self) -> Result<DownloadInput, crate::error::Error> {
        let bucket = self
            .bucket
            .filter(|b| !b.is_empty())
            .ok_or_else(|| error::invalid_input("bucket is required"))?;
        let key = self
            .key
            .filter(|k| !k.is_empty())
            .ok_or_else(|| error::invalid_input("key is required"))?;

        Ok(DownloadInput {
            bucket: Some(bucket),
            key: Some(key),
        })
    }

    /// Initiate a download with this input using the given client.
    pub fn initiate_with(
        self,
        client: &crate::Client,
    ) -> Result<DownloadHandle, crate::error::Error> {
        let input = self.build()?;
        crate::operation::download::Download::orchestrate(client.handle.clone(), input)
    }
}
