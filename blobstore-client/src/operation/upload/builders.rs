/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::sync::Arc;

use crate::io::InputStream;

use super::{ChecksumStrategy, UploadHandle, UploadInputBuilder};

/// Fluent builder for constructing a single object upload
#[derive(Debug)]
pub struct UploadFluentBuilder {
    handle: Arc<crate::client::Handle>,
    inner: UploadInputBuilder,
}

impl UploadFluentBuilder {
    pub(crate) fn new(handle: Arc<crate::client::Handle>) -> Self {
        Self {
            handle,
            inner: ::std::default::Default::default(),
        }
    }

    /// Initiate an upload for a single object.
    ///
    /// Checksum resolution happens here, before any bytes move: an override
    /// that is incompatible with the request fails fast. The returned handle
    /// must be `join()`ed to drive the upload to completion.
    pub fn initiate(self) -> Result<UploadHandle, crate::error::Error> {
        let input = self.inner.build()?;
        crate::operation::upload::Upload::orchestrate(self.handle, input)
    }

    /// The bucket to store the object in.
    pub fn bucket(mut self, input: impl Into<String>) -> Self {
        self.inner = self.inner.bucket(input.into());
        self
    }

    /// The bucket to store the object in.
    pub fn set_bucket(mut self, input: Option<String>) -> Self {
        self.inner = self.inner.set_bucket(input);
        self
    }

    /// The key to store the object under.
    pub fn key(mut self, input: impl Into<String>) -> Self {
        self.inner = self.inner.key(input.into());
        self
    }

    /// The key to store the object under.
    pub fn set_key(mut self, input: Option<String>) -> Self {
        self.inner = self.inner.set_key(input);
        self
    }

    /// The object content.
    pub fn body(mut self, input: InputStream) -> Self {
        self.inner = self.inner.body(input);
        self
    }

    /// The checksum strategy to use for this one request.
    ///
    /// A strategy always wins over the client-level checksum policy.
    pub fn checksum_strategy(mut self, input: ChecksumStrategy) -> Self {
        self.inner = self.inner.checksum_strategy(input);
        self
    }

    /// The checksum strategy to use for this one request.
    pub fn set_checksum_strategy(mut self, input: Option<ChecksumStrategy>) -> Self {
        self.inner = self.inner.set_checksum_strategy(input);
        self
    }
}
