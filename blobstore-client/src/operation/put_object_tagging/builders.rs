/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::sync::Arc;

use crate::operation::put_object_tagging::{PutObjectTaggingHandle, PutObjectTaggingInputBuilder};
use crate::types::{ChecksumAlgorithm, Tagging};

/// Fluent builder for constructing a tag set replacement
#[derive(Debug)]
pub struct PutObjectTaggingFluentBuilder {
    handle: Arc<crate::client::Handle>,
    inner: PutObjectTaggingInputBuilder,
}

impl PutObjectTaggingFluentBuilder {
    pub(crate) fn new(handle: Arc<crate::client::Handle>) -> Self {
        Self {
            handle,
            inner: PutObjectTaggingInputBuilder::default(),
        }
    }

    /// Initiate the tag set replacement
    pub fn initiate(self) -> Result<PutObjectTaggingHandle, crate::error::Error> {
        let input = self.inner.build()?;
        crate::operation::put_object_tagging::PutObjectTagging::orchestrate(self.handle, input)
    }

    /// The bucket containing the object.
    pub fn bucket(mut self, input: impl Into<String>) -> Self {
        self.inner = self.inner.bucket(input);
        self
    }

    /// The bucket containing the object.
    pub fn set_bucket(mut self, input: Option<String>) -> Self {
        self.inner = self.inner.set_bucket(input);
        self
    }

    /// The key of the object.
    pub fn key(mut self, input: impl Into<String>) -> Self {
        self.inner = self.inner.key(input);
        self
    }

    /// The key of the object.
    pub fn set_key(mut self, input: Option<String>) -> Self {
        self.inner = self.inner.set_key(input);
        self
    }

    /// The replacement tag set.
    pub fn tagging(mut self, input: Tagging) -> Self {
        self.inner = self.inner.tagging(input);
        self
    }

    /// The replacement tag set.
    pub fn set_tagging(mut self, input: Option<Tagging>) -> Self {
        self.inner = self.inner.set_tagging(input);
        self
    }

    /// The algorithm to compute the tag payload checksum with.
    pub fn checksum_algorithm(mut self, input: ChecksumAlgorithm) -> Self {
        self.inner = self.inner.checksum_algorithm(input);
        self
    }

    /// The algorithm to compute the tag payload checksum with.
    pub fn set_checksum_algorithm(mut self, input: Option<ChecksumAlgorithm>) -> Self {
        self.inner = self.inner.set_checksum_algorithm(input);
        self
    }
}
