/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use crate::error;
use crate::operation::put_object_tagging::PutObjectTaggingHandle;
use crate::types::{ChecksumAlgorithm, Tagging};

/// Input type for replacing the tag set of an object
#[non_exhaustive]
#[derive(Debug, Clone, Default)]
pub struct PutObjectTaggingInput {
    /// The bucket containing the object.
    pub(crate) bucket: Option<String>,

    /// The key of the object.
    pub(crate) key: Option<String>,

    /// The replacement tag set.
    pub(crate) tagging: Option<Tagging>,

    /// Per-request checksum algorithm override.
    pub(crate) checksum_algorithm: Option<ChecksumAlgorithm>,
}

impl PutObjectTaggingInput {
    /// Create a new builder for `PutObjectTaggingInput`
    pub fn builder() -> PutObjectTaggingInputBuilder {
        PutObjectTaggingInputBuilder::default()
    }

    /// The bucket containing the object.
    pub fn bucket(&self) -> Option<&str> {
        self.bucket.as_deref()
    }

    /// The key of the object.
    pub fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    /// The replacement tag set.
    pub fn tagging(&self) -> Option<&Tagging> {
        self.tagging.as_ref()
    }

    /// The algorithm to compute the tag payload checksum with, if the caller
    /// chose one. This operation always carries a checksum; without an
    /// override the default algorithm is used.
    pub fn checksum_algorithm(&self) -> Option<ChecksumAlgorithm> {
        self.checksum_algorithm
    }
}

/// A builder for [`PutObjectTaggingInput`]
#[non_exhaustive]
#[derive(Debug, Clone, Default)]
pub struct PutObjectTaggingInputBuilder {
    bucket: Option<String>,
    key: Option<String>,
    tagging: Option<Tagging>,
    checksum_algorithm: Option<ChecksumAlgorithm>,
}

impl PutObjectTaggingInputBuilder {
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

    /// The replacement tag set.
    pub fn tagging(mut self, input: Tagging) -> Self {
        self.tagging = Some(input);
        self
    }

    /// The replacement tag set.
    pub fn set_tagging(mut self, input: Option<Tagging>) -> Self {
        self.tagging = input;
        self
    }

    /// The algorithm to compute the tag payload checksum with.
    pub fn checksum_algorithm(mut self, input: ChecksumAlgorithm) -> Self {
        self.checksum_algorithm = Some(input);
        self
    }

    /// The algorithm to compute the tag payload checksum with.
    pub fn set_checksum_algorithm(mut self, input: Option<ChecksumAlgorithm>) -> Self {
        self.checksum_algorithm = input;
        self
    }

    /// Consume the builder and construct a [`PutObjectTaggingInput`]
    pub fn build(self) -> Result<PutObjectTaggingInput, crate::error::Error> {
        let bucket = self
            .bucket
            .filter(|b| !b.is_empty())
            .ok_or_else(|| error::invalid_input("bucket is required"))?;
        let key = self
            .key
            .filter(|k| !k.is_empty())
            .ok_or_else(|| error::invalid_input("key is required"))?;
        let tagging = self
            .tagging
            .ok_or_else(|| error::invalid_input("tagging is required"))?;

        Ok(PutObjectTaggingInput {
            bucket: Some(bucket),
            key: Some(key),
            tagging: Some(tagging),
            checksum_algorithm: self.checksum_algorithm,
        })
    }

    /// Initiate a tag set replacement with this input using the given client.
    pub fn initiate_with(
        self,
        client: &crate::Client,
    ) -> Result<PutObjectTaggingHandle, crate::error::Error> {
        let input = self.build()?;
        crate::operation::put_object_tagging::PutObjectTagging::orchestrate(
            client.handle.clone(),
            input,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Tag;

    #[test]
    fn test_build_requires_tagging() {
        let err = PutObjectTaggingInput::builder()
            .bucket("test-bucket")
            .key("test-key")
            .build()
            .unwrap_err();
        assert_eq!(err.kind(), &crate::error::ErrorKind::InputInvalid);
    }

    #[test]
    fn test_build_carries_override() {
        let input = PutObjectTaggingInput::builder()
            .bucket("test-bucket")
            .key("test-key")
            .tagging(Tagging::builder().tag_set(Tag::new("env", "dev")).build())
            .checksum_algorithm(ChecksumAlgorithm::Sha256)
            .build()
            .unwrap();
        assert_eq!(input.checksum_algorithm(), Some(ChecksumAlgorithm::Sha256));
    }
}
