/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use crate::error;
use crate::io::InputStream;
use crate::operation::upload::{ChecksumStrategy, UploadHandle};

/// Input type for uploading a single object
#[non_exhaustive]
#[derive(Debug, Default)]
pub struct UploadInput {
    /// The bucket to store the object in.
    pub(crate) bucket: Option<String>,

    /// The key to store the object under.
    pub(crate) key: Option<String>,

    /// The object content.
    pub(crate) body: InputStream,

    /// The per-request checksum override, if any.
    pub(crate) checksum_strategy: Option<ChecksumStrategy>,
}

impl UploadInput {
    /// Create a new builder for `UploadInput`
    pub fn builder() -> UploadInputBuilder {
        UploadInputBuilder::default()
    }

    /// The bucket to store the object in.
    pub fn bucket(&self) -> Option<&str> {
        self.bucket.as_deref()
    }

    /// The key to store the object under.
    pub fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    /// The per-request checksum override, if any.
    pub fn checksum_strategy(&self) -> Option<&ChecksumStrategy> {
        self.checksum_strategy.as_ref()
    }

    /// Split the body from the input, replacing it with an empty stream.
    pub(crate) fn take_body(&mut self) -> InputStream {
        std::mem::take(&mut self.body)
    }
}

/// A builder for [`UploadInput`]
#[non_exhaustive]
#[derive(Debug, Default)]
pub struct UploadInputBuilder {
    bucket: Option<String>,
    key: Option<String>,
    body: Option<InputStream>,
    checksum_strategy: Option<ChecksumStrategy>,
}

impl UploadInputBuilder {
    /// The bucket to store the object in.
    pub fn bucket(mut self, input: impl Into<String>) -> Self {
        self.bucket = Some(input.into());
        self
    }

    /// The bucket to store the object in.
    pub fn set_bucket(mut self, input: Option<String>) -> Self {
        self.bucket = input;
        self
    }

    /// The bucket to store the object in.
    pub fn get_bucket(&self) -> &Option<String> {
        &self.bucket
    }

    /// The key to store the object under.
    pub fn key(mut self, input: impl Into<String>) -> Self {
        self.key = Some(input.into());
        self
    }

    /// The key to store the object under.
    pub fn set_key(mut self, input: Option<String>) -> Self {
        self.key = input;
        self
    }

    /// The key to store the object under.
    pub fn get_key(&self) -> &Option<String> {
        &self.key
    }

    /// The object content.
    pub fn body(mut self, input: InputStream) -> Self {
        self.body = Some(input);
        self
    }

    /// The object content.
    pub fn set_body(mut self, input: Option<InputStream>) -> Self {
        self.body = input;
        self
    }

    /// The checksum strategy to use for this one request.
    ///
    /// A strategy always wins over the client-level checksum policy.
    pub fn checksum_strategy(mut self, input: ChecksumStrategy) -> Self {
        self.checksum_strategy = Some(input);
        self
    }

    /// The checksum strategy to use for this one request.
    pub fn set_checksum_strategy(mut self, input: Option<ChecksumStrategy>) -> Self {
        self.checksum_strategy = input;
        self
    }

    /// The checksum strategy to use for this one request.
    pub fn get_checksum_strategy(&self) -> &Option<ChecksumStrategy> {
        &self.checksum_strategy
    }

    /// Consume the builder and construct an [`UploadInput`]
    pub fn build(self) -> Result<UploadInput, crate::error::Error> {
        let bucket = self
            .bucket
            .filter(|b| !b.is_empty())
            .ok_or_else(|| error::invalid_input("bucket is required"))?;
        let key = self
            .key
            .filter(|k| !k.is_empty())
            .ok_or_else(|| error::invalid_input("key is required"))?;

        Ok(UploadInput {
            bucket: Some(bucket),
            key: Some(key),
            body: self.body.unwrap_or_default(),
            checksum_strategy: self.checksum_strategy,
        })
    }

    /// Initiate an upload with this input using the given client.
    pub fn initiate_with(self, client: &crate::Client) -> Result<UploadHandle, crate::error::Error> {
        let input = self.build()?;
        crate::operation::upload::Upload::orchestrate(client.handle.clone(), input)
    }
}

#[cfg(test)]
mod tests {
    use super::UploadInput;
    use crate::error::ErrorKind;

    #[test]
    fn test_bucket_and_key_required() {
        let err = UploadInput::builder().key("k").build().unwrap_err();
        assert_eq!(err.kind(), &ErrorKind::InputInvalid);

        let err = UploadInput::builder()
            .bucket("b")
            .key("")
            .build()
            .unwrap_err();
        assert_eq!(err.kind(), &ErrorKind::InputInvalid);

        let input = UploadInput::builder().bucket("b").key("k").build().unwrap();
        assert_eq!(input.bucket(), Some("b"));
        assert_eq!(input.key(), Some("k"));
        assert!(input.checksum_strategy().is_none());
    }
}
