/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use crate::storage::PutObjectResponse;
use crate::types::ObjectChecksums;

/// Response type for uploading a single object
#[non_exhaustive]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UploadOutput {
    /// Entity tag for the stored object.
    pub(crate) e_tag: Option<String>,

    /// Checksums stored with the object. A field is populated only when the
    /// request actually carried a checksum for that algorithm.
    pub(crate) checksums: ObjectChecksums,
}

impl UploadOutput {
    /// Create a new builder for `UploadOutput`
    pub fn builder() -> UploadOutputBuilder {
        UploadOutputBuilder::default()
    }

    /// Entity tag for the stored object.
    pub fn e_tag(&self) -> Option<&str> {
        self.e_tag.as_deref()
    }

    /// The checksums stored with the object.
    pub fn checksums(&self) -> &ObjectChecksums {
        &self.checksums
    }

    /// The base64-encoded, 32-bit CRC32 checksum of the object. Only present
    /// when it was uploaded with the object.
    pub fn checksum_crc32(&self) -> Option<&str> {
        self.checksums.crc32()
    }

    /// The base64-encoded, 32-bit CRC32C checksum of the object. Only present
    /// when it was uploaded with the object.
    pub fn checksum_crc32_c(&self) -> Option<&str> {
        self.checksums.crc32_c()
    }

    /// The base64-encoded, 160-bit SHA-1 digest of the object. Only present
    /// when it was uploaded with the object.
    pub fn checksum_sha1(&self) -> Option<&str> {
        self.checksums.sha1()
    }

    /// The base64-encoded, 256-bit SHA-256 digest of the object. Only present
    /// when it was uploaded with the object.
    pub fn checksum_sha256(&self) -> Option<&str> {
        self.checksums.sha256()
    }
}

/// A builder for [`UploadOutput`]
#[non_exhaustive]
#[derive(Debug, Clone, Default)]
pub struct UploadOutputBuilder {
    e_tag: Option<String>,
    checksums: ObjectChecksums,
}

impl UploadOutputBuilder {
    /// Entity tag for the stored object.
    pub fn e_tag(mut self, input: impl Into<String>) -> Self {
        self.e_tag = Some(input.into());
        self
    }

    /// Entity tag for the stored object.
    pub fn set_e_tag(mut self, input: Option<String>) -> Self {
        self.e_tag = input;
        self
    }

    /// The checksums stored with the object.
    pub fn checksums(mut self, input: ObjectChecksums) -> Self {
        self.checksums = input;
        self
    }

    /// Consume the builder and construct an [`UploadOutput`]
    pub fn build(self) -> UploadOutput {
        UploadOutput {
            e_tag: self.e_tag,
            checksums: self.checksums,
        }
    }
}

impl From<PutObjectResponse> for UploadOutputBuilder {
    fn from(value: PutObjectResponse) -> Self {
        UploadOutputBuilder {
            e_tag: value.e_tag,
            checksums: value.checksums,
        }
    }
}
