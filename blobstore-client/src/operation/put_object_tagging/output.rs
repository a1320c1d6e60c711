/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use crate::storage::PutObjectTaggingResponse;
use crate::types::ObjectChecksums;

/// Response type for replacing the tag set of an object
#[derive(Debug, Clone, Default)]
#[non_exhaustive]
pub struct PutObjectTaggingOutput {
    /// The checksum verified over the serialized tag payload.
    pub(crate) checksums: ObjectChecksums,
}

impl PutObjectTaggingOutput {
    /// The checksum verified over the serialized tag payload.
    pub fn checksums(&self) -> &ObjectChecksums {
        &self.checksums
    }
}

/// A builder for [`PutObjectTaggingOutput`]
#[derive(Debug, Clone, Default)]
#[non_exhaustive]
pub struct PutObjectTaggingOutputBuilder {
    pub(crate) checksums: ObjectChecksums,
}

impl PutObjectTaggingOutputBuilder {
    /// The checksum verified over the serialized tag payload.
    pub fn checksums(mut self, input: ObjectChecksums) -> Self {
        self.checksums = input;
        self
    }

    /// Consume the builder and construct a [`PutObjectTaggingOutput`]
    pub fn build(self) -> PutObjectTaggingOutput {
        PutObjectTaggingOutput {
            checksums: self.checksums,
        }
    }
}

impl From<PutObjectTaggingResponse> for PutObjectTaggingOutputBuilder {
    fn from(value: PutObjectTaggingResponse) -> Self {
        PutObjectTaggingOutputBuilder {
            checksums: value.checksums,
        }
    }
}
