/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use crate::operation::download::body::Body;
use crate::operation::download::trailing_meta::{TrailingMetadata, TrailingMetadataOnceLock};
use crate::operation::download::ChecksumValidation;
use crate::storage::ObjectMetadata;

/// Response type for a single download object request.
#[derive(Debug)]
#[non_exhaustive]
pub struct DownloadOutput {
    /// Object metadata
    pub(crate) object_meta: ObjectMetadata,

    /// The object content
    pub(crate) body: Body,

    /// Trailing metadata resolved once the body has been fully consumed
    pub(crate) trailing: TrailingMetadataOnceLock,
}

impl DownloadOutput {
    /// Object metadata
    pub fn object_meta(&self) -> &ObjectMetadata {
        &self.object_meta
    }

    /// Object content
    pub fn body(&self) -> &Body {
        &self.body
    }

    /// Mutable reference to the body
    pub fn body_mut(&mut self) -> &mut Body {
        &mut self.body
    }

    /// Metadata that isn't available until the body has been fully consumed.
    ///
    /// Returns [None] while the body still has data (or after a failed
    /// validation; a mismatch surfaces as an error on the body stream).
    pub fn trailing_metadata(&self) -> Option<&TrailingMetadata> {
        self.trailing.get()
    }

    /// The checksum validation outcome, once the body has been fully consumed.
    pub fn checksum_validation(&self) -> Option<&ChecksumValidation> {
        self.trailing_metadata().map(|meta| &meta.checksum_validation)
    }
}
