/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */
use std::sync::{Arc, OnceLock};

use super::ChecksumValidation;

#[derive(Debug)]
/// Metadata that isn't available until the download body has been fully
/// consumed.
pub struct TrailingMetadata {
    /// The checksum validation outcome for this download.
    pub checksum_validation: ChecksumValidation,
}

pub(crate) type TrailingMetadataOnceLock = Arc<OnceLock<TrailingMetadata>>;

impl TrailingMetadata {
    pub(crate) fn new_oncelock() -> TrailingMetadataOnceLock {
        Arc::new(OnceLock::new())
    }
}
