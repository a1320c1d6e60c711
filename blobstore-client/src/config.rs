/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::cmp;
use std::sync::Arc;

use crate::metrics::unit::ByteUnit;
use crate::storage::StorageBackend;
use crate::types::{PartSize, RequestChecksumCalculation, ResponseChecksumValidation};

/// Minimum multipart threshold in bytes
pub(crate) const MIN_MULTIPART_THRESHOLD_BYTES: u64 = 5 * ByteUnit::Mebibyte.as_bytes_u64();

/// Configuration for a [`Client`](crate::client::Client)
///
/// Set once at construction and shared read-only by every request issued
/// through the client; nothing here can be mutated afterwards.
#[derive(Debug, Clone)]
pub struct Config {
    multipart_threshold: PartSize,
    request_checksum_calculation: RequestChecksumCalculation,
    response_checksum_validation: ResponseChecksumValidation,
    store: Arc<dyn StorageBackend>,
}

impl Config {
    /// Create a new `Config` builder
    pub fn builder() -> Builder {
        Builder::default()
    }

    /// Returns a reference to the multipart threshold part size
    pub fn multipart_threshold(&self) -> &PartSize {
        &self.multipart_threshold
    }

    /// Returns when this client computes request checksums.
    pub fn request_checksum_calculation(&self) -> RequestChecksumCalculation {
        self.request_checksum_calculation
    }

    /// Returns when this client validates response checksums.
    pub fn response_checksum_validation(&self) -> ResponseChecksumValidation {
        self.response_checksum_validation
    }

    /// The storage backend that will be used to send requests to.
    pub fn store(&self) -> &Arc<dyn StorageBackend> {
        &self.store
    }
}

/// Fluent style builder for [Config]
#[derive(Debug, Clone, Default)]
pub struct Builder {
    multipart_threshold_part_size: PartSize,
    request_checksum_calculation: RequestChecksumCalculation,
    response_checksum_validation: ResponseChecksumValidation,
    store: Option<Arc<dyn StorageBackend>>,
}

impl Builder {
    /// Minimum object size that should trigger splitting into a multipart transfer.
    ///
    /// A body at or above this threshold is handed off to multipart
    /// orchestration and is therefore mutually exclusive with the
    /// whole-object checksum path.
    ///
    /// The minimum threshold is 5 MiB, any value less than that will be rounded up.
    /// Default is [PartSize::Auto]
    pub fn multipart_threshold(self, threshold: PartSize) -> Self {
        let threshold = match threshold {
            PartSize::Target(size) => {
                PartSize::Target(cmp::max(size, MIN_MULTIPART_THRESHOLD_BYTES))
            }
            tps => tps,
        };

        self.set_multipart_threshold(threshold)
    }

    /// Minimum object size that should trigger a multipart transfer.
    ///
    /// NOTE: This does not validate the setting and is meant for internal use only.
    pub(crate) fn set_multipart_threshold(mut self, threshold: PartSize) -> Self {
        self.multipart_threshold_part_size = threshold;
        self
    }

    /// Set when request checksums are computed.
    ///
    /// Default is [RequestChecksumCalculation::Always]: every upload carries
    /// a checksum, using the default algorithm when no per-request strategy
    /// names one. Under [RequestChecksumCalculation::WhenRequired] only
    /// operations that mandate a checksum, or requests with an explicit
    /// strategy, compute one.
    pub fn request_checksum_calculation(
        mut self,
        calculation: RequestChecksumCalculation,
    ) -> Self {
        self.request_checksum_calculation = calculation;
        self
    }

    /// Set when response checksums are validated.
    ///
    /// Default is [ResponseChecksumValidation::Always]: downloaded bytes are
    /// validated against the stored checksum, and a response carrying no
    /// checksum fails the download. Under
    /// [ResponseChecksumValidation::WhenRequired] downloads skip validation.
    pub fn response_checksum_validation(
        mut self,
        validation: ResponseChecksumValidation,
    ) -> Self {
        self.response_checksum_validation = validation;
        self
    }

    /// Set the storage backend to transfer objects to and from.
    pub fn store(mut self, store: Arc<dyn StorageBackend>) -> Self {
        self.store = Some(store);
        self
    }

    /// Consumes the builder and constructs a [`Config`]
    pub fn build(self) -> Config {
        Config {
            multipart_threshold: self.multipart_threshold_part_size,
            request_checksum_calculation: self.request_checksum_calculation,
            response_checksum_validation: self.response_checksum_validation,
            store: self.store.expect("store set"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_rounded_up_to_minimum() {
        let builder = Builder::default().multipart_threshold(PartSize::Target(1));
        assert_eq!(
            builder.multipart_threshold_part_size,
            PartSize::Target(MIN_MULTIPART_THRESHOLD_BYTES)
        );
    }

    #[test]
    fn test_default_policies() {
        let builder = Builder::default();
        assert_eq!(
            builder.request_checksum_calculation,
            RequestChecksumCalculation::Always
        );
        assert_eq!(
            builder.response_checksum_validation,
            ResponseChecksumValidation::Always
        );
    }
}
