/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use crate::error;
use crate::types::ChecksumAlgorithm;

/// Per-request checksum override for an upload.
///
/// A strategy names the algorithm to use for this one request and always wins
/// over the client-level policy. When constructed with a precalculated value
/// the client attaches that value verbatim instead of computing one itself.
///
/// The strategy is constructed per request and discarded after the request
/// completes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChecksumStrategy {
    /// The checksum algorithm to use.
    algorithm: ChecksumAlgorithm,

    /// The precalculated checksum value, if the caller already computed one.
    precalculated_value: Option<String>,
}

impl ChecksumStrategy {
    /// Use a precalculated `CRC32` checksum value.
    pub fn with_crc32(value: impl Into<String>) -> Self {
        Self {
            algorithm: ChecksumAlgorithm::Crc32,
            precalculated_value: Some(value.into()),
        }
    }

    /// Use a precalculated `CRC32C` checksum value.
    pub fn with_crc32_c(value: impl Into<String>) -> Self {
        Self {
            algorithm: ChecksumAlgorithm::Crc32C,
            precalculated_value: Some(value.into()),
        }
    }

    /// Use a precalculated `SHA1` checksum value.
    pub fn with_sha1(value: impl Into<String>) -> Self {
        Self {
            algorithm: ChecksumAlgorithm::Sha1,
            precalculated_value: Some(value.into()),
        }
    }

    /// Use a precalculated `SHA256` checksum value.
    pub fn with_sha256(value: impl Into<String>) -> Self {
        Self {
            algorithm: ChecksumAlgorithm::Sha256,
            precalculated_value: Some(value.into()),
        }
    }

    /// The client calculates a `CRC32` checksum while uploading.
    /// This is the default strategy.
    pub fn with_calculated_crc32() -> Self {
        Self {
            algorithm: ChecksumAlgorithm::Crc32,
            precalculated_value: None,
        }
    }

    /// The client calculates a `CRC32C` checksum while uploading.
    pub fn with_calculated_crc32_c() -> Self {
        Self {
            algorithm: ChecksumAlgorithm::Crc32C,
            precalculated_value: None,
        }
    }

    /// The client calculates a `SHA1` checksum while uploading.
    pub fn with_calculated_sha1() -> Self {
        Self {
            algorithm: ChecksumAlgorithm::Sha1,
            precalculated_value: None,
        }
    }

    /// The client calculates a `SHA256` checksum while uploading.
    pub fn with_calculated_sha256() -> Self {
        Self {
            algorithm: ChecksumAlgorithm::Sha256,
            precalculated_value: None,
        }
    }

    /// Builder for [`ChecksumStrategy`].
    ///
    /// Note that [`ChecksumStrategyBuilder::build()`] can fail when no
    /// algorithm was named. You should prefer the `with_` constructors,
    /// which cannot fail.
    pub fn builder() -> ChecksumStrategyBuilder {
        ChecksumStrategyBuilder {
            algorithm: None,
            precalculated_value: None,
        }
    }

    /// The checksum algorithm to use.
    pub fn algorithm(&self) -> ChecksumAlgorithm {
        self.algorithm
    }

    /// The precalculated checksum value.
    ///
    /// If specified, this value is attached to the request verbatim and
    /// nothing is recomputed. If not specified, the client calculates the
    /// checksum value while the body streams.
    pub fn precalculated_value(&self) -> Option<&str> {
        self.precalculated_value.as_deref()
    }
}

impl Default for ChecksumStrategy {
    /// The client calculates a `CRC32` checksum while uploading.
    fn default() -> Self {
        Self::with_calculated_crc32()
    }
}

/// Builder for [`ChecksumStrategy`].
#[derive(Debug)]
pub struct ChecksumStrategyBuilder {
    algorithm: Option<ChecksumAlgorithm>,
    precalculated_value: Option<String>,
}

impl ChecksumStrategyBuilder {
    /// The checksum algorithm to use.
    pub fn algorithm(mut self, input: ChecksumAlgorithm) -> Self {
        self.algorithm = Some(input);
        self
    }

    /// The precalculated checksum value.
    ///
    /// If specified, this value is attached to the request verbatim. If not
    /// specified, the client will calculate the checksum value.
    pub fn precalculated_value(mut self, input: impl Into<String>) -> Self {
        self.precalculated_value = Some(input.into());
        self
    }

    /// Consume the builder and construct a [`ChecksumStrategy`]
    pub fn build(self) -> Result<ChecksumStrategy, crate::error::Error> {
        let algorithm = self
            .algorithm
            .ok_or_else(|| error::invalid_input("checksum algorithm is required"))?;

        Ok(ChecksumStrategy {
            algorithm,
            precalculated_value: self.precalculated_value,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_algorithm_is_crc32() {
        assert_eq!(
            ChecksumStrategy::default().algorithm(),
            ChecksumAlgorithm::Crc32
        );
        assert_eq!(ChecksumStrategy::default().precalculated_value(), None);
    }

    #[test]
    fn test_with_xyz_constructors() {
        let strategy = ChecksumStrategy::with_crc32("3fRuog==");
        assert_eq!(strategy.algorithm(), ChecksumAlgorithm::Crc32);
        assert_eq!(strategy.precalculated_value(), Some("3fRuog=="));

        let strategy = ChecksumStrategy::with_crc32_c("X9v3eA==");
        assert_eq!(strategy.algorithm(), ChecksumAlgorithm::Crc32C);
        assert_eq!(strategy.precalculated_value(), Some("X9v3eA=="));

        let strategy = ChecksumStrategy::with_sha1("at+xg6SiyUovktq1redipHiJpaE=");
        assert_eq!(strategy.algorithm(), ChecksumAlgorithm::Sha1);
        assert_eq!(
            strategy.precalculated_value(),
            Some("at+xg6SiyUovktq1redipHiJpaE=")
        );

        let strategy = ChecksumStrategy::with_calculated_crc32_c();
        assert_eq!(strategy.algorithm(), ChecksumAlgorithm::Crc32C);
        assert_eq!(strategy.precalculated_value(), None);

        let strategy = ChecksumStrategy::with_calculated_sha1();
        assert_eq!(strategy.algorithm(), ChecksumAlgorithm::Sha1);
        assert_eq!(strategy.precalculated_value(), None);

        let strategy = ChecksumStrategy::with_calculated_sha256();
        assert_eq!(strategy.algorithm(), ChecksumAlgorithm::Sha256);
        assert_eq!(strategy.precalculated_value(), None);
    }

    #[test]
    fn test_builder() {
        let strategy = ChecksumStrategy::builder()
            .algorithm(ChecksumAlgorithm::Sha256)
            .build()
            .unwrap();
        assert_eq!(strategy.algorithm(), ChecksumAlgorithm::Sha256);
        assert_eq!(strategy.precalculated_value(), None);

        let strategy = ChecksumStrategy::builder()
            .algorithm(ChecksumAlgorithm::Crc32)
            .precalculated_value("3fRuog==")
            .build()
            .unwrap();
        assert_eq!(strategy.precalculated_value(), Some("3fRuog=="));
    }

    #[test]
    fn test_builder_requires_algorithm() {
        ChecksumStrategy::builder()
            .precalculated_value("3fRuog==")
            .build()
            .expect_err("builder requires algorithm");
    }
}
