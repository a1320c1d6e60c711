/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use crate::error;
use crate::operation::upload::ChecksumStrategy;
use crate::types::{
    ChecksumAlgorithm, ComputedChecksum, ObjectChecksums, RequestChecksumCalculation,
    ResponseChecksumValidation,
};

/// What the upload path does about checksums for one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum UploadChecksum {
    /// Feed the body through a calculator and attach the digest as a trailer.
    Calculate(ChecksumAlgorithm),
    /// Attach this caller-provided digest; nothing is recomputed.
    Precalculated(ComputedChecksum),
    /// Send the body with no checksum attached.
    Skip,
}

impl UploadChecksum {
    /// The algorithm in effect, if any checksum will be attached.
    pub(crate) fn algorithm(&self) -> Option<ChecksumAlgorithm> {
        match self {
            Self::Calculate(algorithm) => Some(*algorithm),
            Self::Precalculated(checksum) => Some(checksum.algorithm()),
            Self::Skip => None,
        }
    }
}

/// Resolve the checksum behavior for an upload-type request.
///
/// Precedence: a per-request strategy always wins over client policy. With
/// no strategy, policy [`Always`](RequestChecksumCalculation::Always) or an
/// operation that mandates a checksum computes the default algorithm
/// ([`ChecksumAlgorithm::Crc32`]); otherwise nothing is computed.
///
/// A body at or above the multipart threshold is transferred split and
/// cannot carry a whole-object checksum: an explicit strategy on such a
/// body is rejected with `UnsupportedAlgorithmForOperation` before any
/// bytes move, while policy-driven computation quietly stands down.
pub(crate) fn resolve_upload_checksum(
    strategy: Option<&ChecksumStrategy>,
    calculation: RequestChecksumCalculation,
    checksum_required: bool,
    body_splits: bool,
) -> Result<UploadChecksum, error::Error> {
    if let Some(strategy) = strategy {
        if body_splits {
            return Err(error::unsupported_algorithm(format!(
                "{} checksum requested, but a body at or above the multipart threshold cannot carry a whole-object checksum",
                strategy.algorithm(),
            )));
        }
        let resolved = match strategy.precalculated_value() {
            Some(value) => UploadChecksum::Precalculated(ComputedChecksum::new(
                strategy.algorithm(),
                value,
            )),
            None => UploadChecksum::Calculate(strategy.algorithm()),
        };
        return Ok(resolved);
    }

    if body_splits {
        tracing::trace!("body meets multipart threshold; skipping whole-object checksum");
        return Ok(UploadChecksum::Skip);
    }

    let resolved = if calculation == RequestChecksumCalculation::Always || checksum_required {
        UploadChecksum::Calculate(ChecksumAlgorithm::Crc32)
    } else {
        UploadChecksum::Skip
    };
    Ok(resolved)
}

/// Select the checksum to validate a download against.
///
/// Returns `Ok(None)` when client policy leaves validation off. Otherwise
/// picks the stored checksum by the documented precedence
/// ([`ChecksumAlgorithm::PRECEDENCE`]); a response carrying none of the
/// fields is the `NoMatchingChecksumInResponse` failure, never a silent
/// pass.
pub(crate) fn resolve_response_validation(
    validation: ResponseChecksumValidation,
    checksums: &ObjectChecksums,
) -> Result<Option<ComputedChecksum>, error::Error> {
    match validation {
        ResponseChecksumValidation::WhenRequired => Ok(None),
        ResponseChecksumValidation::Always => match checksums.preferred() {
            Some(expected) => {
                tracing::trace!(algorithm = %expected.algorithm(), "validating download");
                Ok(Some(expected))
            }
            None => Err(error::no_matching_checksum()),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_strategy_wins_over_policy() {
        let strategy = ChecksumStrategy::with_calculated_sha1();
        let resolved = resolve_upload_checksum(
            Some(&strategy),
            RequestChecksumCalculation::WhenRequired,
            false,
            false,
        )
        .unwrap();
        assert_eq!(resolved, UploadChecksum::Calculate(ChecksumAlgorithm::Sha1));
    }

    #[test]
    fn test_precalculated_value_carried_through() {
        let strategy = ChecksumStrategy::with_crc32("+esgrQ==");
        let resolved = resolve_upload_checksum(
            Some(&strategy),
            RequestChecksumCalculation::Always,
            false,
            false,
        )
        .unwrap();
        assert_eq!(
            resolved,
            UploadChecksum::Precalculated(ComputedChecksum::new(
                ChecksumAlgorithm::Crc32,
                "+esgrQ=="
            ))
        );
    }

    #[test]
    fn test_policy_always_defaults_to_crc32() {
        let resolved =
            resolve_upload_checksum(None, RequestChecksumCalculation::Always, false, false)
                .unwrap();
        assert_eq!(
            resolved,
            UploadChecksum::Calculate(ChecksumAlgorithm::Crc32)
        );
    }

    #[test]
    fn test_when_required_computes_nothing() {
        let resolved =
            resolve_upload_checksum(None, RequestChecksumCalculation::WhenRequired, false, false)
                .unwrap();
        assert_eq!(resolved, UploadChecksum::Skip);
    }

    #[test]
    fn test_required_operation_overrides_when_required() {
        let resolved =
            resolve_upload_checksum(None, RequestChecksumCalculation::WhenRequired, true, false)
                .unwrap();
        assert_eq!(
            resolved,
            UploadChecksum::Calculate(ChecksumAlgorithm::Crc32)
        );
    }

    #[test]
    fn test_split_body_rejects_explicit_strategy() {
        let strategy = ChecksumStrategy::with_calculated_crc32();
        let err = resolve_upload_checksum(
            Some(&strategy),
            RequestChecksumCalculation::Always,
            false,
            true,
        )
        .unwrap_err();
        assert_eq!(
            err.kind(),
            &ErrorKind::UnsupportedAlgorithmForOperation
        );
    }

    #[test]
    fn test_split_body_skips_policy_checksum() {
        let resolved =
            resolve_upload_checksum(None, RequestChecksumCalculation::Always, false, true)
                .unwrap();
        assert_eq!(resolved, UploadChecksum::Skip);
    }

    #[test]
    fn test_validation_off_skips() {
        let mut checksums = ObjectChecksums::default();
        checksums.insert(ComputedChecksum::new(ChecksumAlgorithm::Crc32, "+esgrQ=="));
        let selected =
            resolve_response_validation(ResponseChecksumValidation::WhenRequired, &checksums)
                .unwrap();
        assert!(selected.is_none());
    }

    #[test]
    fn test_validation_picks_by_precedence() {
        let mut checksums = ObjectChecksums::default();
        checksums.insert(ComputedChecksum::new(
            ChecksumAlgorithm::Sha256,
            "k2oYXKqiZrucvpgengXLeM1zKwsygOuURBK7b4+PB68=",
        ));
        checksums.insert(ComputedChecksum::new(ChecksumAlgorithm::Crc32C, "Vsu0gA=="));
        let selected =
            resolve_response_validation(ResponseChecksumValidation::Always, &checksums)
                .unwrap()
                .expect("a stored checksum is present");
        assert_eq!(selected.algorithm(), ChecksumAlgorithm::Crc32C);
        assert_eq!(selected.value(), "Vsu0gA==");
    }

    #[test]
    fn test_validation_with_no_stored_checksum_fails() {
        let err = resolve_response_validation(
            ResponseChecksumValidation::Always,
            &ObjectChecksums::default(),
        )
        .unwrap_err();
        assert_eq!(err.kind(), &ErrorKind::NoMatchingChecksumInResponse);
    }
}
