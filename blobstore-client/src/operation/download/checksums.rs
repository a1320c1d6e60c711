/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use crate::types::ChecksumAlgorithm;

/// The outcome of checksum validation for a download.
///
/// A failed validation never appears here: a mismatch is surfaced as a
/// terminal [`ChecksumMismatch`](crate::error::ErrorKind::ChecksumMismatch)
/// error on the body stream instead.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChecksumValidation {
    /// The digest recomputed over the received bytes matched the checksum
    /// stored with the object.
    Passed(ChecksumAlgorithm),

    /// Validation did not run.
    Skipped(SkipReason),
}

/// Why a download was not validated.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Client policy left response validation off for this request.
    ValidationDisabled,
}
