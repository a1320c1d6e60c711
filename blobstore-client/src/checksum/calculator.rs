/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::fmt;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use sha1::{Digest, Sha1};
use sha2::Sha256;

use crate::types::{ChecksumAlgorithm, ComputedChecksum};

/// Incremental digest state for a single body stream.
///
/// A calculator is bound to exactly one in-flight operation. Bytes must be
/// fed through [`update`](Self::update) in stream order by a single writer;
/// [`finalize`](Self::finalize) consumes the handle and yields the digest.
/// Dropping a calculator without finalizing discards the partial state,
/// which is how a cancelled operation releases it.
pub(crate) enum ChecksumCalculator {
    Crc32(crc32fast::Hasher),
    Crc32C(u32),
    Sha1(Sha1),
    Sha256(Sha256),
}

impl ChecksumCalculator {
    /// Begin a new digest over an empty stream.
    pub(crate) fn new(algorithm: ChecksumAlgorithm) -> Self {
        match algorithm {
            ChecksumAlgorithm::Crc32 => Self::Crc32(crc32fast::Hasher::new()),
            ChecksumAlgorithm::Crc32C => Self::Crc32C(0),
            ChecksumAlgorithm::Sha1 => Self::Sha1(Sha1::new()),
            ChecksumAlgorithm::Sha256 => Self::Sha256(Sha256::new()),
        }
    }

    /// The algorithm this calculator computes.
    pub(crate) fn algorithm(&self) -> ChecksumAlgorithm {
        match self {
            Self::Crc32(_) => ChecksumAlgorithm::Crc32,
            Self::Crc32C(_) => ChecksumAlgorithm::Crc32C,
            Self::Sha1(_) => ChecksumAlgorithm::Sha1,
            Self::Sha256(_) => ChecksumAlgorithm::Sha256,
        }
    }

    /// Feed the next window of the stream.
    pub(crate) fn update(&mut self, data: &[u8]) {
        match self {
            Self::Crc32(hasher) => hasher.update(data),
            Self::Crc32C(state) => *state = crc32c::crc32c_append(*state, data),
            Self::Sha1(hasher) => hasher.update(data),
            Self::Sha256(hasher) => hasher.update(data),
        }
    }

    /// Finish the digest, consuming the calculator.
    ///
    /// CRC values encode as the base64 of the big-endian 4-byte checksum,
    /// SHA values as the base64 of the raw digest bytes.
    pub(crate) fn finalize(self) -> ComputedChecksum {
        let algorithm = self.algorithm();
        let value = match self {
            Self::Crc32(hasher) => STANDARD.encode(hasher.finalize().to_be_bytes()),
            Self::Crc32C(state) => STANDARD.encode(state.to_be_bytes()),
            Self::Sha1(hasher) => STANDARD.encode(hasher.finalize()),
            Self::Sha256(hasher) => STANDARD.encode(hasher.finalize()),
        };
        ComputedChecksum::new(algorithm, value)
    }
}

impl fmt::Debug for ChecksumCalculator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ChecksumCalculator")
            .field(&self.algorithm())
            .finish()
    }
}
