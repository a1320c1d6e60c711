/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */
//! Independent digest computation for verifying request trailers.
//!
//! The digests here are computed from scratch over the received bytes rather
//! than trusting anything the client calculated, so a client-side bug cannot
//! verify itself.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use blobstore_client::types::ChecksumAlgorithm;
use sha1::Digest;

/// Compute the base64 encoded digest of `data` with the given algorithm.
///
/// CRC words are encoded big-endian, SHA digests as their raw bytes,
/// matching the encoding the client attaches to requests.
pub(crate) fn compute(algorithm: ChecksumAlgorithm, data: &[u8]) -> String {
    match algorithm {
        ChecksumAlgorithm::Crc32 => BASE64.encode(crc32fast::hash(data).to_be_bytes()),
        ChecksumAlgorithm::Crc32C => BASE64.encode(crc32c::crc32c(data).to_be_bytes()),
        ChecksumAlgorithm::Sha1 => BASE64.encode(sha1::Sha1::digest(data)),
        ChecksumAlgorithm::Sha256 => BASE64.encode(sha2::Sha256::digest(data)),
        other => unimplemented!("no digest implementation for {other}"),
    }
}
