/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */
//! Error types for the mock storage backend.

use thiserror::Error;

/// Result type for mock storage operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for mock storage operations.
#[derive(Error, Debug)]
pub enum Error {
    /// The specified bucket does not exist.
    #[error("no such bucket")]
    NoSuchBucket,

    /// The specified key does not exist.
    #[error("no such key")]
    NoSuchKey,

    /// The operation mandates a checksum but the request body carried none.
    #[error("request carried no trailer checksum")]
    MissingChecksum,

    /// The trailer checksum does not match the digest of the received bytes.
    #[error("bad digest ({algorithm}): request declared {expected}, received bytes digest to {actual}")]
    BadDigest {
        /// The algorithm the request named.
        algorithm: String,
        /// The digest the request declared (base64).
        expected: String,
        /// The digest of the bytes actually received (base64).
        actual: String,
    },
}

impl From<Error> for blobstore_client::error::Error {
    fn from(error: Error) -> Self {
        use blobstore_client::error::ErrorKind;
        let kind = match &error {
            Error::NoSuchBucket | Error::NoSuchKey => ErrorKind::NotFound,
            // a rejected request digest is a request problem, not a download
            // validation failure
            Error::MissingChecksum | Error::BadDigest { .. } => ErrorKind::InputInvalid,
        };
        blobstore_client::error::Error::new(kind, error)
    }
}
