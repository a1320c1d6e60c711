/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::fmt;

use crate::types::ChecksumAlgorithm;

/// A boxed error that is `Send` and `Sync`.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Errors returned by this library
#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
    source: BoxError,
}

/// General categories of client errors.
#[derive(Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// Operation input validation issues
    InputInvalid,

    /// I/O errors
    IOError,

    /// Some kind of internal runtime issue (e.g. task failure)
    RuntimeError,

    /// Resource not found (e.g. bucket or key)
    NotFound,

    /// The per-request checksum algorithm cannot be carried by the operation
    /// (e.g. a whole object checksum was requested for a body at or above the
    /// multipart threshold)
    UnsupportedAlgorithmForOperation,

    /// Response checksum validation was enabled but the response carried no
    /// checksum for any supported algorithm
    NoMatchingChecksumInResponse,

    /// The digest recomputed over received bytes differs from the digest the
    /// backend reported
    ChecksumMismatch(ChecksumMismatch),

    /// The operation is being canceled because the user explicitly called
    /// `.abort` on the handle
    OperationCancelled,
}

/// Stores information about a failed checksum validation
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ChecksumMismatch {
    /// The algorithm both digests were computed with.
    algorithm: ChecksumAlgorithm,
    /// The digest the backend reported (base64).
    expected: String,
    /// The digest computed over the bytes actually seen (base64).
    actual: String,
}

impl ChecksumMismatch {
    pub(crate) fn new(
        algorithm: ChecksumAlgorithm,
        expected: impl Into<String>,
        actual: impl Into<String>,
    ) -> Self {
        Self {
            algorithm,
            expected: expected.into(),
            actual: actual.into(),
        }
    }

    /// The algorithm both digests were computed with
    pub fn algorithm(&self) -> ChecksumAlgorithm {
        self.algorithm
    }

    /// The digest the backend reported (base64)
    pub fn expected(&self) -> &str {
        &self.expected
    }

    /// The digest computed over the bytes actually seen (base64)
    pub fn actual(&self) -> &str {
        &self.actual
    }
}

impl Error {
    /// Creates a new client [`Error`] from a known kind of error as well as an
    /// arbitrary error source.
    pub fn new<E>(kind: ErrorKind, err: E) -> Error
    where
        E: Into<BoxError>,
    {
        Error {
            kind,
            source: err.into(),
        }
    }

    /// Returns the corresponding [`ErrorKind`] for this error.
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ErrorKind::InputInvalid => write!(f, "invalid input"),
            ErrorKind::IOError => write!(f, "I/O error"),
            ErrorKind::RuntimeError => write!(f, "runtime error"),
            ErrorKind::NotFound => write!(f, "resource not found"),
            ErrorKind::UnsupportedAlgorithmForOperation => {
                write!(f, "checksum algorithm not supported for this operation")
            }
            ErrorKind::NoMatchingChecksumInResponse => {
                write!(f, "no matching checksum in response")
            }
            ErrorKind::ChecksumMismatch(mismatch) => {
                write!(
                    f,
                    "checksum mismatch ({}): expected {}, actual {}",
                    mismatch.algorithm, mismatch.expected, mismatch.actual
                )
            }
            ErrorKind::OperationCancelled => write!(f, "operation cancelled"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(self.source.as_ref())
    }
}

impl From<crate::io::error::Error> for Error {
    fn from(value: crate::io::error::Error) -> Self {
        Self::new(ErrorKind::IOError, value)
    }
}

impl From<std::io::Error> for Error {
    fn from(value: std::io::Error) -> Self {
        Self::new(ErrorKind::IOError, value)
    }
}

impl From<tokio::task::JoinError> for Error {
    fn from(value: tokio::task::JoinError) -> Self {
        Self::new(ErrorKind::RuntimeError, value)
    }
}

pub(crate) fn invalid_input<E>(err: E) -> Error
where
    E: Into<BoxError>,
{
    Error::new(ErrorKind::InputInvalid, err)
}

pub(crate) fn from_kind<E>(kind: ErrorKind) -> impl FnOnce(E) -> Error
where
    E: Into<BoxError>,
{
    |err| Error::new(kind, err)
}

pub(crate) fn unsupported_algorithm<E>(err: E) -> Error
where
    E: Into<BoxError>,
{
    Error::new(ErrorKind::UnsupportedAlgorithmForOperation, err)
}

pub(crate) fn checksum_mismatch(mismatch: ChecksumMismatch) -> Error {
    Error::new(
        ErrorKind::ChecksumMismatch(mismatch),
        "digest of received bytes did not match the checksum reported for the object",
    )
}

pub(crate) fn no_matching_checksum() -> Error {
    Error::new(
        ErrorKind::NoMatchingChecksumInResponse,
        "response checksum validation is enabled but the response carried no checksum",
    )
}

static CANCELLATION_ERROR: &str =
    "the operation has been aborted, cancelling all ongoing requests";

pub(crate) fn operation_cancelled() -> Error {
    Error::new(ErrorKind::OperationCancelled, CANCELLATION_ERROR)
}
