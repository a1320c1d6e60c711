/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::fmt;

/// Errors related to I/O abstractions
#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
}

#[derive(Debug)]
pub(crate) enum ErrorKind {
    /// The (remaining) length of a stream is required but the stream could
    /// not provide an upper bound.
    UpperBoundSizeHintRequired,
    /// A path body was built without a path.
    PathRequired,
    /// Wrapper for any std I/O error
    StdIo(std::io::Error),
}

impl Error {
    pub(crate) fn upper_bound_size_hint_required() -> Error {
        ErrorKind::UpperBoundSizeHintRequired.into()
    }

    pub(crate) fn path_required() -> Error {
        ErrorKind::PathRequired.into()
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Self { kind }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        ErrorKind::StdIo(err).into()
    }
}

impl From<tokio::task::JoinError> for Error {
    fn from(err: tokio::task::JoinError) -> Self {
        ErrorKind::StdIo(std::io::Error::other(err)).into()
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ErrorKind::UpperBoundSizeHintRequired => write!(
                f,
                "size hint upper bound is required but the stream did not provide one"
            ),
            ErrorKind::PathRequired => write!(f, "a path is required"),
            ErrorKind::StdIo(_) => write!(f, "I/O error"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            ErrorKind::StdIo(err) => Some(err),
            ErrorKind::UpperBoundSizeHintRequired | ErrorKind::PathRequired => None,
        }
    }
}
