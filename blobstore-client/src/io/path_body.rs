/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::path::{Path, PathBuf};

use crate::io::error::Error;
use crate::io::stream::{InputStream, RawInputStream};

/// Input stream backed by a file on disk.
#[derive(Debug, Clone)]
pub(crate) struct PathBody {
    pub(crate) path: PathBuf,
    pub(crate) length: u64,
}

/// Builder for creating an [`InputStream`] from a file/path.
///
/// ```no_run
/// # async fn example() -> Result<(), blobstore_client::io::error::Error> {
/// use blobstore_client::io::InputStream;
///
/// let stream = InputStream::read_from()
///     .path("docs/some-large-file.csv")
///     .build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Default)]
pub struct PathBodyBuilder {
    path: Option<PathBuf>,
    length: Option<u64>,
}

impl PathBodyBuilder {
    /// Create a new [`PathBodyBuilder`].
    ///
    /// You must call [`path`](Self::path) to specify what to read from.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the path to read from.
    pub fn path(mut self, path: impl AsRef<Path>) -> Self {
        self.path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Specify the length to read (in bytes).
    ///
    /// Setting the length explicitly skips the call to retrieve the size
    /// from file system metadata. The contents of the file MUST not change:
    /// the length is cached and a shorter file fails the read mid-stream.
    pub fn length(mut self, length: u64) -> Self {
        self.length = Some(length);
        self
    }

    /// Build an [`InputStream`] from this builder.
    pub fn build(self) -> Result<InputStream, Error> {
        let path = self.path.ok_or_else(Error::path_required)?;
        let length = match self.length {
            Some(explicit) => explicit,
            None => path.metadata()?.len(),
        };
        let body = PathBody { path, length };
        Ok(InputStream {
            inner: RawInputStream::Fs(body),
        })
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::PathBodyBuilder;

    #[test]
    fn test_length_from_metadata() {
        let mut tmp = NamedTempFile::new().unwrap();
        tmp.write_all(b"a lep is a ball").unwrap();

        let stream = PathBodyBuilder::new().path(tmp.path()).build().unwrap();
        assert_eq!(stream.size_hint().upper(), Some(15));
    }

    #[test]
    fn test_explicit_length_skips_metadata() {
        let stream = PathBodyBuilder::new()
            .path("does/not/exist.dat")
            .length(123_456)
            .build()
            .unwrap();
        assert_eq!(stream.size_hint().upper(), Some(123_456));
    }

    #[test]
    fn test_path_required() {
        PathBodyBuilder::new()
            .length(5)
            .build()
            .expect_err("builder requires a path");
    }
}
