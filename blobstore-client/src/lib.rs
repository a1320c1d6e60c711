/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/* Automatically managed default lints */
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
/* End of automatically managed default lints */
#![warn(
    missing_debug_implementations,
    missing_docs,
    rustdoc::missing_crate_level_docs,
    unreachable_pub,
    rust_2018_idioms
)]

//! An object storage client focused on end-to-end data integrity.
//!
//! Every request issued through the client runs through a checksum pipeline:
//! a policy resolver decides whether a checksum is computed and which
//! algorithm is used, the body is streamed through an incremental calculator,
//! the digest is attached as a trailer once the final byte has been sent, and
//! downloaded bytes are re-validated against the checksums the backend
//! reports.
//!
//! The storage backend itself is pluggable via the
//! [`StorageBackend`](crate::storage::StorageBackend) trait; this crate only
//! consumes "store bytes, receive metadata" and "retrieve bytes with
//! metadata" as black-box operations.
//!
//! # Examples
//!
//! Upload a file and read back its stored checksum:
//!
//! ```no_run
//! # use std::sync::Arc;
//! # use blobstore_client::storage::StorageBackend;
//! # async fn example(store: Arc<dyn StorageBackend>) -> Result<(), blobstore_client::error::Error> {
//! use blobstore_client::io::InputStream;
//!
//! let config = blobstore_client::Config::builder().store(store).build();
//! let client = blobstore_client::Client::new(config);
//!
//! let handle = client
//!     .upload()
//!     .bucket("my-bucket")
//!     .key("my-key")
//!     .body(InputStream::from_path("/tmp/data.bin")?)
//!     .initiate()?;
//!
//! // initiate() returns before the upload is complete. Call `join()` on the
//! // returned handle to drive the operation to completion.
//! let response = handle.join().await?;
//! println!("stored crc32: {:?}", response.checksum_crc32());
//! # Ok(())
//! # }
//! ```
//!
//! See the documentation for each client operation for more information:
//!
//! * [`upload`](crate::Client::upload) - upload a single object
//! * [`download`](crate::Client::download) - download a single object
//! * [`put_object_tagging`](crate::Client::put_object_tagging) - replace the tag set of an object

/// Error types emitted by `blobstore-client`
pub mod error;

/// Common types used by `blobstore-client`
pub mod types;

/// Types and helpers for I/O
pub mod io;

/// Checksum calculation and policy resolution
pub(crate) mod checksum;

/// Object storage client
pub mod client;

/// Client operations
pub mod operation;

/// Client configuration
pub mod config;

/// The storage backend interface the client sends requests through
pub mod storage;

/// Metrics
pub mod metrics;

pub use self::client::Client;
pub use self::config::Config;
