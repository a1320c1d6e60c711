/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Blobstore Mock
//!
//! An in-memory [`StorageBackend`](blobstore_client::storage::StorageBackend)
//! for testing blobstore-client. Objects live in process memory; request
//! trailer checksums are verified over exactly the bytes received, and a
//! fault-injection hook can corrupt stored content to exercise the client's
//! response validation path.

mod error;
mod integrity;
mod store;

pub use error::Error;
pub use error::Result;
pub use store::MemoryStore;
