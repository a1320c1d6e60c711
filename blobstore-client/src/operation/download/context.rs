/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::ops::Deref;
use std::sync::Arc;

use crate::operation::download::DownloadInput;
use crate::storage::StorageBackend;

/// Internal context used to drive a single download operation
#[derive(Debug, Clone)]
pub(crate) struct DownloadContext {
    /// reference to client handle used to do actual work
    pub(crate) handle: Arc<crate::client::Handle>,
    /// the original request
    pub(crate) request: Arc<DownloadInput>,
}

impl DownloadContext {
    /// The storage backend to send the request through
    pub(crate) fn store(&self) -> &Arc<dyn StorageBackend> {
        self.handle.config.store()
    }

    /// The original request
    pub(crate) fn request(&self) -> &DownloadInput {
        self.request.deref()
    }
}
