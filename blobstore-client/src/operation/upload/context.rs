/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::ops::Deref;
use std::sync::Arc;

use crate::operation::upload::UploadInput;
use crate::storage::StorageBackend;

/// Internal context used to drive a single upload operation
#[derive(Debug, Clone)]
pub(crate) struct UploadContext {
    /// reference to client handle used to do actual work
    pub(crate) handle: Arc<crate::client::Handle>,
    /// the original request (NOTE: the body will have been taken for processing, only the other fields remain)
    pub(crate) request: Arc<UploadInput>,
}

impl UploadContext {
    /// The storage backend to send the request through
    pub(crate) fn store(&self) -> &Arc<dyn StorageBackend> {
        self.handle.config.store()
    }

    /// The original request (sans the body as it will have been taken for processing)
    pub(crate) fn request(&self) -> &UploadInput {
        self.request.deref()
    }
}
