/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::ops::Deref;
use std::sync::Arc;

use crate::operation::put_object_tagging::PutObjectTaggingInput;
use crate::storage::StorageBackend;

/// Internal context used to drive a single tag set replacement
#[derive(Debug, Clone)]
pub(crate) struct PutObjectTaggingContext {
    /// reference to client handle used to do actual work
    pub(crate) handle: Arc<crate::client::Handle>,
    /// the original request
    pub(crate) request: Arc<PutObjectTaggingInput>,
}

impl PutObjectTaggingContext {
    /// The storage backend to send the request through
    pub(crate) fn store(&self) -> &Arc<dyn StorageBackend> {
        self.handle.config.store()
    }

    /// The original request
    pub(crate) fn request(&self) -> &PutObjectTaggingInput {
        self.request.deref()
    }
}
