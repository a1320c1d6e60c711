/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// Operation for uploading a single object
pub mod upload;

/// Operation for downloading a single object
pub mod download;

/// Operation for replacing the tag set of an object
pub mod put_object_tagging;
