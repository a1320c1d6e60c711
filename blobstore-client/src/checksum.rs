/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Core of the checksum pipeline.
//!
//! [`calculator`] holds the incremental digest state fed by a body stream,
//! [`resolver`] turns client policy, per-request overrides, and operation
//! requirements into a decision about what (if anything) to compute and
//! validate. Attachment of the finished digest happens in
//! [`crate::storage::body`]; response validation happens in the download
//! operation's body.

pub(crate) mod calculator;
pub(crate) mod resolver;

pub(crate) use calculator::ChecksumCalculator;
pub(crate) use resolver::UploadChecksum;
