// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Record shapes shared across content types
//!
//! This module provides:
//! - [`EffectiveRange`] and the store queries over records that carry one
//! - [`Submission`] stamps for records that must be submitted before use
//! - [`AttachmentSpec`] / [`Attachment`] for optional data hung off other records

pub mod attachment;
pub mod effective;
pub mod submittable;

pub use attachment::{attachments_for, Attachment, AttachmentSpec};
pub use effective::{at, in_range, latest, EffectiveRange, EffectiveRangeRecord};
pub use submittable::{pending, Submission, Submittable};
