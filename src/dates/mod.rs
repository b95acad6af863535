// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Date helpers for request handlers
//!
//! This module provides:
//! - ISO 8601 week-date to calendar-date conversion
//! - Reduction of the many ways a request can name a day (explicit date,
//!   year/month/day, year/week/weekday, or nothing) into a single date

pub mod iso_week;
pub mod normalize;

pub use iso_week::{iso_to_date, iso_year_start};
pub use normalize::{with_date_normalization, DateArguments, DateNormalized, StartArgument};
