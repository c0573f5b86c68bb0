// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
#![cfg_attr(docsrs, feature(doc_cfg))]

//! Timestamps bound at compile time to a named textual layout.
//!
//! A [`Formatted<F>`] wraps a [`jiff::Zoned`] and ties it to the format `F`,
//! one of the tags in [`format`]. The tag fixes the layout used to render the
//! value, parse it back, and carry it through serde, so a struct field keeps
//! its wire format without repeating format strings at every call site.
//!
//! # Quick Start
//!
//! ```
//! use datestamp::Formatted;
//! use datestamp::format::{DateOnly, Rfc3339};
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Serialize, Deserialize)]
//! struct Invoice {
//!     issued: Formatted<DateOnly>,
//!     paid_at: Formatted<Rfc3339>,
//! }
//!
//! let invoice: Invoice = serde_json::from_str(r#"{"issued":"2024-03-01","paid_at":"2024-03-04T10:15:00Z"}"#)?;
//! assert_eq!(invoice.issued.to_string(), "2024-03-01");
//! assert_eq!(
//!     serde_json::to_string(&invoice)?,
//!     r#"{"issued":"2024-03-01","paid_at":"2024-03-04T10:15:00Z"}"#
//! );
//!
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Overview
//!
//! - [`Formatted`] - A point in time bound to a format. Renders with [`Display`][std::fmt::Display],
//!   parses with [`FromStr`][std::str::FromStr], and converts to and from `Zoned`, `Timestamp`
//!   and `SystemTime`.
//! - [`format`] - The [`Format`][format::Format] trait and its 18 tags, from [`Ansic`][format::Ansic]
//!   to [`TimeOnly`][format::TimeOnly].
//! - [`layout`] - The layout engine: formatting and strict parsing of reference-date layouts
//!   such as `Mon Jan 2 15:04:05 MST 2006`.
//! - [`Error`] - The error returned when text does not match a layout.
//! - `query` - Query-string encoding of formatted values. Available when the `query` feature
//!   is enabled.
//!
//! # Round trips
//!
//! Rendering and parsing use the same layout, so parsing the rendered text gives back the same
//! instant as far as the layout can express it. Layouts without a year, a date, seconds,
//! sub-seconds or a zone drop those fields; parsing fills them with year 0, January 1st,
//! midnight and UTC.
//!
//! ```
//! use datestamp::Formatted;
//! use datestamp::format::{Format, Kitchen};
//!
//! let kitchen: Formatted<Kitchen> = "3:04PM".parse()?;
//! assert_eq!(kitchen.as_zoned().year(), 0);
//! assert_eq!(kitchen.to_string(), Kitchen::LAYOUT);
//!
//! # Ok::<(), datestamp::Error>(())
//! ```
//!
//! # Features
//!
//! - **`serde`** (default) - `Serialize` and `Deserialize` for [`Formatted`] through `serde_core`.
//! - **`query`** - The `query` module with `QueryValues` and `EncodeValues`.
//! - **`logs`** - Emits a `DEBUG` [`tracing`](https://docs.rs/tracing) event named
//!   `datestamp.decode` whenever structured-data decoding rejects input.

mod error;
pub mod format;
mod formatted;
pub mod layout;

#[cfg(any(feature = "query", test))]
#[cfg_attr(docsrs, doc(cfg(feature = "query")))]
pub mod query;

#[cfg(test)]
mod testing;

pub use error::{Error, Result};
pub use formatted::Formatted;
