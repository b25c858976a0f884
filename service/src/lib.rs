//! Service contains the user directory view pipeline: projection of raw
//! [`User`] records into display [`Row`]s, conjunctive filtering by
//! [`Criteria`], page slicing, and the debounced [`Pipeline`] recomputing
//! the visible page whenever the row set or the [`Criteria`] change.

#![deny(
    nonstandard_style,
    rust_2018_idioms,
    rustdoc::all,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code
)]
#![forbid(non_ascii_idents)]
#![warn(
    clippy::allow_attributes,
    clippy::allow_attributes_without_reason,
    clippy::pedantic,
    clippy::wildcard_enum_match_arm,
    deprecated_in_future,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    unreachable_pub,
    unused_crate_dependencies,
    unused_import_braces,
    unused_labels,
    unused_lifetimes,
    unused_qualifications,
    unused_results
)]

pub mod criteria;
pub mod domain;
pub mod infra;
pub mod pipeline;
pub mod read;

pub use self::{
    criteria::Criteria,
    domain::User,
    pipeline::{Pipeline, Snapshot},
    read::Row,
};
