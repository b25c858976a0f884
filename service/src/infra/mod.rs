//! Infrastructure layer.

pub mod http;

#[cfg(doc)]
use crate::domain::User;

pub use self::http::Http;

/// Source of [`User`] collections.
pub use common::Handler as Source;
