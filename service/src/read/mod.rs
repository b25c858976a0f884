//! Read entities definitions.

pub mod row;

pub use self::row::Row;
