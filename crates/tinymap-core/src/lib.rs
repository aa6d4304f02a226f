mod error;
pub use error::{Error, IntoError};

pub mod row;
pub use row::{Row, ValueRow};

pub mod schema;

pub mod stmt;

/// A Result type alias that uses tinymap's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;
