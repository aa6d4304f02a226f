//! Maps database result rows into plain Rust structs using per-field
//! metadata.
//!
//! A type opts in by implementing [`Mapped`], usually through the derive:
//!
//! ```ignore
//! #[derive(Debug, Default, tinymap::Mapped)]
//! struct Person {
//!     #[column("id")]
//!     id: i64,
//!
//!     #[column("name")]
//!     name: String,
//!
//!     #[embed]
//!     full_name: FullName,
//! }
//!
//! let mapper = tinymap::Mapper::<Person>::new()?;
//! let person = mapper.map(&row)?;
//! ```
//!
//! Only the fields whose columns are present in a row are assigned; the rest
//! keep their default value.

extern crate self as tinymap;

mod engine;

mod mapped;
pub use mapped::{FieldDecl, Fields, Mapped};

mod mapper;
pub use mapper::{Builder, Mapper};

mod primitive;
pub use primitive::Primitive;

pub mod registry;
pub use registry::{describe, TypeDescriptor};

pub use tinymap_core::{
    bail, err,
    row::{Row, ValueRow},
    schema,
    stmt::{Type, Value},
    Error, Result,
};

pub use tinymap_macros::Mapped;

#[doc(hidden)]
pub mod codegen_support {
    pub use crate::{Fields, Mapped, Primitive, Result};
    pub use std::default::Default;
}
