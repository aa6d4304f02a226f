mod field;
pub use field::{Column, Embed, Field, FieldRole};

mod model;
pub use model::{Model, MAX_EMBED_DEPTH};

mod verify;
