//! Domain model structs.
//!
//! Each submodule contains a `FromRow` + `Serialize` entity struct
//! matching the database row, plus any fixed data sets for that entity.

pub mod animal;
