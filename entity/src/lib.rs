//! SeaORM entity definitions for the course store.

pub mod course;
pub mod prelude;
