//! Database repository layer.
//!
//! Store implementations perform all reads and writes and convert between their own
//! record types and domain models, keeping the data layer separate from business logic.

pub mod course;
