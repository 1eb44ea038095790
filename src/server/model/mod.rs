//! Server-side domain models.
//!
//! Domain models are what services and stores exchange. Conversion to and from wire DTOs
//! happens through `from_dto`/`into_dto` at the controller boundary.

pub mod course;
