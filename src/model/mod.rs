//! Wire types shared by the HTTP surface.

pub mod api;
pub mod course;
