//! HTTP request handlers.
//!
//! Controllers parse and validate requests, convert DTOs to params, call services and
//! convert domain models back to DTOs.

pub mod course;

#[cfg(test)]
mod test;
