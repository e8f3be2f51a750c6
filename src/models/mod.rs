//! Request and Response models for the cache shell
//!
//! This module defines the DTOs used for deserializing requests read from
//! stdin and serializing responses written to stdout.

pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use requests::Request;
pub use responses::{
    CheckResponse, ClearResponse, EntryView, ErrorResponse, InsertResponse, IterResponse,
    LenResponse, LookupResponse, Response,
};
