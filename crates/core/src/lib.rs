//! Core types for the book tracker.
//!
//! Pure data and trait definitions shared by the server and the client.
//! Nothing in this crate performs I/O.

pub mod book;
pub mod storage;
