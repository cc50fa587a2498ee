//! Functional core of the bookmarks service.
//!
//! Pure domain types and decisions: bookmark validation and update planning,
//! page metadata parsing, dump rendering and splitting, tag aggregation, and
//! the storage traits implemented by the server.

pub mod bookmark;
pub mod dump;
pub mod metadata;
pub mod storage;
pub mod tags;
pub mod timestamp;
