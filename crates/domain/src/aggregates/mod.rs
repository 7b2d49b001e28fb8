//! Aggregate roots - domain objects that own their related data
//!
//! Each aggregate:
//! - Owns all its constituent parts (enforced by Rust ownership)
//! - Exposes behavior through methods, not public fields
//! - Keeps construction-time fields read-only by omitting setters

pub mod teacher_record;

pub use teacher_record::TeacherRecord;
