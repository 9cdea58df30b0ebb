//! Filesystem helpers for webptidy.
//!
//! Writes of converted images go through [`atomic_write`] so an interrupted
//! or failed conversion never leaves a half-written JPEG next to its source.
//! Soft deletes go through [`move_file`].

pub mod atomic;
mod move_file;

pub use atomic::atomic_write;
pub use move_file::move_file;
