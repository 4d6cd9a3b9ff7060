//! Notes system — markdown notes persisted one-per-search-result.
//!
//! Files carry a small front matter header (url, date, author, image) and are
//! grouped into a per-keyword subfolder under the configured root folder.

pub mod file_ops;
pub mod writer;

pub use file_ops::{sanitize_title, DiskVault, Vault};
pub use writer::NoteWriter;
