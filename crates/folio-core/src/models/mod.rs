//! Data models for paginated documents.

pub mod document;
pub mod field;
pub mod template;

pub use document::Document;
pub use field::Field;
pub use template::Template;
