pub mod merge;
pub mod pages;
pub mod source;

pub use pages::{resolve_page, PageSlug};
pub use source::{ContentSource, FileContentSource};
