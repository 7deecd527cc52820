//! Web page reading: HTTP fetch plus paragraph extraction.

mod article;
mod extract;

pub use article::HttpArticleReader;
pub use extract::{SKIP_TAGS, extract_paragraphs};
