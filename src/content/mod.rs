//! Content module - the blog collection, its schema and loading

mod error;
mod frontmatter;
pub mod loader;
mod post;

pub use error::ContentError;
pub use frontmatter::{parse_date_string, FrontMatter};
pub use post::Post;
