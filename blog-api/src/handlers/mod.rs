//! Route handlers: thin adapters from HTTP to the article repository.

mod articles;
mod fallback;

pub use articles::{create_article, delete_article, get_article, list_articles, update_article};
pub use fallback::{method_not_allowed, route_not_found};
