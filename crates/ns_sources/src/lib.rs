pub mod cli;
pub mod sources;

pub use cli::{handle_command, HeadlinesArgs};
pub use sources::{create_source, NewsApiSource, SampleSource};

pub mod prelude {
    pub use super::sources::{create_source, NewsApiSource, SampleSource};
    pub use ns_core::{Article, ArticleSource, Error, Result};
}
