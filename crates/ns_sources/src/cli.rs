use clap::Args;
use ns_core::{Article, ArticleSource, Error, Result};

/// NewsAPI refuses larger pages.
pub const MAX_LIMIT: usize = 100;

#[derive(Args, Debug, Clone)]
pub struct HeadlinesArgs {
    /// ISO country code, e.g. "us". Defaults to the configured provider country
    #[arg(long)]
    pub country: Option<String>,

    /// Number of headlines to fetch (1-100)
    #[arg(long, default_value_t = 10)]
    pub limit: usize,
}

pub fn validate_limit(limit: usize) -> Result<usize> {
    if limit == 0 || limit > MAX_LIMIT {
        return Err(Error::InvalidInput(format!("limit must be between 1 and {}", MAX_LIMIT)));
    }
    Ok(limit)
}

pub async fn handle_command(
    args: HeadlinesArgs,
    source: &dyn ArticleSource,
    default_country: &str,
) -> Result<Vec<Article>> {
    let limit = validate_limit(args.limit)?;
    let country = args.country.as_deref().unwrap_or(default_country);
    let articles = source.fetch_top_headlines(country, limit).await?;

    println!("Found {} articles from {}", articles.len(), source.name());
    for article in &articles {
        let origin = article.source.as_deref().unwrap_or("unknown source");
        match &article.url {
            Some(url) => println!("- {} ({}) {}", article.title, origin, url),
            None => println!("- {} ({})", article.title, origin),
        }
    }

    Ok(articles)
}
