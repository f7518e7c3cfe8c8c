//! Resolve arbitrary URLs into normalized item records (title, author,
//! description, image, classification and provider facts).
//!
//! ```rust,no_run
//! # async fn example() -> anyhow::Result<()> {
//! let config = itemize::Config::load(None)?;
//! let resolver = itemize::Resolver::new(&config)?;
//!
//! let item = resolver.resolve_item("https://github.com/rust-lang/regex").await?;
//! println!("{:?} by {:?}", item.title, item.author);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod resolver;
pub mod scrape;
#[cfg(test)]
mod tests;

pub use config::Config;
pub use resolver::{ItemType, MetaValue, NormalizedItem, ResolveError, Resolver};
