//! Extraction strategies: raw content in, raw record out.
//!
//! Markup parsers never fail; a field whose selectors all come up empty is
//! simply absent. Structured parsers read API payloads whose shape is fixed
//! upstream and fail with `StructuralMismatch` when it is not there.

pub mod babelio;
pub mod fallback;
pub mod fnac;
pub mod github;
pub mod medium;
pub mod senscritique;
pub mod youtube;

pub use babelio::BabelioParser;
pub use fallback::FallbackParser;
pub use fnac::FnacParser;
pub use github::GithubParser;
pub use medium::MediumParser;
pub use senscritique::SensCritiqueParser;
pub use youtube::YoutubeParser;

use crate::resolver::errors::PipelineError;
use crate::resolver::types::NormalizedItem;

pub trait Parser: Send + Sync {
    fn parse(&self, url: &str, body: &str) -> Result<NormalizedItem, PipelineError>;

    fn name(&self) -> &'static str;
}
