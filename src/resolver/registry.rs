use crate::config::Config;
use crate::resolver::fetchers::{Fetcher, GithubFetcher, PlainFetcher, YoutubeFetcher};
use crate::resolver::parsers::{
    BabelioParser, FallbackParser, FnacParser, GithubParser, MediumParser, Parser,
    SensCritiqueParser, YoutubeParser,
};
use regex::Regex;
use std::sync::Arc;

pub const FALLBACK_NAME: &str = "Fallback";

/// Optional scheme and at most one subdomain in front of a host.
const PREFIX: &str = r"^(?:https?://)?(?:[^./]+\.)?";

/// One row of the dispatch table.
#[derive(Clone)]
pub struct ProviderDescriptor {
    pub name: &'static str,
    pub matcher: Regex,
    pub fetch: Arc<dyn Fetcher>,
    pub parse: Arc<dyn Parser>,
}

impl ProviderDescriptor {
    pub fn new(
        name: &'static str,
        pattern: &str,
        fetch: Arc<dyn Fetcher>,
        parse: Arc<dyn Parser>,
    ) -> Result<Self, regex::Error> {
        Ok(Self {
            name,
            matcher: Regex::new(pattern)?,
            fetch,
            parse,
        })
    }

    pub fn matches(&self, url: &str) -> bool {
        self.matcher.is_match(url)
    }
}

impl std::fmt::Debug for ProviderDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderDescriptor")
            .field("name", &self.name)
            .field("matcher", &self.matcher.as_str())
            .field("fetch", &self.fetch.name())
            .field("parse", &self.parse.name())
            .finish()
    }
}

/// Ordered provider table. The first descriptor whose matcher accepts a URL
/// wins; the fallback handles everything else.
#[derive(Debug, Clone)]
pub struct Registry {
    providers: Vec<ProviderDescriptor>,
    fallback: ProviderDescriptor,
}

impl Registry {
    /// A registry with only the fallback; use [`Registry::push`] to add providers.
    pub fn with_fallback(fetch: Arc<dyn Fetcher>, parse: Arc<dyn Parser>) -> Self {
        Self {
            providers: Vec::new(),
            fallback: ProviderDescriptor {
                name: FALLBACK_NAME,
                matcher: Regex::new("").expect("empty regex always compiles"),
                fetch,
                parse,
            },
        }
    }

    /// Append a provider after every provider already declared.
    pub fn push(&mut self, descriptor: ProviderDescriptor) {
        self.providers.push(descriptor);
    }

    /// The provider table for the given client and credentials.
    ///
    /// More specific patterns for a host must come before broader ones for the
    /// same host; the order below is the dispatch contract.
    pub fn standard(client: reqwest::Client, config: &Config) -> Result<Self, regex::Error> {
        let plain: Arc<dyn Fetcher> = Arc::new(PlainFetcher::new(
            client.clone(),
            config.strict_http_status,
        ));
        let github: Arc<dyn Fetcher> = Arc::new(GithubFetcher::new(
            client.clone(),
            &config.github_api_url,
            config.github_token.clone(),
        ));
        let youtube: Arc<dyn Fetcher> = Arc::new(YoutubeFetcher::new(
            client,
            &config.youtube_api_url,
            config.youtube_api_key.clone(),
        ));
        let youtube_parser: Arc<dyn Parser> = Arc::new(YoutubeParser);

        let mut registry = Self::with_fallback(plain.clone(), Arc::new(FallbackParser));

        registry.push(ProviderDescriptor::new(
            "Babelio",
            &format!(r"{PREFIX}babelio\.com(?:/.*)?$"),
            plain.clone(),
            Arc::new(BabelioParser),
        )?);
        registry.push(ProviderDescriptor::new(
            "SC",
            &format!(r"{PREFIX}senscritique\.com(?:/.*)?$"),
            plain.clone(),
            Arc::new(SensCritiqueParser),
        )?);
        registry.push(ProviderDescriptor::new(
            "Medium",
            &format!(r"{PREFIX}medium\.com(?:/.*)?$"),
            plain.clone(),
            Arc::new(MediumParser),
        )?);
        registry.push(ProviderDescriptor::new(
            "Fnac",
            &format!(r"{PREFIX}livre\.fnac\.com(?:/.*)?$"),
            plain,
            Arc::new(FnacParser),
        )?);
        registry.push(ProviderDescriptor::new(
            "GithubApi",
            &format!(r"{PREFIX}github\.com/[^/?#]+/[^/?#]+(?:[/?#].*)?$"),
            github,
            Arc::new(GithubParser),
        )?);
        registry.push(ProviderDescriptor::new(
            "YoutubeApi",
            &format!(r"{PREFIX}youtube\.com(?:/.*)?$"),
            youtube.clone(),
            youtube_parser.clone(),
        )?);
        registry.push(ProviderDescriptor::new(
            "TinyYoutubeApi",
            &format!(r"{PREFIX}youtu\.be/[\w-]+/?(?:[:?#].*)?$"),
            youtube,
            youtube_parser,
        )?);

        Ok(registry)
    }

    /// First declared provider accepting `url`, or the fallback.
    pub fn select(&self, url: &str) -> &ProviderDescriptor {
        self.providers
            .iter()
            .find(|p| p.matches(url))
            .unwrap_or(&self.fallback)
    }

    /// Declared providers in dispatch order, fallback excluded.
    pub fn providers(&self) -> &[ProviderDescriptor] {
        &self.providers
    }

    pub fn fallback(&self) -> &ProviderDescriptor {
        &self.fallback
    }
}
