use anyhow::{Context, Result};
use scraper::{Html, Selector};
use std::{error::Error, time::Duration};

use crate::config::Config;

/// Build the HTTP client shared by every fetcher of a resolver.
pub fn build_client(config: &Config) -> Result<reqwest::Client> {
    let mut client = reqwest::Client::builder().user_agent(config.user_agent.as_str());

    if let Some(secs) = config.request_timeout_secs {
        client = client.timeout(Duration::from_secs(secs));
    }

    // only the configured proxy is used, system proxy variables are ignored
    match config.proxy {
        Some(ref proxy) => {
            log::debug!("using proxy {proxy:#?}");
            client = client.proxy(
                reqwest::Proxy::all(proxy).with_context(|| format!("invalid proxy url {proxy}"))?,
            );
        }
        None => client = client.no_proxy(),
    }

    client.build().context("failed to build http client")
}

/// Innermost useful message of an error chain; reqwest hides the interesting
/// part (dns, tls, refused) two sources deep.
pub fn get_error(error: &(dyn Error + 'static)) -> String {
    match error.source() {
        Some(e) => match e.source() {
            Some(e) => e.to_string(),
            None => e.to_string(),
        },
        None => error.to_string(),
    }
}

fn selector(css: &str) -> Option<Selector> {
    match Selector::parse(css) {
        Ok(s) => Some(s),
        Err(err) => {
            log::error!("invalid selector {css}: {err:?}");
            None
        }
    }
}

fn non_empty(value: String) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}

/// Text of every element matching `css`, concatenated in document order.
pub fn select_text(document: &Html, css: &str) -> Option<String> {
    let selector = selector(css)?;
    let text = document
        .select(&selector)
        .flat_map(|el| el.text())
        .collect::<String>();
    non_empty(text)
}

/// Text of the first element matching `css`.
pub fn select_first_text(document: &Html, css: &str) -> Option<String> {
    let selector = selector(css)?;
    let text = document.select(&selector).next()?.text().collect::<String>();
    non_empty(text)
}

/// Attribute of the first element matching `css`.
pub fn select_attr(document: &Html, css: &str, attr: &str) -> Option<String> {
    let selector = selector(css)?;
    let value = document.select(&selector).next()?.attr(attr)?;
    non_empty(value.to_string())
}

/// `content` of `<meta name=key>` or `<meta property=key>`.
pub fn meta_content(document: &Html, key: &str) -> Option<String> {
    select_attr(document, &format!(r#"meta[name="{key}"]"#), "content")
        .or_else(|| select_attr(document, &format!(r#"meta[property="{key}"]"#), "content"))
}

/// `<title>` split on `" - "`, the way catalogue sites format "Title - Author - Site".
pub fn title_parts(document: &Html) -> Vec<String> {
    select_text(document, "title")
        .map(|t| t.split(" - ").map(str::to_string).collect())
        .unwrap_or_default()
}
