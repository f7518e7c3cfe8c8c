use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use itemize::{Config, Resolver};

mod cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = cli::Args::parse();
    let config = Config::load(args.config.as_deref()).context("failed to load configuration")?;
    let resolver = Resolver::new(&config)?;

    match args.command {
        cli::Command::Resolve { url, compact } => {
            let item = resolver.resolve_item(&url).await?;
            let json = if compact {
                serde_json::to_string(&item)?
            } else {
                serde_json::to_string_pretty(&item)?
            };
            println!("{json}");
            Ok(())
        }

        cli::Command::Providers {} => {
            let registry = resolver.registry();
            for (idx, provider) in registry.providers().iter().enumerate() {
                println!(
                    "{:>2}. {:<16} {}",
                    idx + 1,
                    provider.name,
                    provider.matcher.as_str()
                );
            }
            println!("    {:<16} *", registry.fallback().name);
            Ok(())
        }

        cli::Command::Which { url } => {
            tracing::debug!(url = %url, "dispatch only, nothing is fetched");
            println!("{}", resolver.provider_for(&url));
            Ok(())
        }
    }
}
