use anyhow::Result;
use tracing::info;

use rust_i18n::t;
use vitrin::client::ContentClient;
use vitrin::config::Config;
use vitrin::routing::{LocaleSwitchResolver, LocaleSwitcher, Navigator};

use super::parse_locale;

/// Stand-in for the presentation layer's history replace: the CLI just
/// logs where navigation would go.
struct LoggingNavigator;

impl Navigator for LoggingNavigator {
    fn replace(&self, path: &str) {
        info!(path = %path, "History replace");
    }
}

pub async fn resolve(config: Config, path: String, from: String, to: String) -> Result<()> {
    let from = parse_locale(&from)?;
    let to = parse_locale(&to)?;

    let client = ContentClient::from_config(&config.api)?;
    let switcher = LocaleSwitcher::new(LocaleSwitchResolver::new(client));

    match switcher.switch(&LoggingNavigator, &path, from, to).await {
        Some(target) => println!("{}: {target}", t!("cli.resolve.result")),
        None => println!("{}", t!("cli.resolve.discarded")),
    }

    Ok(())
}
