use anyhow::{anyhow, Result};
use rust_i18n::t;

use vitrin::client::{ContentClient, ContentSource};
use vitrin::config::Config;
use vitrin::routing::ContentKind;
use vitrin::utils::is_valid_slug;

use super::parse_locale;

pub async fn show(config: Config, kind: String, slug: String, locale: String) -> Result<()> {
    let locale = parse_locale(&locale)?;
    let kind = ContentKind::parse(&kind)
        .ok_or_else(|| anyhow!("Unknown content kind: {kind} (expected page, post or product)"))?;

    if !is_valid_slug(&slug) {
        return Err(anyhow!("Invalid slug: {slug}"));
    }

    let client = ContentClient::from_config(&config.api)?;
    let item = client.fetch_item(locale, kind, &slug).await?;

    println!("{}", serde_json::to_string_pretty(&item)?);
    if item.translated_slug().is_none() {
        println!("{}", t!("cli.show.no_translation"));
    }

    Ok(())
}
