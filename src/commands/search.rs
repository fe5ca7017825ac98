use anyhow::Result;
use rust_i18n::t;

use vitrin::client::ContentClient;
use vitrin::config::Config;
use vitrin::models::{SearchHit, SearchHitKind};

use super::parse_locale;

pub async fn search(config: Config, query: String, locale: String) -> Result<()> {
    let locale = parse_locale(&locale)?;
    let client = ContentClient::from_config(&config.api)?;

    let hits = client.search(locale, &query).await?;
    if hits.is_empty() {
        println!("{}", t!("cli.search.empty"));
        return Ok(());
    }

    println!("{} ({}):", t!("cli.search.header"), hits.len());
    for hit in &hits {
        println!("  [{}] {} ({})", kind_label(hit), hit.title, hit.slug);
    }

    Ok(())
}

fn kind_label(hit: &SearchHit) -> &'static str {
    match hit.kind {
        SearchHitKind::Product => "product",
        SearchHitKind::Category => "category",
    }
}
