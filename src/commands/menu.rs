use anyhow::Result;
use rust_i18n::t;

use vitrin::client::ContentClient;
use vitrin::config::Config;
use vitrin::models::MenuItem;

use super::parse_locale;

pub async fn menu(config: Config, locale: String) -> Result<()> {
    let locale = parse_locale(&locale)?;
    let client = ContentClient::from_config(&config.api)?;

    let items = client.menu_items(locale).await?;
    if items.is_empty() {
        println!("{}", t!("cli.menu.empty"));
        return Ok(());
    }

    for item in &items {
        print_item(item, 0);
    }

    Ok(())
}

fn print_item(item: &MenuItem, depth: usize) {
    let indent = "  ".repeat(depth);
    let newtab = if item.newtab { " (new tab)" } else { "" };
    println!("{indent}{} -> {}{newtab}", item.title, item.link);

    if let Some(children) = &item.children {
        for child in children {
            print_item(child, depth + 1);
        }
    }
}
