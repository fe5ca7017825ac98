use anyhow::{Context, Result};
use rust_i18n::t;

use vitrin::models::Locale;
use vitrin::routing::PathnameRegistry;

/// Print the localized route table, optionally running the startup
/// completeness check
pub fn routes(validate: bool) -> Result<()> {
    let registry = PathnameRegistry::new();

    if validate {
        registry
            .validate()
            .context("Route table failed validation")?;
        println!("{}", t!("cli.routes.valid"));
        return Ok(());
    }

    println!("{}", t!("cli.routes.header"));
    println!("{:<20} {:<20} {:<20}", "canonical", "en", "tr");
    for &template in registry.all_templates() {
        let en = registry
            .localized_pattern(template, Locale::En)
            .context("Route table incomplete")?;
        let tr = registry
            .localized_pattern(template, Locale::Tr)
            .context("Route table incomplete")?;
        println!("{:<20} {:<20} {:<20}", template.canonical(), en, tr);
    }

    Ok(())
}
