use std::path::Path;

use crate::app::{AppContext, Result};
use crate::cli::CrawlArgs;
use crate::config::Config;
use crate::output;

/// Fold command-line flags into the loaded configuration.
pub fn apply_overrides(config: &mut Config, args: &CrawlArgs) {
    if let Some(limit) = args.page_limit {
        config.crawl.page_limit = Some(limit);
    }
    if let Some(ref path) = args.output {
        config.output.save_to_file = true;
        config.output.path = path.clone();
    }
    if args.verbose {
        config.crawl.verbose_logging = true;
    }
}

pub async fn crawl(args: &CrawlArgs) -> Result<()> {
    let mut config = Config::load(args.config.as_deref())?;
    apply_overrides(&mut config, args);

    let ctx = AppContext::new(config)?;
    let report = ctx.crawler.crawl().await?;

    println!(
        "Parsed {} vacancies from {} pages ({} skipped)",
        report.vacancies.len(),
        report.pages_fetched,
        report.skipped.len()
    );
    for skipped in &report.skipped {
        eprintln!("  ! page {} {}: {}", skipped.page, skipped.href, skipped.reason);
    }

    if ctx.config.output.save_to_file {
        output::write_csv(
            &ctx.config.output.path,
            &report.vacancies,
            ctx.config.output.prefix_nested_keys,
        )?;
        println!("Saved to {}", ctx.config.output.path.display());
    }

    Ok(())
}

pub fn init_config(path: Option<&Path>, force: bool) -> Result<()> {
    let path = match path {
        Some(p) => p.to_path_buf(),
        None => Config::default_config_path()?,
    };

    if path.exists() && !force {
        println!("Config already exists: {} (use --force to overwrite)", path.display());
        return Ok(());
    }

    Config::create_default_config(&path)?;
    println!("Wrote default config to {}", path.display());
    Ok(())
}
