pub mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "jobcrawl")]
#[command(about = "Crawl a paginated job board into CSV", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Crawl all listing pages and write the vacancies
    Crawl(CrawlArgs),

    /// Write the default configuration file
    InitConfig {
        /// Where to write it (default: ~/.config/jobcrawl/config.toml)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },
}

#[derive(clap::Args, Debug, Default)]
pub struct CrawlArgs {
    /// Configuration file (default: ~/.config/jobcrawl/config.toml)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Stop before this page number
    #[arg(short, long)]
    pub page_limit: Option<u32>,

    /// CSV output path; implies saving to file
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Log every parsed vacancy
    #[arg(short, long)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_crawl_args() {
        let cli = Cli::try_parse_from([
            "jobcrawl",
            "crawl",
            "--page-limit",
            "5",
            "--output",
            "out.csv",
            "-v",
        ])
        .unwrap();

        match cli.command {
            Commands::Crawl(args) => {
                assert_eq!(args.page_limit, Some(5));
                assert_eq!(args.output, Some(PathBuf::from("out.csv")));
                assert!(args.verbose);
                assert!(args.config.is_none());
            }
            _ => panic!("expected crawl"),
        }
    }

    #[test]
    fn test_parse_init_config() {
        let cli = Cli::try_parse_from(["jobcrawl", "init-config", "--force"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::InitConfig {
                config: None,
                force: true
            }
        ));
    }
}
