use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use tracing::error;

use crate::app::init_roster;
use crate::config::RosterConfig;
use crate::data::manifest::rebuild_manifest;
use crate::data::RosterLoader;
use crate::logging::init_tracing;
use crate::rng::Rng;
use crate::server;
use crate::view::render_page;

#[derive(Debug, Parser)]
#[command(name = "roster", version, about = "Render and serve the student roster")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Serve the rendered roster page, its JSON API, and the site's static files.
    Serve {
        #[arg(long)]
        bind: Option<String>,
        #[command(flatten)]
        site: SiteArgs,
    },
    /// Load the roster once and print the rendered HTML.
    Render {
        #[command(flatten)]
        site: SiteArgs,
        /// Seed for default photo selection, for reproducible output.
        #[arg(long)]
        seed: Option<u64>,
        /// Print the whole page instead of only the roster list.
        #[arg(long)]
        page: bool,
    },
    /// Load the roster and report every entry that would be skipped.
    Validate {
        #[command(flatten)]
        site: SiteArgs,
    },
    /// Regenerate the manifest from the student files on disk.
    Manifest {
        /// Student directory; defaults to `<site root>/data/students`.
        #[arg(long)]
        dir: Option<PathBuf>,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Args)]
pub struct SiteArgs {
    #[arg(long)]
    pub site_root: Option<PathBuf>,
    #[arg(long)]
    pub remote_base: Option<String>,
}

impl SiteArgs {
    fn apply(&self, mut config: RosterConfig) -> RosterConfig {
        if let Some(root) = &self.site_root {
            config.site_root = root.clone();
        }
        if let Some(base) = &self.remote_base {
            config.remote_base = Some(base.clone());
        }
        config
    }
}

pub fn parse_command(args: &[String]) -> Result<Command, clap::Error> {
    Cli::try_parse_from(args).map(|cli| cli.command)
}

pub async fn run_with_args(args: &[String]) -> i32 {
    let command = match parse_command(args) {
        Ok(command) => command,
        Err(err) => {
            let _ = err.print();
            return err.exit_code();
        }
    };

    let config = RosterConfig::from_env();
    init_tracing(config.log_json);

    match command {
        Command::Serve { bind, site } => handle_serve(site.apply(config), bind).await,
        Command::Render { site, seed, page } => handle_render(site.apply(config), seed, page).await,
        Command::Validate { site } => handle_validate(site.apply(config)).await,
        Command::Manifest { dir } => handle_manifest(&config, dir),
    }
}

async fn handle_serve(mut config: RosterConfig, bind: Option<String>) -> i32 {
    if let Some(bind) = bind {
        config.bind_addr = bind;
    }
    match server::run_server(config).await {
        Ok(()) => 0,
        Err(err) => {
            error!(error = %err, "server error");
            1
        }
    }
}

async fn handle_render(config: RosterConfig, seed: Option<u64>, page: bool) -> i32 {
    let fetcher = match config.fetcher() {
        Ok(fetcher) => fetcher,
        Err(err) => {
            eprintln!("{err}");
            return 2;
        }
    };
    let mut rng = seed.map(Rng::new).unwrap_or_else(Rng::from_entropy);

    let view = init_roster(fetcher.as_ref(), config.paths.clone(), &mut rng).await;
    if page {
        print!("{}", render_page(&view.container));
    } else {
        println!("{}", view.container.to_html());
    }

    if view.is_error() {
        1
    } else {
        0
    }
}

async fn handle_validate(config: RosterConfig) -> i32 {
    let fetcher = match config.fetcher() {
        Ok(fetcher) => fetcher,
        Err(err) => {
            eprintln!("{err}");
            return 2;
        }
    };
    let mut rng = Rng::from_entropy();
    let mut loader = RosterLoader::new(fetcher.as_ref(), config.paths.clone());

    match loader.load(&mut rng).await {
        Ok(outcome) if outcome.skipped.is_empty() => {
            println!(
                "validation passed: {} student(s) in '{}'",
                outcome.students.len(),
                config.paths.manifest_path
            );
            0
        }
        Ok(outcome) => {
            eprintln!(
                "validation failed: {} skipped, {} accepted",
                outcome.skipped.len(),
                outcome.students.len()
            );
            for skipped in &outcome.skipped {
                eprintln!("- {}: {}", skipped.entry, skipped.reason);
            }
            1
        }
        Err(err) => {
            eprintln!("validation failed: {err}");
            1
        }
    }
}

fn handle_manifest(config: &RosterConfig, dir: Option<PathBuf>) -> i32 {
    let dir = dir.unwrap_or_else(|| config.site_root.join(&config.paths.data_root));
    match rebuild_manifest(&dir) {
        Ok(report) => {
            println!(
                "Updated manifest with {} student file(s).",
                report.entries.len()
            );
            0
        }
        Err(err) => {
            eprintln!("manifest update failed: {err}");
            1
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn parses_subcommands() {
        assert_eq!(
            parse_command(&args(&["roster", "render", "--seed", "7", "--page"])).ok(),
            Some(Command::Render {
                site: SiteArgs::default(),
                seed: Some(7),
                page: true,
            })
        );
        assert_eq!(
            parse_command(&args(&["roster", "validate", "--site-root", "/tmp/site"])).ok(),
            Some(Command::Validate {
                site: SiteArgs {
                    site_root: Some(PathBuf::from("/tmp/site")),
                    remote_base: None,
                },
            })
        );
    }

    #[test]
    fn unknown_subcommand_is_usage_error() {
        let err = parse_command(&args(&["roster", "launch"])).expect_err("unknown");
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn site_args_override_config() {
        let site = SiteArgs {
            site_root: Some(PathBuf::from("elsewhere")),
            remote_base: Some("https://example.org".to_string()),
        };
        let config = site.apply(RosterConfig::default());
        assert_eq!(config.site_root, PathBuf::from("elsewhere"));
        assert_eq!(config.remote_base.as_deref(), Some("https://example.org"));
    }
}
