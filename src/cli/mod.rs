use anyhow::Context;
use clap::{Parser, Subcommand};
use env_logger::Env;
use std::path::PathBuf;

use crate::catalog;
use crate::config;
use crate::http::server::HttpServer;
use crate::render::templates::Templates;
use crate::upstream::client::HttpUpstream;

#[derive(Parser)]
#[command(name = "groupie-tracker")]
#[command(version = "0.1")]
#[command(about = "Web pages for the Groupie Trackers artist API")]
pub struct Cli {
    /// Path to the config TOML file, built-in defaults are used without it
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run http server with the artist pages (default)
    Serve,
    /// Print the upstream artist list
    List,
}

/// Entrypoint for CLI
pub fn run() -> anyhow::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let cfg = config::Config::load(cli.config.as_deref())?;
    let upstream =
        HttpUpstream::new(&cfg.upstream).context("Failed to initialize upstream client")?;

    match cli.command.unwrap_or(Commands::Serve) {
        Commands::Serve => {
            let templates = Templates::from_dir(cfg.assets.templates_dir.as_deref())
                .context("Failed to load page templates")?;

            let http_server = HttpServer::new(upstream, templates, cfg.http, cfg.assets.css_dir);

            println!(
                "Open the following link: {}",
                http_server.config.access_url()
            );
            http_server.run()
        }

        Commands::List => {
            let artists = catalog::list_artists(&upstream)?;

            for artist in &artists {
                println!(
                    "{:>3}  {} ({})",
                    artist.id.0, artist.name, artist.creation_date
                );
            }
            println!("{} artists", artists.len());
            Ok(())
        }
    }
}
