use crate::cli::run;

pub mod catalog;
pub mod cli;
mod config;
pub mod domain;
pub mod http;
mod render;
mod upstream;

fn main() -> anyhow::Result<()> {
    run()
}
