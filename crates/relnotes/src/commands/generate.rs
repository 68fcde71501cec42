//! Generate command.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use tracing::info;

use relnotes_config::{Config, find_and_load_config, load_config};
use relnotes_core::{
    Generator, ReleaseWindow, RenderOptions, Section, SectionList, write_document,
};
use relnotes_source::ExportSource;

/// Arguments for the generate command.
#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// Configuration file (default: discover relnotes.toml upwards)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Output file (overrides the configured destination)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Runs the generate command.
pub fn run(args: &GenerateArgs) -> Result<()> {
    let config = match &args.config {
        Some(path) => load_config(path),
        None => find_and_load_config(std::env::current_dir()?),
    }
    .context("failed to load configuration")?;

    let source = ExportSource::from_file(&config.source.export)
        .with_context(|| format!("failed to load commit export {:?}", config.source.export))?;

    let generator = Generator::new(
        Box::new(source.clone()),
        Box::new(source),
        section_list(&config),
        RenderOptions {
            issue_link_base_url: config.issue_link_base_url.clone(),
            pull_request_link_base_url: config.pull_request_link_base_url.clone(),
        },
    );

    let windows = release_windows(&config);
    info!(releases = windows.len(), "generating release notes");

    let content = generator
        .generate(&config.title, &config.branch, &windows)
        .context("failed to generate release notes")?;

    let output_path = args
        .output
        .clone()
        .unwrap_or_else(|| PathBuf::from(&config.file));

    write_document(&output_path, &content, config.append)
        .with_context(|| format!("failed to write {}", output_path.display()))?;

    println!("Wrote release notes to {}", output_path.display());
    Ok(())
}

/// Maps configured sections onto the core section list.
fn section_list(config: &Config) -> SectionList {
    SectionList::new(
        config
            .sections
            .iter()
            .map(|section| {
                Section::new(
                    section.title.clone(),
                    section.emoji.clone(),
                    section.labels.clone(),
                )
            })
            .collect(),
    )
}

/// Maps configured releases onto core release windows.
fn release_windows(config: &Config) -> Vec<ReleaseWindow> {
    config
        .releases
        .iter()
        .map(|release| ReleaseWindow {
            title: release.title.clone(),
            from_date: release.from_date,
            to_date: release.to_date,
            branch: release.branch.clone(),
        })
        .collect()
}
