//! Initialize command.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use clap::Args;

use relnotes_config::CONFIG_FILE_NAME;

const CONFIG_TEMPLATE: &str = r#"# Relnotes configuration.

title = "Release Notes"
file = "RELEASENOTES.md"
append = false
branch = "master"

# Uncomment to link issue codes and pull request ids.
# issue_link_base_url = "https://tracker.example.com/browse"
# pull_request_link_base_url = "https://host.example.com/_git/repo/pullrequest"

[source]
export = "commits.json"

# Sections appear in this order; the first section accepting a commit's
# change type claims it. Remove them all to use the built-in defaults.

[[sections]]
title = "New Features"
emoji = ":star:"
labels = ["feat", "test", "perf"]

[[sections]]
title = "Bug Fixes"
emoji = ":beetle:"
labels = ["fix"]

[[sections]]
title = "Documentation"
emoji = ":notebook_with_decorative_cover:"
labels = ["doc", "docs", "style", "chore"]

[[sections]]
title = "Refactorings"
emoji = ":wrench:"
labels = ["refactor"]

[[releases]]
title = "v1.0.0"
from_date = "2026-01-01T00:00:00Z"
to_date = "2026-02-01T00:00:00Z"
"#;

/// Arguments for the init command.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Force overwrite existing configuration
    #[arg(short, long)]
    pub force: bool,
}

/// Runs the init command.
pub fn run(args: &InitArgs) -> Result<()> {
    let path = Path::new(CONFIG_FILE_NAME);

    if path.exists() && !args.force {
        bail!("{CONFIG_FILE_NAME} already exists; use --force to overwrite");
    }

    fs::write(path, CONFIG_TEMPLATE)
        .with_context(|| format!("failed to write {CONFIG_FILE_NAME}"))?;

    println!("Created {CONFIG_FILE_NAME}");
    println!("\nNext steps:");
    println!("  1. Point [source] export at a commit export file");
    println!("  2. Adjust the release windows");
    println!("  3. Run: relnotes generate");
    Ok(())
}
