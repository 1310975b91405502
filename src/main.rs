use std::path::PathBuf;

use anyhow::bail;
use clap::Parser;
use tracing::info;

use release_versions::config::{self, ScraperConfig};
use release_versions::version::releases::ReleaseVersions;

#[derive(Parser)]
#[command(name = "release-versions")]
#[command(version, about = "Find the latest versions published on a project's releases pages")]
struct Cli {
    /// Repository owner
    owner: String,

    /// Project name
    project: String,

    /// Base URL of the host (defaults to https://github.com/)
    #[arg(long)]
    base_url: Option<String>,

    /// Path to a JSON config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Only consider versions starting with this major version
    #[arg(long)]
    major: Option<String>,

    /// Consider alpha, beta and rc versions as well
    #[arg(long)]
    include_prerelease: bool,

    /// Print every version, highest first
    #[arg(long)]
    all: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    release_versions::log::init()?;

    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?
        .block_on(run(cli))
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let mut scraper_config = match &cli.config {
        Some(path) => ScraperConfig::load(path)?,
        None => ScraperConfig::load_or_default(&config::config_path())?,
    };
    if let Some(base_url) = cli.base_url {
        scraper_config.base_url = base_url;
    }

    info!(
        "Collecting versions for {}/{} from {}",
        cli.owner, cli.project, scraper_config.base_url
    );

    let mut releases = ReleaseVersions::from_config(&scraper_config, &cli.owner, &cli.project)?;
    releases.collect_all_versions().await?;

    if cli.all {
        for version in releases.versions() {
            println!("{version}");
        }
        return Ok(());
    }

    let only_stable = !cli.include_prerelease;
    let latest = match &cli.major {
        Some(major) => releases.latest_major_version(major, only_stable)?,
        None => releases.latest_version(only_stable)?,
    };

    match latest {
        Some(version) => println!("{version}"),
        None => bail!("No matching version found for {}/{}", cli.owner, cli.project),
    }

    Ok(())
}
