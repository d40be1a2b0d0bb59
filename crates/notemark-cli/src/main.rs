use anyhow::{Context, Result, bail};
use clap::Parser;
use notemark_config::{Config, ConfigError};
use notemark_engine::{ParseOptions, SectionNesting, SiteLayout, publish_all, publish_article};
use relative_path::RelativePath;
use std::path::PathBuf;
use std::process;

/// Publish notemark articles as standalone HTML pages.
#[derive(Debug, Parser)]
#[command(name = "notemark", version, about)]
struct Cli {
    /// Site base directory (defaults to `base_dir` from the config file)
    #[arg(long, short = 'b')]
    base_dir: Option<PathBuf>,

    /// Fail on unknown tags, unclosed notes and malformed frontmatter
    #[arg(long)]
    strict: bool,

    /// Close the open section when a new `#` heading starts
    #[arg(long)]
    sibling_sections: bool,

    /// Publish every article in the source directory
    #[arg(long, conflicts_with = "files")]
    all: bool,

    /// Remember the base directory and parse flags in the config file
    #[arg(long, requires = "base_dir")]
    save_config: bool,

    /// Article sources, relative to `<base-dir>/src/articles`
    #[arg(required_unless_present_any = ["all", "save_config"])]
    files: Vec<String>,
}

fn main() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    match run(Cli::parse()) {
        Ok(0) => {}
        Ok(failed) => {
            log::error!("{failed} article(s) failed");
            process::exit(1);
        }
        Err(e) => {
            eprintln!("Error: {e:#}");
            process::exit(1);
        }
    }
}

/// Publishes the requested articles and returns how many failed.
fn run(cli: Cli) -> Result<usize> {
    let (base_dir, options) = resolve_settings(&cli, Config::load())?;

    if cli.save_config {
        let config = Config {
            base_dir: base_dir.clone(),
            parse: options,
        };
        config.save().context("failed to save config file")?;
        log::info!("Saved settings to {}", Config::config_path().display());
    }

    let layout = SiteLayout::from_base_dir(&base_dir);
    log::debug!("using layout {layout:?} with {options:?}");

    if cli.all {
        let results = publish_all(&layout, &options)
            .with_context(|| format!("cannot scan {}", layout.src_dir.display()))?;
        return Ok(results.iter().filter(|(_, r)| r.is_err()).count());
    }

    let mut failed = 0;
    for file in &cli.files {
        if let Err(e) = publish_article(RelativePath::new(file), &layout, &options) {
            log::error!("{e}");
            failed += 1;
        }
    }
    Ok(failed)
}

/// Base directory and parse options from the command line and the loaded
/// config file. Flags win over the config file.
fn resolve_settings(
    cli: &Cli,
    loaded: Result<Option<Config>, ConfigError>,
) -> Result<(PathBuf, ParseOptions)> {
    let (base_dir, mut options) = match (&cli.base_dir, loaded) {
        (Some(base_dir), Ok(config)) => (
            base_dir.clone(),
            config.map(|c| c.parse).unwrap_or_default(),
        ),
        (Some(base_dir), Err(e)) => {
            log::warn!("ignoring config file: {e}");
            (base_dir.clone(), ParseOptions::default())
        }
        (None, Ok(Some(config))) => {
            log::info!("Using base directory from {}", Config::config_path().display());
            (config.base_dir, config.parse)
        }
        (None, Ok(None)) => bail!(
            "no --base-dir given and no config file found at {}",
            Config::config_path().display()
        ),
        (None, Err(e)) => return Err(e).context("failed to load config file"),
    };

    if cli.strict {
        options.strict = true;
    }
    if cli.sibling_sections {
        options.sections = SectionNesting::Sibling;
    }
    Ok((base_dir, options))
}
