mod cli;

use seedforge::{
    compose::ComposeOptions,
    config::{self, Config},
    pipeline::{self, PreparedRelease},
    probe, scanner,
    tags::{self, Taxonomy},
};

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Commands};
use rayon::prelude::*;
use std::path::{Path, PathBuf};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Respect RUST_LOG env var if set, otherwise use defaults based on verbose flag
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            "seedforge=trace,seedforge_parser=trace,seedforge_probe=debug,seedforge_common=debug"
                .to_string()
        } else {
            "seedforge=info,seedforge_probe=warn".to_string()
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(&env_filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Parse { name } => parse(&name),
        Commands::Analyze { dir } => analyze(&dir),
        Commands::Name {
            path,
            report,
            no_probe,
            group,
            json,
        } => {
            let config = config::load_config_or_default(cli.config.as_deref())?;
            name(&config, &path, report.as_deref(), no_probe, group.as_deref(), json)
        }
        Commands::Tags {
            path,
            taxonomy,
            genres,
            report,
            no_probe,
        } => {
            let config = config::load_config_or_default(cli.config.as_deref())?;
            select_tags(&config, &path, taxonomy.as_deref(), &genres, report.as_deref(), no_probe)
        }
        Commands::Batch { paths, no_probe } => {
            let config = config::load_config_or_default(cli.config.as_deref())?;
            batch(&config, &paths, no_probe)
        }
        Commands::CheckTools => {
            let config = config::load_config_or_default(cli.config.as_deref())?;
            check_tools(&config)
        }
        Commands::Validate {
            config: config_path,
        } => {
            let path = config_path.or(cli.config);
            validate_config(path.as_deref())
        }
    }
}

fn parse(name: &str) -> Result<()> {
    let parsed = seedforge_parser::parse_name(name);
    println!("{}", serde_json::to_string_pretty(&parsed)?);
    Ok(())
}

fn analyze(dir: &Path) -> Result<()> {
    if !dir.is_dir() {
        anyhow::bail!("Not a directory: {:?}", dir);
    }
    let analysis = scanner::analyze_directory(dir)?;
    println!("{}", serde_json::to_string_pretty(&analysis)?);
    Ok(())
}

/// Technical report for a release: a saved report, a fresh probe, or none.
///
/// Probe failures are not fatal; naming falls back to the name alone.
fn technical_report(
    config: &Config,
    path: &Path,
    report: Option<&Path>,
    no_probe: bool,
) -> Result<Option<probe::TechnicalReport>> {
    if let Some(report) = report {
        return probe::load_report(report).map(Some);
    }
    if no_probe || !config.probe.enabled || !path.exists() {
        return Ok(None);
    }

    let runner = probe::MediaInfoRunner::new(&config.probe.mediainfo);
    match probe::probe_release(path, &runner) {
        Ok(report) => Ok(Some(report)),
        Err(e) => {
            tracing::warn!("Probe skipped for {:?}: {:#}", path, e);
            Ok(None)
        }
    }
}

fn prepare(
    config: &Config,
    path: &Path,
    report: Option<&Path>,
    no_probe: bool,
) -> Result<PreparedRelease> {
    let report = technical_report(config, path, report, no_probe)?;
    let options = ComposeOptions::from(config);
    pipeline::prepare_release(path, report.as_ref(), &options)
}

fn name(
    config: &Config,
    path: &Path,
    report: Option<&Path>,
    no_probe: bool,
    group: Option<&str>,
    json: bool,
) -> Result<()> {
    let mut prepared = prepare(config, path, report, no_probe)?;
    if let Some(group) = group {
        prepared.set_release_group(group, &ComposeOptions::from(config));
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&prepared)?);
        return Ok(());
    }

    match &prepared.name {
        Some(name) => println!("{}", name),
        None => anyhow::bail!("Not a video release ({:?}): {:?}", prepared.kind, path),
    }
    Ok(())
}

fn taxonomy_path(config: &Config, taxonomy: Option<&Path>) -> Result<PathBuf> {
    if let Some(path) = taxonomy {
        return Ok(path.to_path_buf());
    }
    let path = config
        .taxonomy
        .path
        .as_ref()
        .context("No taxonomy given: use --taxonomy or set taxonomy.path in the config")?;
    Ok(PathBuf::from(
        shellexpand::tilde(&path.to_string_lossy()).into_owned(),
    ))
}

fn select_tags(
    config: &Config,
    path: &Path,
    taxonomy: Option<&Path>,
    genres: &[String],
    report: Option<&Path>,
    no_probe: bool,
) -> Result<()> {
    let taxonomy = Taxonomy::load(&taxonomy_path(config, taxonomy)?)?;
    let mut prepared = prepare(config, path, report, no_probe)?;
    prepared.attributes.genres.extend(genres.iter().cloned());

    let Some(variant) = prepared.variant() else {
        anyhow::bail!("Not a video release ({:?}): {:?}", prepared.kind, path);
    };

    let region = ComposeOptions::from(config).region;
    let selected = tags::resolve_tags_with(&variant, &prepared.attributes, &taxonomy, &region);
    tracing::info!("Selected {} tags", selected.len());
    for id in &selected {
        println!("{}\t{}", id, taxonomy.tag_name(id).unwrap_or(""));
    }
    Ok(())
}

fn batch(config: &Config, paths: &[PathBuf], no_probe: bool) -> Result<()> {
    let results: Vec<(&PathBuf, Result<PreparedRelease>)> = paths
        .par_iter()
        .map(|path| (path, prepare(config, path, None, no_probe)))
        .collect();

    let mut failures = 0;
    for (path, result) in results {
        match result {
            Ok(PreparedRelease { name: Some(name), .. }) => {
                println!("{}\t{}", path.display(), name)
            }
            Ok(prepared) => {
                println!("{}\t({:?})", path.display(), prepared.kind)
            }
            Err(e) => {
                failures += 1;
                eprintln!("{}: {:#}", path.display(), e);
            }
        }
    }

    if failures > 0 {
        tracing::warn!("{} of {} items failed", failures, paths.len());
    }
    Ok(())
}

fn check_tools(config: &Config) -> Result<()> {
    println!("Checking external tools...\n");

    let tool = probe::check_tool(&config.probe.mediainfo);
    let status = if tool.available { "✓" } else { "✗" };
    print!("{} {}", status, tool.name);

    if let Some(ref version) = tool.version {
        print!(" ({})", version.lines().next().unwrap_or(""));
    }
    if let Some(ref path) = tool.path {
        print!(" - {}", path.display());
    }
    println!("\n");

    if tool.available {
        println!("All required tools are available!");
    } else {
        println!("mediainfo is missing. Names will be composed from file names only.");
    }

    Ok(())
}

fn validate_config(path: Option<&Path>) -> Result<()> {
    match path {
        Some(p) => {
            println!("Validating config: {:?}", p);
            let config = config::load_config(p)?;
            println!("✓ Configuration is valid");
            println!("  Default group: {}", config.naming.default_group);
            println!("  Default region: {:?}", config.language.default_region);
            println!(
                "  Taxonomy: {}",
                config
                    .taxonomy
                    .path
                    .as_ref()
                    .map(|p| p.display().to_string())
                    .unwrap_or_else(|| "(none)".to_string())
            );
            println!(
                "  Probe: {} ({})",
                if config.probe.enabled { "enabled" } else { "disabled" },
                config.probe.mediainfo
            );
        }
        None => {
            println!("No config file specified, using defaults");
            let config = Config::default();
            println!("Default config:");
            println!("  Default group: {}", config.naming.default_group);
        }
    }

    Ok(())
}
