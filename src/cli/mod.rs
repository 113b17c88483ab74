// ============================================================
// Layer 1 — CLI / Presentation Layer
// ============================================================
// Parses arguments with clap and prints results.
// All work is delegated to Layer 2 (application) or, for
// directory housekeeping, straight to Layer 6 (infra).
//
// Reference: Rust Book §7 (Modules), §12 (CLI programs)

pub mod commands;

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use crate::application::{config::SnaplogConfig, inspect_use_case::InspectUseCase};
use crate::infra::logdir::{list_runlogs, new_logdir_in};
use commands::{Commands, KeysArgs, LayerDimsArgs, PatternsArgs};

#[derive(Parser, Debug)]
#[command(
    name = "ffbp-snaplog",
    version,
    about = "Allocate log directories and inspect recorded training snapshots."
)]
pub struct Cli {
    /// JSON configuration file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    pub fn run(self) -> Result<()> {
        let config = SnaplogConfig::load_or_default(self.config.as_deref())?;

        match self.command {
            Commands::NewLogdir(args) => {
                let root   = args.root.unwrap_or(config.logdir_root);
                let logdir = new_logdir_in(&root)?;
                println!("{}", logdir.display());
            }
            Commands::List(args) => {
                for entry in list_runlogs(&args.logdir)? {
                    println!("{}\t{}", entry.file_name, entry.path.display());
                }
            }
            Commands::Epochs(args) => {
                let inspect = InspectUseCase::open(args.runlog, &config)?;
                let epochs: Vec<String> = inspect.epochs()?.iter().map(i64::to_string).collect();
                println!("{}", epochs.join(","));
            }
            Commands::Keys(args) => run_keys(args, &config)?,
            Commands::Patterns(args) => run_patterns(args, &config)?,
            Commands::LayerDims(args) => run_layer_dims(args, &config)?,
            Commands::LayerNames(args) => {
                let inspect = InspectUseCase::open(args.runlog, &config)?;
                for name in inspect.layer_names()? {
                    println!("{name}");
                }
            }
        }
        Ok(())
    }
}

/// One line per key: `<key>\t<values as JSON>`
fn run_keys(args: KeysArgs, config: &SnaplogConfig) -> Result<()> {
    let inspect = InspectUseCase::open(args.runlog, config)?;
    for (key, values) in inspect.data_by_key(&args.keys)? {
        println!("{key}\t{}", serde_json::to_string(&values)?);
    }
    Ok(())
}

fn run_patterns(args: PatternsArgs, config: &SnaplogConfig) -> Result<()> {
    let element_type = args.element_type.unwrap_or(config.pattern_element_type);
    let inspect      = InspectUseCase::open(args.runlog, config)?;

    tracing::debug!("Rendering snapshot {} as {}", args.index, element_type);
    for line in inspect.patterns(args.index, element_type)? {
        println!("{line}");
    }
    Ok(())
}

/// One line per layer: `<layer>\t<d0>x<d1>...`
fn run_layer_dims(args: LayerDimsArgs, config: &SnaplogConfig) -> Result<()> {
    let inspect = InspectUseCase::open(args.runlog, config)?;
    for (layer, shape) in inspect.layer_dims(&args.layers)? {
        let dims: Vec<String> = shape.iter().map(usize::to_string).collect();
        println!("{layer}\t{}", dims.join("x"));
    }
    Ok(())
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::pattern::ElementType;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parses_repeated_keys_and_element_type() {
        let cli = Cli::try_parse_from([
            "ffbp-snaplog", "keys", "run.jsonl", "-k", "enum", "--key", "loss",
        ])
        .unwrap();
        match cli.command {
            Commands::Keys(args) => assert_eq!(args.keys, ["enum", "loss"]),
            other => panic!("unexpected command {other:?}"),
        }

        let cli = Cli::try_parse_from([
            "ffbp-snaplog", "--config", "c.json", "patterns", "run.jsonl", "--element-type", "float",
        ])
        .unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("c.json")));
        match cli.command {
            Commands::Patterns(args) => assert_eq!(args.element_type, Some(ElementType::Float)),
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_new_logdir_under_explicit_root() {
        let tmp = tempfile::TempDir::new().unwrap();
        let cli = Cli::try_parse_from([
            "ffbp-snaplog".into(),
            "new-logdir".into(),
            "--root".into(),
            tmp.path().as_os_str().to_owned(),
        ])
        .unwrap();
        cli.run().unwrap();
        assert!(tmp.path().join("logdir_000").is_dir());
    }
}
