// ============================================================
// Layer 1 — CLI Commands and Arguments
// ============================================================
// One subcommand per operation:
//
//   new-logdir   allocate logdir_NNN under the root
//   list         run logs in a log directory
//   epochs       epoch numbers of a run log
//   keys         field values across a run log
//   patterns     input patterns of one snapshot
//   layer-dims   weight shapes from the first snapshot
//   layer-names  layer fields of the first snapshot
//
// Reference: Rust Book §12 (Building a CLI Program)

use clap::{Args, Subcommand};
use std::path::PathBuf;

use crate::data::pattern::ElementType;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a fresh log directory and print its path
    NewLogdir(NewLogdirArgs),

    /// List the run logs inside a log directory
    List(ListArgs),

    /// Print the epoch number of every snapshot
    Epochs(RunLogArgs),

    /// Print the values of one or more fields across all snapshots
    Keys(KeysArgs),

    /// Print "label | vector" for the input patterns of one snapshot
    Patterns(PatternsArgs),

    /// Print the weight shape of one or more layers
    LayerDims(LayerDimsArgs),

    /// Print the layer names of a run log
    LayerNames(RunLogArgs),
}

#[derive(Args, Debug)]
pub struct NewLogdirArgs {
    /// Root directory; defaults to the configured root
    #[arg(long)]
    pub root: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Log directory to scan
    pub logdir: PathBuf,
}

#[derive(Args, Debug)]
pub struct RunLogArgs {
    /// Path to a run log (snap_<run_index>.jsonl)
    pub runlog: PathBuf,
}

#[derive(Args, Debug)]
pub struct KeysArgs {
    /// Path to a run log
    pub runlog: PathBuf,

    /// Field name; repeat for several fields
    #[arg(long = "key", short = 'k', required = true)]
    pub keys: Vec<String>,
}

#[derive(Args, Debug)]
pub struct PatternsArgs {
    /// Path to a run log
    pub runlog: PathBuf,

    /// Index of the snapshot to render
    #[arg(long, default_value_t = 0)]
    pub index: usize,

    /// Element type: int or float; defaults to the configured type
    #[arg(long)]
    pub element_type: Option<ElementType>,
}

#[derive(Args, Debug)]
pub struct LayerDimsArgs {
    /// Path to a run log
    pub runlog: PathBuf,

    /// Layer name; repeat for several layers
    #[arg(long = "layer", short = 'l', required = true)]
    pub layers: Vec<String>,
}
