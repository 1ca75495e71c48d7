mod init_logging;

use clap::Parser;
use fstree_core::prelude::*;
use init_logging::init_logging;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[command(
    name = BINARY_NAME,
    about = "Rewrites owners, counts nodes and injects empty directories in a file tree"
)]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct CliArgs {
    /// JSON tree description, the bundled sample tree is used if omitted
    #[arg(long, short)]
    tree: Option<PathBuf>,

    /// Owner assigned to every node
    #[arg(long, short, default_value = "new-owner")]
    owner: String,

    /// Directory receiving the empty directories
    #[arg(long, default_value = DEFAULT_TARGET)]
    target: String,

    /// Name of an empty directory to inject, may be repeated
    #[arg(long = "empty-dir", default_values = DEFAULT_EMPTY_DIRECTORIES)]
    empty_directories: Vec<String>,

    #[arg(long, default_value = "warn")]
    log_level: LevelFilter,
}

#[derive(Clone, Debug, Builder, Getters)]
pub struct Input {
    #[getset(get = "pub")]
    tree: Node,

    #[builder(into)]
    #[getset(get = "pub")]
    owner: String,

    #[builder(into)]
    #[getset(get = "pub")]
    target: String,

    #[getset(get = "pub")]
    empty_directories: Vec<String>,
}

impl TryFrom<CliArgs> for Input {
    type Error = Error;

    fn try_from(args: CliArgs) -> Result<Self, Self::Error> {
        let tree = match args.tree {
            Some(path) => load_tree().path(path).call()?,
            None => nodejs_package()?,
        };
        Ok(Input::builder()
            .tree(tree)
            .owner(args.owner)
            .target(args.target)
            .empty_directories(args.empty_directories)
            .build())
    }
}

/// Runs every report over the input tree, returning the lines to print.
pub fn run(input: Input) -> Result<Vec<String>> {
    info!("Rewriting owners of '{}' to {}", input.tree().name(), input.owner());
    let tree = change_owner()
        .tree(input.tree())
        .owner(input.owner().as_str())
        .call();
    let mut lines = names_with_owners(&tree);

    info!("Counting nodes");
    lines.push(format!("Total nodes: {}", count_all_nodes(&tree)));
    lines.push(format!("Total files: {}", count_files(&tree)));
    lines.push(format!("Total directories: {}", count_directories(&tree)));
    lines.extend(file_counts(&tree).lines());

    info!(
        "Adding {:?} to '{}'",
        input.empty_directories(),
        input.target()
    );
    let updated = add_empty_directories()
        .tree(&tree)
        .target(input.target())
        .names(input.empty_directories().clone())
        .call()?;
    lines.extend(empty_directories(&updated));
    Ok(lines)
}

fn run_cli(args: CliArgs) -> Result<()> {
    let input = Input::try_from(args)?;
    for line in run(input)? {
        println!("{line}");
    }
    Ok(())
}

fn main() -> ExitCode {
    let args = CliArgs::parse();
    init_logging(args.log_level);
    info!("Starting {BINARY_NAME}");
    match run_cli(args) {
        Ok(_) => {
            debug!("Run completed successfully.");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
