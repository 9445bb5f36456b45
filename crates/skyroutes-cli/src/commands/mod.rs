// Module exports for CLI subcommands
//
// Each module handles a specific CLI subcommand. main.rs parses arguments and
// dispatches to these handlers.

pub mod route;
pub mod validate;

use std::path::Path;

use anyhow::{Context, Result};
use skyroutes_lib::{build_graph, load_dataset, resolve_data_dir, DatasetPaths, Graph};

/// Load the dataset from the resolved data directory and build the graph.
///
/// Build issues are logged but never fatal.
pub fn load_graph(data_dir: Option<&Path>) -> Result<(Graph, usize)> {
    let dir = resolve_data_dir(data_dir).context("failed to resolve the data directory")?;
    let paths = DatasetPaths::in_dir(&dir);
    let dataset = load_dataset(&paths)
        .with_context(|| format!("failed to load dataset from {}", dir.display()))?;

    let graph = build_graph(&dataset.airports, &dataset.routes);
    if !graph.issues().is_empty() {
        tracing::warn!(
            "{} dataset issue(s) found; run `validate` for details",
            graph.issues().len()
        );
    }
    Ok((graph, dataset.routes.len()))
}
