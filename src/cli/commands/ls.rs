//! Ls command implementation.
//!
//! Loads every tessera, applies the type filter, orders by the
//! requested column and renders a fixed-width table. An empty
//! collection prints a notice instead of a table.

use crate::cli::commands::open_workspace;
use crate::cli::{LsArgs, OrderType};
use crate::error::Result;
use crate::format::render_table;
use crate::storage::{LS_HEADER, ListOptions};

/// Execute the ls command.
///
/// # Errors
///
/// Returns `InvalidOrderColumn` for an unknown `--order-by` column, or
/// any tessera load failure.
pub fn execute(args: &LsArgs) -> Result<()> {
    let (_git, store) = open_workspace()?;

    let options = ListOptions {
        order_by: args.order_by.clone(),
        descending: args.order_type == OrderType::Desc,
        filter_types: args
            .filter_types
            .iter()
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .collect(),
    };

    let rows = store.ls_rows(&options)?;
    if rows.is_empty() {
        println!("No tesserae found.");
        return Ok(());
    }

    let rows: Vec<Vec<String>> = rows.into_iter().map(Vec::from).collect();
    print!("{}", render_table(&LS_HEADER, &rows));
    Ok(())
}
