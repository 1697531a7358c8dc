//! Resolve a single grid reference.

use clap::Args;
use tasgrid::grid::GridResolver;
use tasgrid::sheet::SheetTable;

use super::common::{format_point, ReferenceArgs};
use crate::error::CliError;

/// Arguments for the resolve command.
#[derive(Debug, Args)]
pub struct ResolveArgs {
    #[command(flatten)]
    pub reference: ReferenceArgs,
}

/// Run the resolve command.
pub fn run(args: ResolveArgs, table: &SheetTable) -> Result<(), CliError> {
    let reference = args.reference.to_reference()?;
    let point = GridResolver::new(table).resolve(&reference)?;

    println!("{}", format_point(&point));
    Ok(())
}
