//! Planar distance from a grid reference to a latitude/longitude.

use clap::Args;
use tasgrid::grid::GridResolver;
use tasgrid::sheet::SheetTable;

use super::common::ReferenceArgs;
use crate::error::CliError;

/// Arguments for the distance command.
#[derive(Debug, Args)]
pub struct DistanceArgs {
    #[command(flatten)]
    pub reference: ReferenceArgs,

    /// Target latitude in decimal degrees (negative south)
    #[arg(long, allow_hyphen_values = true)]
    pub lat: String,

    /// Target longitude in decimal degrees
    #[arg(long, allow_hyphen_values = true)]
    pub lon: String,
}

/// Run the distance command.
pub fn run(args: DistanceArgs, table: &SheetTable) -> Result<(), CliError> {
    let reference = args.reference.to_reference()?;
    let point = GridResolver::new(table).resolve(&reference)?;
    let metres = point.distance_to(&args.lat, &args.lon)?;

    println!("{:.3} m", metres);
    Ok(())
}
