//! List the loaded sheet table.

use tasgrid::sheet::SheetTable;

use crate::error::CliError;

/// Run the sheets command.
pub fn run(table: &SheetTable) -> Result<(), CliError> {
    println!(
        "{:<6} {:>4} {:>5}  {:>15}  {:>17}",
        "Sheet", "Zone", "Band", "Easting (m)", "Northing (m)"
    );

    for sheet in table.sorted() {
        println!(
            "{:<6} {:>4} {:>5}  {:>7}-{:<7}  {:>8}-{:<8}",
            sheet.code,
            sheet.zone,
            sheet.alpha,
            sheet.easting_start.metres(),
            sheet.easting_end.metres(),
            sheet.northing_start.metres(),
            sheet.northing_end.metres(),
        );
    }

    println!();
    println!("{} sheets", table.len());
    Ok(())
}
