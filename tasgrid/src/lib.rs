//! tasgrid - TASMAP 1:100,000 grid reference resolver
//!
//! Converts six-figure grid references from the Tasmanian 1:100,000 map
//! series (a sheet code plus three-figure easting and northing) into full
//! UTM coordinates and latitude/longitude.
//!
//! # High-Level API
//!
//! ```
//! use tasgrid::grid::GridPoint;
//! use tasgrid::sheet::SheetTable;
//!
//! let table = SheetTable::tasmap()?;
//! let point = GridPoint::new("GOO", "545", "519", &table)?;
//!
//! assert_eq!(point.full_northing_string(), "5551900");
//! assert_eq!(point.decimal_longitude_string(), "147.640171");
//! # Ok::<(), tasgrid::Error>(())
//! ```
//!
//! For many references at once, [`grid::GridResolver::resolve_all`] resolves
//! them in parallel against one shared table.

pub mod config;
pub mod coord;
pub mod error;
pub mod grid;
pub mod logging;
pub mod sheet;

pub use error::{Error, ErrorKind, Result};

/// Version of the tasgrid library and CLI.
///
/// This is synchronized across all components in the workspace.
/// The version is defined in `Cargo.toml` and injected at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
