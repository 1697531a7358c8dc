//! Six-figure grid reference resolution.
//!
//! A TASMAP grid reference such as `GOO 545 519` names a sheet and the
//! hundreds-of-metres figures of an easting and northing. This module
//! validates such references, reconstructs the full projected coordinates
//! from the sheet's reference lines and converts them to latitude/longitude.
//!
//! # Example
//!
//! ```
//! use tasgrid::grid::{GridReference, GridResolver};
//! use tasgrid::sheet::SheetTable;
//!
//! let table = SheetTable::tasmap().unwrap();
//! let resolver = GridResolver::new(&table);
//!
//! let reference: GridReference = "GOO 545 519".parse().unwrap();
//! let point = resolver.resolve(&reference).unwrap();
//!
//! assert_eq!(point.latitude_seconds_string(), "53.4");
//! assert_eq!(point.longitude_seconds_string(), "24.6");
//! ```

mod error;
mod point;
mod reference;
mod resolver;

pub use error::{Axis, GridError, GridField};
pub use point::GridPoint;
pub use reference::GridReference;
pub use resolver::{resolve_axis, resolve_easting, resolve_northing, AxisResolution, GridResolver};
