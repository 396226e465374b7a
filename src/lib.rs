// #![deny(missing_docs)]

pub mod ternary;

pub mod gridmap;
pub use gridmap::{GridError, GridMap};

pub mod energy;
pub use energy::calculate_energy;

pub mod cumulative;
pub use cumulative::accumulate_energy;

pub mod carver;
pub use carver::{carve, carve_seam, find_vertical_seam, CarveError};

pub mod pgm;
pub use pgm::{read_graymap, write_graymap, Graymap, PgmError};

pub mod display;
pub use display::render;

pub mod raster;
pub use raster::{grid_from_image, grid_to_image};
