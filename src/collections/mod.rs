pub mod grid;
pub(crate) mod range_set;

pub use self::grid::{Coord, Grid};
pub(crate) use self::range_set::RangeSet;
