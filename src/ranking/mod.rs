pub mod band;
pub mod comparator;
pub mod strategy;
pub mod table;

pub use band::{Band, Field, Membership, SizeRange, TieBreak};
pub use comparator::{build_comparator, ResultComparator};
pub use strategy::TiePolicy;
pub use table::{classify, select_band, BAND_TABLE};
