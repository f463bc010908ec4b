pub mod arrows;
#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod dump;
pub mod error;
pub mod geometry;
pub mod highlight;
pub mod ir;
pub mod relationships;
pub mod snapshot;
pub mod sort;
pub mod theme;

#[cfg(feature = "cli")]
pub use cli::run;
pub use sort::{sort_panes, SpatialSorter};
