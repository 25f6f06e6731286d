//! Value types shared by the tocspy crates: fragment names and viewport geometry.

pub mod geometry;
pub mod ids;

pub use geometry::{VerticalSpan, ViewportBand};
pub use ids::FragmentId;
