pub mod proposal;
pub mod variant;
