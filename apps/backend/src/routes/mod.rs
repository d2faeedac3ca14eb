pub mod analysis;
pub mod ruby;
