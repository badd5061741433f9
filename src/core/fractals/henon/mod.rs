pub mod errors;
pub mod params;
