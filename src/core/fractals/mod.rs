pub mod fractal_kinds;
pub mod henon;
