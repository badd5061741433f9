pub mod pixel_to_cartesian_coords;
