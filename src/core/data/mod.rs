pub mod axis;
pub mod cartesian_rect;
pub mod pixel_point;
pub mod pixel_size;
pub mod point;
