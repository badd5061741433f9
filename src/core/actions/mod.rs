pub mod pan;
pub mod select;
pub mod zoom;
