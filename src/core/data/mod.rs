pub mod colour;
pub mod complex;
pub mod grid;
pub mod pixel_buffer;
pub mod region;
pub mod resolution;
