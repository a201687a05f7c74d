pub mod build_grid;
pub mod cancellation;
pub mod generate;
pub mod generate_pixel_buffer;
pub mod iterate;
