pub mod linspace;
pub mod make_filename;
