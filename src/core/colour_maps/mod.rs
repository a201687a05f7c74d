pub mod blue_white_gradient;
pub mod factory;
pub mod fire_gradient;
pub mod greyscale;
pub mod kinds;
pub mod styled;
