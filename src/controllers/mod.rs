//! Application layer: turns a [`config::RenderConfig`] into a generated field
//! and hands the coloured result to a file presenter.

pub mod cli;
pub mod config;
pub mod ports;
