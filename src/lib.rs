//! A small raster paint tool: a fixed canvas, a swatch palette along the top
//! edge, and a round brush driven by the mouse.

#[macro_use]
extern crate tracing;

pub mod app;
pub mod config;
pub mod draw;
pub mod error;
pub mod pacing;
pub mod raster;
pub mod session;
pub mod types;
