pub mod color;
pub mod config;
pub mod consts;
pub mod controls;
pub mod error;
pub mod export;
pub mod fallback;
pub mod font;
pub mod geometry;
pub mod io;
pub mod preview;
pub mod raster;
pub mod session;
pub mod state;
pub mod template;
