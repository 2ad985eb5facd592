pub mod command;
pub mod config;
pub mod consts;
pub mod engine;
pub mod error;
pub mod geometry;
pub mod input;
pub mod io;
pub mod navigation;
pub mod observe;
pub mod signal;
