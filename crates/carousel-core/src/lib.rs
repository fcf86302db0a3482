pub mod carousel;
pub mod config;
pub mod consts;
pub mod error;
pub mod input;
pub mod render;
pub mod session;
pub mod source;
