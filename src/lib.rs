#![allow(clippy::implicit_hasher)]
#![allow(unknown_lints)]

pub mod logging;

pub mod api;
pub mod components;
pub mod constants;
pub mod geometry;
pub mod import;
pub mod interaction;
pub mod models;
pub mod projection;
pub mod storage;

pub use components::app::App;
