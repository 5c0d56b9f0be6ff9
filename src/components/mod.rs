#![allow(clippy::needless_pass_by_value)]

pub mod app;
pub mod map_canvas;
pub mod map_toolbar;
pub mod route_panel;
