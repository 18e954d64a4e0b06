pub mod api;
pub mod context;
pub mod logging;
pub mod model;
pub mod pages;
pub mod routes;
pub mod store;
pub mod tui;

mod tui_shell;
