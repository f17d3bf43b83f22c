pub mod app;
pub mod config;
pub mod data;
pub mod labels;
pub mod loader;
pub mod model;
pub mod route;
pub mod session;
pub mod toc;
pub mod ui;
pub mod view_models;

pub use app::ExamApp;
