pub mod app;
pub mod config;
pub mod error;
pub mod forms;
pub mod html;
pub mod registry;
pub mod routes;
pub mod schemas;
pub mod selection;
pub mod view;
