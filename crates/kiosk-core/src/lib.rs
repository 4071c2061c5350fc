//! Core kiosk library (theme store, site content, config).

pub mod config;
pub mod site;
pub mod theme;
