#![allow(warnings)]
//! Study Tracker Frontend Entry Point

mod config;
mod controllers;
mod error;
mod i18n;
mod models;
mod pages;
mod platform;

use rolling_logger::RollingLogger;

fn main() {
    console_error_panic_hook::set_once();
    if RollingLogger::init(config::LOG_BUFFER_LINES, log::LevelFilter::Info).is_err() {
        web_sys::console::warn_1(&"[APP] Logger already installed".into());
    }
    pages::init_all();
}
