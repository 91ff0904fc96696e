// SPDX-License-Identifier: MPL-2.0
//! `iced_showcase` is a small desktop demo built with the Iced GUI framework.
//!
//! One screen greets the user with the platform name, counts clicks, composes
//! a `mailto:` link for the system mail client and sweeps a logo through a
//! full turn whenever it appears. Text is localized with Fluent and user
//! preferences live in a TOML file.

#![doc(html_root_url = "https://docs.rs/iced_showcase/0.1.0")]

pub mod app;
pub mod config;
pub mod error;
pub mod i18n;
pub mod logging;
pub mod platform;
pub mod presentation;
pub mod ui;
