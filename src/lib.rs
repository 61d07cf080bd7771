//! aur-talk: read AUR package comments in the terminal.
//!
//! The crate fetches a package page from the AUR web interface, extracts the
//! pinned and latest comment sections, converts each comment's HTML to text
//! and prints it wrapped to the terminal width with ANSI styling.
//!
//! # Quick start
//!
//! ```no_run
//! use std::time::Duration;
//! use aur_talk::app::{run, Request};
//! use aur_talk::fetch::AurClient;
//! use aur_talk::render::RenderOptions;
//!
//! # async fn example() {
//! let client = AurClient::new("https://aur.archlinux.org", Duration::from_secs(20));
//! let request = Request { package: "yay".into(), num_comments: 10 };
//! let mut stdout = std::io::stdout();
//! run(&client, &request, RenderOptions::default(), &mut stdout).await.unwrap();
//! # }
//! ```

pub mod app;
pub mod build_info;
pub mod config;
pub mod error;
pub mod fetch;
pub mod markup;
pub mod reflow;
pub mod render;
pub mod settings;
pub mod style;
#[cfg(test)]
pub mod testsupport;
pub mod textutil;
pub mod thread;
