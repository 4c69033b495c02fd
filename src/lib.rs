//! Champion encyclopedia core.
//!
//! Reconciles the structured champion feed with the wiki voice-line pages
//! and a third-party role statistics site. Every fetch degrades to an empty
//! or absent result on failure, so a flaky upstream never breaks a page.

pub mod api;
pub mod config;
pub mod error;
pub mod scrape;
pub mod view;

pub use api::client::ChampionClient;
pub use api::models::{ChampionDetail, ChampionSummary, Quote, RoleStat};
pub use config::Config;
pub use view::detail::ChampionView;
