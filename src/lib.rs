//! Sentiment trend and keyword frequency dashboard.
//!
//! The data layer ([`data`], [`state`]) is pure and UI-independent; [`app`]
//! and [`ui`] draw it with egui.

pub mod app;
pub mod color;
pub mod config;
pub mod data;
pub mod export;
pub mod state;
pub mod ui;
