//! Shared library module for the Hueswap app crate.
#![allow(missing_docs, clippy::missing_errors_doc, clippy::missing_panics_doc)]

pub use self::app::HueswapApp;

pub mod action;
pub mod app;
pub mod game_factory;
pub mod icon;
pub mod persistence;
pub mod state;
pub mod tween;
pub mod ui;
pub mod view_model_builder;
