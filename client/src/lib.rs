//! Jokebox client - fetch dad jokes, vote on them, keep them between runs.
//!
//! The joke list itself lives in `jokebox-engine`. This crate supplies the
//! parts with IO: an HTTP [`source::JokeSource`], a [`storage::KeyValueStorage`]
//! backend, and the [`controller::JokeController`] that ties them together.

pub mod command;
pub mod config;
pub mod controller;
pub mod error;
pub mod render;
pub mod source;
pub mod storage;

pub use config::Config;
pub use controller::JokeController;
pub use error::{AppError, Result};
