// SPDX-License-Identifier: MIT

//! FitCheck: wardrobe tracking backend
//!
//! This crate provides the backend API for storing clothing items and
//! composed outfits, plus a random-outfit "shuffle" helper.

pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod routes;
pub mod time_utils;

use config::Config;
use db::MongoDb;

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub db: MongoDb,
}
