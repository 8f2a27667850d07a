// SPDX-License-Identifier: MIT

//! Data models for the application.

pub mod item;
pub mod outfit;
pub mod user;

pub use item::{Item, ItemCreate, ItemResponse};
pub use outfit::{FavoriteToggle, Outfit, OutfitCreate, OutfitResponse};
pub use user::User;
