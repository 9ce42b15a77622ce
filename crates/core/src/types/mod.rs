//! Core types for tagshop.
//!
//! This module provides the storefront's domain values and their invariants.

pub mod basket;
pub mod price;
pub mod product;
pub mod user;

pub use basket::{Basket, BasketError, BasketLine, Operation};
pub use price::{Currency, format_price};
pub use product::{Product, ProductError};
pub use user::User;
