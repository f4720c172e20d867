//! FoodieHub storefront library.
//!
//! This crate provides the stub API server and the client-side services as a
//! library, allowing them to be tested and reused.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod app;
pub mod catalog;
pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod services;
pub mod state;
