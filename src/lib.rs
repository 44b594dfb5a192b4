//! Vitrine - A compact HTTP API playground
//!
//! This library provides the core functionality for the Vitrine demo API:
//! a validation/coercion layer for raw request input, response-shape
//! projections, and the in-memory lookup tables the handlers read from.

pub mod api;
pub mod config;
pub mod models;
pub mod repo;
pub mod services;
pub mod validation;
