//! Library crate for chroma-forge, exposing the color core plus the HTTP layers for binaries and
//! integration tests.

pub mod color;
pub mod config;
mod dto;
mod error;
pub mod routes;
pub mod services;
pub mod state;
