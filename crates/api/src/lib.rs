#![forbid(unsafe_code)]

//! Typed client for the Vitaversity REST API.

pub mod client;
pub mod dto;
pub mod error;
pub mod memory;

pub use client::{ApiConfig, HttpApi, LoginOutcome, VitaApi};
pub use reqwest::StatusCode;
pub use dto::DailyClaim;
pub use error::ApiError;
pub use memory::InMemoryApi;
