//! Core library for the `irrigation` CLI.
//!
//! This crate defines:
//! - Configuration & credentials handling
//! - Abstraction over geocoding and weather providers
//! - Shared domain models (requests, snapshots, results)
//! - The prediction pipeline (resolve → fetch → calculate)
//!
//! It is used by `irrigation-cli`, but can also be reused by other binaries or services.

pub mod config;
pub mod error;
pub mod irrigation;
pub mod model;
pub mod pipeline;
pub mod provider;
pub mod resolver;

pub use config::Config;
pub use error::{ErrorBody, PredictError};
pub use irrigation::calculate_irrigation_needs;
pub use model::{Coordinates, IrrigationResult, Prediction, PredictionRequest, WeatherSnapshot};
pub use pipeline::Predictor;
pub use provider::{Geocoder, WeatherSource};
pub use resolver::resolve_location;
