//! Core library modules for the roster application.
//!
//! - **Configuration**: validation constants, file locations, dataset shape
//! - **Records**: the person model, validation and age computation
//! - **Synthetic Data**: the dataset generator
//! - **Output**: user-facing messages and the query timing log

pub mod config;
pub mod generator;
pub mod messages;
pub mod person;
pub mod timing;
pub mod validator;
