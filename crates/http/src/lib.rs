//! Clinic HTTP client
//!
//! Typed access to the clinic API: bearer-token injection, status
//! classification and the auth endpoints used by the web client.

pub mod client;
pub mod types;

pub use client::{ClinicClient, ClinicClientBuilder, error::ClientError};
pub use types::{
    ApiEnvelope, ApiStatus, CurrentUser, Gender, LoginRequest, RegisterPatientRequest, TokenData,
};
