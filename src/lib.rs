//! LINE Login based authentication for axum services.
//!
//! - [`services::line::LineClient`]: verify-id-token / verify-access-token / get-user-profile
//! - [`middleware::auth`]: middleware that verifies the bearer credential of each
//!   request and hands the resolved [`api::extractors::LineIdentity`] to handlers
//!
//! ```ignore
//! use line_authorizer::{Authorizer, LineClient, LineClientConfig, middleware::auth::id_token};
//!
//! let client = LineClient::new(LineClientConfig::new("1234567890"))?;
//! let app = id_token::apply(routes, Authorizer::from_client(client));
//! ```
pub mod api;
pub mod app;
pub mod config;
pub mod error;
pub mod middleware;
pub mod services;
pub mod state;
pub mod telemetry;

pub use api::extractors::{LineIdentity, LineIdentityExtractor};
pub use middleware::auth::{AuthRejection, Authorizer};
pub use services::line::{
    AccessTokenVerification, IdTokenClaims, LineApi, LineClient, LineClientConfig, LineError,
    LineResult, Profile,
};
