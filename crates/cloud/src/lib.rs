//! Clients for the managed services the backend delegates to.
//!
//! - [`identity`] -- credential resolution, refresh, sign-out, and the
//!   user directory consulted at signup.
//! - [`matchmaker`] -- ticket submission and cancellation.
//! - [`token_endpoint`] -- authorization-code exchange at the hosted domain.
//!
//! Each collaborator is a trait so the API server and workers can run
//! against scripted fakes in tests.

pub mod config;
pub mod error;
pub mod identity;
pub mod matchmaker;
pub mod token_endpoint;

pub use config::{CognitoConfig, MatchmakingConfig};
pub use error::{CloudError, CloudResult};
pub use identity::{CognitoDirectory, CognitoIdentity, IdentityProvider, UserDirectory};
pub use matchmaker::{GameLiftMatchmaker, Matchmaker};
pub use token_endpoint::{HostedTokenEndpoint, TokenEndpoint, TokenSet};
