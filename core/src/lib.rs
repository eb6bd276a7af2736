//! Core components for signing object storage requests.
//!
//! This crate provides the foundational types and traits shared by the
//! vodsign service crates. It knows nothing about any particular signature
//! scheme; it supplies the crypto primitives, the configuration seam, and
//! the orchestration between credential loading and request signing.
//!
//! ## Overview
//!
//! - **Context**: holds the environment access implementation, the only
//!   ambient capability the signing path needs
//! - **Traits**: [`ProvideCredential`] for loading credentials and
//!   [`SignRequest`] for decorating requests, connected by
//!   [`SigningCredential`]
//! - **Signer**: coordinates the two, caching the loaded credential
//!
//! ## Example
//!
//! ```no_run
//! use async_trait::async_trait;
//! use http::request::Parts;
//! use std::time::Duration;
//! use vodsign_core::{Context, ProvideCredential, Result, SignRequest, Signer, SigningCredential};
//!
//! #[derive(Clone, Debug)]
//! struct ApiKey(String);
//!
//! impl SigningCredential for ApiKey {
//!     fn is_valid(&self) -> bool {
//!         !self.0.is_empty()
//!     }
//! }
//!
//! #[derive(Debug)]
//! struct Loader;
//!
//! #[async_trait]
//! impl ProvideCredential for Loader {
//!     type Credential = ApiKey;
//!
//!     async fn provide_credential(&self, _: &Context) -> Result<Option<ApiKey>> {
//!         Ok(Some(ApiKey("example".to_string())))
//!     }
//! }
//!
//! #[derive(Debug)]
//! struct SignWithKey;
//!
//! #[async_trait]
//! impl SignRequest for SignWithKey {
//!     type Credential = ApiKey;
//!
//!     async fn sign_request(
//!         &self,
//!         _: &Context,
//!         req: &mut Parts,
//!         credential: Option<&ApiKey>,
//!         _: Option<Duration>,
//!     ) -> Result<()> {
//!         if let Some(key) = credential {
//!             req.headers.insert("x-api-key", key.0.parse().unwrap());
//!         }
//!         Ok(())
//!     }
//! }
//!
//! # async fn example() -> Result<()> {
//! let signer = Signer::new(Context::new(), Loader, SignWithKey);
//!
//! let mut parts = http::Request::get("https://storage.example.com/videos/demo.mp4")
//!     .body(())
//!     .unwrap()
//!     .into_parts()
//!     .0;
//! signer.sign(&mut parts, None).await?;
//! # Ok(())
//! # }
//! ```

// Make sure all our public APIs have docs.
#![warn(missing_docs)]

pub mod hash;
pub mod time;
pub mod utils;

mod context;
pub use context::{Context, Env, OsEnv, StaticEnv};

mod error;
pub use error::{Error, ErrorKind, Result};

mod api;
pub use api::{ProvideCredential, SignRequest, SigningCredential};

mod chain;
pub use chain::ProvideCredentialChain;

mod request;
pub use request::SigningRequest;

mod signer;
pub use signer::Signer;
