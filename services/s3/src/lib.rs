//! SigV4 signing for S3 compatible object storage.
//!
//! This crate signs object storage requests (video files, thumbnails, JSON
//! blobs) with AWS Signature Version 4, either by decorating the request
//! headers or by generating presigned URLs. It never talks to the network;
//! the signed request is handed back to whatever transport the application
//! uses.
//!
//! ## Example
//!
//! ```no_run
//! use std::time::Duration;
//! use vodsign_core::{Context, Signer};
//! use vodsign_s3::{DefaultCredentialProvider, RequestSigner};
//!
//! #[tokio::main]
//! async fn main() -> vodsign_core::Result<()> {
//!     let signer = Signer::new(
//!         Context::new(),
//!         DefaultCredentialProvider::new(),
//!         RequestSigner::new("us-east-1"),
//!     );
//!
//!     // Header signing: decorate the request, then dispatch it yourself.
//!     let mut parts = http::Request::get("https://examplebucket.s3.amazonaws.com/videos/demo.mp4")
//!         .body(())
//!         .unwrap()
//!         .into_parts()
//!         .0;
//!     signer.sign(&mut parts, None).await?;
//!
//!     // Presigning: the URL itself becomes the credential.
//!     let url = signer
//!         .presign(
//!             "https://examplebucket.s3.amazonaws.com/videos/demo.mp4".parse()?,
//!             Duration::from_secs(3600),
//!         )
//!         .await?;
//!     println!("{url}");
//!     Ok(())
//! }
//! ```

mod constants;

mod credential;
pub use credential::Credential;

mod payload;
pub use payload::{payload_hash, PayloadHashMode, EMPTY_STRING_SHA256, UNSIGNED_PAYLOAD};

mod provide_credential;
pub use provide_credential::{
    DefaultCredentialProvider, EnvCredentialProvider, StaticCredentialProvider,
};

mod sign_request;
pub use sign_request::RequestSigner;
