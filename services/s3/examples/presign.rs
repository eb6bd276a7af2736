//! Generate a presigned URL that can be handed to a browser or video player.
//!
//! Run with credentials in the environment:
//!
//! ```shell
//! AWS_ACCESS_KEY_ID=... AWS_SECRET_ACCESS_KEY=... cargo run --example presign
//! ```

use std::time::Duration;
use vodsign_core::{Context, Signer};
use vodsign_s3::{DefaultCredentialProvider, RequestSigner};

#[tokio::main]
async fn main() -> vodsign_core::Result<()> {
    env_logger::init();

    let signer = Signer::new(
        Context::new(),
        DefaultCredentialProvider::new(),
        RequestSigner::new("us-east-1"),
    );

    let url = signer
        .presign(
            "https://examplebucket.s3.amazonaws.com/videos/demo.mp4".parse()?,
            Duration::from_secs(3600),
        )
        .await?;

    println!("{url}");
    Ok(())
}
