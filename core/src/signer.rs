use crate::{Context, ProvideCredential, Result, SignRequest, SigningCredential};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Signer is the main struct used to sign the request.
///
/// It loads a credential through its provider, caches it while it stays
/// valid, and hands it to the request signer. Cloning a `Signer` shares
/// the credential cache.
#[derive(Clone, Debug)]
pub struct Signer<K: SigningCredential> {
    ctx: Context,
    loader: Arc<dyn ProvideCredential<Credential = K>>,
    builder: Arc<dyn SignRequest<Credential = K>>,
    credential: Arc<Mutex<Option<K>>>,
}

impl<K: SigningCredential> Signer<K> {
    /// Create a new signer.
    pub fn new(
        ctx: Context,
        loader: impl ProvideCredential<Credential = K>,
        builder: impl SignRequest<Credential = K>,
    ) -> Self {
        Self {
            ctx,

            loader: Arc::new(loader),
            builder: Arc::new(builder),
            credential: Arc::new(Mutex::new(None)),
        }
    }

    /// Sign a request.
    ///
    /// With `expires_in` unset the signature lands in the request headers;
    /// with it set, the signature is embedded into the query string and the
    /// result expires after the given duration.
    pub async fn sign(
        &self,
        req: &mut http::request::Parts,
        expires_in: Option<Duration>,
    ) -> Result<()> {
        let credential = self.credential.lock().expect("lock poisoned").clone();
        let credential = if credential.is_valid() {
            credential
        } else {
            log::debug!("cached credential invalid or absent, reloading");
            let loaded = self.loader.provide_credential(&self.ctx).await?;
            *self.credential.lock().expect("lock poisoned") = loaded.clone();
            loaded
        };

        self.builder
            .sign_request(&self.ctx, req, credential.as_ref(), expires_in)
            .await
    }

    /// Generate a presigned URL for a GET of the given URI.
    ///
    /// The returned URL carries its own time-limited signature in the query
    /// string and needs no further headers; it can be handed to any HTTP
    /// client or embedded in a browser-facing resource.
    pub async fn presign(&self, uri: http::Uri, expires_in: Duration) -> Result<http::Uri> {
        let (mut parts, _) = http::Request::builder()
            .method(http::Method::GET)
            .uri(uri)
            .body(())?
            .into_parts();

        self.sign(&mut parts, Some(expires_in)).await?;

        Ok(parts.uri)
    }
}
