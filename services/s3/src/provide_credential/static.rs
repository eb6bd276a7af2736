use crate::Credential;
use async_trait::async_trait;
use vodsign_core::{Context, ProvideCredential, Result};

/// StaticCredentialProvider provides a fixed key pair.
///
/// This provider is used when the access key id and secret access key are
/// already in hand, e.g. injected by the application's settings layer. It
/// replaces any global credential cache with an explicit value passed into
/// each signer.
#[derive(Debug, Clone)]
pub struct StaticCredentialProvider {
    access_key_id: String,
    secret_access_key: String,
}

impl StaticCredentialProvider {
    /// Create a new StaticCredentialProvider with access key id and secret access key.
    pub fn new(access_key_id: &str, secret_access_key: &str) -> Self {
        Self {
            access_key_id: access_key_id.to_string(),
            secret_access_key: secret_access_key.to_string(),
        }
    }
}

#[async_trait]
impl ProvideCredential for StaticCredentialProvider {
    type Credential = Credential;

    async fn provide_credential(&self, _: &Context) -> Result<Option<Self::Credential>> {
        Ok(Some(Credential {
            access_key_id: self.access_key_id.clone(),
            secret_access_key: self.secret_access_key.clone(),
        }))
    }
}
