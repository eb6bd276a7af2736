use crate::provide_credential::EnvCredentialProvider;
use crate::Credential;
use async_trait::async_trait;
use vodsign_core::{Context, ProvideCredential, ProvideCredentialChain, Result};

/// DefaultCredentialProvider loads credentials via the default chain.
///
/// Resolution order:
///
/// 1. Environment variables
///
/// Only the long-term key pair flow is supported, so the chain is short;
/// applications with their own settings store typically use
/// [`StaticCredentialProvider`](crate::StaticCredentialProvider) directly
/// or push it onto a custom chain.
#[derive(Debug)]
pub struct DefaultCredentialProvider {
    chain: ProvideCredentialChain<Credential>,
}

impl Default for DefaultCredentialProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl DefaultCredentialProvider {
    /// Create a new `DefaultCredentialProvider` instance.
    pub fn new() -> Self {
        let chain = ProvideCredentialChain::new().push(EnvCredentialProvider::new());

        Self { chain }
    }

    /// Create with a custom credential chain.
    pub fn with_chain(chain: ProvideCredentialChain<Credential>) -> Self {
        Self { chain }
    }
}

#[async_trait]
impl ProvideCredential for DefaultCredentialProvider {
    type Credential = Credential;

    async fn provide_credential(&self, ctx: &Context) -> Result<Option<Self::Credential>> {
        self.chain.provide_credential(ctx).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{AWS_ACCESS_KEY_ID, AWS_SECRET_ACCESS_KEY};
    use crate::StaticCredentialProvider;
    use std::collections::HashMap;
    use vodsign_core::StaticEnv;

    #[tokio::test]
    async fn test_default_provider_without_env() {
        let _ = env_logger::builder().is_test(true).try_init();

        let ctx = Context::new().with_env(StaticEnv::default());

        let provider = DefaultCredentialProvider::new();
        let cred = provider
            .provide_credential(&ctx)
            .await
            .expect("load must succeed");
        assert!(cred.is_none());
    }

    #[tokio::test]
    async fn test_default_provider_with_env() {
        let _ = env_logger::builder().is_test(true).try_init();

        let ctx = Context::new().with_env(StaticEnv {
            envs: HashMap::from([
                (AWS_ACCESS_KEY_ID.to_string(), "access_key_id".to_string()),
                (
                    AWS_SECRET_ACCESS_KEY.to_string(),
                    "secret_access_key".to_string(),
                ),
            ]),
        });

        let provider = DefaultCredentialProvider::new();
        let cred = provider
            .provide_credential(&ctx)
            .await
            .expect("load must succeed")
            .expect("credential must be present");
        assert_eq!(cred.access_key_id, "access_key_id");
        assert_eq!(cred.secret_access_key, "secret_access_key");
    }

    #[tokio::test]
    async fn test_custom_chain_falls_back_to_static() {
        let ctx = Context::new().with_env(StaticEnv::default());

        let chain = ProvideCredentialChain::new()
            .push(EnvCredentialProvider::new())
            .push(StaticCredentialProvider::new("ak", "sk"));

        let provider = DefaultCredentialProvider::with_chain(chain);
        let cred = provider
            .provide_credential(&ctx)
            .await
            .expect("load must succeed")
            .expect("credential must be present");
        assert_eq!(cred.access_key_id, "ak");
    }
}
