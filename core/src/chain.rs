use crate::{Context, ProvideCredential, Result};
use std::fmt::{self, Debug};

/// A chain of credential providers that will be tried in order.
///
/// The first provider that returns a credential wins. A provider that
/// errors is logged and skipped so one broken source does not take down
/// the rest of the chain.
pub struct ProvideCredentialChain<C> {
    providers: Vec<Box<dyn ProvideCredential<Credential = C>>>,
}

impl<C: Send + Sync + Unpin + 'static> ProvideCredentialChain<C> {
    /// Create a new empty credential provider chain.
    pub fn new() -> Self {
        Self {
            providers: Vec::new(),
        }
    }

    /// Add a credential provider to the chain.
    pub fn push(mut self, provider: impl ProvideCredential<Credential = C> + 'static) -> Self {
        self.providers.push(Box::new(provider));
        self
    }

    /// Create a credential provider chain from a vector of providers.
    pub fn from_vec(providers: Vec<Box<dyn ProvideCredential<Credential = C>>>) -> Self {
        Self { providers }
    }
}

impl<C: Send + Sync + Unpin + 'static> Default for ProvideCredentialChain<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> Debug for ProvideCredentialChain<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProvideCredentialChain")
            .field("providers_count", &self.providers.len())
            .finish()
    }
}

#[async_trait::async_trait]
impl<C: Send + Sync + Unpin + 'static> ProvideCredential for ProvideCredentialChain<C> {
    type Credential = C;

    async fn provide_credential(&self, ctx: &Context) -> Result<Option<Self::Credential>> {
        for provider in &self.providers {
            match provider.provide_credential(ctx).await {
                Ok(Some(credential)) => {
                    log::debug!("loaded credential from provider: {provider:?}");
                    return Ok(Some(credential));
                }
                Ok(None) => continue,
                Err(e) => {
                    log::warn!("credential provider {provider:?} failed: {e:?}");
                    continue;
                }
            }
        }

        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[derive(Debug)]
    struct Fixed(&'static str);

    #[async_trait::async_trait]
    impl ProvideCredential for Fixed {
        type Credential = String;

        async fn provide_credential(&self, _: &Context) -> Result<Option<String>> {
            Ok(Some(self.0.to_string()))
        }
    }

    #[derive(Debug)]
    struct Empty;

    #[async_trait::async_trait]
    impl ProvideCredential for Empty {
        type Credential = String;

        async fn provide_credential(&self, _: &Context) -> Result<Option<String>> {
            Ok(None)
        }
    }

    #[derive(Debug)]
    struct Broken;

    #[async_trait::async_trait]
    impl ProvideCredential for Broken {
        type Credential = String;

        async fn provide_credential(&self, _: &Context) -> Result<Option<String>> {
            Err(Error::unexpected("this provider is broken"))
        }
    }

    #[tokio::test]
    async fn test_first_hit_wins() {
        let chain = ProvideCredentialChain::new()
            .push(Empty)
            .push(Fixed("first"))
            .push(Fixed("second"));

        let got = chain
            .provide_credential(&Context::new())
            .await
            .expect("chain must not fail");
        assert_eq!(got, Some("first".to_string()));
    }

    #[tokio::test]
    async fn test_broken_provider_is_skipped() {
        let chain = ProvideCredentialChain::new().push(Broken).push(Fixed("ok"));

        let got = chain
            .provide_credential(&Context::new())
            .await
            .expect("chain must not fail");
        assert_eq!(got, Some("ok".to_string()));
    }

    #[tokio::test]
    async fn test_empty_chain_returns_none() {
        let chain: ProvideCredentialChain<String> = ProvideCredentialChain::new();

        let got = chain
            .provide_credential(&Context::new())
            .await
            .expect("chain must not fail");
        assert_eq!(got, None);
    }
}
