use crate::{Context, Result};
use std::fmt::Debug;
use std::time::Duration;

/// SigningCredential is the value a signer signs with.
///
/// Services require different credentials to sign requests; the only thing
/// the orchestration layer needs to know is whether the value it cached is
/// still usable.
pub trait SigningCredential: Clone + Debug + Send + Sync + Unpin + 'static {
    /// Check if the credential is valid for signing.
    fn is_valid(&self) -> bool;
}

impl<T: SigningCredential> SigningCredential for Option<T> {
    fn is_valid(&self) -> bool {
        let Some(cred) = self else {
            return false;
        };

        cred.is_valid()
    }
}

/// ProvideCredential loads a credential from the environment.
///
/// Implementations are read-only: a provider may consult the [`Context`],
/// but never mutates anything. Returning `Ok(None)` means this source has
/// nothing to offer; the caller decides whether that is an error.
#[async_trait::async_trait]
pub trait ProvideCredential: Debug + Send + Sync + Unpin + 'static {
    /// Credential returned by this provider.
    type Credential: Send + Sync + Unpin + 'static;

    /// Load a credential from the current environment.
    async fn provide_credential(&self, ctx: &Context) -> Result<Option<Self::Credential>>;
}

/// SignRequest decorates a request with its authentication material.
///
/// Implementations never perform network I/O; they transform the request
/// parts in place and leave dispatch to the caller's transport.
#[async_trait::async_trait]
pub trait SignRequest: Debug + Send + Sync + Unpin + 'static {
    /// Credential used by this signer.
    type Credential: Send + Sync + Unpin + 'static;

    /// Sign the request parts in place.
    ///
    /// ## Expires In
    ///
    /// When `expires_in` is `None` the signature is carried in headers.
    /// When it is `Some`, the signature is embedded into the query string
    /// and the result is only valid for the given duration.
    async fn sign_request(
        &self,
        ctx: &Context,
        req: &mut http::request::Parts,
        credential: Option<&Self::Credential>,
        expires_in: Option<Duration>,
    ) -> Result<()>;
}
