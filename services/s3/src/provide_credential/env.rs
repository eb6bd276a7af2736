// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

use crate::constants::*;
use crate::provide_credential::utils::decode_obfuscated;
use crate::Credential;
use async_trait::async_trait;
use vodsign_core::{Context, ProvideCredential, Result};

/// EnvCredentialProvider loads credentials from environment variables.
///
/// This provider looks for the following environment variables:
/// - `AWS_ACCESS_KEY_ID`: the access key id
/// - `AWS_SECRET_ACCESS_KEY`: the secret access key
///
/// Values exported from the settings store may carry an `ENC_` or
/// `REV_ENC_` obfuscation prefix; both forms are decoded transparently.
#[derive(Debug, Default, Clone)]
pub struct EnvCredentialProvider;

impl EnvCredentialProvider {
    /// Create a new EnvCredentialProvider.
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ProvideCredential for EnvCredentialProvider {
    type Credential = Credential;

    async fn provide_credential(&self, ctx: &Context) -> Result<Option<Self::Credential>> {
        let access_key_id = ctx.env_var(AWS_ACCESS_KEY_ID);
        let secret_access_key = ctx.env_var(AWS_SECRET_ACCESS_KEY);

        match (access_key_id, secret_access_key) {
            (Some(ak), Some(sk)) if !ak.is_empty() && !sk.is_empty() => Ok(Some(Credential {
                access_key_id: decode_obfuscated(&ak),
                secret_access_key: decode_obfuscated(&sk),
            })),
            _ => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use vodsign_core::StaticEnv;

    #[tokio::test]
    async fn test_env_credential_provider() -> anyhow::Result<()> {
        let ctx = Context::new().with_env(StaticEnv {
            envs: HashMap::from([
                (AWS_ACCESS_KEY_ID.to_string(), "test_access_key".to_string()),
                (
                    AWS_SECRET_ACCESS_KEY.to_string(),
                    "test_secret_key".to_string(),
                ),
            ]),
        });

        let cred = EnvCredentialProvider::new()
            .provide_credential(&ctx)
            .await?
            .expect("credential must be present");
        assert_eq!(cred.access_key_id, "test_access_key");
        assert_eq!(cred.secret_access_key, "test_secret_key");

        Ok(())
    }

    #[tokio::test]
    async fn test_env_credential_provider_decodes_obfuscated_values() -> anyhow::Result<()> {
        let ctx = Context::new().with_env(StaticEnv {
            envs: HashMap::from([
                (AWS_ACCESS_KEY_ID.to_string(), "test_access_key".to_string()),
                (
                    AWS_SECRET_ACCESS_KEY.to_string(),
                    "ENC_c2VjcmV0".to_string(),
                ),
            ]),
        });

        let cred = EnvCredentialProvider::new()
            .provide_credential(&ctx)
            .await?
            .expect("credential must be present");
        assert_eq!(cred.secret_access_key, "secret");

        Ok(())
    }

    #[tokio::test]
    async fn test_env_credential_provider_without_env() -> anyhow::Result<()> {
        let ctx = Context::new().with_env(StaticEnv::default());

        let cred = EnvCredentialProvider::new().provide_credential(&ctx).await?;
        assert!(cred.is_none());

        Ok(())
    }
}
