use std::sync::Arc;

use clap::Parser;

use crate::api::auroravision::{
    AccessToken,
    Api,
    Credentials,
    DEFAULT_BASE_URL,
    InMemoryTokenStore,
    TokenStore,
};

#[derive(Parser)]
pub struct AuroraVisionApiArgs {
    #[clap(long = "api-key", env = "AURORA_API_KEY", hide_env_values = true)]
    api_key: String,

    #[clap(long = "user-id", env = "AURORA_USER_ID")]
    user_id: String,

    #[clap(long, env = "AURORA_PASSWORD", hide_env_values = true)]
    password: String,

    #[clap(long = "plant-id", alias = "plant", env = "AURORA_PLANT_ID")]
    plant_id: String,

    /// Previously issued access token, used until the API rejects it.
    #[clap(long = "access-token", env = "AURORA_ACCESS_TOKEN", hide_env_values = true)]
    access_token: Option<String>,

    #[clap(long = "base-url", env = "AURORA_BASE_URL", default_value = DEFAULT_BASE_URL)]
    base_url: String,

    #[clap(long, env = "AURORA_CONNECT_TIMEOUT", default_value = "5s")]
    connect_timeout: humantime::Duration,

    /// Overall timeout of a single request, including reading the response.
    #[clap(long, env = "AURORA_TIMEOUT", default_value = "10s")]
    timeout: humantime::Duration,
}

impl AuroraVisionApiArgs {
    pub fn new_api(&self) -> Api {
        let token_store = match &self.access_token {
            Some(token) => InMemoryTokenStore::with_token(AccessToken::from(token.as_str())),
            None => InMemoryTokenStore::default(),
        };
        let credentials = Credentials::builder()
            .api_key(&self.api_key)
            .user_id(&self.user_id)
            .password(&self.password)
            .plant_id(&self.plant_id)
            .build();
        Api::builder()
            .credentials(credentials)
            .base_url(&self.base_url)
            .connect_timeout(*self.connect_timeout)
            .timeout(*self.timeout)
            .token_store(Arc::new(token_store) as Arc<dyn TokenStore>)
            .build()
    }
}
