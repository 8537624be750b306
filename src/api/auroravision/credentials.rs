use std::fmt::{Debug, Formatter};

use base64::{Engine, engine::general_purpose::STANDARD};
use bon::Builder;

/// Long-lived Aurora Vision credentials and the plant they give access to.
#[must_use]
#[derive(Clone, Builder)]
#[builder(on(String, into))]
pub struct Credentials {
    pub api_key: String,
    pub user_id: String,
    pub password: String,
    pub plant_id: String,
}

impl Credentials {
    /// `Authorization` header value for the authentication endpoint.
    pub(super) fn basic_authorization(&self) -> String {
        let user_password = format!("{}:{}", self.user_id, self.password);
        format!("Basic {}", STANDARD.encode(user_password))
    }
}

impl Debug for Credentials {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &"…")
            .field("user_id", &self.user_id)
            .field("password", &"…")
            .field("plant_id", &self.plant_id)
            .finish()
    }
}
