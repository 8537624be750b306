mod credentials;
mod daily_production;
mod error;
mod response;
mod token;

use std::{sync::Arc, time::Duration};

use bon::bon;
use chrono::{DateTime, FixedOffset, NaiveDate};
use http::StatusCode;
use serde::de::DeserializeOwned;
use ureq::{Agent, Body};

use self::response::Response;
pub use self::{
    credentials::Credentials,
    daily_production::transform,
    error::{Error, ParseError},
    token::{AccessToken, InMemoryTokenStore, TokenStore},
};
use crate::{inverter::Inverter, prelude::*, production::ProductionTable};

pub const DEFAULT_BASE_URL: &str = "https://api.auroravision.net";

/// Aurora Vision cloud API client.
pub struct Api {
    agent: Agent,
    base_url: String,
    credentials: Credentials,
    token_store: Arc<dyn TokenStore>,
}

#[bon]
impl Api {
    #[builder]
    pub fn new(
        credentials: Credentials,
        #[builder(into, default = DEFAULT_BASE_URL.to_owned())] base_url: String,
        #[builder(default = Duration::from_secs(5))] connect_timeout: Duration,
        #[builder(default = Duration::from_secs(10))] timeout: Duration,
        token_store: Option<Arc<dyn TokenStore>>,
    ) -> Self {
        let agent: Agent = Agent::config_builder()
            .timeout_connect(Some(connect_timeout))
            .timeout_global(Some(timeout))
            .http_status_as_error(false)
            .build()
            .into();
        Self {
            agent,
            base_url: base_url.trim_end_matches('/').to_owned(),
            credentials,
            token_store: token_store.unwrap_or_else(|| Arc::new(InMemoryTokenStore::default())),
        }
    }

    /// Exchange the credentials for a fresh access token and store it.
    #[instrument(skip_all, fields(user_id = %self.credentials.user_id))]
    pub fn authenticate(&self) -> Result<AccessToken, Error> {
        info!("authenticating…");
        let mut response = self
            .agent
            .get(format!("{}/api/rest/authenticate", self.base_url))
            .header("X-AuroraVision-ApiKey", self.credentials.api_key.as_str())
            .header("Authorization", self.credentials.basic_authorization())
            .call()?;
        let status = response.status();
        if status != StatusCode::OK {
            return Err(Error::Authentication { status });
        }
        let token = AccessToken::from(read_json::<Response<String>>(response.body_mut())?.result);
        self.token_store.set(token.clone());
        debug!("authenticated");
        Ok(token)
    }

    /// Fetch the plant production on the day.
    ///
    /// A rejected token is refreshed and the query is repeated exactly once.
    #[instrument(skip_all, fields(plant_id = %self.credentials.plant_id, day = %day))]
    pub fn get_daily_production(&self, day: NaiveDate) -> Result<ProductionTable, Error> {
        let date = day.format("%Y%m%d").to_string();
        let mut session = Session::new(self.token_store.get());
        loop {
            session = match session {
                Session::Unauthenticated { is_retry } => {
                    Session::Authenticated { token: self.authenticate()?, is_retry }
                }
                Session::Authenticated { token, is_retry } => {
                    let mut response = self.request_daily_production(&token, &date)?;
                    match response.status() {
                        StatusCode::OK => {
                            let table = transform(read_json(response.body_mut())?)?;
                            info!(n_records = table.len(), "fetched");
                            return Ok(table);
                        }
                        StatusCode::UNAUTHORIZED if !is_retry => {
                            warn!("the token is rejected, re-authenticating…");
                            self.token_store.clear();
                            Session::Unauthenticated { is_retry: true }
                        }
                        StatusCode::UNAUTHORIZED => {
                            self.token_store.clear();
                            return Err(Error::Fetch { status: StatusCode::UNAUTHORIZED });
                        }
                        status => return Err(Error::Fetch { status }),
                    }
                }
            };
        }
    }

    fn request_daily_production(
        &self,
        token: &AccessToken,
        date: &str,
    ) -> Result<http::Response<Body>, Error> {
        debug!(date, "requesting…");
        let response = self
            .agent
            .get(format!(
                "{}/api/rest/v1/plant/{}/dailyProduction",
                self.base_url, self.credentials.plant_id,
            ))
            .header("X-AuroraVision-Token", token.as_str())
            .query("startDate", date)
            .query("endDate", date)
            .call()?;
        Ok(response)
    }
}

impl Inverter for Api {
    fn get_data(&self, timestamp: DateTime<FixedOffset>) -> Result<ProductionTable> {
        let day = timestamp.date_naive();
        self.get_daily_production(day)
            .with_context(|| format!("failed to fetch the Aurora Vision production on {day}"))
    }
}

/// Authentication state of a single production query.
///
/// A rejected token bounces the session back to `Unauthenticated` at most once.
enum Session {
    Unauthenticated { is_retry: bool },
    Authenticated { token: AccessToken, is_retry: bool },
}

impl Session {
    fn new(cached_token: Option<AccessToken>) -> Self {
        match cached_token {
            Some(token) => Self::Authenticated { token, is_retry: false },
            None => Self::Unauthenticated { is_retry: false },
        }
    }
}

fn read_json<R: DeserializeOwned>(body: &mut Body) -> Result<R, Error> {
    let body = body.read_to_string()?;
    Ok(serde_json::from_str(&body).map_err(ParseError::from)?)
}
