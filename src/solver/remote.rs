use super::*;
use crate::cards::Deal;
use crate::*;

/// HTTP client for the equity solver service.
#[derive(Debug, Clone)]
pub struct Remote {
    http: reqwest::Client,
    url: String,
}

impl Remote {
    pub fn new(url: &str) -> anyhow::Result<Self> {
        Ok(Self {
            http: reqwest::Client::builder().timeout(SOLVER_TIMEOUT).build()?,
            url: url.trim_end_matches('/').to_string(),
        })
    }
    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait::async_trait]
impl Solver for Remote {
    async fn health(&self) -> anyhow::Result<()> {
        self.http
            .get(format!("{}/health", self.url))
            .timeout(SOLVER_HEALTH_TIMEOUT)
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }
    async fn equity(&self, deal: &Deal) -> anyhow::Result<Equity> {
        self.http
            .post(format!("{}/equity", self.url))
            .json(&EquityRequest::from(deal))
            .send()
            .await?
            .error_for_status()?
            .json::<EquityResponse>()
            .await?
            .try_into()
    }
}
