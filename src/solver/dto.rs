use super::equity::Equity;
use crate::cards::Deal;
use crate::*;
use serde::Deserialize;
use serde::Serialize;

/// Body of `POST /equity`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EquityRequest {
    pub hands: [String; 2],
    pub board: String,
}

impl From<&Deal> for EquityRequest {
    fn from(deal: &Deal) -> Self {
        Self {
            hands: [deal.hand1.to_string(), deal.hand2.to_string()],
            board: deal.board.to_string(),
        }
    }
}

/// Body returned by `POST /equity`. The solver reports one entry per hand
/// and a ties array whose first entry is the shared tie count.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct EquityResponse {
    pub equities: Vec<Probability>,
    pub wins: Vec<Count>,
    pub ties: Vec<Count>,
}

impl TryFrom<EquityResponse> for Equity {
    type Error = anyhow::Error;
    fn try_from(response: EquityResponse) -> Result<Self, Self::Error> {
        let equities = match response.equities[..] {
            [a, b, ..] => [a, b],
            _ => anyhow::bail!("expected two equities, got {}", response.equities.len()),
        };
        let wins = match response.wins[..] {
            [a, b, ..] => [a, b],
            _ => anyhow::bail!("expected two win counts, got {}", response.wins.len()),
        };
        let ties = match response.ties.first() {
            Some(&ties) => ties,
            None => anyhow::bail!("missing tie count"),
        };
        if let Some(bad) = equities.iter().find(|e| !(0. ..=1.).contains(*e)) {
            anyhow::bail!("equity {} outside [0, 1]", bad);
        }
        if wins.iter().chain(std::iter::once(&ties)).any(|n| *n < 0) {
            anyhow::bail!("negative outcome count");
        }
        Ok(Self {
            equities,
            wins,
            ties,
        })
    }
}
