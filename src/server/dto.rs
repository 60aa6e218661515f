use serde::Serialize;

/// Body of `/health`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Health {
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl Health {
    pub fn healthy() -> Self {
        Self {
            status: "healthy",
            database: Some("connected"),
            error: None,
        }
    }
    pub fn unhealthy(error: String) -> Self {
        Self {
            status: "unhealthy",
            database: None,
            error: Some(error),
        }
    }
}

/// Body of every non-2xx response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Failure {
    pub error: String,
}

impl From<&str> for Failure {
    fn from(error: &str) -> Self {
        Self {
            error: error.to_string(),
        }
    }
}

impl From<anyhow::Error> for Failure {
    fn from(error: anyhow::Error) -> Self {
        Self {
            error: format!("{:#}", error),
        }
    }
}

/// Query string of `/scenario`.
#[derive(Debug, Clone, Copy, Default, serde::Deserialize)]
pub struct StreakQuery {
    #[serde(default)]
    pub streak: crate::Streak,
}
