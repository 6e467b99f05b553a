use std::fmt;
use std::str::FromStr;

use confkeeper_api::ApiError;
use serde::{Deserialize, Serialize};

/// Closed set of entity kinds that carry a change history
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HistoryEntityType {
    Applications,
    Environments,
    Variables,
}

impl HistoryEntityType {
    pub const ALL: [HistoryEntityType; 3] = [
        HistoryEntityType::Applications,
        HistoryEntityType::Environments,
        HistoryEntityType::Variables,
    ];

    /// The discriminator stored in `change_history.entity_type`
    pub fn as_str(&self) -> &'static str {
        match self {
            HistoryEntityType::Applications => "applications",
            HistoryEntityType::Environments => "environments",
            HistoryEntityType::Variables => "variables",
        }
    }
}

impl From<HistoryEntityType> for &str {
    fn from(val: HistoryEntityType) -> Self {
        val.as_str()
    }
}

impl fmt::Display for HistoryEntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HistoryEntityType {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "applications" => Ok(HistoryEntityType::Applications),
            "environments" => Ok(HistoryEntityType::Environments),
            "variables" => Ok(HistoryEntityType::Variables),
            _ => Err(ApiError::UnknownEntityType(s.to_string())),
        }
    }
}
