use confkeeper_api::{ApiError, ApiResult};
use serde::de::DeserializeOwned;

use super::history_entity_type::HistoryEntityType;
use crate::models::{ApplicationInput, EnvironmentInput, VariableInput};

/// The new data of an update, tagged with the kind of entity it targets
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntityUpdate {
    Application(ApplicationInput),
    Environment(EnvironmentInput),
    Variable(VariableInput),
}

impl EntityUpdate {
    pub fn entity_type(&self) -> HistoryEntityType {
        match self {
            EntityUpdate::Application(_) => HistoryEntityType::Applications,
            EntityUpdate::Environment(_) => HistoryEntityType::Environments,
            EntityUpdate::Variable(_) => HistoryEntityType::Variables,
        }
    }

    /// Builds an update from a string discriminator and an untyped payload.
    ///
    /// Payload attributes that the entity kind does not know are ignored.
    pub fn from_json(entity_type: &str, data: serde_json::Value) -> ApiResult<Self> {
        let entity_type: HistoryEntityType = entity_type.parse()?;
        Ok(match entity_type {
            HistoryEntityType::Applications => {
                EntityUpdate::Application(parse_payload(entity_type, data)?)
            }
            HistoryEntityType::Environments => {
                EntityUpdate::Environment(parse_payload(entity_type, data)?)
            }
            HistoryEntityType::Variables => {
                EntityUpdate::Variable(parse_payload(entity_type, data)?)
            }
        })
    }
}

fn parse_payload<T: DeserializeOwned>(
    entity_type: HistoryEntityType,
    data: serde_json::Value,
) -> ApiResult<T> {
    serde_json::from_value(data)
        .map_err(|e| ApiError::ValidationError(format!("Invalid {entity_type} payload: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_json_variable_ignores_unknown_attributes() {
        let update = EntityUpdate::from_json(
            "variables",
            json!({"name": "FOO", "value": "bar", "env_id": 7}),
        )
        .unwrap();

        match update {
            EntityUpdate::Variable(input) => {
                assert_eq!(input.name.as_str(), "FOO");
                assert_eq!(input.value, "bar");
            }
            other => panic!("unexpected update {other:?}"),
        }
    }

    #[test]
    fn test_from_json_missing_description_is_none() {
        let update = EntityUpdate::from_json("applications", json!({"name": "billing"})).unwrap();
        assert_eq!(update.entity_type(), HistoryEntityType::Applications);
        match update {
            EntityUpdate::Application(input) => assert!(input.description.is_none()),
            other => panic!("unexpected update {other:?}"),
        }
    }

    #[test]
    fn test_from_json_unknown_type() {
        let result = EntityUpdate::from_json("users", json!({"name": "x"}));
        assert!(matches!(result, Err(ApiError::UnknownEntityType(_))));
    }

    #[test]
    fn test_from_json_invalid_payload() {
        let result = EntityUpdate::from_json("environments", json!({"description": "no name"}));
        assert!(matches!(result, Err(ApiError::ValidationError(_))));
    }

    #[test]
    fn test_from_json_name_too_long() {
        let name = "n".repeat(256);
        let result = EntityUpdate::from_json("variables", json!({"name": name, "value": "v"}));
        assert!(matches!(result, Err(ApiError::ValidationError(_))));
    }
}
