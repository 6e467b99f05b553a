use serde::{Deserialize, Serialize};

/// One `{name, value}` pair of a pulled configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigurationVariable {
    pub name: String,
    pub value: String,
}

/// # Documentation
/// - The configuration of one environment as seen by an external consumer.
/// - Only active variables are listed; row metadata (ids, timestamps, flags) is not exposed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigurationView {
    pub environment_name: String,
    pub variables: Vec<ConfigurationVariable>,
}

/// List envelope returned by every list operation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListResponse<T> {
    pub total_count: usize,
    pub data: Vec<T>,
}

impl<T> ListResponse<T> {
    pub fn new(total_count: usize, data: Vec<T>) -> Self {
        Self { total_count, data }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_response_shape() {
        let response = ListResponse::new(
            3,
            vec![ConfigurationVariable {
                name: "FOO".to_string(),
                value: "bar".to_string(),
            }],
        );

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["total_count"], 3);
        assert_eq!(json["data"][0]["name"], "FOO");
        assert_eq!(json["data"][0]["value"], "bar");
    }
}
