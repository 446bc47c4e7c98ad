use serde_derive::{Deserialize, Serialize};
use thiserror::Error;

/// How the connectivity check picks the node its depth-first visit starts from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SeedPolicy {
    /// Only the first node is tried. If it has no outgoing connections, the graph counts as
    /// disconnected.
    #[default]
    FirstNode,

    /// The first node with at least one outgoing connection is used.
    FirstWithConnections,
}

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Failed to parse settings: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EulerianSettings {
    pub seed_policy: SeedPolicy,
}

impl EulerianSettings {
    /// Reads settings from a JSON object. Missing fields take their default values.
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_use_defaults() {
        let settings = EulerianSettings::from_json("{}").unwrap();
        assert_eq!(settings.seed_policy, SeedPolicy::FirstNode);
    }

    #[test]
    fn seed_policy_is_kebab_case() {
        let settings =
            EulerianSettings::from_json(r#"{"seed_policy": "first-with-connections"}"#).unwrap();
        assert_eq!(settings.seed_policy, SeedPolicy::FirstWithConnections);

        let json = settings.to_json().unwrap();
        assert_eq!(json, r#"{"seed_policy":"first-with-connections"}"#);
    }

    #[test]
    fn unknown_policy_is_rejected() {
        let result = EulerianSettings::from_json(r#"{"seed_policy": "random"}"#);
        assert!(matches!(result, Err(SettingsError::Parse(_))));
    }
}
