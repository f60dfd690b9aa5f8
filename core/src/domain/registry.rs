//! Port registry entries declared by the user.

use serde::{Deserialize, Deserializer, Serialize};

/// A named app the user expects to be listening on a port.
///
/// Missing fields deserialize as empty strings; an empty port never
/// matches a listener and an empty url is shown as `-`. A port written as a
/// JSON number is kept as its decimal text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryEntry {
    #[serde(default)]
    pub name: String,
    #[serde(default, deserialize_with = "port_text")]
    pub port: String,
    #[serde(default)]
    pub url: String,
}

impl RegistryEntry {
    pub fn new(name: impl Into<String>, port: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            port: port.into(),
            url: url.into(),
        }
    }

    /// Numeric interpretation of the declared port, ignoring surrounding
    /// whitespace and leading zeros.
    pub fn port_number(&self) -> Option<u16> {
        self.port.trim().parse::<u16>().ok()
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum PortField {
    Text(String),
    Number(serde_json::Number),
}

fn port_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match PortField::deserialize(deserializer)? {
        PortField::Text(text) => text,
        PortField::Number(number) => number.to_string(),
    })
}

/// Payload written when the registry file does not exist yet.
pub fn default_registry() -> Vec<RegistryEntry> {
    [("App1", "3000"), ("App2", "8080"), ("App3", "5000")]
        .into_iter()
        .map(|(name, port)| RegistryEntry::new(name, port, format!("http://localhost:{port}")))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_registry() {
        let entries = default_registry();
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0], RegistryEntry::new("App1", "3000", "http://localhost:3000"));
        assert_eq!(entries[1], RegistryEntry::new("App2", "8080", "http://localhost:8080"));
        assert_eq!(entries[2], RegistryEntry::new("App3", "5000", "http://localhost:5000"));
    }

    #[test]
    fn test_missing_fields_default_to_empty() {
        let entry: RegistryEntry = serde_json::from_str(r#"{"name":"api","port":"4000"}"#).unwrap();
        assert_eq!(entry.url, "");

        let entry: RegistryEntry = serde_json::from_str(r#"{}"#).unwrap();
        assert_eq!(entry, RegistryEntry::new("", "", ""));
    }

    #[test]
    fn test_numeric_port_is_kept_as_text() {
        let entry: RegistryEntry =
            serde_json::from_str(r#"{"name":"web","port":8080,"url":"http://localhost:8080"}"#)
                .unwrap();
        assert_eq!(entry.port, "8080");
        assert_eq!(entry.port_number(), Some(8080));
    }

    #[test]
    fn test_port_of_other_types_is_rejected() {
        assert!(serde_json::from_str::<RegistryEntry>(r#"{"name":"a","port":null}"#).is_err());
        assert!(serde_json::from_str::<RegistryEntry>(r#"{"name":"a","port":{"n":1}}"#).is_err());
        assert!(serde_json::from_str::<RegistryEntry>(r#"{"name":"a","port":[3000]}"#).is_err());
    }

    #[test]
    fn test_port_number() {
        assert_eq!(RegistryEntry::new("a", "3000", "").port_number(), Some(3000));
        assert_eq!(RegistryEntry::new("a", "08080", "").port_number(), Some(8080));
        assert_eq!(RegistryEntry::new("a", " 5000 ", "").port_number(), Some(5000));
        assert_eq!(RegistryEntry::new("a", "web", "").port_number(), None);
    }
}
