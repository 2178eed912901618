//! Plugin header read by the framework when it lists plugins

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PluginMetadata {
    pub long_name: &'static str,
    pub description: &'static str,
    pub priority: u32,
}

pub const METADATA: PluginMetadata = PluginMetadata {
    long_name: "Report detected number of CPU's",
    description: "List the processors detected in the system",
    priority: 200,
};

/// Metadata as a pretty-printed JSON document
pub fn to_json() -> serde_json::Result<String> {
    serde_json::to_string_pretty(&METADATA)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    #[test]
    fn test_metadata_json_fields() {
        let value: Value = serde_json::from_str(&to_json().unwrap()).unwrap();
        assert_eq!(value["long_name"], "Report detected number of CPU's");
        assert_eq!(value["priority"], 200);
    }
}
