//! Local API backed by a static JSON document

use super::{LocalApi, LocalMethod};
use crate::error::{MonrelayError, MonrelayResult};
use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Serves canned result sets, one array per method name.
///
/// Parameters are ignored. A method missing from the document yields an
/// empty result set.
#[derive(Debug, Clone, Default)]
pub struct FixtureLocalApi {
    results: HashMap<LocalMethod, Vec<Value>>,
}

impl FixtureLocalApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the result set of `method`
    pub fn with_results(mut self, method: LocalMethod, results: Vec<Value>) -> Self {
        self.results.insert(method, results);
        self
    }

    /// Load `{ "<method>": [ ... ] }` from a JSON file
    pub fn from_file(path: &Path) -> MonrelayResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            MonrelayError::io_with_path(
                format!("Failed to read local fixtures: {}", e),
                path.display().to_string(),
            )
        })?;
        Self::from_json(&content)
    }

    /// Parse `{ "<method>": [ ... ] }`
    pub fn from_json(content: &str) -> MonrelayResult<Self> {
        let document: HashMap<String, Vec<Value>> = serde_json::from_str(content)
            .map_err(|e| MonrelayError::config(format!("Invalid local fixtures: {}", e)))?;

        let mut api = Self::new();
        for (name, results) in document {
            let method: LocalMethod = name.parse()?;
            api.results.insert(method, results);
        }
        Ok(api)
    }
}

#[async_trait]
impl LocalApi for FixtureLocalApi {
    async fn get(&self, method: LocalMethod, _params: Value) -> MonrelayResult<Vec<Value>> {
        Ok(self.results.get(&method).cloned().unwrap_or_default())
    }
}
