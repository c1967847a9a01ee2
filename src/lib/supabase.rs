use log::debug;
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::errors::{Error, Result};

/// Client for the hosted database REST endpoint (`/rest/v1/<table>`).
pub struct Supabase {
    client: reqwest::Client,
    url: String,
    key: String,
}

impl Supabase {
    pub fn new(url: String, key: String) -> Self {
        let client = reqwest::Client::new();
        Self {
            client,
            url: url.trim_end_matches('/').to_string(),
            key,
        }
    }

    fn table_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.url, table)
    }

    /// Inserts `rows` (a single object or an array) and returns the rows the
    /// service reports as created.
    pub async fn insert<T, R>(&self, table: &str, rows: &T) -> Result<Vec<R>>
    where
        T: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let path = self.table_url(table);
        debug!("POST {}", path);
        let response = self.client.post(&path)
            .header("apikey", &self.key)
            .bearer_auth(&self.key)
            .header("Prefer", "return=representation")
            .json(rows)
            .send().await
            .map_err(|e| Error::Reqwest { e, path: path.clone() })?;

        let status = response.status();
        let body = response.text().await
            .map_err(|e| Error::Reqwest { e, path: path.clone() })?;
        if !status.is_success() {
            return Err(Error::Service { status, path, body });
        }
        serde_json::from_str(&body).map_err(|e| Error::Json { e, path })
    }
}
