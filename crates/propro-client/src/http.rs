//! Thin reqwest wrapper over the REST surface.

use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::error::ClientError;
use crate::resource::ApiResource;

/// One HTTP client for the whole app; base URL configured once.
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
}

/// Body of `/api/health`.
#[derive(Debug, Clone, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub uptime_secs: u64,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            http: reqwest::Client::new(),
        }
    }

    pub async fn health(&self) -> Result<HealthStatus, ClientError> {
        let req = self.http.get(format!("{}/api/health", self.base_url));
        decode(req).await
    }

    pub async fn list<R: ApiResource>(&self) -> Result<Vec<R>, ClientError> {
        let req = self.http.get(format!("{}/api/{}", self.base_url, R::PATH));
        decode(req).await
    }

    pub async fn create<R: ApiResource>(&self, payload: &R::Payload) -> Result<R, ClientError> {
        let req = self
            .http
            .post(format!("{}/api/{}", self.base_url, R::PATH))
            .json(payload);
        decode(req).await
    }

    /// Full replace. `None` when the id does not exist server-side.
    pub async fn update<R: ApiResource>(
        &self,
        id: i64,
        payload: &R::Payload,
    ) -> Result<Option<R>, ClientError> {
        let req = self
            .http
            .put(format!("{}/api/{}/{id}", self.base_url, R::PATH))
            .json(payload);
        decode(req).await
    }

    pub async fn delete<R: ApiResource>(&self, id: i64) -> Result<(), ClientError> {
        let req = self
            .http
            .delete(format!("{}/api/{}/{id}", self.base_url, R::PATH));
        let resp = req.send().await?;
        check_status(resp).await?;
        Ok(())
    }
}

async fn decode<T: DeserializeOwned>(req: reqwest::RequestBuilder) -> Result<T, ClientError> {
    let resp = req.send().await?;
    let body = check_status(resp).await?;
    serde_json::from_str(&body).map_err(|e| ClientError::Decode(e.to_string()))
}

async fn check_status(resp: reqwest::Response) -> Result<String, ClientError> {
    let status = resp.status();
    let body = resp.text().await?;
    if !status.is_success() {
        return Err(ClientError::Status {
            status: status.as_u16(),
            body,
        });
    }
    Ok(body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_trailing_slash_trimmed() {
        let client = ApiClient::new("http://localhost:4000/");
        assert_eq!(client.base_url, "http://localhost:4000");
    }
}
