use std::sync::Arc;

use async_trait::async_trait;
use reqwest::Url;

use crate::DictionaryError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.status == 200
    }
}

#[async_trait]
pub trait HttpClient: Send + Sync {
    /// Any response the server sends back is `Ok`, whatever its status code;
    /// only transport failures are errors.
    async fn get(&self, url: &Url) -> Result<HttpResponse, DictionaryError>;
}

#[async_trait]
impl<T: HttpClient + ?Sized> HttpClient for Arc<T> {
    async fn get(&self, url: &Url) -> Result<HttpResponse, DictionaryError> {
        (**self).get(url).await
    }
}

#[async_trait]
impl HttpClient for reqwest::Client {
    async fn get(&self, url: &Url) -> Result<HttpResponse, DictionaryError> {
        let res = reqwest::Client::get(self, url.clone())
            .send()
            .await
            .map_err(|error| DictionaryError::Connectivity(error.to_string()))?;
        let status = res.status().as_u16();
        let body = res
            .bytes()
            .await
            .map_err(|error| DictionaryError::Connectivity(error.to_string()))?;
        Ok(HttpResponse::new(status, body.to_vec()))
    }
}
