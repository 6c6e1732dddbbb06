use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::Serialize;

use crate::config::ApiConfig;
use crate::places::{Place, PlacesEnvelope};
use crate::transport::error::TransportError;
use crate::transport::{PlacesTransport, USER_PLACES_PATH};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct AddPlaceBody<'a> {
    place_id: &'a str,
}

/// reqwest-backed transport for the places API.
pub struct HttpTransport {
    client: Client,
    base_url: Url,
}

impl HttpTransport {
    pub fn new(config: &ApiConfig) -> Result<Self, TransportError> {
        let base_url = Url::parse(&config.base_url).map_err(|e| TransportError::InvalidUrl {
            url: config.base_url.clone(),
            reason: e.to_string(),
        })?;
        if base_url.cannot_be_a_base() {
            return Err(TransportError::InvalidUrl {
                url: config.base_url.clone(),
                reason: "URL cannot have path segments".to_string(),
            });
        }

        let mut builder = Client::builder().connect_timeout(config.connect_timeout());
        if let Some(timeout) = config.request_timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(TransportError::Client)?;

        Ok(Self { client, base_url })
    }

    /// Base URL all endpoints are resolved against.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Append path segments to the base URL, percent-encoding each one.
    fn endpoint<'a>(
        &self,
        segments: impl IntoIterator<Item = &'a str>,
    ) -> Result<Url, TransportError> {
        let mut url = self.base_url.clone();
        {
            let mut path = url
                .path_segments_mut()
                .map_err(|_| TransportError::InvalidUrl {
                    url: self.base_url.to_string(),
                    reason: "URL cannot have path segments".to_string(),
                })?;
            path.pop_if_empty();
            path.extend(segments);
        }
        Ok(url)
    }

    fn path_endpoint(&self, path: &str) -> Result<Url, TransportError> {
        self.endpoint(path.split('/').filter(|s| !s.is_empty()))
    }

    async fn send(
        &self,
        request: reqwest::RequestBuilder,
        url: &Url,
    ) -> Result<reqwest::Response, TransportError> {
        let response = request
            .send()
            .await
            .map_err(|e| TransportError::Connection {
                url: url.to_string(),
                source: e,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(TransportError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        Ok(response)
    }
}

#[async_trait]
impl PlacesTransport for HttpTransport {
    async fn fetch_places(&self, path: &str) -> Result<Vec<Place>, TransportError> {
        let url = self.path_endpoint(path)?;
        tracing::debug!(url = %url, "GET places");

        let response = self.send(self.client.get(url.clone()), &url).await?;
        let envelope: PlacesEnvelope = response.json().await.map_err(|e| TransportError::Decode {
            url: url.to_string(),
            source: e,
        })?;

        Ok(envelope.places)
    }

    async fn put_user_place(&self, place_id: &str) -> Result<(), TransportError> {
        let url = self.path_endpoint(USER_PLACES_PATH)?;
        tracing::debug!(url = %url, place_id = %place_id, "PUT user place");

        let request = self
            .client
            .put(url.clone())
            .json(&AddPlaceBody { place_id });
        self.send(request, &url).await?;
        Ok(())
    }

    async fn delete_user_place(&self, place_id: &str) -> Result<(), TransportError> {
        let url = self.endpoint(
            USER_PLACES_PATH
                .split('/')
                .filter(|s| !s.is_empty())
                .chain(std::iter::once(place_id)),
        )?;
        tracing::debug!(url = %url, place_id = %place_id, "DELETE user place");

        self.send(self.client.delete(url.clone()), &url).await?;
        Ok(())
    }
}
