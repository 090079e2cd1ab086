// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Client for the camera service (capture trigger).

use crate::traits::CameraActuator;
use crate::{ActuatorError, ActuatorResult};
use async_trait::async_trait;
use std::time::Duration;
use tracing::debug;

/// HTTP client for the camera service
#[derive(Clone)]
pub struct CameraClient {
    base_url: String,
    client: reqwest::Client,
}

impl CameraClient {
    /// Build a client against `base_url` with `timeout` applied to every request
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> ActuatorResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(ActuatorError::ClientBuild)?;

        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client,
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }
}

#[async_trait]
impl CameraActuator for CameraClient {
    async fn take_photo(&self) -> ActuatorResult<()> {
        let endpoint = self.endpoint("take_photo");
        debug!("GET {}", endpoint);

        let response = self
            .client
            .get(&endpoint)
            .send()
            .await
            .map_err(|source| ActuatorError::Transport {
                endpoint: endpoint.clone(),
                source,
            })?;

        if !response.status().is_success() {
            return Err(ActuatorError::Rejected {
                endpoint,
                status: response.status(),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capture_endpoint() {
        let client = CameraClient::new("http://127.0.0.1:8001", Duration::from_secs(2)).unwrap();
        assert_eq!(client.endpoint("take_photo"), "http://127.0.0.1:8001/take_photo");
    }
}
