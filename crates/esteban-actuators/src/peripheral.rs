// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Client for the peripheral service (pan/tilt servos + buzzer).

use crate::traits::{FeedbackActuator, MotorActuator, MotorAxis, MoveAck};
use crate::{ActuatorError, ActuatorResult};
use async_trait::async_trait;
use serde::Serialize;
use std::time::Duration;
use tracing::debug;

#[derive(Serialize)]
struct MoveRequest {
    step: i32,
}

/// HTTP client for the servo/buzzer peripheral service
#[derive(Clone)]
pub struct PeripheralClient {
    base_url: String,
    client: reqwest::Client,
}

impl PeripheralClient {
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
impl MotorActuator for PeripheralClient {
    async fn move_axis(&self, axis: MotorAxis, step: i32) -> ActuatorResult<MoveAck> {
        let endpoint = self.endpoint(axis.endpoint());
        debug!("POST {} step={}", endpoint, step);

        let response = self
            .client
            .post(&endpoint)
            .json(&MoveRequest { step })
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

        response
            .json::<MoveAck>()
            .await
            .map_err(|source| ActuatorError::Decode { endpoint, source })
    }
}

#[async_trait]
impl FeedbackActuator for PeripheralClient {
    async fn announce_trigger(&self) -> ActuatorResult<()> {
        let endpoint = self.endpoint("ok_triggered");
        debug!("POST {}", endpoint);

        let response = self
            .client
            .post(&endpoint)
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
    fn test_base_url_trailing_slash_normalized() {
        let client =
            PeripheralClient::new("http://127.0.0.1:8003/", Duration::from_secs(2)).unwrap();
        assert_eq!(
            client.endpoint("move_horizontal"),
            "http://127.0.0.1:8003/move_horizontal"
        );
    }
}
