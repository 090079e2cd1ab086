// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Redis-backed sensory stream reader.
//!
//! The recognizer process appends to two Redis lists; this reader samples
//! the tail of each with `LINDEX <key> -1`. Reads never mutate the lists
//! and never block on new entries arriving.

use crate::{decode_position_record, GestureLabel, HandPosition, SensoryResult, SensoryStream};
use async_trait::async_trait;
use esteban_config::QueueConfig;
use redis::aio::MultiplexedConnection;
use redis::{AsyncCommands, Client};
use tracing::info;

/// Sensory stream reader backed by the shared Redis queue service
pub struct RedisSensoryBus {
    conn: MultiplexedConnection,
    gesture_stream: String,
    hand_position_stream: String,
}

impl RedisSensoryBus {
    /// Connect to the queue service described by `config`.
    ///
    /// The underlying multiplexed connection reconnects on its own after
    /// transient drops; individual reads surface errors to the caller in
    /// the meantime.
    pub async fn connect(config: &QueueConfig) -> SensoryResult<Self> {
        let client = Client::open(config.url())?;
        let conn = client.get_multiplexed_async_connection().await?;
        info!("Connected to sensory queue at {}:{}", config.host, config.port);

        Ok(Self {
            conn,
            gesture_stream: config.gesture_stream.clone(),
            hand_position_stream: config.hand_position_stream.clone(),
        })
    }
}

#[async_trait]
impl SensoryStream for RedisSensoryBus {
    async fn latest_gesture(&self) -> SensoryResult<Option<GestureLabel>> {
        let mut conn = self.conn.clone();
        let raw: Option<String> = conn.lindex(&self.gesture_stream, -1).await?;
        Ok(raw.map(|label| GestureLabel::from_wire(&label)))
    }

    async fn latest_hand_position(&self) -> SensoryResult<Option<HandPosition>> {
        let mut conn = self.conn.clone();
        let raw: Option<String> = conn.lindex(&self.hand_position_stream, -1).await?;
        match raw {
            Some(record) => Ok(Some(decode_position_record(&record)?)),
            None => Ok(None),
        }
    }
}
