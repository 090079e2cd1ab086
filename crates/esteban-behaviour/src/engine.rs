// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Behaviour engine: task supervision.

use crate::behaviour::Behaviour;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{error, info};

/// Pure supervisor for a fixed set of behaviours.
///
/// `start` launches each registered behaviour on its own task; the tasks
/// never rendezvous and share no mutable state. `shutdown` signals every
/// task and joins them all before returning.
///
/// A task that dies outside shutdown is logged and not restarted; the
/// remaining behaviours keep running.
pub struct BehaviourEngine {
    behaviours: Vec<Box<dyn Behaviour>>,
    shutdown_tx: watch::Sender<bool>,
    shutdown_rx: watch::Receiver<bool>,
    tasks: Vec<(&'static str, JoinHandle<()>)>,
}

impl BehaviourEngine {
    pub fn new() -> Self {
        let (shutdown_tx, shutdown_rx) = watch::channel(false);
        Self {
            behaviours: Vec::new(),
            shutdown_tx,
            shutdown_rx,
            tasks: Vec::new(),
        }
    }

    /// Register a behaviour. Must be called before `start`.
    pub fn register(&mut self, behaviour: Box<dyn Behaviour>) {
        self.behaviours.push(behaviour);
    }

    /// Number of behaviours registered but not yet started
    pub fn pending_count(&self) -> usize {
        self.behaviours.len()
    }

    /// Number of running behaviour tasks
    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }

    /// Spawn every registered behaviour on its own long-running task
    pub fn start(&mut self) {
        for behaviour in self.behaviours.drain(..) {
            let name = behaviour.name();
            let shutdown = self.shutdown_rx.clone();
            let exit_probe = self.shutdown_rx.clone();

            let handle = tokio::spawn(async move {
                behaviour.run(shutdown).await;
                // Detection loops only return on shutdown; anything else
                // is a bug worth surfacing. The task is not restarted.
                if !*exit_probe.borrow() {
                    error!("{} behaviour exited unexpectedly and will not be restarted", name);
                }
            });

            self.tasks.push((name, handle));
            info!("{} behaviour started", name);
        }
    }

    /// Signal shutdown and join every behaviour task before returning
    pub async fn shutdown(self) {
        info!("Shutting down behaviour engine");
        let _ = self.shutdown_tx.send(true);

        for (name, handle) in self.tasks {
            match handle.await {
                Ok(()) => info!("{} behaviour stopped", name),
                Err(e) if e.is_panic() => error!("{} behaviour panicked: {}", name, e),
                Err(e) => error!("{} behaviour task failed to join: {}", name, e),
            }
        }
    }
}

impl Default for BehaviourEngine {
    fn default() -> Self {
        Self::new()
    }
}
