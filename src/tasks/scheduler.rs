//! # Task Scheduler
//!
//! Runs one [`ScheduleTask`] on an interval, never more than one run at a time.
//!
//! ```rust,ignore
//! let scheduler = TaskScheduler::new(task, config.scheduler.clone());
//! let (stop, shutdown) = tokio::sync::watch::channel(false);
//! let handle = scheduler.clone().spawn(shutdown);
//! // ...
//! stop.send(true)?;
//! handle.await?;
//! ```

use super::ScheduleTask;
use crate::config::SchedulerConfig;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use tokio::sync::{watch, Mutex, RwLock};
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{debug, error, info, warn};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    Completed,
    Failed(String),
    /// Not run: disabled, or another run was still in flight.
    Skipped,
}

/// Bookkeeping for the most recent runs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunState {
    pub last_start: Option<DateTime<Utc>>,
    pub last_success: Option<DateTime<Utc>>,
    pub last_failure: Option<DateTime<Utc>>,
    pub last_error: Option<String>,
}

#[derive(Clone)]
pub struct TaskScheduler {
    task: Arc<dyn ScheduleTask>,
    config: SchedulerConfig,
    run_lock: Arc<Mutex<()>>,
    state: Arc<RwLock<RunState>>,
}

impl TaskScheduler {
    pub fn new(task: Arc<dyn ScheduleTask>, config: SchedulerConfig) -> Self {
        Self {
            task,
            config,
            run_lock: Arc::new(Mutex::new(())),
            state: Arc::new(RwLock::new(RunState::default())),
        }
    }

    pub async fn state(&self) -> RunState {
        self.state.read().await.clone()
    }

    /// Runs the task now unless it is disabled or already running.
    pub async fn run_once(&self) -> RunOutcome {
        let name = self.task.name();
        if !self.config.enabled {
            debug!(task = name, "Task disabled");
            return RunOutcome::Skipped;
        }

        let Ok(_running) = self.run_lock.try_lock() else {
            warn!(task = name, "Previous run still in progress");
            return RunOutcome::Skipped;
        };

        self.state.write().await.last_start = Some(Utc::now());
        info!(task = name, "Task started");

        match self.task.execute().await {
            Ok(()) => {
                self.state.write().await.last_success = Some(Utc::now());
                info!(task = name, "Task finished");
                RunOutcome::Completed
            }
            Err(e) => {
                let message = e.to_string();
                {
                    let mut state = self.state.write().await;
                    state.last_failure = Some(Utc::now());
                    state.last_error = Some(message.clone());
                }
                error!(task = name, error = %message, "Task failed");
                RunOutcome::Failed(message)
            }
        }
    }

    /// Ticks until `shutdown` turns true or its sender is dropped.
    pub fn spawn(self, mut shutdown: watch::Receiver<bool>) -> JoinHandle<()> {
        tokio::spawn(async move {
            let name = self.task.name().to_string();
            if !self.config.enabled {
                info!(task = %name, "Task disabled, scheduler not started");
                return;
            }

            let mut ticker = tokio::time::interval(self.config.interval());
            ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

            loop {
                tokio::select! {
                    _ = ticker.tick() => {
                        if let RunOutcome::Failed(_) = self.run_once().await {
                            if self.config.stop_on_error {
                                warn!(task = %name, "Stopping after failure");
                                break;
                            }
                        }
                    }
                    changed = shutdown.changed() => {
                        if changed.is_err() || *shutdown.borrow() {
                            break;
                        }
                    }
                }
            }
            info!(task = %name, "Scheduler stopped");
        })
    }
}
