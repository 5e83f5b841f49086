use super::{validate_speed, ClientCommand, SessionError, SessionId, SwitchProviderRequest};
use crate::core::{FlightSnapshot, NavPoint};
use crate::input::{is_valid_flight_name, FlightLibrary};
use crate::playback::{PlaybackClock, PlaybackEngine};
use crate::provider::{FlightDataProvider, ProviderKind, SimulatedFlight};
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc::error::TrySendError;
use tokio::sync::{mpsc, Mutex};
use tokio::time::MissedTickBehavior;
use tracing::{debug, info, trace};

/// A provider owned by exactly one session. The mutex serializes the
/// heartbeat with that session's own commands.
type SharedProvider = Arc<Mutex<Box<dyn FlightDataProvider>>>;

const STATS_LOG_EVERY: u64 = 1200;

struct SessionEntry {
    outbound: mpsc::Sender<FlightSnapshot>,
    provider: Option<SharedProvider>,
}

#[derive(Default)]
pub struct CoordinatorStats {
    pub snapshots_sent: AtomicU64,
    pub snapshots_dropped: AtomicU64,
    pub heartbeats: AtomicU64,
}

/// Owns every session's provider and drives them from one heartbeat
pub struct SessionCoordinator {
    sessions: Mutex<HashMap<SessionId, SessionEntry>>,
    library: Arc<dyn FlightLibrary>,
    clock: Arc<dyn PlaybackClock>,
    /// Heartbeat period, also the simulated time step
    tick_interval: Duration,
    next_id: AtomicU64,
    stats: CoordinatorStats,
}

impl SessionCoordinator {
    pub fn new(
        library: Arc<dyn FlightLibrary>,
        clock: Arc<dyn PlaybackClock>,
        tick_interval: Duration,
    ) -> Self {
        Self {
            sessions: Mutex::new(HashMap::new()),
            library,
            clock,
            tick_interval,
            next_id: AtomicU64::new(1),
            stats: CoordinatorStats::default(),
        }
    }

    pub fn next_session_id(&self) -> SessionId {
        SessionId(self.next_id.fetch_add(1, Ordering::SeqCst))
    }

    pub fn library(&self) -> &Arc<dyn FlightLibrary> {
        &self.library
    }

    #[cfg(test)]
    pub fn stats(&self) -> &CoordinatorStats {
        &self.stats
    }

    /// Start tracking a connected client. It gets snapshots once it picks a provider.
    pub async fn register(&self, id: SessionId, outbound: mpsc::Sender<FlightSnapshot>) {
        self.sessions.lock().await.insert(
            id,
            SessionEntry {
                outbound,
                provider: None,
            },
        );
        info!("{} connected", id);
    }

    /// Forget a client. Returns whether it was known.
    pub async fn disconnect(&self, id: SessionId) -> bool {
        let removed = self.sessions.lock().await.remove(&id).is_some();
        if removed {
            info!("{} disconnected", id);
        }
        removed
    }

    #[cfg(test)]
    pub async fn session_count(&self) -> usize {
        self.sessions.lock().await.len()
    }

    /// Build a new provider for the session and swap it in.
    ///
    /// The flight is loaded and the requested pause/speed applied before the
    /// provider is published, without holding any session lock.
    pub async fn switch_provider(
        &self,
        id: SessionId,
        request: SwitchProviderRequest,
    ) -> Result<ProviderKind, SessionError> {
        if !self.sessions.lock().await.contains_key(&id) {
            return Err(SessionError::UnknownSession(id));
        }
        let speed = request.speed.map(validate_speed).transpose()?;

        let mut provider: Box<dyn FlightDataProvider> = match request.kind {
            ProviderKind::Simulated => Box::new(SimulatedFlight::new(
                self.clock.now_millis(),
                self.tick_interval,
            )),
            ProviderKind::Recorded => {
                let mut engine = PlaybackEngine::new(self.clock.clone());
                if let Some(name) = request.file_name.as_deref() {
                    if !is_valid_flight_name(name) {
                        return Err(SessionError::InvalidFileName(name.to_string()));
                    }
                    let loaded = self.library.load_flight(name).await;
                    engine.initialize_loaded(name, loaded);
                }
                Box::new(engine)
            }
        };

        if let Some(paused) = request.paused {
            provider.set_paused(paused);
        }
        if let Some(speed) = speed {
            provider.set_speed_multiplier(speed);
        }

        let kind = provider.kind();
        let mut sessions = self.sessions.lock().await;
        let entry = sessions
            .get_mut(&id)
            .ok_or(SessionError::UnknownSession(id))?;
        entry.provider = Some(Arc::new(Mutex::new(provider)));

        info!(
            "{} switched to {:?} provider{}",
            id,
            kind,
            request
                .file_name
                .map(|name| format!(" ({})", name))
                .unwrap_or_default()
        );
        Ok(kind)
    }

    pub async fn set_paused(&self, id: SessionId, paused: bool) -> Result<(), SessionError> {
        self.with_provider(id, |p| p.set_paused(paused)).await
    }

    pub async fn set_speed(&self, id: SessionId, speed: f64) -> Result<(), SessionError> {
        let speed = validate_speed(speed)?;
        self.with_provider(id, |p| p.set_speed_multiplier(speed)).await
    }

    pub async fn seek(&self, id: SessionId, percentage: f64) -> Result<(), SessionError> {
        self.with_provider(id, |p| {
            p.seek(percentage);
            if let Some(progress) = p.progress() {
                debug!(
                    "{} now at sample {} of {}",
                    id, progress.current_index, progress.total_samples
                );
            }
        })
        .await
    }

    pub async fn reset(&self, id: SessionId) -> Result<(), SessionError> {
        self.with_provider(id, |p| p.reset()).await
    }

    pub async fn update_flight_plan(
        &self,
        id: SessionId,
        waypoints: Vec<NavPoint>,
    ) -> Result<(), SessionError> {
        self.with_provider(id, |p| {
            p.update_flight_plan(waypoints);
            info!("{} flight plan holds {} waypoints", id, p.flight_plan().len());
        })
        .await
    }

    /// Apply a parsed client command to its session
    pub async fn handle_command(&self, id: SessionId, command: ClientCommand) -> Result<(), SessionError> {
        match command {
            ClientCommand::SwitchProvider(request) => self.switch_provider(id, request).await.map(|_| ()),
            ClientCommand::Pause { paused } => self.set_paused(id, paused).await,
            ClientCommand::Speed { speed } => self.set_speed(id, speed).await,
            ClientCommand::Seek { percentage } => self.seek(id, percentage).await,
            ClientCommand::Reset => self.reset(id).await,
            ClientCommand::FlightPlan { waypoints } => self.update_flight_plan(id, waypoints).await,
        }
    }

    /// One heartbeat: tick every provider and push its snapshot to its own
    /// session. Returns the number of snapshots delivered.
    pub async fn broadcast(&self) -> usize {
        self.stats.heartbeats.fetch_add(1, Ordering::Relaxed);

        let active: Vec<(SessionId, SharedProvider, mpsc::Sender<FlightSnapshot>)> = {
            let sessions = self.sessions.lock().await;
            sessions
                .iter()
                .filter_map(|(id, entry)| {
                    entry
                        .provider
                        .as_ref()
                        .map(|p| (*id, p.clone(), entry.outbound.clone()))
                })
                .collect()
        };

        let mut delivered = 0;
        for (id, provider, outbound) in active {
            let snapshot = {
                let mut provider = provider.lock().await;
                provider.tick();
                provider.current_snapshot()
            };

            let Some(snapshot) = snapshot else {
                continue;
            };

            match outbound.try_send(snapshot) {
                Ok(()) => {
                    delivered += 1;
                    self.stats.snapshots_sent.fetch_add(1, Ordering::Relaxed);
                }
                Err(TrySendError::Full(_)) => {
                    trace!("{} is not keeping up, dropping snapshot", id);
                    self.stats.snapshots_dropped.fetch_add(1, Ordering::Relaxed);
                }
                Err(TrySendError::Closed(_)) => {
                    debug!("{} outbound channel closed", id);
                }
            }
        }

        delivered
    }

    /// Run the heartbeat forever at the configured interval
    pub async fn run_heartbeat(self: Arc<Self>) {
        let mut interval = tokio::time::interval(self.tick_interval);
        interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
        info!("Heartbeat started every {:?}", self.tick_interval);

        loop {
            interval.tick().await;
            self.broadcast().await;

            let heartbeats = self.stats.heartbeats.load(Ordering::Relaxed);
            if heartbeats % STATS_LOG_EVERY == 0 {
                debug!(
                    "Heartbeat {}: {} snapshots sent, {} dropped",
                    heartbeats,
                    self.stats.snapshots_sent.load(Ordering::Relaxed),
                    self.stats.snapshots_dropped.load(Ordering::Relaxed)
                );
            }
        }
    }

    /// Run `f` against the session's provider under its lock.
    ///
    /// A session that has not picked a provider yet ignores the command.
    async fn with_provider<F>(&self, id: SessionId, f: F) -> Result<(), SessionError>
    where
        F: FnOnce(&mut dyn FlightDataProvider),
    {
        let provider = {
            let sessions = self.sessions.lock().await;
            let entry = sessions.get(&id).ok_or(SessionError::UnknownSession(id))?;
            entry.provider.clone()
        };

        match provider {
            Some(provider) => {
                let mut provider = provider.lock().await;
                f(&mut **provider);
            }
            None => debug!("{} has no provider yet, ignoring command", id),
        }
        Ok(())
    }
}
