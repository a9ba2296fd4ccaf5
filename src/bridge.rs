//! Message-passing boundary between the view and the data side
//!
//! The renderer never reads the chat store directly. It sends
//! `UiRequest`s over the bridge and receives `BridgeEvent`s back,
//! mirroring the channel contract of the original shell: `contacts`
//! arrives once after startup, `contact-selected` is answered with
//! `user-messages`, and the update events flow through the same pair
//! of channels. Responses carry no correlation id; the renderer
//! assumes a `UserMessages` event answers its most recent selection.
//!
//! The bridge can run inline (tests call `handle` directly) or on a
//! background thread with `std::sync::mpsc` channels.

use crate::store::{ChatProvider, Contact, Message};
use crate::update::{DownloadTick, UpdateInfo, UpdatePhase, Updater};
use crate::{Error, Result};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::thread::JoinHandle;
use std::time::Duration;

/// Poll interval for the bridge thread; also paces download progress
const TICK_INTERVAL: Duration = Duration::from_millis(200);

/// Requests sent from the renderer to the bridge
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiRequest {
    /// Request the messages for the contact with this nick
    ContactSelected(String),
    /// Ask the updater to check for a new shell release
    CheckForUpdates,
    /// Begin downloading an announced update
    StartUpdateDownload,
    /// Apply a downloaded update
    InstallUpdate,
}

/// Events sent from the bridge to the renderer
#[derive(Debug, Clone, PartialEq)]
pub enum BridgeEvent {
    /// Ordered contact directory; sent once, after startup
    Contacts(Vec<Contact>),
    /// Messages answering the most recent `ContactSelected`
    UserMessages(Vec<Message>),
    /// Selection lookup missed (only under `MissPolicy::Report`)
    ContactNotFound(String),
    /// A new shell release was announced
    UpdateAvailable(UpdateInfo),
    /// Download progress, 0..100
    UpdateDownloading {
        /// Completed portion of the download
        percent: u8,
    },
    /// Download finished; install on request
    UpdateReady(UpdateInfo),
}

/// What to answer when a selected nick matches no chat
///
/// The original shell left this undefined (it assumed clicks only ever
/// carry known nicks), so the policy is configurable here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MissPolicy {
    /// Answer with an empty message list
    #[default]
    EmptyList,
    /// Answer with an explicit `ContactNotFound` event
    Report,
}

/// Bridge configuration
#[derive(Debug, Clone, Copy, Default)]
pub struct BridgeConfig {
    /// Lookup miss policy for `ContactSelected`
    pub miss_policy: MissPolicy,
}

/// The data-owning side of the boundary
pub struct Bridge {
    provider: Box<dyn ChatProvider>,
    updater: Updater,
    config: BridgeConfig,
}

impl Bridge {
    /// Create a bridge over a chat provider and an updater
    pub fn new(provider: Box<dyn ChatProvider>, updater: Updater) -> Self {
        Self::with_config(provider, updater, BridgeConfig::default())
    }

    /// Create a bridge with explicit configuration
    pub fn with_config(
        provider: Box<dyn ChatProvider>,
        updater: Updater,
        config: BridgeConfig,
    ) -> Self {
        Self {
            provider,
            updater,
            config,
        }
    }

    /// The startup `Contacts` event
    pub fn contacts(&self) -> BridgeEvent {
        BridgeEvent::Contacts(self.provider.list_contacts())
    }

    /// Handle one request, producing the events it triggers
    pub fn handle(&mut self, request: UiRequest) -> Vec<BridgeEvent> {
        match request {
            UiRequest::ContactSelected(nick) => {
                tracing::debug!(%nick, "contact selected");
                match self.provider.messages_for(&nick) {
                    Some(messages) => vec![BridgeEvent::UserMessages(messages.to_vec())],
                    None => {
                        tracing::warn!(%nick, "selection lookup missed");
                        match self.config.miss_policy {
                            MissPolicy::EmptyList => vec![BridgeEvent::UserMessages(Vec::new())],
                            MissPolicy::Report => vec![BridgeEvent::ContactNotFound(nick)],
                        }
                    }
                }
            }
            UiRequest::CheckForUpdates => {
                // A check after the download finished re-announces the
                // ready state rather than the original availability.
                if self.updater.phase() == UpdatePhase::Ready {
                    return match self.updater.info().cloned() {
                        Some(info) => vec![BridgeEvent::UpdateReady(info)],
                        None => Vec::new(),
                    };
                }
                match self.updater.check() {
                    Some(info) => vec![BridgeEvent::UpdateAvailable(info)],
                    None => Vec::new(),
                }
            }
            UiRequest::StartUpdateDownload => {
                if self.updater.start_download() {
                    vec![BridgeEvent::UpdateDownloading { percent: 0 }]
                } else {
                    Vec::new()
                }
            }
            UiRequest::InstallUpdate => {
                // Restarting is the shell's concern; nothing to report back.
                self.updater.install();
                Vec::new()
            }
        }
    }

    /// Advance time-driven work (download progress) by one tick
    pub fn tick(&mut self) -> Option<BridgeEvent> {
        match self.updater.tick_download()? {
            DownloadTick::Progress(percent) => Some(BridgeEvent::UpdateDownloading { percent }),
            DownloadTick::Complete => {
                let info = self.updater.info().cloned()?;
                Some(BridgeEvent::UpdateReady(info))
            }
        }
    }

    /// Run the bridge on a background thread
    ///
    /// Sends the contact directory once, then serves requests in order
    /// until the renderer side hangs up.
    pub fn spawn(mut self) -> BridgeHandle {
        let (request_tx, request_rx) = mpsc::channel::<UiRequest>();
        let (event_tx, event_rx) = mpsc::channel::<BridgeEvent>();

        let thread = std::thread::spawn(move || {
            if event_tx.send(self.contacts()).is_err() {
                return;
            }
            loop {
                match request_rx.recv_timeout(TICK_INTERVAL) {
                    Ok(request) => {
                        for event in self.handle(request) {
                            if event_tx.send(event).is_err() {
                                return;
                            }
                        }
                    }
                    Err(RecvTimeoutError::Timeout) => {
                        if let Some(event) = self.tick() {
                            if event_tx.send(event).is_err() {
                                return;
                            }
                        }
                    }
                    Err(RecvTimeoutError::Disconnected) => return,
                }
            }
        });

        BridgeHandle {
            request_tx,
            event_rx,
            _thread: thread,
        }
    }
}

/// Renderer-side handle to a spawned bridge
///
/// Dropping the handle disconnects both channels, which winds down the
/// bridge thread on its next poll.
pub struct BridgeHandle {
    request_tx: Sender<UiRequest>,
    event_rx: Receiver<BridgeEvent>,
    _thread: JoinHandle<()>,
}

impl BridgeHandle {
    /// Send a request to the bridge
    pub fn send(&self, request: UiRequest) -> Result<()> {
        self.request_tx
            .send(request)
            .map_err(|e| Error::BridgeDisconnected(e.to_string()))
    }

    /// Drain one pending event, if any
    pub fn try_recv(&self) -> Option<BridgeEvent> {
        self.event_rx.try_recv().ok()
    }

    /// Block until the next event arrives or the bridge hangs up
    pub fn recv(&self) -> Result<BridgeEvent> {
        self.event_rx
            .recv()
            .map_err(|e| Error::BridgeDisconnected(e.to_string()))
    }
}
