//! Shell update flow
//!
//! The viewer prompts the user when a new shell release exists:
//! check, announce, download with progress, then install on request.
//! Release discovery sits behind a trait; the bundled feed is static
//! since the viewer itself does no networking.

use serde::{Deserialize, Serialize};

/// Percent added per download tick
const DOWNLOAD_STEP: u8 = 20;

/// Information about an available release
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateInfo {
    /// Release version string
    pub version: String,
    /// Optional release notes
    #[serde(default)]
    pub notes: Option<String>,
}

/// Source of release announcements
pub trait ReleaseFeed: Send {
    /// Latest release newer than the running shell, if any
    fn latest(&self) -> Option<UpdateInfo>;
}

/// Release feed with fixed contents
pub struct StaticFeed {
    latest: Option<UpdateInfo>,
}

impl StaticFeed {
    /// Feed that announces the given release
    pub fn announcing(info: UpdateInfo) -> Self {
        Self { latest: Some(info) }
    }

    /// Feed with nothing to announce
    pub fn empty() -> Self {
        Self { latest: None }
    }
}

impl ReleaseFeed for StaticFeed {
    fn latest(&self) -> Option<UpdateInfo> {
        self.latest.clone()
    }
}

/// Phase of the update flow
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdatePhase {
    /// No update known
    Idle,
    /// An update was announced and awaits a download request
    Available,
    /// Download in progress
    Downloading {
        /// Completed portion, 0..100
        percent: u8,
    },
    /// Download finished, install on request
    Ready,
    /// Install requested, shell restart pending
    Installing,
}

/// Result of advancing an in-flight download by one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DownloadTick {
    /// Still downloading, at the given percent
    Progress(u8),
    /// Download just completed
    Complete,
}

/// Drives the update flow from check to install
pub struct Updater {
    feed: Box<dyn ReleaseFeed>,
    phase: UpdatePhase,
    info: Option<UpdateInfo>,
}

impl Updater {
    /// Create an updater over the given release feed
    pub fn new(feed: Box<dyn ReleaseFeed>) -> Self {
        Self {
            feed,
            phase: UpdatePhase::Idle,
            info: None,
        }
    }

    /// Current phase
    pub fn phase(&self) -> UpdatePhase {
        self.phase
    }

    /// The announced release, once a check found one
    pub fn info(&self) -> Option<&UpdateInfo> {
        self.info.as_ref()
    }

    /// Check the feed for a new release
    ///
    /// Returns the announcement when one exists. Re-checking while an
    /// announcement is still pending repeats it; re-checking during a
    /// download or later returns nothing and keeps the current phase.
    pub fn check(&mut self) -> Option<UpdateInfo> {
        match self.phase {
            UpdatePhase::Idle => match self.feed.latest() {
                Some(info) => {
                    tracing::info!(version = %info.version, "update available");
                    self.phase = UpdatePhase::Available;
                    self.info = Some(info.clone());
                    Some(info)
                }
                None => {
                    tracing::debug!("no update available");
                    None
                }
            },
            UpdatePhase::Available => self.info.clone(),
            _ => None,
        }
    }

    /// Begin downloading the announced release
    ///
    /// No-op unless an update is `Available`.
    pub fn start_download(&mut self) -> bool {
        if self.phase != UpdatePhase::Available {
            return false;
        }
        self.phase = UpdatePhase::Downloading { percent: 0 };
        tracing::info!("update download started");
        true
    }

    /// Advance an in-flight download by one tick
    ///
    /// Returns `None` when no download is running.
    pub fn tick_download(&mut self) -> Option<DownloadTick> {
        let UpdatePhase::Downloading { percent } = self.phase else {
            return None;
        };
        let next = percent.saturating_add(DOWNLOAD_STEP);
        if next >= 100 {
            self.phase = UpdatePhase::Ready;
            tracing::info!("update download complete");
            Some(DownloadTick::Complete)
        } else {
            self.phase = UpdatePhase::Downloading { percent: next };
            Some(DownloadTick::Progress(next))
        }
    }

    /// Apply the downloaded release
    ///
    /// No-op unless the download is `Ready`. The actual restart belongs
    /// to the shell; the updater only records the hand-off.
    pub fn install(&mut self) -> bool {
        if self.phase != UpdatePhase::Ready {
            return false;
        }
        self.phase = UpdatePhase::Installing;
        tracing::info!("installing update, shell restart pending");
        true
    }
}
