// Updater Tests - phase machine from check to install

use crate::update::{DownloadTick, ReleaseFeed, StaticFeed, UpdateInfo, UpdatePhase, Updater};

fn release(version: &str) -> UpdateInfo {
    UpdateInfo {
        version: version.to_string(),
        notes: None,
    }
}

#[test]
fn test_updater_starts_idle() {
    let updater = Updater::new(Box::new(StaticFeed::empty()));
    assert_eq!(updater.phase(), UpdatePhase::Idle);
    assert!(updater.info().is_none());
}

#[test]
fn test_check_with_empty_feed_stays_idle() {
    let mut updater = Updater::new(Box::new(StaticFeed::empty()));
    assert!(updater.check().is_none());
    assert_eq!(updater.phase(), UpdatePhase::Idle);
}

#[test]
fn test_check_moves_to_available() {
    let mut updater = Updater::new(Box::new(StaticFeed::announcing(release("0.3.0"))));

    let announced = updater.check().unwrap();
    assert_eq!(announced.version, "0.3.0");
    assert_eq!(updater.phase(), UpdatePhase::Available);
    assert_eq!(updater.info().unwrap().version, "0.3.0");

    // Re-checking while available repeats the announcement
    assert!(updater.check().is_some());
}

#[test]
fn test_download_ticks_through_to_ready() {
    let mut updater = Updater::new(Box::new(StaticFeed::announcing(release("0.3.0"))));
    updater.check();
    assert!(updater.start_download());
    assert_eq!(updater.phase(), UpdatePhase::Downloading { percent: 0 });

    assert_eq!(updater.tick_download(), Some(DownloadTick::Progress(20)));
    assert_eq!(updater.tick_download(), Some(DownloadTick::Progress(40)));
    assert_eq!(updater.tick_download(), Some(DownloadTick::Progress(60)));
    assert_eq!(updater.tick_download(), Some(DownloadTick::Progress(80)));
    assert_eq!(updater.tick_download(), Some(DownloadTick::Complete));
    assert_eq!(updater.phase(), UpdatePhase::Ready);

    assert!(updater.tick_download().is_none());
}

#[test]
fn test_check_is_silent_while_downloading() {
    let mut updater = Updater::new(Box::new(StaticFeed::announcing(release("0.3.0"))));
    updater.check();
    updater.start_download();

    assert!(updater.check().is_none());
    assert_eq!(updater.phase(), UpdatePhase::Downloading { percent: 0 });
}

#[test]
fn test_install_only_from_ready() {
    let mut updater = Updater::new(Box::new(StaticFeed::announcing(release("0.3.0"))));
    assert!(!updater.install(), "Cannot install before a download");

    updater.check();
    assert!(!updater.install());
    assert!(updater.tick_download().is_none());

    updater.start_download();
    while updater.tick_download().is_some() {
        if updater.phase() == UpdatePhase::Ready {
            break;
        }
    }
    assert!(updater.install());
    assert_eq!(updater.phase(), UpdatePhase::Installing);

    assert!(!updater.install(), "Install is not repeatable");
}

#[test]
fn test_download_requires_announcement() {
    let mut updater = Updater::new(Box::new(StaticFeed::announcing(release("0.3.0"))));
    assert!(
        !updater.start_download(),
        "Download before check is refused"
    );
}

#[test]
fn test_static_feed_contents() {
    assert!(StaticFeed::empty().latest().is_none());
    assert_eq!(
        StaticFeed::announcing(release("1.0.0")).latest().unwrap().version,
        "1.0.0"
    );
}
