// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use std::path::PathBuf;
use xcr_adapters::{FakeScanner, ScannedFile, WalkDirScanner};

const ROOT: &str = "/dd/App-abc/Logs/Build";

fn config(poll_ms: u64, quiet_ms: u64) -> WatchConfig {
    WatchConfig {
        poll_interval: Duration::from_millis(poll_ms),
        quiet_window: Duration::from_millis(quiet_ms),
        notify: false,
    }
}

fn log_file(size: u64, modified: SystemTime) -> ScannedFile {
    ScannedFile {
        path: PathBuf::from(ROOT).join("A.xcactivitylog"),
        modified,
        size,
    }
}

#[tokio::test(start_paused = true)]
async fn times_out_when_no_log_appears() {
    let scanner = FakeScanner::new();
    let watcher = ArtifactWatcher::new(scanner.clone(), config(1000, 2000));

    let err = watcher
        .watch(Path::new(ROOT), SystemTime::now(), Duration::from_secs(5))
        .await
        .unwrap_err();

    assert_eq!(err.elapsed, Duration::from_secs(5));
    assert_eq!(err.root, PathBuf::from(ROOT));
    // Polls at 0s..=5s
    assert_eq!(scanner.scan_count(), 6);
}

#[tokio::test(start_paused = true)]
async fn promotes_after_second_identical_sample() {
    let since = SystemTime::now();
    let at = |secs| since + Duration::from_secs(secs);
    let scanner = FakeScanner::new();
    scanner.push_poll(vec![log_file(10, at(1))]);
    scanner.push_poll(vec![log_file(20, at(2))]);
    scanner.push_poll(vec![log_file(30, at(3))]);
    scanner.push_poll(vec![log_file(40, at(4))]);
    scanner.push_poll(vec![log_file(40, at(4))]);
    let watcher = ArtifactWatcher::new(scanner.clone(), config(1000, 1000));

    let start = Instant::now();
    let artifact = watcher
        .watch(Path::new(ROOT), since, Duration::from_secs(30))
        .await
        .unwrap();

    assert_eq!(artifact.size(), 40);
    assert_eq!(artifact.path(), Path::new(ROOT).join("A.xcactivitylog"));
    assert_eq!(scanner.scan_count(), 5);
    assert_eq!(start.elapsed(), Duration::from_secs(4));
}

#[tokio::test(start_paused = true)]
async fn stale_log_is_never_promoted() {
    let since = SystemTime::now();
    let scanner = FakeScanner::new();
    scanner.push_poll(vec![log_file(40, since - Duration::from_secs(60))]);
    let watcher = ArtifactWatcher::new(scanner, config(500, 1000));

    let err = watcher
        .watch(Path::new(ROOT), since, Duration::from_secs(3))
        .await
        .unwrap_err();
    assert_eq!(err.elapsed, Duration::from_secs(3));
}

#[tokio::test(start_paused = true)]
async fn sleep_is_clamped_to_the_deadline() {
    let scanner = FakeScanner::new();
    let watcher = ArtifactWatcher::new(scanner.clone(), config(2000, 1000));

    let err = watcher
        .watch(Path::new(ROOT), SystemTime::now(), Duration::from_secs(3))
        .await
        .unwrap_err();
    assert_eq!(err.elapsed, Duration::from_secs(3));
    // Polls at 0s, 2s and 3s
    assert_eq!(scanner.scan_count(), 3);
}

#[tokio::test(start_paused = true)]
async fn failed_scan_keeps_tracking() {
    let since = SystemTime::now();
    let modified = since + Duration::from_secs(1);
    let scanner = FakeScanner::new();
    scanner.push_poll(vec![log_file(40, modified)]);
    scanner.push_error("permission denied");
    scanner.push_poll(vec![log_file(40, modified)]);
    let watcher = ArtifactWatcher::new(scanner.clone(), config(1000, 1000));

    let artifact = watcher
        .watch(Path::new(ROOT), since, Duration::from_secs(30))
        .await
        .unwrap();
    assert_eq!(artifact.size(), 40);
    assert_eq!(scanner.scan_count(), 3);
}

#[tokio::test(start_paused = true)]
async fn newer_log_replaces_tracked_one() {
    let since = SystemTime::now();
    let first = log_file(40, since + Duration::from_secs(1));
    let second = ScannedFile {
        path: PathBuf::from(ROOT).join("B.xcactivitylog"),
        modified: since + Duration::from_secs(2),
        size: 12,
    };
    let scanner = FakeScanner::new();
    scanner.push_poll(vec![first.clone()]);
    scanner.push_poll(vec![first.clone(), second.clone()]);
    scanner.push_poll(vec![first, second]);
    let watcher = ArtifactWatcher::new(scanner, config(1000, 1000));

    let artifact = watcher
        .watch(Path::new(ROOT), since, Duration::from_secs(30))
        .await
        .unwrap();
    assert_eq!(artifact.path(), Path::new(ROOT).join("B.xcactivitylog"));
}

#[tokio::test]
async fn watches_real_directory_with_notifications() {
    let dir = tempfile::tempdir().unwrap();
    let build = dir.path().join("App-abc/Logs/Build");
    std::fs::create_dir_all(&build).unwrap();
    let since = SystemTime::now() - Duration::from_secs(1);

    let writer = {
        let build = build.clone();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(50)).await;
            std::fs::write(build.join("B.xcactivitylog"), b"finished build").unwrap();
        })
    };

    let scanner = WalkDirScanner::new("*.xcactivitylog", 4).unwrap();
    let watcher = ArtifactWatcher::new(
        scanner,
        WatchConfig {
            poll_interval: Duration::from_millis(50),
            quiet_window: Duration::from_millis(150),
            notify: true,
        },
    );
    let artifact = watcher
        .watch(dir.path(), since, Duration::from_secs(10))
        .await
        .unwrap();
    writer.await.unwrap();

    assert_eq!(artifact.path(), build.join("B.xcactivitylog"));
    assert_eq!(artifact.size(), 14);
}
