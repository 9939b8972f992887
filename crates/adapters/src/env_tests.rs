// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use serial_test::serial;

#[test]
#[serial(env)]
fn open_settle_defaults_to_two_seconds() {
    std::env::remove_var("XCR_OPEN_SETTLE_MS");
    assert_eq!(open_settle(), Duration::from_secs(2));
}

#[test]
#[serial(env)]
fn open_settle_reads_millis() {
    std::env::set_var("XCR_OPEN_SETTLE_MS", "250");
    assert_eq!(open_settle(), Duration::from_millis(250));
    std::env::remove_var("XCR_OPEN_SETTLE_MS");
}

#[test]
#[serial(env)]
fn unparsable_value_falls_back() {
    std::env::set_var("XCR_OSASCRIPT_TIMEOUT_MS", "soon");
    assert_eq!(osascript_timeout(), Duration::from_secs(10));
    std::env::remove_var("XCR_OSASCRIPT_TIMEOUT_MS");
}
