//! Live AUR probe.
//!
//! This suite is intentionally `#[ignore]` and is never run by default.
//! It checks that the real package page still has the comment layout the
//! parser expects.
//!
//! Run explicitly:
//! `cargo test --test live_aur -- --ignored --nocapture`

use std::time::Duration;

use aur_talk::error::FetchError;
use aur_talk::fetch::{AurClient, CommentSource};
use aur_talk::thread::Entry;

const AUR: &str = "https://aur.archlinux.org";

#[tokio::test]
#[ignore = "network probe; run explicitly"]
async fn popular_package_has_comment_sections() {
    let client = AurClient::new(AUR, Duration::from_secs(30));
    let sections = client.fetch_sections("yay", 3).await.expect("fetch yay");
    eprintln!("[live-aur] yay sections={}", sections.len());

    assert!(!sections.is_empty(), "yay should have comments");
    for section in &sections {
        assert!(section.title.as_deref().is_some_and(|t| !t.is_empty()));
        assert!(
            matches!(section.entries.first(), Some(Entry::Heading(_))),
            "section {:?} should start with a heading",
            section.title
        );
    }
}

#[tokio::test]
#[ignore = "network probe; run explicitly"]
async fn unknown_package_is_not_found() {
    let client = AurClient::new(AUR, Duration::from_secs(30));
    let err = client
        .fetch_sections("aur-talk-definitely-not-a-package", 1)
        .await
        .unwrap_err();
    assert!(matches!(err, FetchError::NotFound(_)), "got: {err}");
}
