//! End-to-end fetch, parse and print against a local mock AUR server.

mod aur_mock;

use std::time::Duration;

use aur_mock::{package_page, MockAurServer};
use aur_talk::app::{run, Request};
use aur_talk::error::FetchError;
use aur_talk::fetch::{AurClient, CommentSource};
use aur_talk::reflow::WrapConfig;
use aur_talk::render::{RenderOptions, StyleFlags};
use aur_talk::thread::{Entry, Notice, SectionFilter};

fn client(server: &MockAurServer) -> AurClient {
    AurClient::new(server.base_url(), Duration::from_secs(5))
}

fn plain(width: usize, filter: SectionFilter) -> RenderOptions {
    RenderOptions {
        wrap: WrapConfig::new(width),
        styles: StyleFlags::plain(),
        filter,
    }
}

fn request(package: &str, num_comments: u32) -> Request {
    Request {
        package: package.to_string(),
        num_comments,
    }
}

#[tokio::test]
async fn fetches_pinned_and_latest_sections() {
    let page = package_page(&[
        (
            "Pinned Comments",
            vec![("alice commented on 2021-01-01", "<p>Read the wiki.</p>")],
        ),
        (
            "Latest Comments",
            vec![
                ("bob commented on 2021-02-02", "<p>Works.</p>"),
                ("carol commented on 2021-03-03", "<p>Thanks!</p>"),
            ],
        ),
    ]);
    let server = MockAurServer::start(200, page).expect("mock server");

    let sections = client(&server)
        .fetch_sections("yay", 5)
        .await
        .expect("sections");

    assert_eq!(sections.len(), 2);
    assert!(sections[0].is_pinned());
    assert_eq!(sections[1].title.as_deref(), Some("Latest Comments"));
    assert_eq!(
        sections[0].entries[0],
        Entry::heading("alice commented on 2021-01-01")
    );
    assert_eq!(sections[1].entries.len(), 4);
    assert_eq!(server.targets(), vec!["/packages/yay/?O=0&PP=5"]);
}

#[tokio::test]
async fn missing_package_is_not_found() {
    let server = MockAurServer::start(404, "<html>404</html>").expect("mock server");
    let err = client(&server)
        .fetch_sections("no-such-package", 10)
        .await
        .unwrap_err();
    assert!(
        matches!(&err, FetchError::NotFound(name) if name == "no-such-package"),
        "got: {err}"
    );
}

#[tokio::test]
async fn server_errors_report_the_status() {
    let server = MockAurServer::start(503, "busy").expect("mock server");
    let err = client(&server).fetch_sections("yay", 10).await.unwrap_err();
    assert!(matches!(err, FetchError::Status(503)), "got: {err}");
}

#[tokio::test]
async fn page_without_comments_prints_notice() {
    let server = MockAurServer::start(200, package_page(&[])).expect("mock server");
    let mut out = Vec::new();
    let notice = run(
        &client(&server),
        &request("quiet", 10),
        plain(80, SectionFilter::All),
        &mut out,
    )
    .await
    .expect("run");
    assert_eq!(notice, Some(Notice::NoComments));
    assert_eq!(String::from_utf8(out).expect("utf-8"), "No comments.\n");
}

#[tokio::test]
async fn list_items_wrap_with_hanging_indent() {
    let page = package_page(&[(
        "Pinned Comments",
        vec![(
            "alice, 2021-01-01",
            "<p>Intro</p><ul><li>item one that is quite long and must wrap</li></ul>",
        )],
    )]);
    let server = MockAurServer::start(200, page).expect("mock server");
    let mut out = Vec::new();
    let notice = run(
        &client(&server),
        &request("yay", 10),
        plain(20, SectionFilter::All),
        &mut out,
    )
    .await
    .expect("run");
    assert_eq!(notice, None);
    assert_eq!(
        String::from_utf8(out).expect("utf-8"),
        "alice, 2021-01-01\n\
         Intro\n\n\
         - item one that is\n  quite long and\n  must wrap\n\n"
    );
}

#[tokio::test]
async fn pinned_only_without_pinned_section() {
    let page = package_page(&[(
        "Latest Comments",
        vec![("bob commented on 2021-02-02", "<p>Works.</p>")],
    )]);
    let server = MockAurServer::start(200, page).expect("mock server");
    let mut out = Vec::new();
    let notice = run(
        &client(&server),
        &request("yay", 10),
        plain(80, SectionFilter::PinnedOnly),
        &mut out,
    )
    .await
    .expect("run");
    assert_eq!(notice, Some(Notice::NoPinnedComments));
    assert_eq!(String::from_utf8(out).expect("utf-8"), "No pinned comments.\n");
}

#[tokio::test]
async fn untitled_section_is_a_structural_error() {
    let page = "<html><body><div class=\"comments package-comments\">\
                <div class=\"comments-header\"></div>\
                <h4>x</h4></div></body></html>";
    let server = MockAurServer::start(200, page).expect("mock server");
    let err = client(&server).fetch_sections("yay", 10).await.unwrap_err();
    assert!(matches!(err, FetchError::Structure(_)), "got: {err}");
}
