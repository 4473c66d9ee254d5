use e2e::{
    browser::{Browser, Page},
    test_server::TestServer,
};
use std::time::Duration;

const MODAL_OPEN: &str = r#"document.querySelector(".pcr-modal") !== null"#;
const MODAL_CLOSED: &str = r#"document.querySelector(".pcr-modal") === null"#;
const BODY_OVERFLOW: &str = "document.body.style.overflow";

fn open_first_project(page: &Page) {
    page.wait_for_element(".pcr-card")
        .expect("Carousel cards should render");
    page.eval(r#"document.querySelector(".pcr-card").click()"#)
        .expect("Failed to click card");
    page.wait_until(MODAL_OPEN).expect("Modal should open");
    assert_eq!(
        page.eval_string(BODY_OVERFLOW).expect("Failed to read overflow"),
        "hidden",
        "Page scroll should be locked while the modal is open"
    );
}

fn assert_closed_and_scrollable(page: &Page) {
    page.wait_until(MODAL_CLOSED).expect("Modal should close");
    assert_eq!(
        page.eval_string(BODY_OVERFLOW).expect("Failed to read overflow"),
        "",
        "Page scroll should be restored"
    );
}

#[tokio::test]
#[ignore = "needs the dx CLI and Chrome; run with --ignored"]
async fn test_backdrop_click_closes_but_dialog_click_does_not() {
    let server = TestServer::start()
        .await
        .expect("Failed to start test server");

    let browser = Browser::launch().expect("Failed to launch browser");
    let page = browser.new_page().expect("Failed to create page");
    page.goto(server.url()).expect("Failed to navigate");

    open_first_project(&page);

    // Clicks inside the dialog never reach the backdrop
    page.eval(r#"document.querySelector(".pcr-dialog").click()"#)
        .expect("Failed to click dialog");
    tokio::time::sleep(Duration::from_millis(300)).await;
    assert_eq!(
        page.eval(MODAL_OPEN).expect("Failed to query modal"),
        serde_json::Value::Bool(true),
        "Dialog click should keep the modal open"
    );

    page.eval(r#"document.querySelector(".pcr-modal").click()"#)
        .expect("Failed to click backdrop");
    assert_closed_and_scrollable(&page);
}

#[tokio::test]
#[ignore = "needs the dx CLI and Chrome; run with --ignored"]
async fn test_escape_closes_modal() {
    let server = TestServer::start()
        .await
        .expect("Failed to start test server");

    let browser = Browser::launch().expect("Failed to launch browser");
    let page = browser.new_page().expect("Failed to create page");
    page.goto(server.url()).expect("Failed to navigate");

    open_first_project(&page);

    page.press_key("Escape").expect("Failed to press Escape");
    assert_closed_and_scrollable(&page);

    // A second Escape with nothing open leaves the page alone
    page.press_key("Escape").expect("Failed to press Escape");
    assert_eq!(
        page.eval_string(BODY_OVERFLOW).expect("Failed to read overflow"),
        ""
    );
}

#[tokio::test]
#[ignore = "needs the dx CLI and Chrome; run with --ignored"]
async fn test_close_button_closes_modal() {
    let server = TestServer::start()
        .await
        .expect("Failed to start test server");

    let browser = Browser::launch().expect("Failed to launch browser");
    let page = browser.new_page().expect("Failed to create page");
    page.goto(server.url()).expect("Failed to navigate");

    open_first_project(&page);

    page.eval(r#"document.querySelector(".pcr-close").click()"#)
        .expect("Failed to click close");
    assert_closed_and_scrollable(&page);
}
