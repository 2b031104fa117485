//! Browser tests: reveal-on-scroll, CSS-only project filter and head sync,
//! checked against the fixture portfolio in headless Chrome.
//!
//! Run with: `cargo test --test browser_page -- --ignored`

use headless_chrome::{Browser, LaunchOptions, Tab};
use std::path::PathBuf;
use std::process::Command;
use std::sync::{Arc, OnceLock};
use std::time::Duration;

// ---------------------------------------------------------------------------
// Setup helpers
// ---------------------------------------------------------------------------

fn generated_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_TARGET_TMPDIR")).join("browser-page")
}

fn ensure_site_built() {
    static BUILT: OnceLock<()> = OnceLock::new();
    BUILT.get_or_init(|| {
        let root = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
        let output_dir = generated_dir();
        if output_dir.exists() {
            std::fs::remove_dir_all(&output_dir).expect("failed to clean output dir");
        }

        let status = Command::new(env!("CARGO_BIN_EXE_folio-gen"))
            .args([
                "build",
                "--source",
                root.join("fixtures").to_str().unwrap(),
                "--output",
                output_dir.to_str().unwrap(),
            ])
            .status()
            .expect("failed to run folio-gen");
        assert!(status.success(), "fixture generation failed");
    });
}

fn browser() -> &'static Browser {
    static B: OnceLock<Browser> = OnceLock::new();
    B.get_or_init(|| {
        Browser::new(LaunchOptions {
            window_size: Some((1280, 800)),
            ..Default::default()
        })
        .expect("failed to launch Chrome")
    })
}

fn load_index() -> Arc<Tab> {
    ensure_site_built();
    let tab = browser().new_tab().unwrap();
    let file = generated_dir().join("index.html");
    assert!(file.exists(), "missing: {}", file.display());

    tab.navigate_to(&format!("file://{}", file.display()))
        .unwrap()
        .wait_until_navigated()
        .unwrap();
    tab
}

fn eval(tab: &Tab, js: &str) -> serde_json::Value {
    tab.evaluate(js, false)
        .expect("failed to evaluate JS")
        .value
        .expect("no value returned")
}

fn scroll_to(tab: &Tab, id: &str) {
    eval(
        tab,
        &format!("document.getElementById('{id}').scrollIntoView({{block: 'start'}}); true"),
    );
    // Observer callbacks plus the 1s bar transition
    std::thread::sleep(Duration::from_millis(1500));
}

// ---------------------------------------------------------------------------
// Reveal
// ---------------------------------------------------------------------------

#[test]
#[ignore]
fn skills_start_hidden_and_reveal_on_scroll() {
    let tab = load_index();

    let before = eval(
        &tab,
        "document.getElementById('skills').classList.contains('is-revealed')",
    );
    assert_eq!(before.as_bool(), Some(false));

    scroll_to(&tab, "skills");

    let after = eval(
        &tab,
        "document.getElementById('skills').classList.contains('is-revealed')",
    );
    assert_eq!(after.as_bool(), Some(true));

    let width = eval(
        &tab,
        "document.querySelector('#skills .skill-bar-fill').style.width",
    );
    assert_eq!(width.as_str(), Some("90%"));
}

#[test]
#[ignore]
fn reveal_does_not_replay_after_scrolling_away() {
    let tab = load_index();
    scroll_to(&tab, "experience");
    scroll_to(&tab, "hero");
    scroll_to(&tab, "experience");

    let revealed = eval(
        &tab,
        "document.getElementById('experience').classList.contains('is-revealed')",
    );
    assert_eq!(revealed.as_bool(), Some(true));
    let opacity = eval(
        &tab,
        "getComputedStyle(document.querySelector('#experience [data-reveal-item]')).opacity",
    );
    assert_eq!(opacity.as_str(), Some("1"));
}

#[test]
#[ignore]
fn section_taller_than_viewport_still_reveals() {
    let tab = load_index();
    eval(
        &tab,
        "document.getElementById('experience').style.minHeight = (window.innerHeight * 5) + 'px'; true",
    );
    scroll_to(&tab, "experience");

    let revealed = eval(
        &tab,
        "document.getElementById('experience').classList.contains('is-revealed')",
    );
    assert_eq!(revealed.as_bool(), Some(true));
    let opacity = eval(
        &tab,
        "getComputedStyle(document.querySelector('#experience [data-reveal-item]')).opacity",
    );
    assert_eq!(opacity.as_str(), Some("1"));
}

// ---------------------------------------------------------------------------
// Project filter
// ---------------------------------------------------------------------------

fn visible_project_ids(tab: &Tab) -> Vec<String> {
    let val = eval(
        tab,
        r#"JSON.stringify(Array.from(document.querySelectorAll('.project-card'))
            .filter(c => getComputedStyle(c).display !== 'none')
            .map(c => c.dataset.id))"#,
    );
    serde_json::from_str(val.as_str().unwrap()).unwrap()
}

#[test]
#[ignore]
fn filter_shows_matching_projects_in_order() {
    let tab = load_index();
    assert_eq!(visible_project_ids(&tab), ["folio", "tracker", "atlas", "ledger"]);

    tab.find_element(r#"label[for="filter-featured"]"#)
        .unwrap()
        .click()
        .unwrap();
    assert_eq!(visible_project_ids(&tab), ["folio", "atlas"]);

    tab.find_element(r#"label[for="filter-in-development"]"#)
        .unwrap()
        .click()
        .unwrap();
    assert_eq!(visible_project_ids(&tab), ["tracker", "atlas"]);

    tab.find_element(r#"label[for="filter-all"]"#)
        .unwrap()
        .click()
        .unwrap();
    assert_eq!(visible_project_ids(&tab).len(), 4);
}

// ---------------------------------------------------------------------------
// Head
// ---------------------------------------------------------------------------

#[test]
#[ignore]
fn favicon_links_point_at_content_favicon() {
    let tab = load_index();
    let hrefs = eval(
        &tab,
        r#"JSON.stringify(Array.from(document.querySelectorAll('link[rel*="icon"]')).map(l => l.getAttribute('href')))"#,
    );
    let hrefs: Vec<String> = serde_json::from_str(hrefs.as_str().unwrap()).unwrap();
    assert_eq!(hrefs, ["/assets/favicon.webp", "/assets/favicon.webp"]);
}
