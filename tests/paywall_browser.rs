#![cfg(target_arch = "wasm32")]

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;
use log::{LevelFilter, Log, Metadata, Record};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Element, HtmlElement, MutationObserver, MutationObserverInit, MutationRecord};
use yew::prelude::*;
use yew::AppHandle;

use mediboard_paywall::components::paywall_sheet::{PaywallSheet, PaywallSheetProps};
use mediboard_paywall::config;
use mediboard_paywall::pages::screen::Screen;

wasm_bindgen_test_configure!(run_in_browser);

thread_local! {
    static LOGGED: RefCell<Vec<String>> = RefCell::new(Vec::new());
    static BUSY: Cell<bool> = Cell::new(false);
}

/// Held for the length of a test; async tests may otherwise interleave and share the log buffer.
struct Serial;

impl Drop for Serial {
    fn drop(&mut self) {
        BUSY.with(|busy| busy.set(false));
    }
}

async fn serial() -> Serial {
    // Give up waiting after a few seconds so a failed test cannot stall the rest.
    for _ in 0..500 {
        if !BUSY.with(|busy| busy.get()) {
            break;
        }
        TimeoutFuture::new(10).await;
    }
    BUSY.with(|busy| busy.set(true));
    Serial
}

struct Recorder;

impl Log for Recorder {
    fn enabled(&self, _: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        LOGGED.with(|logged| logged.borrow_mut().push(record.args().to_string()));
    }

    fn flush(&self) {}
}

static RECORDER: Recorder = Recorder;

fn start_recording() {
    // Only the first call installs the logger; later ones just reset the buffer.
    let _ = log::set_logger(&RECORDER);
    log::set_max_level(LevelFilter::Trace);
    LOGGED.with(|logged| logged.borrow_mut().clear());
}

fn logged(needle: &str) -> usize {
    LOGGED.with(|logged| logged.borrow().iter().filter(|line| line.contains(needle)).count())
}

fn fresh_root() -> Element {
    let document = web_sys::window().unwrap().document().unwrap();
    let root = document.create_element("div").unwrap();
    document.body().unwrap().append_child(&root).unwrap();
    root
}

fn find(root: &Element, selector: &str) -> Option<Element> {
    root.query_selector(selector).unwrap()
}

fn text(root: &Element, selector: &str) -> String {
    find(root, selector)
        .and_then(|el| el.text_content())
        .unwrap_or_default()
}

fn click(root: &Element, selector: &str) {
    find(root, selector)
        .unwrap()
        .dyn_into::<HtmlElement>()
        .unwrap()
        .click();
}

async fn settle() {
    TimeoutFuture::new(20).await;
}

/// Records every class change under `root`, keeping the previous value.
fn watch_classes(root: &Element) -> MutationObserver {
    let observer = MutationObserver::new(&js_sys::Function::new_no_args("")).unwrap();
    let mut init = MutationObserverInit::new();
    init.attributes(true);
    init.attribute_old_value(true);
    init.subtree(true);
    init.attribute_filter(&js_sys::Array::of1(&"class".into()));
    observer.observe_with_options(root, &init).unwrap();
    observer
}

fn previous_container_classes(observer: &MutationObserver) -> Vec<String> {
    observer
        .take_records()
        .iter()
        .filter_map(|record| record.dyn_into::<MutationRecord>().ok())
        .filter_map(|record| record.old_value())
        .filter(|old| old.starts_with("sheet-container"))
        .collect()
}

fn mount_sheet(root: &Element, closes: Rc<Cell<u32>>) -> AppHandle<PaywallSheet> {
    let on_close = Callback::from(move |_: ()| closes.set(closes.get() + 1));
    yew::Renderer::<PaywallSheet>::with_root_and_props(root.clone(), PaywallSheetProps { on_close })
        .render()
}

#[wasm_bindgen_test]
async fn sheet_first_renders_closed_then_opens_once() {
    let _serial = serial().await;
    start_recording();
    let root = fresh_root();
    let observer = watch_classes(&root);
    let app = mount_sheet(&root, Rc::new(Cell::new(0)));
    settle().await;

    assert!(find(&root, ".sheet-container.open").is_some());

    TimeoutFuture::new(config::PROGRESS_DELAY_MS + 50).await;
    assert_eq!(
        previous_container_classes(&observer),
        vec!["sheet-container closed".to_string()]
    );
    assert_eq!(logged("sheet mounted"), 1);

    observer.disconnect();
    app.destroy();
}

#[wasm_bindgen_test]
async fn sheet_fills_progress_after_delay() {
    let _serial = serial().await;
    start_recording();
    let root = fresh_root();
    let app = mount_sheet(&root, Rc::new(Cell::new(0)));
    settle().await;

    assert_eq!(text(&root, ".sheet-progress-value"), "0%");

    TimeoutFuture::new(config::PROGRESS_DELAY_MS + 50).await;
    assert_eq!(text(&root, ".sheet-progress-value"), "85%");
    assert_eq!(logged("progress filled"), 1);

    app.destroy();
}

#[wasm_bindgen_test]
async fn teardown_before_delay_drops_progress_fill() {
    let _serial = serial().await;
    start_recording();
    let root = fresh_root();
    let closes = Rc::new(Cell::new(0));
    let app = mount_sheet(&root, closes.clone());

    TimeoutFuture::new(100).await;
    app.destroy();

    TimeoutFuture::new(config::PROGRESS_DELAY_MS + 100).await;
    assert!(find(&root, ".sheet").is_none());
    assert_eq!(logged("progress filled"), 0);
    assert_eq!(closes.get(), 0);
}

#[wasm_bindgen_test]
async fn close_notifies_owner_once_after_exit_delay() {
    let _serial = serial().await;
    start_recording();
    let root = fresh_root();
    let closes = Rc::new(Cell::new(0));
    let app = mount_sheet(&root, closes.clone());
    settle().await;

    click(&root, ".sheet-close");
    click(&root, ".sheet-backdrop");
    settle().await;

    assert!(find(&root, ".sheet-container.closed").is_some());
    assert!(find(&root, ".sheet-backdrop.hidden").is_some());
    assert_eq!(logged("sheet close requested"), 1);
    assert_eq!(closes.get(), 0);

    TimeoutFuture::new(config::EXIT_DELAY_MS + 50).await;
    assert_eq!(closes.get(), 1);

    TimeoutFuture::new(config::EXIT_DELAY_MS + 50).await;
    assert_eq!(closes.get(), 1);

    app.destroy();
    settle().await;
    assert_eq!(logged("owner notification cancelled"), 0);
}

#[wasm_bindgen_test]
async fn teardown_cancels_pending_exit_notification() {
    let _serial = serial().await;
    start_recording();
    let root = fresh_root();
    let closes = Rc::new(Cell::new(0));
    let app = mount_sheet(&root, closes.clone());
    settle().await;

    click(&root, ".sheet-close");
    app.destroy();
    settle().await;
    assert_eq!(logged("owner notification cancelled"), 1);

    TimeoutFuture::new(config::EXIT_DELAY_MS + config::PROGRESS_DELAY_MS).await;
    assert_eq!(closes.get(), 0);
    assert_eq!(logged("exit transition finished"), 0);
}

#[wasm_bindgen_test]
async fn screen_dismisses_and_reopens_a_fresh_sheet() {
    let _serial = serial().await;
    start_recording();
    let root = fresh_root();
    let app = yew::Renderer::<Screen>::with_root(root.clone()).render();
    settle().await;

    assert!(find(&root, ".sheet").is_some());
    assert!(find(&root, ".screen-content.obscured").is_some());
    assert!(find(&root, ".reopen-button").is_none());

    TimeoutFuture::new(config::PROGRESS_DELAY_MS + 50).await;
    assert_eq!(text(&root, ".sheet-progress-value"), "85%");

    click(&root, ".sheet-backdrop");
    settle().await;
    // Still mounted while the exit transition runs.
    assert!(find(&root, ".sheet-container.closed").is_some());

    TimeoutFuture::new(config::EXIT_DELAY_MS + 50).await;
    assert!(find(&root, ".sheet").is_none());
    assert!(find(&root, ".screen-content.obscured").is_none());
    assert!(find(&root, ".reopen-button").is_some());
    // Removed by its owner after notifying, so nothing was cancelled.
    assert_eq!(logged("owner notification cancelled"), 0);

    click(&root, ".reopen-button");
    settle().await;
    assert!(find(&root, ".reopen-button").is_none());
    assert_eq!(text(&root, ".sheet-progress-value"), "0%");

    TimeoutFuture::new(config::PROGRESS_DELAY_MS + 50).await;
    assert_eq!(text(&root, ".sheet-progress-value"), "85%");

    app.destroy();
}
