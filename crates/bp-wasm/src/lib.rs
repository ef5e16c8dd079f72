//! WebAssembly bindings for BlockerProbe
//!
//! Runs the probe engine against the page's real document. The exported
//! promise resolves to the sorted array of active filter-list names, or to
//! `undefined` when the browser can't give a reliable answer.

use std::cell::Cell;

use js_sys::{Array, Reflect};
use log::{Level, LevelFilter, Log, Metadata, Record};
use wasm_bindgen::prelude::*;
use web_sys::Window;

use bp_core::{detect, detect_restricted, DetectError, DetectOptions, Detection, EngineSignals};

mod host;

use host::{TimeoutSleeper, WebDom};

thread_local! {
    static IN_FLIGHT: Cell<bool> = const { Cell::new(false) };
}

/// Marks the page document as being probed. Cleared on drop.
struct InFlight;

impl InFlight {
    fn begin() -> Result<Self, DetectError> {
        IN_FLIGHT.with(|flag| {
            if flag.get() {
                return Err(DetectError::Busy);
            }
            flag.set(true);
            Ok(InFlight)
        })
    }
}

impl Drop for InFlight {
    fn drop(&mut self) {
        IN_FLIGHT.with(|flag| flag.set(false));
    }
}

struct ConsoleLogger;

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let message = JsValue::from_str(&record.args().to_string());
        match record.level() {
            Level::Error => web_sys::console::error_1(&message),
            Level::Warn => web_sys::console::warn_1(&message),
            _ => web_sys::console::log_1(&message),
        }
    }

    fn flush(&self) {}
}

static LOGGER: ConsoleLogger = ConsoleLogger;

fn configure_logging(debug: bool) {
    // Fails only when the embedder installed its own logger first
    let _ = log::set_logger(&LOGGER);
    log::set_max_level(if debug { LevelFilter::Debug } else { LevelFilter::Warn });
}

fn is_reference(value: &JsValue) -> bool {
    value.is_object() || value.is_function()
}

fn has(target: &JsValue, key: &str) -> bool {
    is_reference(target) && Reflect::has(target, &JsValue::from_str(key)).unwrap_or(false)
}

fn get(target: &JsValue, key: &str) -> JsValue {
    if !is_reference(target) {
        return JsValue::UNDEFINED;
    }
    Reflect::get(target, &JsValue::from_str(key)).unwrap_or(JsValue::UNDEFINED)
}

/// Read `{ debug?: boolean }`. Anything else falls back to the defaults.
fn read_options(options: &JsValue) -> DetectOptions {
    DetectOptions {
        debug: get(options, "debug").as_bool().unwrap_or(false),
        ..DetectOptions::default()
    }
}

fn detection_to_js(detection: &Detection) -> JsValue {
    match detection {
        Detection::Unsupported => JsValue::UNDEFINED,
        Detection::Detected(lists) => {
            let array = Array::new_with_length(lists.len() as u32);
            for (i, name) in lists.iter().enumerate() {
                array.set(i as u32, JsValue::from_str(name));
            }
            array.into()
        }
    }
}

/// Collect engine feature-presence facts from the global objects.
fn engine_signals(window: &JsValue, navigator: &JsValue, root_style: &JsValue) -> EngineSignals {
    let vendor = get(navigator, "vendor").as_string().unwrap_or_default();
    let app_version = get(navigator, "appVersion").as_string().unwrap_or_default();
    let audio_prototype = get(&get(window, "Audio"), "prototype");
    let connection = get(navigator, "connection");

    let checks = [
        (EngineSignals::APPLE_PAY_ERROR, has(window, "ApplePayError")),
        (EngineSignals::CSS_PRIMITIVE_VALUE, has(window, "CSSPrimitiveValue")),
        (EngineSignals::COUNTER, has(window, "Counter")),
        (EngineSignals::VENDOR_APPLE, vendor.starts_with("Apple")),
        (EngineSignals::RGB_COLOR, has(window, "RGBColor")),
        (EngineSignals::WEBKIT_MEDIA_KEYS, has(window, "WebKitMediaKeys")),
        (EngineSignals::WEBKIT_PERSISTENT, has(navigator, "webkitPersistentStorage")),
        (EngineSignals::WEBKIT_TEMPORARY_STORAGE, has(navigator, "webkitTemporaryStorage")),
        (EngineSignals::VENDOR_GOOGLE, vendor.starts_with("Google")),
        (
            EngineSignals::WEBKIT_RESOLVE_LOCAL_FILE_SYSTEM_URL,
            has(window, "webkitResolveLocalFileSystemURL"),
        ),
        (EngineSignals::BATTERY_MANAGER, has(window, "BatteryManager")),
        (EngineSignals::WEBKIT_MEDIA_STREAM, has(window, "webkitMediaStream")),
        (EngineSignals::WEBKIT_SPEECH_GRAMMAR, has(window, "webkitSpeechGrammar")),
        (EngineSignals::BUILD_ID, has(navigator, "buildID")),
        (EngineSignals::MOZ_APPEARANCE, has(root_style, "MozAppearance")),
        (EngineSignals::ON_MOZ_FULLSCREEN_CHANGE, has(window, "onmozfullscreenchange")),
        (EngineSignals::MOZ_INNER_SCREEN_X, has(window, "mozInnerScreenX")),
        (EngineSignals::CSS_MOZ_DOCUMENT_RULE, has(window, "CSSMozDocumentRule")),
        (EngineSignals::CANVAS_CAPTURE_MEDIA_STREAM, has(window, "CanvasCaptureMediaStream")),
        (EngineSignals::NO_SHARED_WORKER, !has(window, "SharedWorker")),
        (EngineSignals::CONNECTION_ON_TYPE_CHANGE, has(&connection, "ontypechange")),
        (EngineSignals::NO_AUDIO_SINK_ID, !has(&audio_prototype, "sinkId")),
        (EngineSignals::ON_ORIENTATION_CHANGE, has(window, "onorientationchange")),
        (EngineSignals::ORIENTATION, has(window, "orientation")),
        (
            EngineSignals::APP_VERSION_ANDROID,
            app_version.to_ascii_lowercase().contains("android"),
        ),
    ];

    let mut signals = EngineSignals::empty();
    for (flag, present) in checks {
        signals.set(flag, present);
    }
    signals
}

fn current_signals(window: &Window) -> EngineSignals {
    let navigator = window.navigator();
    let root_style = window
        .document()
        .and_then(|document| document.document_element())
        .map(|root| get(&root, "style"))
        .unwrap_or(JsValue::UNDEFINED);
    engine_signals(window, &navigator, &root_style)
}

async fn run_detection(options: DetectOptions) -> Result<Detection, String> {
    let _in_flight = InFlight::begin().map_err(|e| e.to_string())?;

    let window = web_sys::window().ok_or_else(|| "No global window".to_string())?;
    let document = window
        .document()
        .ok_or_else(|| "Window has no document".to_string())?;
    let catalog = bp_catalog::catalog().map_err(|e| format!("Invalid catalog: {}", e))?;

    let signals = current_signals(&window);
    let mut host = WebDom::new(document);
    let sleeper = TimeoutSleeper::new(window);

    detect(catalog, &signals, &mut host, &sleeper, &options)
        .await
        .map_err(|e| e.to_string())
}

/// Detect the active filter lists on the current page.
///
/// Resolves to a sorted array of list names, or `undefined` when detection
/// doesn't apply to this browser.
#[wasm_bindgen(js_name = detectDomBlockers)]
pub async fn detect_dom_blockers(options: JsValue) -> Result<JsValue, JsValue> {
    let options = read_options(&options);
    configure_logging(options.debug);

    let detection = run_detection(options).await.map_err(|e| JsValue::from_str(&e))?;
    Ok(detection_to_js(&detection))
}

/// Stand-in for pages where probing the document is not allowed.
#[wasm_bindgen(js_name = detectDomBlockersRestricted)]
pub async fn detect_dom_blockers_restricted(options: JsValue) -> Result<JsValue, JsValue> {
    let options = read_options(&options);
    configure_logging(options.debug);
    Ok(detection_to_js(&detect_restricted(&options)))
}

#[wasm_bindgen(js_name = getCatalogInfo)]
pub fn get_catalog_info() -> Result<JsValue, JsValue> {
    let catalog = bp_catalog::catalog()
        .map_err(|e| JsValue::from_str(&format!("Invalid catalog: {}", e)))?;

    let result = js_sys::Object::new();
    let names = Array::new();
    for name in catalog.names() {
        names.push(&JsValue::from_str(name));
    }
    let _ = Reflect::set(&result, &"lists".into(), &names);
    let _ = Reflect::set(&result, &"selectors".into(), &JsValue::from(catalog.selector_count() as u32));
    Ok(result.into())
}
