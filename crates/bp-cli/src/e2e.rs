use std::time::Duration;

use serde::Serialize;
use serde_json::Value;
use thirtyfour::prelude::*;
use thirtyfour::ChromeCapabilities;

use bp_catalog::catalog;
use bp_core::{active_lists, Catalog, ProbeResult};

pub struct E2eOptions {
    pub chromedriver_url: String,
    pub block: Vec<String>,
    pub headless: bool,
}

// Same steps as the probe engine, run in the page: force-shown wrapper per
// probe, one attach, offsetParent read, removal.
const PROBE_SCRIPT: &str = r#"
const [css, specs] = arguments;
const style = document.createElement('style');
style.textContent = css;
(document.head || document.documentElement).appendChild(style);

const root = document.createElement('div');
root.style.setProperty('display', 'block', 'important');
const probes = specs.map((spec) => {
    const element = document.createElement(spec.tag);
    for (const [name, value] of spec.attributes) {
        element.setAttribute(name, value);
    }
    const holder = document.createElement('div');
    holder.style.setProperty('display', 'block', 'important');
    holder.appendChild(element);
    root.appendChild(holder);
    return element;
});

document.body.appendChild(root);
const blocked = [];
probes.forEach((element, i) => {
    if (!element.offsetParent) {
        blocked.push(specs[i].selector);
    }
});
root.remove();
style.remove();
return blocked;
"#;

#[derive(Serialize)]
struct ProbeSpec<'a> {
    selector: &'a str,
    tag: &'a str,
    attributes: &'a [(String, String)],
}

pub fn run_e2e(opts: E2eOptions) -> Result<(), String> {
    let runtime = tokio::runtime::Runtime::new()
        .map_err(|e| format!("Failed to start tokio runtime: {}", e))?;
    runtime.block_on(run_e2e_async(opts))
}

async fn run_e2e_async(opts: E2eOptions) -> Result<(), String> {
    let catalog = catalog().map_err(|e| format!("Invalid catalog: {}", e))?;
    let hidden = hidden_stylesheet(catalog, &opts.block)?;

    let mut caps = ChromeCapabilities::new();
    caps.add_arg("--no-first-run")
        .map_err(|e| format!("Failed to set chrome arg: {}", e))?;
    caps.add_arg("--no-default-browser-check")
        .map_err(|e| format!("Failed to set chrome arg: {}", e))?;
    if opts.headless {
        caps.add_arg("--headless=new")
            .map_err(|e| format!("Failed to set chrome arg: {}", e))?;
        caps.add_arg("--disable-gpu")
            .map_err(|e| format!("Failed to set chrome arg: {}", e))?;
    }

    let driver = WebDriver::new(&opts.chromedriver_url, caps)
        .await
        .map_err(|e| format!("Failed to connect to chromedriver: {}", e))?;

    let mut errors = Vec::new();

    if let Err(e) = check_detection(&driver, catalog, "", &[]).await {
        errors.push(format!("Clean page check failed: {}", e));
    }

    let mut expected: Vec<String> = opts.block.clone();
    expected.sort();
    expected.dedup();
    if let Err(e) = check_detection(&driver, catalog, &hidden, &expected).await {
        errors.push(format!("Blocked page check failed: {}", e));
    }

    driver.quit().await.ok();

    if errors.is_empty() {
        println!("✓ E2E checks passed");
        Ok(())
    } else {
        Err(format!("E2E failed:\n- {}", errors.join("\n- ")))
    }
}

fn hidden_stylesheet(catalog: &Catalog, lists: &[String]) -> Result<String, String> {
    let mut css = String::new();
    for name in lists {
        let list = catalog
            .get(name)
            .ok_or_else(|| format!("Unknown filter list '{}'", name))?;
        for selector in list.selectors() {
            css.push_str(selector.text());
            css.push_str(" { display: none !important; }\n");
        }
    }
    Ok(css)
}

async fn check_detection(
    driver: &WebDriver,
    catalog: &Catalog,
    css: &str,
    expected: &[String],
) -> Result<(), String> {
    driver.goto("about:blank")
        .await
        .map_err(|e| format!("Failed to open blank page: {}", e))?;
    tokio::time::sleep(Duration::from_millis(100)).await;

    let specs: Vec<ProbeSpec> = catalog
        .selectors()
        .map(|selector| ProbeSpec {
            selector: selector.text(),
            tag: &selector.element().tag,
            attributes: &selector.element().attributes,
        })
        .collect();
    let specs = serde_json::to_value(&specs).map_err(|e| format!("Failed to encode probes: {}", e))?;

    let ret = driver
        .execute(PROBE_SCRIPT, vec![Value::from(css), specs])
        .await
        .map_err(|e| format!("Failed to run probes: {}", e))?;

    let result: ProbeResult = ret
        .json()
        .as_array()
        .ok_or_else(|| "Probe script did not return an array".to_string())?
        .iter()
        .filter_map(Value::as_str)
        .collect();

    let actual = active_lists(catalog, &result);
    if actual != expected {
        return Err(format!("expected {:?}, got {:?}", expected, actual));
    }
    Ok(())
}
