//! BlockerProbe CLI
//!
//! Inspect the built-in filter-list catalog and run detection against a
//! simulated document or a headless browser.

use std::future::Future;
use std::time::{Duration, Instant};

use clap::{Parser, Subcommand};
use serde::Serialize;

use bp_catalog::catalog;
use bp_core::{
    active_lists, parse_selector, probe_selectors, Catalog, CatalogSelector, DebugReport, Detection, ElementSpec,
    MemoryDom, Sleep,
};

#[cfg(feature = "e2e")]
mod e2e;

#[derive(Parser)]
#[command(name = "bp-cli")]
#[command(about = "BlockerProbe filter-list catalog and detection tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the filter lists in the catalog
    Lists {
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Validate the catalog, or individual selectors
    Validate {
        /// Selectors to check instead of the catalog
        #[arg(short, long)]
        selector: Vec<String>,
    },

    /// Dump every selector with the element synthesized for it
    Dump {
        /// Only dump this list
        #[arg(short, long)]
        list: Option<String>,
    },

    /// Run detection against a simulated document
    Simulate {
        /// Hide every selector of this filter list
        #[arg(short, long)]
        block: Vec<String>,

        /// Hide an extra selector
        #[arg(long)]
        hide: Vec<String>,

        /// Number of body checks that fail before the body appears
        #[arg(long, default_value_t = 0)]
        body_after: u32,

        /// Delay between body checks in milliseconds
        #[arg(long, default_value_t = 50)]
        poll_ms: u64,

        /// Simulate a browser where detection doesn't apply
        #[arg(long)]
        unsupported: bool,

        /// Print per-selector measurements
        #[arg(short, long)]
        debug: bool,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Check detection in headless Chrome
    #[cfg(feature = "e2e")]
    E2e {
        /// WebDriver endpoint
        #[arg(long, default_value = "http://localhost:9515")]
        chromedriver_url: String,

        /// Filter lists to hide with an injected stylesheet
        #[arg(short, long)]
        block: Vec<String>,

        /// Show the browser window
        #[arg(long)]
        headed: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Lists { json } => cmd_lists(json),
        Commands::Validate { selector } => cmd_validate(&selector),
        Commands::Dump { list } => cmd_dump(list.as_deref()),
        Commands::Simulate {
            block,
            hide,
            body_after,
            poll_ms,
            unsupported,
            debug,
            json,
        } => cmd_simulate(&SimulateOptions {
            block,
            hide,
            body_after,
            poll_interval: Duration::from_millis(poll_ms),
            unsupported,
            debug,
            json,
        }),
        #[cfg(feature = "e2e")]
        Commands::E2e {
            chromedriver_url,
            block,
            headed,
        } => e2e::run_e2e(e2e::E2eOptions {
            chromedriver_url,
            block,
            headless: !headed,
        }),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn load() -> Result<&'static Catalog, String> {
    catalog().map_err(|e| format!("Invalid catalog: {}", e))
}

#[derive(Serialize)]
struct ListInfo<'a> {
    name: &'a str,
    selectors: usize,
}

fn cmd_lists(json: bool) -> Result<(), String> {
    let catalog = load()?;

    if json {
        let lists: Vec<ListInfo> = catalog
            .lists()
            .iter()
            .map(|list| ListInfo {
                name: list.name(),
                selectors: list.len(),
            })
            .collect();
        let out = serde_json::to_string_pretty(&lists).map_err(|e| format!("Failed to encode JSON: {}", e))?;
        println!("{}", out);
        return Ok(());
    }

    for list in catalog.lists() {
        println!("  {:<28} {} selectors", list.name(), list.len());
    }
    println!();
    println!("{} lists, {} selectors", catalog.len(), catalog.selector_count());

    Ok(())
}

fn cmd_validate(selectors: &[String]) -> Result<(), String> {
    if selectors.is_empty() {
        let start = Instant::now();
        let catalog = bp_catalog::load_catalog().map_err(|e| format!("Invalid catalog: {}", e))?;
        println!("Catalog is valid");
        println!("  Lists:       {}", catalog.len());
        println!("  Selectors:   {}", catalog.selector_count());
        println!("  Load time:   {:.2}ms", start.elapsed().as_secs_f64() * 1000.0);
        return Ok(());
    }

    let mut invalid = 0usize;
    for selector in selectors {
        match parse_selector(selector) {
            Ok(parsed) => {
                let element = ElementSpec::from_selector(&parsed);
                println!("ok    {}  ->  {}", selector, describe_element(&element));
            }
            Err(e) => {
                invalid += 1;
                println!("error {}  ({})", selector, e);
            }
        }
    }

    if invalid > 0 {
        return Err(format!("{} of {} selectors are invalid", invalid, selectors.len()));
    }
    Ok(())
}

fn describe_element(element: &ElementSpec) -> String {
    let mut out = format!("<{}", element.tag);
    for (name, value) in &element.attributes {
        out.push_str(&format!(" {}={:?}", name, value));
    }
    out.push('>');
    out
}

#[derive(Serialize)]
struct DumpedSelector<'a> {
    selector: &'a str,
    element: &'a ElementSpec,
}

#[derive(Serialize)]
struct DumpedList<'a> {
    name: &'a str,
    selectors: Vec<DumpedSelector<'a>>,
}

fn cmd_dump(only: Option<&str>) -> Result<(), String> {
    let catalog = load()?;

    if let Some(name) = only {
        if catalog.get(name).is_none() {
            return Err(format!("Unknown filter list '{}'", name));
        }
    }

    let lists: Vec<DumpedList> = catalog
        .lists()
        .iter()
        .filter(|list| only.map_or(true, |name| list.name() == name))
        .map(|list| DumpedList {
            name: list.name(),
            selectors: list
                .selectors()
                .iter()
                .map(|selector| DumpedSelector {
                    selector: selector.text(),
                    element: selector.element(),
                })
                .collect(),
        })
        .collect();

    let out = serde_json::to_string_pretty(&lists).map_err(|e| format!("Failed to encode JSON: {}", e))?;
    println!("{}", out);
    Ok(())
}

struct TokioSleeper;

impl Sleep for TokioSleeper {
    fn sleep(&self, duration: Duration) -> impl Future<Output = ()> {
        tokio::time::sleep(duration)
    }
}

struct SimulateOptions {
    block: Vec<String>,
    hide: Vec<String>,
    body_after: u32,
    poll_interval: Duration,
    unsupported: bool,
    debug: bool,
    json: bool,
}

fn simulated_dom(catalog: &Catalog, opts: &SimulateOptions) -> Result<MemoryDom, String> {
    let mut dom = MemoryDom::new().with_body_after(opts.body_after);

    for name in &opts.block {
        let list = catalog
            .get(name)
            .ok_or_else(|| format!("Unknown filter list '{}'", name))?;
        dom.hide_all(list.selectors().iter().map(CatalogSelector::text))
            .map_err(|e| format!("Invalid selector in '{}': {}", name, e))?;
    }
    for selector in &opts.hide {
        dom.hide(selector)
            .map_err(|e| format!("Invalid selector '{}': {}", selector, e))?;
    }

    Ok(dom)
}

async fn simulate(catalog: &Catalog, opts: &SimulateOptions) -> Result<Detection, String> {
    if opts.unsupported {
        return Ok(Detection::Unsupported);
    }

    let mut dom = simulated_dom(catalog, opts)?;
    let selectors: Vec<&CatalogSelector> = catalog.selectors().collect();
    let result = probe_selectors(&mut dom, &TokioSleeper, &selectors, opts.poll_interval)
        .await
        .map_err(|e| format!("Detection failed: {}", e))?;

    if opts.debug {
        println!("{}", DebugReport::new(catalog, &result));
        println!("{} of {} selectors blocked", result.blocked_count(), selectors.len());
    }

    Ok(Detection::Detected(active_lists(catalog, &result)))
}

fn cmd_simulate(opts: &SimulateOptions) -> Result<(), String> {
    let catalog = load()?;
    let runtime = tokio::runtime::Runtime::new()
        .map_err(|e| format!("Failed to start tokio runtime: {}", e))?;

    let start = Instant::now();
    let detection = runtime.block_on(simulate(catalog, opts))?;

    if opts.json {
        let out = serde_json::to_string(&detection).map_err(|e| format!("Failed to encode JSON: {}", e))?;
        println!("{}", out);
        return Ok(());
    }

    match &detection {
        Detection::Unsupported => println!("Detection is not applicable in this environment"),
        Detection::Detected(lists) if lists.is_empty() => println!("No active filter lists"),
        Detection::Detected(lists) => {
            println!("Active filter lists:");
            for name in lists {
                println!("  {}", name);
            }
        }
    }
    println!("  Time:     {:.1}ms", start.elapsed().as_secs_f64() * 1000.0);

    Ok(())
}
