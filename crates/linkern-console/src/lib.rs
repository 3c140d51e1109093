//! Colored console output for linkern solver events.
//!
//! Installs a `tracing` layer that renders the solver's structured events.
//!
//! ## Log Levels
//!
//! - **INFO**: run and multi-start start/end
//! - **DEBUG**: one line per finished sweep
//! - **TRACE**: every adopted improvement
//! - **WARN**: candidates the search or loop had to discard

mod format;

use std::io::{self, Write};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::OnceLock;
use std::time::Instant;

use owo_colors::OwoColorize;
use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

static INIT: OnceLock<()> = OnceLock::new();
static EPOCH: OnceLock<Instant> = OnceLock::new();
static SOLVE_START_NANOS: AtomicU64 = AtomicU64::new(0);

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default filter when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "linkern_solver=info";

/// Initializes console output.
///
/// Safe to call multiple times; only the first call has effect. Honors
/// `RUST_LOG`, falling back to [`DEFAULT_FILTER`].
pub fn init() {
    INIT.get_or_init(|| {
        print_banner();

        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(LinKernConsoleLayer)
            .try_init();
    });
}

fn mark_solve_start() {
    let epoch = EPOCH.get_or_init(Instant::now);
    SOLVE_START_NANOS.store(epoch.elapsed().as_nanos() as u64, Ordering::Relaxed);
}

fn elapsed_secs() -> f64 {
    let Some(epoch) = EPOCH.get() else {
        return 0.0;
    };
    let start = SOLVE_START_NANOS.load(Ordering::Relaxed);
    let now = epoch.elapsed().as_nanos() as u64;
    now.saturating_sub(start) as f64 / 1_000_000_000.0
}

fn print_banner() {
    let mut stdout = io::stdout().lock();
    let _ = writeln!(
        stdout,
        "{} {}",
        "linkern".bright_cyan().bold(),
        format!("v{VERSION} - Lin-Kernighan tour optimizer").bright_white()
    );
    let _ = stdout.flush();
}

/// A tracing layer that prints solver events with colors.
#[derive(Debug, Clone, Copy, Default)]
pub struct LinKernConsoleLayer;

impl<S: Subscriber> Layer<S> for LinKernConsoleLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        if !metadata.target().starts_with("linkern") {
            return;
        }

        let mut visitor = EventVisitor::default();
        event.record(&mut visitor);

        if visitor.event.as_deref() == Some("solve_start")
            || visitor.event.as_deref() == Some("multi_start_start")
        {
            mark_solve_start();
        }

        let output = format::format_event(&visitor, *metadata.level(), elapsed_secs());
        if !output.is_empty() {
            let _ = writeln!(io::stdout(), "{output}");
        }
    }
}

/// Fields the solver attaches to its events.
#[derive(Debug, Default)]
pub(crate) struct EventVisitor {
    pub event: Option<String>,
    pub status: Option<String>,
    pub direction: Option<String>,
    pub reason: Option<String>,
    pub node_count: Option<u64>,
    pub sweep: Option<u64>,
    pub sweeps: Option<u64>,
    pub improvements: Option<u64>,
    pub t1: Option<u64>,
    pub depth: Option<u64>,
    pub duration_ms: Option<u64>,
    pub starts: Option<u64>,
    pub threads: Option<u64>,
    pub best_start: Option<u64>,
    pub length: Option<f64>,
    pub initial_length: Option<f64>,
    pub best_length: Option<f64>,
    pub gain: Option<f64>,
}

impl EventVisitor {
    fn record_text(&mut self, name: &str, value: String) {
        match name {
            "event" => self.event = Some(value),
            "status" => self.status = Some(value),
            "direction" => self.direction = Some(value),
            "reason" => self.reason = Some(value),
            _ => {}
        }
    }
}

impl Visit for EventVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        let text = format!("{value:?}");
        self.record_text(field.name(), text.trim_matches('"').to_string());
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        self.record_text(field.name(), value.to_string());
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        match field.name() {
            "node_count" => self.node_count = Some(value),
            "sweep" => self.sweep = Some(value),
            "sweeps" => self.sweeps = Some(value),
            "improvements" => self.improvements = Some(value),
            "t1" => self.t1 = Some(value),
            "depth" => self.depth = Some(value),
            "duration_ms" => self.duration_ms = Some(value),
            "starts" => self.starts = Some(value),
            "threads" => self.threads = Some(value),
            "best_start" => self.best_start = Some(value),
            _ => {}
        }
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.record_u64(field, value.max(0) as u64);
    }

    fn record_f64(&mut self, field: &Field, value: f64) {
        match field.name() {
            "length" => self.length = Some(value),
            "initial_length" => self.initial_length = Some(value),
            "best_length" => self.best_length = Some(value),
            "gain" => self.gain = Some(value),
            _ => {}
        }
    }
}
