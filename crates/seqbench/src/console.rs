//! Colorful console output for benchmark progress.
//!
//! Provides a custom `tracing` layer that formats harness events with colors
//! on standard error, leaving standard output to the report.

use num_format::{Locale, ToFormattedString};
use owo_colors::OwoColorize;
use std::io::{self, Write};
use std::sync::OnceLock;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::Context;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

static INIT: OnceLock<()> = OnceLock::new();

/// Filter used when `RUST_LOG` is unset or unparsable.
pub const DEFAULT_DIRECTIVE: &str = "seqbench=info";

/// Initializes the console output.
///
/// Safe to call multiple times - only the first call has effect.
/// Prints the banner and sets up tracing.
pub fn init() {
    INIT.get_or_init(|| {
        print_banner();

        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE));

        // A subscriber installed by the embedding program wins.
        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(HarnessConsoleLayer)
            .try_init();
    });
}

fn print_banner() {
    let banner = r#"
                 _                     _
 ___  ___  __ _ | |__   ___ _ __   ___| |__
/ __|/ _ \/ _` || '_ \ / _ \ '_ \ / __| '_ \
\__ \  __/ (_| || |_) |  __/ | | | (__| | | |
|___/\___|\__, ||_.__/ \___|_| |_|\___|_| |_|
             |_|
"#;

    let version_line = format!(
        "            v{} - Sequence Container Benchmarks\n",
        env!("CARGO_PKG_VERSION")
    );

    let mut stderr = io::stderr().lock();
    let _ = writeln!(stderr, "{}", banner.bright_cyan());
    let _ = writeln!(stderr, "{}", version_line.bright_white().bold());
    let _ = stderr.flush();
}

/// A tracing layer that formats harness events with colors.
pub struct HarnessConsoleLayer;

impl<S: Subscriber> Layer<S> for HarnessConsoleLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();

        // Only handle events from the harness crates
        if !metadata.target().starts_with("seqbench") {
            return;
        }

        let mut visitor = EventVisitor::default();
        event.record(&mut visitor);

        let output = format_event(*metadata.level(), &visitor);
        if !output.is_empty() {
            let _ = writeln!(io::stderr(), "{}", output);
        }
    }
}

#[derive(Default)]
struct EventVisitor {
    event: Option<String>,
    message: Option<String>,
    group: Option<String>,
    element: Option<String>,
    series: Option<String>,
    kind: Option<String>,
    unit: Option<String>,
    size: Option<u64>,
    value: Option<u64>,
    groups: Option<u64>,
    element_types: Option<u64>,
    repeat_count: Option<u64>,
    seed: Option<u64>,
    samples: Option<u64>,
    duration_ms: Option<u64>,
}

impl EventVisitor {
    fn set_text(&mut self, field: &Field, value: String) {
        match field.name() {
            "event" => self.event = Some(value),
            "message" => self.message = Some(value),
            "group" => self.group = Some(value),
            "element" => self.element = Some(value),
            "series" => self.series = Some(value),
            "kind" => self.kind = Some(value),
            "unit" => self.unit = Some(value),
            _ => {}
        }
    }
}

impl Visit for EventVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        let s = format!("{:?}", value);
        self.set_text(field, s.trim_matches('"').to_string());
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        match field.name() {
            "size" => self.size = Some(value),
            "value" => self.value = Some(value),
            "groups" => self.groups = Some(value),
            "element_types" => self.element_types = Some(value),
            "repeat_count" => self.repeat_count = Some(value),
            "seed" => self.seed = Some(value),
            "samples" => self.samples = Some(value),
            "duration_ms" => self.duration_ms = Some(value),
            _ => {}
        }
    }

    // Every numeric field is a count; a negative one is dropped.
    fn record_i64(&mut self, field: &Field, value: i64) {
        if let Ok(value) = u64::try_from(value) {
            self.record_u64(field, value);
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        self.set_text(field, value.to_string());
    }
}

fn format_event(level: Level, v: &EventVisitor) -> String {
    match v.event.as_deref().unwrap_or("") {
        "run_start" => format_run_start(v),
        "group_start" => format_group_start(v),
        "sample" => format_sample(v),
        "index_cache_regenerated" => format_cache_regenerated(v),
        "run_end" => format_run_end(v),
        _ if level <= Level::WARN => format_warning(level, v),
        _ => String::new(),
    }
}

fn format_run_start(v: &EventVisitor) -> String {
    format!(
        "{} {} {} Run started: groups ({}), element types ({}), repeats ({}), seed ({})",
        timestamp().bright_black(),
        "INFO".bright_green(),
        "[Suite]".bright_cyan(),
        v.groups.unwrap_or(0).bright_yellow(),
        v.element_types.unwrap_or(0).bright_yellow(),
        v.repeat_count.unwrap_or(0).bright_yellow(),
        v.seed.unwrap_or(0).bright_magenta()
    )
}

fn format_group_start(v: &EventVisitor) -> String {
    let group = v.group.as_deref().unwrap_or("unknown");
    let element = v.element.as_deref().unwrap_or("unknown");

    format!(
        "{} {} {} {}",
        timestamp().bright_black(),
        "INFO".bright_green(),
        format!("[{}]", group).bright_cyan(),
        element.white().bold()
    )
}

fn format_sample(v: &EventVisitor) -> String {
    let series = v.series.as_deref().unwrap_or("?");
    let size = v.size.unwrap_or(0);
    let value = v.value.unwrap_or(0);
    let unit = v.unit.as_deref().unwrap_or("");

    format!(
        "    {} {:<10} size {:>9} | {} {}",
        "->".bright_blue(),
        series,
        size.to_formatted_string(&Locale::en).white(),
        value.to_formatted_string(&Locale::en).bright_magenta().bold(),
        unit
    )
}

fn format_cache_regenerated(v: &EventVisitor) -> String {
    format!(
        "    {} index cache reshuffled for {} ({})",
        "..".bright_black(),
        v.kind.as_deref().unwrap_or("?"),
        v.size.unwrap_or(0).to_formatted_string(&Locale::en)
    )
}

fn format_run_end(v: &EventVisitor) -> String {
    let samples = v.samples.unwrap_or(0);
    let duration_ms = v.duration_ms.unwrap_or(0);

    let mut output = format!(
        "{} {} {} Run ended: samples ({}), time spent ({})",
        timestamp().bright_black(),
        "INFO".bright_green(),
        "[Suite]".bright_cyan(),
        samples.to_formatted_string(&Locale::en).bright_yellow(),
        format_duration_ms(duration_ms).yellow()
    );

    output.push_str("\n\n");
    output.push_str(&"╔══════════════════════════════════════════════════════════╗".bright_cyan().to_string());
    output.push('\n');
    output.push_str(&format!(
        "{}  {:<18}{:>36}  {}",
        "║".bright_cyan(),
        "Samples:",
        samples.to_formatted_string(&Locale::en),
        "║".bright_cyan()
    ));
    output.push('\n');
    output.push_str(&format!(
        "{}  {:<18}{:>36}  {}",
        "║".bright_cyan(),
        "Time Spent:",
        format_duration_ms(duration_ms),
        "║".bright_cyan()
    ));
    output.push('\n');
    output.push_str(&"╚══════════════════════════════════════════════════════════╝".bright_cyan().to_string());
    output.push('\n');

    output
}

fn format_warning(level: Level, v: &EventVisitor) -> String {
    let label = if level == Level::ERROR {
        "ERROR".bright_red().to_string()
    } else {
        "WARN".yellow().to_string()
    };
    let mut output = format!("{} {}", timestamp().bright_black(), label);
    if let Some(event) = &v.event {
        output.push_str(&format!(" [{}]", event));
    }
    if let Some(message) = &v.message {
        output.push(' ');
        output.push_str(message);
    }
    output
}

fn timestamp() -> String {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| {
            let secs = d.as_secs() % 100000;
            let millis = d.subsec_millis();
            format!("{:5}.{:03}", secs, millis)
        })
        .unwrap_or_else(|_| "    0.000".to_string())
}

fn format_duration_ms(ms: u64) -> String {
    if ms < 1000 {
        format!("{}ms", ms)
    } else if ms < 60_000 {
        format!("{:.2}s", ms as f64 / 1000.0)
    } else {
        let mins = ms / 60_000;
        let secs = (ms % 60_000) / 1000;
        format!("{}m {}s", mins, secs)
    }
}
