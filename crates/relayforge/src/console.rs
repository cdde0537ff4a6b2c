//! Colorful console output for relay passes and reports.
//!
//! Provides a custom `tracing` layer that formats engine events with colors
//! and a renderer for a finished [`ReportSet`].

use std::fmt::Write as _;
use std::io::{self, Write};
use std::sync::OnceLock;

use num_format::{Locale, ToFormattedString};
use owo_colors::OwoColorize;
use relayforge_core::{Gender, RelayLineup, ReportSet};
use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{filter::LevelFilter, EnvFilter, Layer};

static INIT: OnceLock<()> = OnceLock::new();

/// Initializes console output.
///
/// Safe to call multiple times - only the first call has effect. Honors
/// `RUST_LOG`; engine events default to INFO.
pub fn init() {
    INIT.get_or_init(|| {
        print_banner();

        let filter = EnvFilter::builder()
            .with_default_directive(LevelFilter::INFO.into())
            .from_env_lossy();

        // Another subscriber may already be installed by the host application.
        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(RelayConsoleLayer)
            .try_init();
    });
}

fn print_banner() {
    let version_line = format!(
        "RelayForge v{} - relay lineup optimizer",
        env!("CARGO_PKG_VERSION")
    );

    let mut stdout = io::stdout().lock();
    let _ = writeln!(stdout, "{}", version_line.bright_cyan().bold());
    let _ = stdout.flush();
}

/// A tracing layer that formats relay engine events with colors.
pub struct RelayConsoleLayer;

impl<S: Subscriber> Layer<S> for RelayConsoleLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        let target = metadata.target();

        // Only handle relayforge events
        if !target.starts_with("relayforge") {
            return;
        }

        let mut visitor = EventVisitor::default();
        event.record(&mut visitor);

        let output = format_relay_event(&visitor);
        if !output.is_empty() {
            let _ = writeln!(io::stdout(), "{}", output);
        }
    }
}

#[derive(Default)]
struct EventVisitor {
    event: Option<String>,
    records: Option<u64>,
    rows: Option<u64>,
    lineups: Option<u64>,
    incomplete: Option<u64>,
    rejected: Option<u64>,
    generation: Option<u64>,
    duration_ms: Option<u64>,
    relay: Option<String>,
    gender: Option<String>,
    total: Option<String>,
    reason: Option<String>,
    swimmer: Option<String>,
    event_name: Option<String>,
}

impl EventVisitor {
    fn set_text(&mut self, field: &Field, value: String) {
        match field.name() {
            "event" => self.event = Some(value),
            "relay" => self.relay = Some(value),
            "gender" => self.gender = Some(value),
            "total" => self.total = Some(value),
            "reason" => self.reason = Some(value),
            "swimmer" => self.swimmer = Some(value),
            "event_name" => self.event_name = Some(value),
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
            "records" => self.records = Some(value),
            "rows" => self.rows = Some(value),
            "lineups" => self.lineups = Some(value),
            "incomplete" => self.incomplete = Some(value),
            "rejected" => self.rejected = Some(value),
            "generation" => self.generation = Some(value),
            "duration_ms" => self.duration_ms = Some(value),
            _ => {}
        }
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.record_u64(field, value.max(0) as u64);
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        self.set_text(field, value.to_string());
    }
}

fn format_relay_event(v: &EventVisitor) -> String {
    match v.event.as_deref().unwrap_or("") {
        "records_loaded" => format!(
            "{} {} {} {} rows, {} records, {} rejected",
            timestamp().bright_black(),
            "INFO".bright_green(),
            "[Store]".bright_cyan(),
            count(v.rows).bright_yellow(),
            count(v.records).bright_yellow(),
            count(v.rejected).yellow(),
        ),
        "pass_start" => format!(
            "{} {} {} pass started over {} records",
            timestamp().bright_black(),
            "INFO".bright_green(),
            "[Engine]".bright_cyan(),
            count(v.records).bright_yellow(),
        ),
        "pass_end" => format!(
            "{} {} {} pass ended: {} lineups, {} incomplete, time spent ({}ms)",
            timestamp().bright_black(),
            "INFO".bright_green(),
            "[Engine]".bright_cyan(),
            count(v.lineups).bright_yellow(),
            count(v.incomplete).yellow(),
            v.duration_ms.unwrap_or(0),
        ),
        "report_published" => format!(
            "{} {} {} generation {} published",
            timestamp().bright_black(),
            "INFO".bright_green(),
            "[Manager]".bright_cyan(),
            count(v.generation).bright_magenta(),
        ),
        "lineup_computed" => format!(
            "    {} {} {} | {}",
            "->".bright_blue(),
            v.gender.as_deref().unwrap_or("?").white(),
            v.relay.as_deref().unwrap_or("?").white(),
            v.total.as_deref().unwrap_or("-").bright_green(),
        ),
        "row_rejected" => format!(
            "{} {} {} skipped {} ({}): {}",
            timestamp().bright_black(),
            "WARN".bright_yellow(),
            "[Store]".bright_cyan(),
            v.swimmer.as_deref().unwrap_or("?"),
            v.event_name.as_deref().unwrap_or("?"),
            v.reason.as_deref().unwrap_or("?").yellow(),
        ),
        _ => String::new(),
    }
}

fn count(value: Option<u64>) -> String {
    value.unwrap_or(0).to_formatted_string(&Locale::en)
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

/// Renders every lineup of `report`, one block per event.
///
/// Incomplete lineups are marked "insufficient data" instead of showing a
/// total that would look like a real relay time.
pub fn render_report(report: &ReportSet) -> String {
    let mut out = String::new();

    let mut current = None;
    for lineup in report {
        if current != Some(lineup.event()) {
            if current.is_some() {
                out.push('\n');
            }
            current = Some(lineup.event());
            let _ = writeln!(out, "{}", lineup.event().name().bright_cyan().bold());
        }
        render_lineup(&mut out, lineup);
    }
    out
}

fn render_lineup(out: &mut String, lineup: &RelayLineup) {
    let label = match lineup.gender() {
        Gender::Female => lineup.gender().label().bright_magenta().to_string(),
        Gender::Male => lineup.gender().label().bright_blue().to_string(),
    };

    match lineup.complete_total() {
        Some(total) => {
            let _ = writeln!(out, "  {}: {}", label, total.to_string().bright_green().bold());
        }
        None => {
            let _ = writeln!(
                out,
                "  {}: {} ({} of 4 legs)",
                label,
                "insufficient data".yellow(),
                lineup.filled_count()
            );
        }
    }

    let strokes = lineup.event().leg_strokes();
    for (index, leg) in lineup.legs().iter().enumerate() {
        match leg {
            Some(leg) => {
                let _ = writeln!(
                    out,
                    "    {}. {:<7} {:<28} {:>8}  {}",
                    index + 1,
                    leg.stroke.name(),
                    leg.swimmer.to_string(),
                    leg.time.to_string(),
                    leg.source.label().bright_black(),
                );
            }
            None => {
                let _ = writeln!(
                    out,
                    "    {}. {:<7} {}",
                    index + 1,
                    strokes[index].name(),
                    "-".bright_black(),
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use relayforge_core::RelayEvent;
    use relayforge_test::pools::{full_team, women_free_without_leadoff};

    #[test]
    fn test_render_complete_report() {
        let report = crate::compute_relays(&full_team()).unwrap();
        let text = render_report(&report);

        for event in RelayEvent::ALL {
            assert!(text.contains(event.name()), "missing {}", event.name());
        }
        assert!(!text.contains("insufficient data"));
        assert!(text.contains("Women"));
        assert!(text.contains("Men"));
    }

    #[test]
    fn test_render_marks_incomplete() {
        let report = crate::compute_relays(&women_free_without_leadoff()).unwrap();
        let text = render_report(&report);

        assert!(text.contains("insufficient data"));
        assert!(text.contains("(3 of 4 legs)"));
        assert!(text.contains("Eve (TST)"));
        assert!(text.contains("24.90"));
    }

    #[test]
    fn test_count_formatting() {
        assert_eq!(count(Some(12_345)), "12,345");
        assert_eq!(count(None), "0");
    }

    #[test]
    fn test_init_is_idempotent() {
        init();
        init();
    }
}
