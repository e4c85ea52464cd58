use colored::{ColoredString, Colorize};
use std::{fmt, time::Duration};
use tracing::{Event, Subscriber};
use tracing_log::NormalizeEvent;
use tracing_subscriber::{
    fmt::{format, FmtContext, FormatEvent, FormatFields},
    layer::SubscriberExt,
    registry::LookupSpan,
    util::SubscriberInitExt,
};

pub struct FormatElapsedTimeOptions {
    pub(crate) sec_yellow_threshold: u64,
    pub(crate) sec_red_threshold: u64,
    pub(crate) millis_yellow_threshold: Option<u128>,
    pub(crate) millis_red_threshold: Option<u128>,
}

impl Default for FormatElapsedTimeOptions {
    fn default() -> Self {
        Self {
            sec_yellow_threshold: 1,
            sec_red_threshold: 2,
            millis_yellow_threshold: Some(100),
            millis_red_threshold: Some(500),
        }
    }
}

impl FormatElapsedTimeOptions {
    /// Thresholds for server startup, where a few hundred milliseconds is expected.
    pub fn default_dev() -> Self {
        Self {
            millis_yellow_threshold: Some(500),
            millis_red_threshold: Some(1000),
            ..Default::default()
        }
    }
}

pub fn format_elapsed_time(elapsed: Duration, options: &FormatElapsedTimeOptions) -> ColoredString {
    match elapsed.as_secs() {
        secs if secs > 60 => {
            let mins = secs / 60;
            let secs = secs % 60;
            format!("{}m{}s", mins, secs).red()
        }
        secs if secs > options.sec_red_threshold => format!("{}s", secs).red(),
        secs if secs > options.sec_yellow_threshold => format!("{}s", secs).yellow(),
        secs if secs > 0 => format!("{}s", secs).dimmed(),
        _ => match elapsed.as_millis() {
            millis
                if options
                    .millis_red_threshold
                    .is_some_and(|threshold| millis > threshold) =>
            {
                format!("{}ms", millis).red()
            }
            millis
                if options
                    .millis_yellow_threshold
                    .is_some_and(|threshold| millis > threshold) =>
            {
                format!("{}ms", millis).yellow()
            }
            millis if millis > 0 => format!("{}ms", millis).dimmed(),
            _ => format!("{}μs", elapsed.as_micros()).dimmed(),
        },
    }
}

pub struct EventLoggerFormatter;

impl<S, N> FormatEvent<S, N> for EventLoggerFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: format::Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        if std::env::args().any(|arg| arg == "--quiet") {
            return Ok(());
        }

        // Events coming from the library go through the `log` bridge, their real target is only visible once normalized.
        let normalized = event.normalized_metadata();
        let (label, is_log_record) = match normalized.as_ref() {
            Some(metadata) => (metadata.target(), true),
            None => (event.metadata().name(), false),
        };

        if label == "SKIP_FORMAT" {
            ctx.field_format().format_fields(writer.by_ref(), event)?;
            return writeln!(writer);
        }

        let timestamp = chrono::Local::now().format("%H:%M:%S").to_string().dimmed();
        // Unnamed tracing events are called `event file:line`
        let label = if !is_log_record && label.starts_with("event ") {
            ""
        } else {
            label
        };

        write!(
            writer,
            "{}{} ",
            timestamp,
            if label.is_empty() {
                String::new()
            } else {
                format!(" {}", label.to_ascii_lowercase().bold().bright_yellow())
            }
        )?;

        ctx.field_format().format_fields(writer.by_ref(), event)?;

        writeln!(writer)
    }
}

pub fn init_logging() {
    let tracing_formatter = tracing_subscriber::fmt::layer().event_format(EventLoggerFormatter);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_formatter)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_minutes() {
        let formatted = format_elapsed_time(
            Duration::from_secs(125),
            &FormatElapsedTimeOptions::default(),
        );
        assert_eq!(formatted.input, "2m5s");
    }

    #[test]
    fn test_dev_thresholds_are_laxer() {
        let elapsed = Duration::from_millis(600);

        let default = format_elapsed_time(elapsed, &FormatElapsedTimeOptions::default());
        let dev = format_elapsed_time(elapsed, &FormatElapsedTimeOptions::default_dev());

        assert_eq!(default.fgcolor, Some(colored::Color::Red));
        assert_eq!(dev.fgcolor, Some(colored::Color::Yellow));
    }
}
