use colored::{ColoredString, Colorize};
use env_logger::{Builder, Env};
use log::info;
use std::io::Write;
use std::time::Duration;

pub struct FormatElapsedTimeOptions<'a> {
    pub(crate) sec_yellow_threshold: u64,
    pub(crate) sec_red_threshold: u64,
    pub(crate) millis_yellow_threshold: Option<u128>,
    pub(crate) millis_red_threshold: Option<u128>,
    pub(crate) additional_fn: Option<&'a (dyn Fn(ColoredString) -> ColoredString + Sync)>,
}

impl Default for FormatElapsedTimeOptions<'_> {
    fn default() -> Self {
        Self {
            sec_yellow_threshold: 1,
            sec_red_threshold: 2,
            millis_yellow_threshold: Some(100),
            millis_red_threshold: Some(500),
            additional_fn: None,
        }
    }
}

/// Installs the `env_logger` backend used by [`generate()`](crate::generate).
///
/// Honors `RUST_LOG` (defaults to `info`). Calling it twice is harmless, the second call is ignored.
pub fn init_logging() {
    let logging_env = Env::default().filter_or("RUST_LOG", "info");
    let _ = Builder::from_env(logging_env)
        .format(|buf, record| {
            if std::env::args().any(|arg| arg == "--quiet") {
                return Ok(());
            }

            if record.target() == "SKIP_FORMAT" {
                return writeln!(buf, "{}", record.args());
            }

            writeln!(
                buf,
                "{} {} {}",
                chrono::Local::now().format("%H:%M:%S").to_string().dimmed(),
                record.target().to_ascii_lowercase().bold().bright_yellow(),
                record.args()
            )
        })
        .try_init();
}

pub fn format_elapsed_time(elapsed: Duration, options: &FormatElapsedTimeOptions) -> ColoredString {
    let result = match elapsed.as_secs() {
        secs if secs > options.sec_red_threshold => format!("{}s", secs).red(),
        secs if secs > options.sec_yellow_threshold => format!("{}s", secs).yellow(),
        secs if secs > 0 => format!("{}s", secs).normal(),
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
            millis if millis > 0 => format!("{}ms", millis).normal(),
            _ => format!("{}μs", elapsed.as_micros()).normal(),
        },
    };

    if let Some(additional_fn) = &options.additional_fn {
        additional_fn(result)
    } else {
        result
    }
}

pub fn print_title(title: &str) {
    info!(target: "SKIP_FORMAT", "{}", "");
    info!(target: "SKIP_FORMAT", "{}", format!(" {} ", title).on_green().bold());
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(elapsed: Duration, options: &FormatElapsedTimeOptions) -> String {
        format_elapsed_time(elapsed, options).input.clone()
    }

    #[test]
    fn test_format_micros() {
        let options = FormatElapsedTimeOptions::default();
        assert_eq!(plain(Duration::from_micros(250), &options), "250μs");
    }

    #[test]
    fn test_format_millis_thresholds() {
        let options = FormatElapsedTimeOptions::default();
        let fast = format_elapsed_time(Duration::from_millis(20), &options);
        let slow = format_elapsed_time(Duration::from_millis(700), &options);

        assert_eq!(fast.input, "20ms");
        assert_eq!(fast.fgcolor, None);
        assert_eq!(slow.input, "700ms");
        assert_eq!(slow.fgcolor, Some(colored::Color::Red));
    }

    #[test]
    fn test_format_seconds() {
        let options = FormatElapsedTimeOptions::default();
        assert_eq!(plain(Duration::from_secs(2), &options), "2s");
    }

    #[test]
    fn test_additional_fn_is_applied() {
        let options = FormatElapsedTimeOptions {
            additional_fn: Some(&|msg: ColoredString| format!("(+{})", msg.input).normal()),
            ..Default::default()
        };
        assert_eq!(plain(Duration::from_millis(3), &options), "(+3ms)");
    }

    #[test]
    fn test_formats_instant_elapsed() {
        let start = std::time::Instant::now();
        let shown = format!("{}", format_elapsed_time(start.elapsed(), &FormatElapsedTimeOptions::default()));

        assert!(shown.ends_with('s'));
    }
}
