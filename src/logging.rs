//! Diagnostic logging setup
//!
//! Logs go to stderr so stdout stays clean for `--json` output and the
//! NDJSON event sink. Filter precedence: `LIBRARIAN_LOG`, then `RUST_LOG`,
//! then the `-v` count.

use crossterm::style::{StyledContent, Stylize};
use is_terminal::IsTerminal;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::fmt::format::{self, Writer};
use tracing_subscriber::fmt::{FmtContext, FormatEvent};
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::EnvFilter;

/// Environment variable holding a filter directive
pub const LOG_ENV: &str = "LIBRARIAN_LOG";

/// Compact formatter: one status symbol per level, then the fields
pub struct SymbolFormatter;

impl<S, N> FormatEvent<S, N> for SymbolFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> format::FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        let level = event.metadata().level();

        if writer.has_ansi_escapes() {
            write!(writer, "{} ", styled_symbol(level))?;
        } else {
            write!(writer, "{} ", level_symbol(level))?;
        }

        ctx.field_format().format_fields(writer.by_ref(), event)?;

        writeln!(writer)
    }
}

fn level_symbol(level: &Level) -> &'static str {
    match *level {
        Level::TRACE => "[ ]",
        Level::DEBUG => "[?]",
        Level::INFO => "[+]",
        Level::WARN => "[*]",
        Level::ERROR => "[-]",
    }
}

fn styled_symbol(level: &Level) -> StyledContent<&'static str> {
    let symbol = level_symbol(level);
    match *level {
        Level::TRACE => symbol.dim(),
        Level::DEBUG => symbol.blue(),
        Level::INFO => symbol.green().bold(),
        Level::WARN => symbol.yellow().bold(),
        Level::ERROR => symbol.red().bold(),
    }
}

/// Default directive for a `-v` count
pub fn verbosity_directive(verbose: u8) -> &'static str {
    match verbose {
        0 => "librarian=warn",
        1 => "librarian=info",
        2 => "librarian=debug",
        _ => "librarian=trace",
    }
}

/// Build the filter from the environment, falling back to the `-v` count
pub fn build_filter(verbose: u8) -> EnvFilter {
    [LOG_ENV, EnvFilter::DEFAULT_ENV]
        .iter()
        .filter_map(|var| std::env::var(var).ok())
        .find(|value| !value.trim().is_empty())
        .and_then(|value| EnvFilter::try_new(value).ok())
        .unwrap_or_else(|| EnvFilter::new(verbosity_directive(verbose)))
}

/// Install the global subscriber; later calls are no-ops
pub fn init(verbose: u8) {
    let ansi = std::io::stderr().is_terminal();
    let _ = tracing_subscriber::fmt()
        .with_env_filter(build_filter(verbose))
        .with_writer(std::io::stderr)
        .with_ansi(ansi)
        .event_format(SymbolFormatter)
        .try_init();
}
