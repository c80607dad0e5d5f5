//! Log line formatter that stamps every event with wall-clock time and the current simulation tick.
//!
//! Lines look like `12:04:33.01234 0x002A DEBUG arcade::game: Candy Run populated candy_count=55`.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use time::format_description::FormatItem;
use time::macros::format_description;
use time::OffsetDateTime;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::{FmtContext, FormatEvent, FormatFields, FormattedFields};
use tracing_subscriber::registry::LookupSpan;

/// Simulation ticks run so far, shared by every session in the process.
static TICK_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Only the low 16 bits of the tick are printed.
const TICK_DISPLAY_MASK: u64 = 0xFFFF;

const TIMESTAMP_FORMAT: &[FormatItem<'static>] = format_description!("[hour]:[minute]:[second].[subsecond digits:5]");

/// Formats events as `time tick level spans target: fields`.
pub struct TickFormatter;

impl<S, N> FormatEvent<S, N> for TickFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(&self, ctx: &FmtContext<'_, S, N>, mut writer: Writer<'_>, event: &Event<'_>) -> fmt::Result {
        let meta = event.metadata();
        let style = Style::new(writer.has_ansi_escapes());

        let timestamp = OffsetDateTime::now_utc().format(&TIMESTAMP_FORMAT).map_err(|_| fmt::Error)?;
        style.dimmed(&mut writer, timestamp)?;
        writer.write_char(' ')?;

        style.dimmed(&mut writer, format_args!("0x{:04X}", get_tick_count() & TICK_DISPLAY_MASK))?;
        writer.write_char(' ')?;

        style.level(&mut writer, meta.level())?;
        writer.write_char(' ')?;

        if let Some(scope) = ctx.event_scope() {
            for span in scope.from_root() {
                style.bold(&mut writer, span.metadata().name())?;
                let extensions = span.extensions();
                if let Some(fields) = extensions.get::<FormattedFields<N>>().filter(|fields| !fields.is_empty()) {
                    style.bold(&mut writer, "{")?;
                    write!(writer, "{fields}")?;
                    style.bold(&mut writer, "}")?;
                }
                style.dimmed(&mut writer, ":")?;
            }
            writer.write_char(' ')?;
        }

        style.dimmed(&mut writer, format_args!("{}:", meta.target()))?;
        writer.write_char(' ')?;

        ctx.format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

/// ANSI styling, switched off when the writer does not support escapes.
#[derive(Clone, Copy)]
struct Style {
    ansi: bool,
}

impl Style {
    fn new(ansi: bool) -> Self {
        Self { ansi }
    }

    fn wrap(&self, writer: &mut Writer<'_>, code: &str, value: impl fmt::Display) -> fmt::Result {
        if self.ansi {
            write!(writer, "\x1b[{code}m{value}\x1b[0m")
        } else {
            write!(writer, "{value}")
        }
    }

    fn dimmed(&self, writer: &mut Writer<'_>, value: impl fmt::Display) -> fmt::Result {
        self.wrap(writer, "2", value)
    }

    fn bold(&self, writer: &mut Writer<'_>, value: impl fmt::Display) -> fmt::Result {
        self.wrap(writer, "1", value)
    }

    /// Five characters wide, right aligned, coloured per level.
    fn level(&self, writer: &mut Writer<'_>, level: &Level) -> fmt::Result {
        let (code, text) = match *level {
            Level::TRACE => ("35", "TRACE"),
            Level::DEBUG => ("34", "DEBUG"),
            Level::INFO => ("32", " INFO"),
            Level::WARN => ("33", " WARN"),
            Level::ERROR => ("31", "ERROR"),
        };
        self.wrap(writer, code, text)
    }
}

/// Advances the tick shown in log lines. Called once per simulation tick.
pub fn increment_tick() {
    TICK_COUNTER.fetch_add(1, Ordering::Relaxed);
}

pub fn get_tick_count() -> u64 {
    TICK_COUNTER.load(Ordering::Relaxed)
}
