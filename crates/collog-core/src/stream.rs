//! The enable gate in front of a color sink

use std::borrow::Cow;
use std::fmt::Display;
use std::io;

use collog_color::{ColorType, Ctrl, Formatter, StyledText};
use termcolor::WriteColor;
use tracing::debug;

/// A value that can be written to a [`GatedStream`].
///
/// String-like values go through tag expansion, color modifiers switch the
/// sink's color, and plain values are written with their `Display` form.
pub trait LogValue {
    fn write_to<W: WriteColor + ?Sized>(&self, formatter: &Formatter, sink: &mut W) -> io::Result<()>;
}

impl LogValue for str {
    fn write_to<W: WriteColor + ?Sized>(&self, formatter: &Formatter, sink: &mut W) -> io::Result<()> {
        formatter.printf(sink, self)
    }
}

impl LogValue for String {
    fn write_to<W: WriteColor + ?Sized>(&self, formatter: &Formatter, sink: &mut W) -> io::Result<()> {
        formatter.printf(sink, self)
    }
}

impl LogValue for Cow<'_, str> {
    fn write_to<W: WriteColor + ?Sized>(&self, formatter: &Formatter, sink: &mut W) -> io::Result<()> {
        formatter.printf(sink, self)
    }
}

impl LogValue for ColorType {
    fn write_to<W: WriteColor + ?Sized>(&self, formatter: &Formatter, sink: &mut W) -> io::Result<()> {
        formatter.set_color(sink, *self)
    }
}

impl LogValue for Ctrl {
    fn write_to<W: WriteColor + ?Sized>(&self, formatter: &Formatter, sink: &mut W) -> io::Result<()> {
        match self {
            Ctrl::Reset => formatter.reset(sink),
        }
    }
}

impl LogValue for StyledText {
    fn write_to<W: WriteColor + ?Sized>(&self, formatter: &Formatter, sink: &mut W) -> io::Result<()> {
        formatter.print(sink, self)
    }
}

impl<T: LogValue + ?Sized> LogValue for &T {
    fn write_to<W: WriteColor + ?Sized>(&self, formatter: &Formatter, sink: &mut W) -> io::Result<()> {
        (**self).write_to(formatter, sink)
    }
}

macro_rules! display_value {
    ($($ty:ty),* $(,)?) => {
        $(
            impl LogValue for $ty {
                fn write_to<W: WriteColor + ?Sized>(&self, _: &Formatter, sink: &mut W) -> io::Result<()> {
                    write!(sink, "{}", self)
                }
            }
        )*
    };
}

display_value!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, char, bool);

/// Wrapper writing any `Display` value verbatim, without tag expansion
#[derive(Debug, Clone, Copy)]
pub struct Plain<T>(pub T);

/// Write `value` through its `Display` form, bypassing tag expansion
pub fn plain<T: Display>(value: T) -> Plain<T> {
    Plain(value)
}

impl<T: Display> LogValue for Plain<T> {
    fn write_to<W: WriteColor + ?Sized>(&self, _: &Formatter, sink: &mut W) -> io::Result<()> {
        write!(sink, "{}", self.0)
    }
}

/// Output stream that only reaches its sink while enabled.
///
/// A disabled stream never touches the sink or the formatter. Write
/// failures are swallowed; logging never fails the caller.
#[derive(Debug)]
pub struct GatedStream<W> {
    enabled: bool,
    formatter: Formatter,
    sink: W,
}

impl<W: WriteColor> GatedStream<W> {
    pub fn new(sink: W, enabled: bool) -> Self {
        Self {
            enabled,
            formatter: Formatter::default(),
            sink,
        }
    }

    pub fn with_formatter(mut self, formatter: Formatter) -> Self {
        self.formatter = formatter;
        self
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn formatter(&self) -> &Formatter {
        &self.formatter
    }

    /// Turn color codes on or off without affecting the gate
    pub fn set_color_enabled(&mut self, enabled: bool) {
        self.formatter.set_enabled(enabled);
    }

    /// Write `value` if enabled
    pub fn write<T: LogValue>(&mut self, value: T) -> &mut Self {
        self.emit(|formatter, sink| value.write_to(formatter, sink));
        self
    }

    pub fn newline(&mut self) -> &mut Self {
        self.write('\n')
    }

    pub fn carriage_return(&mut self) -> &mut Self {
        self.write('\r')
    }

    /// Run `output` against the sink and flush, only if enabled
    pub(crate) fn emit<F>(&mut self, output: F)
    where
        F: FnOnce(&Formatter, &mut W) -> io::Result<()>,
    {
        if !self.enabled {
            return;
        }
        let result = output(&self.formatter, &mut self.sink).and_then(|()| self.sink.flush());
        if let Err(err) = result {
            debug!(error = %err, "log sink write failed");
        }
    }

    pub fn sink(&self) -> &W {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut W {
        &mut self.sink
    }

    pub fn into_sink(self) -> W {
        self.sink
    }
}
