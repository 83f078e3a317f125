//! Header-prefixed color log

use std::io;

use collog_color::{ColorMode, Formatter, StyledText, Target};
use serde::{Deserialize, Serialize};
use termcolor::{StandardStream, WriteColor};

use crate::config::LogConfig;
use crate::stream::{GatedStream, LogValue};

/// Which entry points prefix their output with the header
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HeaderPolicy {
    /// Every `write` and every `print`-family call is headered
    #[default]
    EveryWrite,
    /// `write` streams without a header; only single-shot prints
    /// (`print`, severity printers, progress) are headered
    PrintOnly,
}

/// A gated color log that prefixes each logical line with a fixed header.
///
/// The header is written in a neutral style: the sink's color is reset
/// before and after it, so neither earlier writes nor header tags leak
/// into the payload.
#[derive(Debug)]
pub struct ColorLog<W> {
    header: String,
    policy: HeaderPolicy,
    stream: GatedStream<W>,
}

impl ColorLog<StandardStream> {
    /// Log to stderr
    pub fn new(header: impl Into<String>, enabled: bool) -> Self {
        Self::with_target(header, enabled, Target::Stderr)
    }

    /// Log to the given console stream, coloring only on capable terminals
    pub fn with_target(header: impl Into<String>, enabled: bool, target: Target) -> Self {
        let mode = ColorMode::Auto;
        Self::with_sink(header, enabled, target.stream(mode))
            .with_formatter(Formatter::new(mode.resolve(target)))
    }

    pub fn from_config(config: &LogConfig) -> Self {
        Self::with_sink(
            config.header.clone(),
            config.enabled,
            config.target.stream(config.color),
        )
        .with_policy(config.header_policy)
        .with_formatter(Formatter::new(config.color_enabled()))
    }
}

impl<W: WriteColor> ColorLog<W> {
    /// Log to an arbitrary color sink
    pub fn with_sink(header: impl Into<String>, enabled: bool, sink: W) -> Self {
        Self {
            header: header.into(),
            policy: HeaderPolicy::default(),
            stream: GatedStream::new(sink, enabled),
        }
    }

    pub fn with_policy(mut self, policy: HeaderPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_formatter(mut self, formatter: Formatter) -> Self {
        self.stream = self.stream.with_formatter(formatter);
        self
    }

    pub fn header(&self) -> &str {
        &self.header
    }

    pub fn policy(&self) -> HeaderPolicy {
        self.policy
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.stream.set_enabled(enabled);
    }

    pub fn is_enabled(&self) -> bool {
        self.stream.is_enabled()
    }

    pub fn set_color_enabled(&mut self, enabled: bool) {
        self.stream.set_color_enabled(enabled);
    }

    /// Write the header followed by `value`.
    ///
    /// The returned stream continues the same line without repeating the
    /// header. Under [`HeaderPolicy::PrintOnly`] the header is omitted.
    pub fn write<T: LogValue>(&mut self, value: T) -> &mut GatedStream<W> {
        let headered = self.policy == HeaderPolicy::EveryWrite;
        self.emit_line(headered, |formatter, sink| value.write_to(formatter, sink));
        &mut self.stream
    }

    /// Write the header followed by `message`, with tags expanded
    pub fn print(&mut self, message: &str) {
        self.emit_line(true, |formatter, sink| formatter.printf(sink, message));
    }

    /// Write the header followed by a styled buffer
    pub fn print_styled(&mut self, styled: &StyledText) {
        self.emit_line(true, |formatter, sink| formatter.print(sink, styled));
    }

    /// Headerless newline
    pub fn newline(&mut self) {
        self.stream.newline();
    }

    /// Headerless carriage return
    pub fn carriage_return(&mut self) {
        self.stream.carriage_return();
    }

    /// The continuation stream, which never writes the header
    pub fn stream(&self) -> &GatedStream<W> {
        &self.stream
    }

    pub fn stream_mut(&mut self) -> &mut GatedStream<W> {
        &mut self.stream
    }

    pub fn sink(&self) -> &W {
        self.stream.sink()
    }

    pub fn into_sink(self) -> W {
        self.stream.into_sink()
    }

    fn emit_line<F>(&mut self, headered: bool, payload: F)
    where
        F: FnOnce(&Formatter, &mut W) -> io::Result<()>,
    {
        let header = self.header.as_str();
        self.stream.emit(|formatter, sink| {
            if headered {
                write_header(formatter, sink, header)?;
            }
            payload(formatter, sink)
        });
    }
}

fn write_header<W: WriteColor + ?Sized>(
    formatter: &Formatter,
    sink: &mut W,
    header: &str,
) -> io::Result<()> {
    if header.is_empty() {
        return Ok(());
    }
    formatter.reset(sink)?;
    formatter.printf(sink, header)?;
    formatter.reset(sink)
}

#[cfg(test)]
mod tests {
    use super::*;
    use collog_color::{ColorType, Ctrl};
    use termcolor::Buffer;

    fn plain_log(header: &str) -> ColorLog<Buffer> {
        ColorLog::with_sink(header, true, Buffer::no_color())
    }

    fn output(log: ColorLog<Buffer>) -> String {
        String::from_utf8(log.into_sink().into_inner()).unwrap()
    }

    #[test]
    fn test_header_per_write() {
        let mut log = plain_log("LOG NAME ");
        log.write("test: ").write("OK\n");
        log.write("test: ").write("ERROR\n");
        assert_eq!(output(log), "LOG NAME test: OK\nLOG NAME test: ERROR\n");
    }

    #[test]
    fn test_stream_continues_without_header() {
        let mut log = plain_log("[app] ");
        log.write("{+white}message {+cyan}with header ");
        log.stream_mut()
            .write("{+white}and message {+yellow}without header{}\n");
        assert_eq!(
            output(log),
            "[app] message with header and message without header\n"
        );
    }

    #[test]
    fn test_print_only_policy() {
        let mut log = plain_log("H ").with_policy(HeaderPolicy::PrintOnly);
        log.write("streamed ");
        log.print("printed\n");
        assert_eq!(output(log), "streamed H printed\n");
    }

    #[test]
    fn test_disabled_log_is_silent() {
        let mut log = ColorLog::with_sink("H ", false, Buffer::ansi());
        log.write("x").write(1).write(ColorType::Red).write(Ctrl::Reset);
        log.print("y");
        log.newline();
        log.carriage_return();
        assert!(output(log).is_empty());
    }

    #[test]
    fn test_empty_header() {
        let mut log = plain_log("");
        log.print("bare");
        assert_eq!(output(log), "bare");
    }

    #[test]
    fn test_header_tags_are_expanded() {
        let mut log = plain_log("{+magenta}[svc]{} ");
        log.print("up\n");
        assert_eq!(output(log), "[svc] up\n");
    }

    #[test]
    fn test_header_with_malformed_tag_keeps_good_tags() {
        let mut log = ColorLog::with_sink("{svc} {+cyan}[app]{} ", true, Buffer::ansi());
        log.set_color_enabled(false);
        log.print("up\n");
        assert_eq!(output(log), "{svc} [app] up\n");
    }

    #[test]
    fn test_header_is_reset_around() {
        let mut log = ColorLog::with_sink("H", true, Buffer::ansi());
        log.write(ColorType::Cyan);
        let out = output(log);
        // reset, header, reset, then the payload's color
        assert!(out.starts_with("\x1b[0mH\x1b[0m\x1b["));
    }

    #[test]
    fn test_newline_and_carriage_return_are_headerless() {
        let mut log = plain_log("H ");
        log.newline();
        log.carriage_return();
        assert_eq!(output(log), "\n\r");
    }
}
