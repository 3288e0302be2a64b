//! Destinations for user-facing report text.

/// Accepts report lines in order. Any styling is the caller's concern.
pub trait OutputSink {
    fn write(&mut self, line: &str);
}

/// Writes report lines to stdout.
#[derive(Debug, Default)]
pub struct ConsoleSink;

impl OutputSink for ConsoleSink {
    fn write(&mut self, line: &str) {
        println!("{line}");
    }
}

/// Collects report lines in memory.
#[derive(Debug, Default)]
pub struct BufferSink {
    lines: Vec<String>,
}

impl BufferSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// All collected lines joined with newlines.
    pub fn contents(&self) -> String {
        self.lines.join("\n")
    }
}

impl OutputSink for BufferSink {
    fn write(&mut self, line: &str) {
        self.lines.push(line.to_string());
    }
}
