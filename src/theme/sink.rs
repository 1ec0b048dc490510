//! Page title sinks

use std::fmt;

/// Receives the page title (the browser tab title) when it changes
pub trait PageTitleSink {
    fn set_page_title(&mut self, title: &str);
}

impl<S: PageTitleSink + ?Sized> PageTitleSink for &mut S {
    fn set_page_title(&mut self, title: &str) {
        (**self).set_page_title(title)
    }
}

/// In-memory stand-in for the document title
#[derive(Debug, Clone, Default)]
pub struct DocumentTitle {
    current: String,
    writes: usize,
}

impl DocumentTitle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current title
    pub fn get(&self) -> &str {
        &self.current
    }

    /// Number of times the title has been written
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl PageTitleSink for DocumentTitle {
    fn set_page_title(&mut self, title: &str) {
        self.current.clear();
        self.current.push_str(title);
        self.writes += 1;
    }
}

impl fmt::Display for DocumentTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.current)
    }
}

/// Reports page title changes as tracing events
#[derive(Debug, Clone, Copy, Default)]
pub struct LogTitle;

impl PageTitleSink for LogTitle {
    fn set_page_title(&mut self, title: &str) {
        tracing::info!(page_title = %title, "Page title updated");
    }
}

/// Forwards a title to the sink only when it differs from the last one seen
#[derive(Debug)]
pub struct TitleSync<S> {
    sink: S,
    last: Option<String>,
}

impl<S: PageTitleSink> TitleSync<S> {
    pub fn new(sink: S) -> Self {
        Self { sink, last: None }
    }

    /// Record the raw title of a finished render. Returns true when the
    /// sink was written.
    pub fn commit(&mut self, raw_title: &str) -> bool {
        if self.last.as_deref() == Some(raw_title) {
            return false;
        }
        let title = super::page_title(raw_title);
        tracing::debug!(raw = %raw_title, page_title = %title, "Syncing page title");
        self.sink.set_page_title(&title);
        self.last = Some(raw_title.to_string());
        true
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }
}
