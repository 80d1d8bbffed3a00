use std::ops::Range;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use template_highlight_config::Config;
use template_highlight_engine::{Highlighter, NodePosition, Palette, RenderNode, caret};
use xi_rope::{Rope, delta::Builder};

/// Editor state for the terminal host.
///
/// The rope is the only copy of the text. `nodes` is the render-node list
/// from the last highlight cycle and is only valid while `last_edit` is
/// `None`; any edit marks it stale until the debounce window passes.
pub struct App {
    pub path: Option<PathBuf>,
    buffer: Rope,
    /// Caret as a byte offset into the buffer.
    caret: usize,
    highlighter: Highlighter,
    pub palette: Palette,
    debounce: Duration,
    nodes: Vec<RenderNode>,
    last_edit: Option<Instant>,
    pub status: String,
}

impl App {
    pub fn new(text: &str, path: Option<PathBuf>, config: &Config) -> Self {
        let mut app = Self {
            path,
            buffer: Rope::from(text),
            caret: text.len(),
            highlighter: config.highlighter(),
            palette: config.palette,
            debounce: config.debounce(),
            nodes: Vec::new(),
            last_edit: None,
            status: String::new(),
        };
        app.run_cycle();
        app
    }

    pub fn text(&self) -> String {
        self.buffer.to_string()
    }

    pub fn caret(&self) -> usize {
        self.caret
    }

    /// Nodes from the last cycle, or `None` while an edit is pending.
    pub fn nodes(&self) -> Option<&[RenderNode]> {
        match self.last_edit {
            None => Some(&self.nodes),
            Some(_) => None,
        }
    }

    /// The caret relative to the current nodes, if they are up to date.
    pub fn node_caret(&self) -> Option<NodePosition> {
        self.nodes().map(|nodes| caret::locate(nodes, self.caret))
    }

    pub fn insert(&mut self, s: &str) {
        let at = self.caret;
        self.replace(at..at, s);
        self.caret = at + s.len();
    }

    pub fn backspace(&mut self) {
        if let Some(prev) = self.prev_boundary() {
            self.replace(prev..self.caret, "");
            self.caret = prev;
        }
    }

    pub fn delete(&mut self) {
        if let Some(next) = self.next_boundary() {
            self.replace(self.caret..next, "");
        }
    }

    pub fn move_left(&mut self) {
        if let Some(prev) = self.prev_boundary() {
            self.caret = prev;
        }
    }

    pub fn move_right(&mut self) {
        if let Some(next) = self.next_boundary() {
            self.caret = next;
        }
    }

    pub fn move_line_start(&mut self) {
        let text = self.text();
        self.caret = text[..self.caret].rfind('\n').map_or(0, |i| i + 1);
    }

    pub fn move_line_end(&mut self) {
        let text = self.text();
        self.caret = text[self.caret..]
            .find('\n')
            .map_or(text.len(), |i| self.caret + i);
    }

    /// How long until the pending cycle is due, if one is pending.
    pub fn time_until_cycle(&self, now: Instant) -> Option<Duration> {
        self.last_edit
            .map(|at| (at + self.debounce).saturating_duration_since(now))
    }

    pub fn cycle_due(&self, now: Instant) -> bool {
        self.time_until_cycle(now) == Some(Duration::ZERO)
    }

    /// Re-highlights the buffer and restores the caret from the new nodes.
    pub fn run_cycle(&mut self) {
        let text = self.text();
        let cycle = self.highlighter.cycle(&text, self.caret);
        self.caret = caret::resolve(&cycle.nodes, cycle.caret);
        self.nodes = cycle.nodes;
        self.last_edit = None;
    }

    pub fn save(&mut self) -> Result<()> {
        let Some(path) = &self.path else {
            self.status = "No file to save to; start with a FILE argument".to_string();
            return Ok(());
        };
        std::fs::write(path, self.text())
            .with_context(|| format!("Failed to save {}", path.display()))?;
        self.status = format!("Saved {}", path.display());
        log::info!("saved {} byte(s) to {}", self.buffer.len(), path.display());
        Ok(())
    }

    fn replace(&mut self, range: Range<usize>, s: &str) {
        let mut builder = Builder::new(self.buffer.len());
        if s.is_empty() {
            builder.delete(range);
        } else {
            builder.replace(range, Rope::from(s));
        }
        let delta = builder.build();
        self.buffer = delta.apply(&self.buffer);
        self.last_edit = Some(Instant::now());
        self.status.clear();
    }

    fn prev_boundary(&self) -> Option<usize> {
        let text = self.text();
        text[..self.caret]
            .chars()
            .next_back()
            .map(|c| self.caret - c.len_utf8())
    }

    fn next_boundary(&self) -> Option<usize> {
        let text = self.text();
        text[self.caret..]
            .chars()
            .next()
            .map(|c| self.caret + c.len_utf8())
    }
}
