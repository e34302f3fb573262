use std::io::Write;
use std::process::{Child, Command, Stdio};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use docpane_engine::{Clipboard, ClipboardError, Location, ScrollBehavior, Viewport};
use ratatui::text::Line;

use crate::render::Rendered;

/// The rendered document as the terminal shows it, one row per line.
#[derive(Debug, Default)]
pub struct ContentPane {
    lines: Vec<Line<'static>>,
    anchors: Vec<(String, usize)>,
    scroll: usize,
    height: usize,
    fragment: Option<String>,
    base_url: String,
}

impl ContentPane {
    /// Replaces the pane contents and resets scrolling; the fragment is kept.
    pub fn show(&mut self, rendered: Rendered, base_url: String) {
        self.lines = rendered.lines;
        self.anchors = rendered.anchors;
        self.scroll = 0;
        self.base_url = base_url;
    }

    pub fn show_message(&mut self, message: Vec<String>) {
        self.lines = message.into_iter().map(Line::from).collect();
        self.anchors.clear();
        self.scroll = 0;
    }

    pub fn visible_lines(&self) -> Vec<Line<'static>> {
        self.lines
            .iter()
            .skip(self.scroll)
            .take(self.height.max(1))
            .cloned()
            .collect()
    }

    pub fn scroll(&self) -> usize {
        self.scroll
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn set_height(&mut self, height: usize) {
        self.height = height;
    }

    pub fn scroll_by(&mut self, delta: isize) {
        let target = self.scroll.saturating_add_signed(delta);
        self.scroll = target.min(self.max_scroll());
    }

    /// First heading that starts below the rows covered by `header_offset`,
    /// wrapping to the top of the document.
    pub fn next_heading(&self, header_offset: usize) -> Option<&str> {
        let top = self.scroll + header_offset;
        self.anchors
            .iter()
            .find(|(_, row)| *row > top)
            .or_else(|| self.anchors.first())
            .map(|(id, _)| id.as_str())
    }

    fn max_scroll(&self) -> usize {
        self.lines.len().saturating_sub(1)
    }
}

/// Shared handle the navigator scrolls through.
#[derive(Debug, Clone, Default)]
pub struct PaneHost(Arc<Mutex<ContentPane>>);

impl PaneHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lock(&self) -> MutexGuard<'_, ContentPane> {
        self.0.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Viewport for PaneHost {
    fn locate(&self, anchor_id: &str) -> Option<f64> {
        let pane = self.lock();
        pane.anchors
            .iter()
            .find(|(id, _)| id == anchor_id)
            .map(|(_, row)| *row as f64 - pane.scroll as f64)
    }

    fn scroll_offset(&self) -> f64 {
        self.lock().scroll as f64
    }

    // Terminal rows cannot animate, so both behaviours jump.
    fn scroll_to(&self, top: f64, _behavior: ScrollBehavior) {
        let mut pane = self.lock();
        let row = top.round().max(0.0) as usize;
        pane.scroll = row.min(pane.max_scroll());
    }
}

impl Location for PaneHost {
    fn fragment(&self) -> Option<String> {
        self.lock().fragment.clone()
    }

    fn set_fragment(&self, anchor_id: &str) {
        self.lock().fragment = Some(anchor_id.to_string());
    }

    fn base_url(&self) -> String {
        self.lock().base_url.clone()
    }
}

const CLIPBOARD_COMMANDS: [(&str, &[&str]); 3] = [
    ("wl-copy", &[]),
    ("xclip", &["-selection", "clipboard"]),
    ("pbcopy", &[]),
];

/// Copies through whichever clipboard command is installed.
#[derive(Debug, Default)]
pub struct SystemClipboard;

impl Clipboard for SystemClipboard {
    fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        for (program, args) in CLIPBOARD_COMMANDS {
            let spawned = Command::new(program)
                .args(args)
                .stdin(Stdio::piped())
                .stdout(Stdio::null())
                .stderr(Stdio::null())
                .spawn();
            let mut child = match spawned {
                Ok(child) => child,
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => continue,
                Err(e) => return Err(ClipboardError::Unavailable(e.to_string())),
            };

            return pipe_to(program, &mut child, text);
        }

        Err(ClipboardError::Unavailable(
            "no clipboard command found".to_string(),
        ))
    }
}

/// Writes `text` to the child's stdin and waits for it; the child is reaped
/// even when the write fails.
fn pipe_to(program: &str, child: &mut Child, text: &str) -> Result<(), ClipboardError> {
    let written = match child.stdin.take() {
        // stdin is dropped at the end of the arm, closing the pipe
        Some(mut stdin) => stdin.write_all(text.as_bytes()),
        None => Ok(()),
    };
    let status = child.wait();

    written.map_err(|e| ClipboardError::Rejected(format!("{program}: {e}")))?;
    let status = status.map_err(|e| ClipboardError::Rejected(format!("{program}: {e}")))?;
    if status.success() {
        Ok(())
    } else {
        Err(ClipboardError::Rejected(format!(
            "{program} exited with {status}"
        )))
    }
}
