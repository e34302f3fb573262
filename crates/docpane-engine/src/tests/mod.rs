//! Shared fixtures for unit tests: temp directories and in-memory hosts.

use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};
use tempfile::TempDir;

use crate::anchors::{
    AnchorNavigator, Clipboard, ClipboardError, Location, NavigatorOptions, ScrollBehavior,
    Viewport,
};
use crate::catalog::{CatalogOptions, CatalogResolver, Clock};
use crate::io::{ContentSource, SourceError};
use crate::viewer::{DocumentViewer, ViewerOptions};

/// Create a temporary docs directory for testing
pub fn create_test_docs_dir() -> TempDir {
    tempfile::tempdir().unwrap()
}

/// Create a test markdown file with content
pub fn create_test_file(docs_dir: &TempDir, filename: &str, content: &str) -> PathBuf {
    let file_path = docs_dir.path().join(filename);
    fs::write(&file_path, content).unwrap();
    file_path
}

/// In-memory content source listing files in insertion order.
#[derive(Default)]
pub struct FakeSource {
    files: Mutex<Vec<(String, String)>>,
    delays: Mutex<HashMap<String, Duration>>,
    listing_delay: Mutex<Option<Duration>>,
    failing: Mutex<HashSet<String>>,
    fail_listing: AtomicBool,
    list_calls: AtomicUsize,
}

impl FakeSource {
    pub fn with_files(files: &[(&str, &str)]) -> Self {
        let source = Self::default();
        for (name, text) in files {
            source.add_file(name, text);
        }
        source
    }

    pub fn add_file(&self, name: &str, text: &str) {
        self.files
            .lock()
            .unwrap()
            .push((name.to_string(), text.to_string()));
    }

    pub fn delay_fetch(&self, name: &str, delay: Duration) {
        self.delays.lock().unwrap().insert(name.to_string(), delay);
    }

    /// Holds back the next `list_files` call only; later calls answer at once.
    pub fn delay_next_listing(&self, delay: Duration) {
        *self.listing_delay.lock().unwrap() = Some(delay);
    }

    pub fn fail_fetch(&self, name: &str) {
        self.failing.lock().unwrap().insert(name.to_string());
    }

    pub fn fail_listing(&self, fail: bool) {
        self.fail_listing.store(fail, Ordering::SeqCst);
    }

    pub fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }
}

impl ContentSource for FakeSource {
    async fn list_files(&self) -> Result<Vec<String>, SourceError> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        let delay = self.listing_delay.lock().unwrap().take();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        if self.fail_listing.load(Ordering::SeqCst) {
            return Err(SourceError::Unavailable("listing disabled".to_string()));
        }
        let files = self.files.lock().unwrap();
        Ok(files.iter().map(|(name, _)| name.clone()).collect())
    }

    async fn fetch_text(&self, filename: &str) -> Result<String, SourceError> {
        let delay = self.delays.lock().unwrap().get(filename).copied();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        if self.failing.lock().unwrap().contains(filename) {
            return Err(SourceError::Unavailable(format!("{filename} unreachable")));
        }
        let files = self.files.lock().unwrap();
        files
            .iter()
            .find(|(name, _)| name == filename)
            .map(|(_, text)| text.clone())
            .ok_or_else(|| SourceError::NotFound(filename.to_string()))
    }
}

/// Records scrolls; element positions are placed by the test.
#[derive(Default)]
pub struct FakeViewport {
    anchors: Mutex<HashMap<String, f64>>,
    offset: Mutex<f64>,
    scrolls: Mutex<Vec<(f64, ScrollBehavior)>>,
}

impl FakeViewport {
    pub fn with_anchors(anchors: &[(&str, f64)]) -> Self {
        let viewport = Self::default();
        for (id, top) in anchors {
            viewport.place(id, *top);
        }
        viewport
    }

    pub fn place(&self, anchor_id: &str, top: f64) {
        self.anchors
            .lock()
            .unwrap()
            .insert(anchor_id.to_string(), top);
    }

    pub fn set_offset(&self, offset: f64) {
        *self.offset.lock().unwrap() = offset;
    }

    pub fn scrolls(&self) -> Vec<(f64, ScrollBehavior)> {
        self.scrolls.lock().unwrap().clone()
    }
}

impl Viewport for FakeViewport {
    fn locate(&self, anchor_id: &str) -> Option<f64> {
        self.anchors.lock().unwrap().get(anchor_id).copied()
    }

    fn scroll_offset(&self) -> f64 {
        *self.offset.lock().unwrap()
    }

    fn scroll_to(&self, top: f64, behavior: ScrollBehavior) {
        self.scrolls.lock().unwrap().push((top, behavior));
    }
}

pub struct FakeLocation {
    base_url: String,
    fragment: Mutex<Option<String>>,
}

impl Default for FakeLocation {
    fn default() -> Self {
        Self::at("https://docs.example/docs")
    }
}

impl FakeLocation {
    pub fn at(base_url: &str) -> Self {
        Self {
            base_url: base_url.to_string(),
            fragment: Mutex::new(None),
        }
    }

    pub fn with_fragment(anchor_id: &str) -> Self {
        let location = Self::default();
        location.set_fragment(anchor_id);
        location
    }
}

impl Location for FakeLocation {
    fn fragment(&self) -> Option<String> {
        self.fragment.lock().unwrap().clone()
    }

    fn set_fragment(&self, anchor_id: &str) {
        *self.fragment.lock().unwrap() = Some(anchor_id.to_string());
    }

    fn base_url(&self) -> String {
        self.base_url.clone()
    }
}

#[derive(Default)]
pub struct FakeClipboard {
    contents: Mutex<Vec<String>>,
    fail: bool,
}

impl FakeClipboard {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn contents(&self) -> Vec<String> {
        self.contents.lock().unwrap().clone()
    }
}

impl Clipboard for FakeClipboard {
    fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        if self.fail {
            return Err(ClipboardError::Rejected("permission denied".to_string()));
        }
        self.contents.lock().unwrap().push(text.to_string());
        Ok(())
    }
}

/// Clock that only moves when told to.
pub struct ManualClock {
    start: Instant,
    elapsed: Mutex<Duration>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
            elapsed: Mutex::new(Duration::ZERO),
        }
    }

    pub fn advance(&self, by: Duration) {
        *self.elapsed.lock().unwrap() += by;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.start + *self.elapsed.lock().unwrap()
    }
}

/// A viewer over `source` with fake host seams and default timings.
pub fn test_viewer(
    source: FakeSource,
) -> (
    DocumentViewer<FakeSource>,
    Arc<FakeViewport>,
    Arc<FakeLocation>,
) {
    let viewport = Arc::new(FakeViewport::default());
    let location = Arc::new(FakeLocation::default());
    let navigator = AnchorNavigator::new(
        viewport.clone(),
        location.clone(),
        NavigatorOptions::default(),
    );
    let catalog = CatalogResolver::new(Arc::new(source), CatalogOptions::default());
    let viewer = DocumentViewer::new(catalog, navigator, ViewerOptions::default());
    (viewer, viewport, location)
}
