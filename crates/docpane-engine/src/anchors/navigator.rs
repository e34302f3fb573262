use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use tokio::task::JoinHandle;

use super::host::{Clipboard, Location, ScrollBehavior, Viewport, normalize_fragment};
use super::slug::permalink;
use crate::parsing::inline::kinds::Link;

/// What caused a scroll attempt to be scheduled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScrollTrigger {
    Mount,
    FragmentChange,
    ContentAvailable,
}

/// Result of one scroll attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollOutcome {
    Scrolled,
    /// The fragment names no rendered element (yet).
    Missed,
    NoFragment,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NavigatorOptions {
    /// Space reserved for a fixed header above the content.
    pub header_offset: f64,
    pub mount_delay: Duration,
    pub fragment_delay: Duration,
    pub content_delay: Duration,
    pub behavior: ScrollBehavior,
}

impl Default for NavigatorOptions {
    fn default() -> Self {
        Self {
            header_offset: 90.0,
            mount_delay: Duration::from_millis(100),
            fragment_delay: Duration::from_millis(100),
            content_delay: Duration::from_millis(150),
            behavior: ScrollBehavior::Smooth,
        }
    }
}

/// Outcome of [`AnchorNavigator::copy_permalink`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PermalinkCopy {
    pub url: String,
    pub copied: bool,
}

/// What the host should do with a followed link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkAction {
    /// In-page jump; the fragment has been set and an attempt scheduled.
    Anchor(String),
    /// Anything else is left to the host.
    External(String),
}

struct Shared {
    viewport: Arc<dyn Viewport>,
    location: Arc<dyn Location>,
    options: NavigatorOptions,
}

impl Shared {
    fn scroll_to_fragment(&self, trigger: ScrollTrigger) -> ScrollOutcome {
        let Some(anchor_id) = normalize_fragment(self.location.fragment()) else {
            return ScrollOutcome::NoFragment;
        };
        let Some(top) = self.viewport.locate(&anchor_id) else {
            log::debug!("{trigger:?}: no element for #{anchor_id}");
            return ScrollOutcome::Missed;
        };
        let target = top + self.viewport.scroll_offset() - self.options.header_offset;
        self.viewport.scroll_to(target, self.options.behavior);
        ScrollOutcome::Scrolled
    }
}

struct Pending {
    trigger: ScrollTrigger,
    handle: JoinHandle<ScrollOutcome>,
}

/// Reconciles "show section X" with content that may still be loading.
///
/// Every trigger schedules an independent delayed attempt as a Tokio task.
/// Attempts are retained so they can be cancelled, e.g. when the document they
/// were waiting for is replaced. Must be driven from inside a Tokio runtime.
pub struct AnchorNavigator {
    shared: Arc<Shared>,
    pending: Mutex<Vec<Pending>>,
}

impl AnchorNavigator {
    pub fn new(
        viewport: Arc<dyn Viewport>,
        location: Arc<dyn Location>,
        options: NavigatorOptions,
    ) -> Self {
        Self {
            shared: Arc::new(Shared {
                viewport,
                location,
                options,
            }),
            pending: Mutex::new(vec![]),
        }
    }

    pub fn options(&self) -> &NavigatorOptions {
        &self.shared.options
    }

    pub fn on_mount(&self) {
        self.schedule(ScrollTrigger::Mount, self.shared.options.mount_delay);
    }

    pub fn on_fragment_change(&self) {
        self.schedule(
            ScrollTrigger::FragmentChange,
            self.shared.options.fragment_delay,
        );
    }

    pub fn on_content_available(&self) {
        self.schedule(
            ScrollTrigger::ContentAvailable,
            self.shared.options.content_delay,
        );
    }

    /// Copies the permalink for `anchor_id`, then moves the view to it.
    ///
    /// A clipboard failure is logged and reported, never propagated; the
    /// fragment is set either way and exactly one fragment-change attempt is
    /// scheduled.
    pub fn copy_permalink(&self, anchor_id: &str, clipboard: &dyn Clipboard) -> PermalinkCopy {
        let url = permalink(&self.shared.location.base_url(), anchor_id);
        let copied = match clipboard.write_text(&url) {
            Ok(()) => true,
            Err(e) => {
                log::warn!("Failed to copy link: {e}");
                false
            }
        };
        self.shared.location.set_fragment(anchor_id);
        self.on_fragment_change();
        PermalinkCopy { url, copied }
    }

    /// Routes a link activated in the rendered document.
    pub fn follow_link(&self, href: &str) -> LinkAction {
        if !Link::is_anchor(href) {
            return LinkAction::External(href.to_string());
        }
        let anchor_id = href.strip_prefix(Link::ANCHOR_PREFIX).unwrap_or(href);
        self.shared.location.set_fragment(anchor_id);
        self.on_fragment_change();
        LinkAction::Anchor(anchor_id.to_string())
    }

    /// Points the location at `anchor_id` without scheduling an attempt.
    ///
    /// Used when the heading lives in a document that is about to be loaded;
    /// the content-available attempt picks it up.
    pub fn set_fragment(&self, anchor_id: &str) {
        self.shared.location.set_fragment(anchor_id);
    }

    /// Aborts pending attempts scheduled by `trigger`.
    pub fn cancel(&self, trigger: ScrollTrigger) {
        let mut pending = self.pending.lock().unwrap_or_else(PoisonError::into_inner);
        pending.retain(|p| {
            if p.trigger == trigger {
                p.handle.abort();
                false
            } else {
                true
            }
        });
    }

    pub fn cancel_all(&self) {
        let mut pending = self.pending.lock().unwrap_or_else(PoisonError::into_inner);
        for p in pending.drain(..) {
            p.handle.abort();
        }
    }

    /// Attempts scheduled and not yet finished or cancelled.
    pub fn pending(&self) -> usize {
        let mut pending = self.pending.lock().unwrap_or_else(PoisonError::into_inner);
        pending.retain(|p| !p.handle.is_finished());
        pending.len()
    }

    fn schedule(&self, trigger: ScrollTrigger, delay: Duration) {
        let Ok(runtime) = tokio::runtime::Handle::try_current() else {
            log::warn!("{trigger:?} scroll attempt dropped: no async runtime");
            return;
        };
        let shared = Arc::clone(&self.shared);
        let handle = runtime.spawn(async move {
            tokio::time::sleep(delay).await;
            shared.scroll_to_fragment(trigger)
        });

        let mut pending = self.pending.lock().unwrap_or_else(PoisonError::into_inner);
        pending.retain(|p| !p.handle.is_finished());
        pending.push(Pending { trigger, handle });
    }
}

impl Drop for AnchorNavigator {
    fn drop(&mut self) {
        self.cancel_all();
    }
}
