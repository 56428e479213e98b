//! Gallery resolution and the image viewer state machine.
//!
//! The viewer is opened with the live URL of the project being shown. The URL
//! is normalized and matched against every project's live URL; the matching
//! project's gallery images drive a paginated viewer.

use std::sync::LazyLock;

use regex::Regex;

use crate::project::ProjectRecord;

static SCHEME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^https?://").expect("valid regex"));

static WWW_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^www\.").expect("valid regex"));

/// Strip a leading `http://`/`https://`, then a leading `www.`.
///
/// # Examples
///
/// ```
/// use folio_core::gallery::normalize_url;
/// assert_eq!(normalize_url("https://www.example.com/app"), "example.com/app");
/// assert_eq!(normalize_url("example.com"), "example.com");
/// ```
pub fn normalize_url(url: &str) -> String {
    let without_scheme = SCHEME_RE.replace(url, "");
    WWW_RE.replace(&without_scheme, "").into_owned()
}

/// Gallery images of the project whose live URL matches `display_url`.
///
/// Unknown URLs and projects without a gallery both yield an empty slice;
/// callers treat that as "no gallery available".
pub fn resolve_gallery<'a, I>(records: I, display_url: &str) -> &'a [String]
where
    I: IntoIterator<Item = &'a ProjectRecord>,
{
    let wanted = normalize_url(display_url);
    let found = records.into_iter().find(|p| {
        p.live_url
            .as_deref()
            .is_some_and(|live| normalize_url(live) == wanted)
    });

    match found {
        Some(project) if !project.gallery_images.is_empty() => {
            tracing::debug!(project = %project.id, images = project.gallery_images.len(), "Gallery resolved");
            &project.gallery_images
        }
        _ => {
            tracing::debug!(url = %wanted, "No gallery for URL");
            &[]
        }
    }
}

// ---------------------------------------------------------------------------
// Viewer state machine
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewerState {
    Closed,
    Loading,
    Ready { index: usize },
    Empty,
}

/// Paginated image viewer.
///
/// ```text
/// Closed  --open-->            Loading
/// Loading --load(non-empty)--> Ready(0)
/// Loading --load(empty)-->     Empty
/// Ready(i) --next/previous-->  Ready(i ± 1 mod len)
/// *       --close-->           Closed
/// ```
///
/// Events that do not apply to the current state are ignored.
#[derive(Debug, Clone)]
pub struct GalleryViewer {
    state: ViewerState,
    images: Vec<String>,
}

impl Default for GalleryViewer {
    fn default() -> Self {
        Self::new()
    }
}

impl GalleryViewer {
    pub fn new() -> Self {
        Self {
            state: ViewerState::Closed,
            images: Vec::new(),
        }
    }

    pub fn state(&self) -> ViewerState {
        self.state
    }

    pub fn images(&self) -> &[String] {
        &self.images
    }

    /// Begin loading. Discards anything shown before.
    pub fn open(&mut self) {
        self.images.clear();
        self.state = ViewerState::Loading;
    }

    /// Deliver the resolved image list. Ignored unless loading.
    pub fn load(&mut self, images: Vec<String>) {
        if self.state != ViewerState::Loading {
            return;
        }
        self.state = if images.is_empty() {
            ViewerState::Empty
        } else {
            ViewerState::Ready { index: 0 }
        };
        self.images = images;
    }

    /// Open and resolve in one step against the project list.
    pub fn open_for<'a, I>(&mut self, records: I, display_url: &str)
    where
        I: IntoIterator<Item = &'a ProjectRecord>,
    {
        self.open();
        self.load(resolve_gallery(records, display_url).to_vec());
    }

    pub fn next(&mut self) {
        if let ViewerState::Ready { index } = self.state {
            self.state = ViewerState::Ready {
                index: (index + 1) % self.images.len(),
            };
        }
    }

    pub fn previous(&mut self) {
        if let ViewerState::Ready { index } = self.state {
            let len = self.images.len();
            self.state = ViewerState::Ready {
                index: (index + len - 1) % len,
            };
        }
    }

    /// Jump to a thumbnail. Out-of-range indices are ignored.
    pub fn go_to(&mut self, index: usize) {
        if matches!(self.state, ViewerState::Ready { .. }) && index < self.images.len() {
            self.state = ViewerState::Ready { index };
        }
    }

    pub fn close(&mut self) {
        self.state = ViewerState::Closed;
        self.images.clear();
    }

    /// The image on screen, if any.
    pub fn current_image(&self) -> Option<&str> {
        match self.state {
            ViewerState::Ready { index } => self.images.get(index).map(String::as_str),
            _ => None,
        }
    }
}
