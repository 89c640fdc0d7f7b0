//! Webview-backed implementations of the `motion` collaborators.
//!
//! Scroll, resize and intersection events come in through long-lived
//! `document::eval` scripts; section elements are located through their
//! mounted handles.

use dioxus::html::ScrollBehavior;
use dioxus::prelude::*;
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use tracing::{debug, warn};

use crate::motion::{
    AnchorResolver, IntersectionEntry, IntersectionSource, RevealCoordinator, RevealOptions,
    ScrollFeed, SectionId, ViewportEvent,
};

/// Shared scroll feed handed to components through context.
#[derive(Clone, Default)]
pub struct SharedFeed(pub Rc<RefCell<ScrollFeed>>);

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "snake_case")]
enum FeedKind {
    Scroll,
    Resize,
}

#[derive(Debug, Clone, Copy, Deserialize)]
struct FeedMessage {
    kind: FeedKind,
    y: f64,
}

impl SharedFeed {
    /// Pump messages from the feed script until the channel closes.
    pub async fn pump(&self, mut eval: document::Eval) {
        loop {
            match eval.recv::<FeedMessage>().await {
                Ok(message) => {
                    let mut feed = self.0.borrow_mut();
                    feed.publish(ViewportEvent::Scrolled(message.y));
                    if matches!(message.kind, FeedKind::Resize) {
                        feed.publish(ViewportEvent::Resized);
                    }
                }
                Err(err) => {
                    warn!("scroll feed channel closed: {err:?}");
                    break;
                }
            }
        }
    }
}

#[derive(Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
enum RevealCommand<'a> {
    Observe {
        id: &'a str,
        threshold: f64,
        #[serde(rename = "rootMargin")]
        root_margin: String,
    },
    Release {
        id: &'a str,
    },
}

#[derive(Debug, Clone, Deserialize)]
struct RevealReport {
    id: String,
    intersecting: bool,
    ratio: f64,
}

/// Drives one IntersectionObserver per region inside the webview.
pub struct DomIntersectionSource {
    eval: document::Eval,
}

impl DomIntersectionSource {
    pub fn new(eval: document::Eval) -> Self {
        Self { eval }
    }
}

impl IntersectionSource for DomIntersectionSource {
    fn observe(&mut self, region: &str, options: &RevealOptions) {
        let command = RevealCommand::Observe {
            id: region,
            threshold: options.threshold(),
            root_margin: options.root_margin_css(),
        };
        if let Err(err) = self.eval.send(command) {
            warn!(region, "failed to register reveal observer: {err:?}");
        }
    }

    fn release(&mut self, region: &str) {
        if let Err(err) = self.eval.send(RevealCommand::Release { id: region }) {
            debug!(region, "failed to release reveal observer: {err:?}");
        }
    }
}

/// Shared reveal coordinator handed to sections through context.
#[derive(Clone)]
pub struct SharedReveal(pub Rc<RefCell<RevealCoordinator<DomIntersectionSource>>>);

impl SharedReveal {
    pub fn new(eval: document::Eval) -> Self {
        Self(Rc::new(RefCell::new(RevealCoordinator::new(
            DomIntersectionSource::new(eval),
        ))))
    }

    /// Route intersection reports from `eval` into the coordinator.
    pub async fn pump(&self, mut eval: document::Eval) {
        loop {
            match eval.recv::<RevealReport>().await {
                Ok(report) => {
                    let entry = IntersectionEntry {
                        is_intersecting: report.intersecting,
                        ratio: report.ratio,
                    };
                    self.0.borrow_mut().deliver(&report.id, entry);
                }
                Err(err) => {
                    warn!("reveal channel closed: {err:?}");
                    break;
                }
            }
        }
    }
}

/// Mounted section roots, keyed by anchor.
#[derive(Clone, Default)]
pub struct SectionRegistry(Rc<RefCell<HashMap<SectionId, Rc<MountedData>>>>);

impl SectionRegistry {
    pub fn attach(&self, section: SectionId, element: Rc<MountedData>) {
        self.0.borrow_mut().insert(section, element);
    }

    pub fn detach(&self, section: SectionId) {
        self.0.borrow_mut().remove(&section);
    }
}

impl AnchorResolver for SectionRegistry {
    fn scroll_into_view(&mut self, section: SectionId) -> bool {
        let Some(element) = self.0.borrow().get(&section).cloned() else {
            return false;
        };
        spawn(async move {
            if let Err(err) = element.scroll_to(ScrollBehavior::Smooth).await {
                debug!(%section, "smooth scroll failed: {err:?}");
            }
        });
        true
    }
}
