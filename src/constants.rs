//! Shared UI constants: palette, typography, reveal tuning and bridge scripts.

// =============================================================================
// COLOR SCHEME - Navy and Gold
// =============================================================================
pub const NAVY_900: &str = "#0d1b2a";
pub const NAVY_800: &str = "#1b263b";

pub const GOLD_500: &str = "#c9b037";
pub const GOLD_400: &str = "#d4c45a";

pub const CREAM: &str = "#fdfcf8";
pub const LIGHT: &str = "#e8e6e1";
pub const WHITE: &str = "#ffffff";

pub const TEXT_ON_DARK: &str = "rgba(255, 255, 255, 0.8)";
pub const TEXT_ON_DARK_MUTED: &str = "rgba(255, 255, 255, 0.5)";
pub const TEXT_BODY: &str = "rgba(13, 27, 42, 0.8)";
pub const TEXT_GRAY: &str = "#6b7280";

pub const WHATSAPP_GREEN: &str = "#25D366";
pub const TELEGRAM_BLUE: &str = "#0088cc";

pub const FONT_SERIF: &str = "'Cormorant Garamond', serif";
pub const FONT_SANS: &str = "Inter, sans-serif";

// =============================================================================
// REVEAL TUNING (threshold, root margin in px)
// =============================================================================
pub const REVEAL_ABOUT: (f64, Option<f64>) = (0.2, Some(50.0));
pub const REVEAL_PRACTICE_AREAS: (f64, Option<f64>) = (0.15, Some(50.0));
pub const REVEAL_TEAM: (f64, Option<f64>) = (0.15, Some(50.0));
pub const REVEAL_TESTIMONIALS: (f64, Option<f64>) = (0.1, Some(50.0));
pub const REVEAL_CONTACT: (f64, Option<f64>) = (0.15, Some(50.0));
pub const REVEAL_FOOTER: (f64, Option<f64>) = (0.2, None);

pub const SECTION_MAX_WIDTH: &str = "72rem";
pub const SECTION_PADDING: &str = "7rem 2rem";

// =============================================================================
// BRIDGE SCRIPTS
// =============================================================================

/// Single passive listener that publishes the scroll offset on every scroll
/// and resize event.
pub const SCROLL_FEED_SCRIPT: &str = r#"
function publish(kind) {
    dioxus.send({ kind: kind, y: window.scrollY || 0 });
}

window.addEventListener("scroll", () => publish("scroll"), { passive: true });
window.addEventListener("resize", () => publish("resize"), { passive: true });
publish("scroll");
await new Promise(() => {});
"#;

/// One IntersectionObserver per observed region. Receives observe/release
/// commands and reports every entry back.
pub const REVEAL_OBSERVER_SCRIPT: &str = r#"
const observers = new Map();
const wanted = new Set();

function attach(msg, attempts) {
    if (!wanted.has(msg.id)) {
        return;
    }
    const el = document.getElementById(msg.id);
    if (!el) {
        if (attempts < 50) {
            setTimeout(() => attach(msg, attempts + 1), 100);
        }
        return;
    }
    const previous = observers.get(msg.id);
    if (previous) {
        previous.disconnect();
    }
    const observer = new IntersectionObserver((entries) => {
        for (const entry of entries) {
            dioxus.send({
                id: msg.id,
                intersecting: entry.isIntersecting,
                ratio: entry.intersectionRatio
            });
        }
    }, { threshold: msg.threshold, rootMargin: msg.rootMargin });
    observer.observe(el);
    observers.set(msg.id, observer);
}

function release(id) {
    wanted.delete(id);
    const observer = observers.get(id);
    if (observer) {
        observer.disconnect();
        observers.delete(id);
    }
}

while (true) {
    const msg = await dioxus.recv();
    if (!msg) {
        continue;
    }
    if (msg.kind === "observe") {
        wanted.add(msg.id);
        attach(msg, 0);
    } else if (msg.kind === "release") {
        release(msg.id);
    }
}
"#;
