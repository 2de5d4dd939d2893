//! Hovercard instance model
//!
//! Exactly one hovercard exists process-wide. Its lifecycle is a
//! two-state machine:
//!
//! ```text
//! Hidden ──(present)──→ Showing ──(dismiss)──→ Hidden
//!                        │  ↑
//!                        └──┘ (present: newer content replaces older)
//! ```
//!
//! Hover fetches race: a slow response for an old hover must not
//! overwrite a fresher hover's content. Callers take a [`RequestToken`]
//! before fetching and present with it; stale tokens are ignored.

use serde::{Deserialize, Serialize};

/// Cursor offset so the card does not sit under the pointer
const ANCHOR_OFFSET: i32 = 12;

/// Minimum gap kept between the card and the viewport edges
const VIEWPORT_PAD: i32 = 16;

/// A screen coordinate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Point {
    /// Horizontal position in px
    pub x: i32,
    /// Vertical position in px
    pub y: i32,
}

/// Measured card dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardSize {
    /// Width in px
    pub width: i32,
    /// Height in px
    pub height: i32,
}

/// Visible viewport dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    /// Width in px
    pub width: i32,
    /// Height in px
    pub height: i32,
}

/// Hovercard visibility state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HovercardState {
    /// No card shown
    Hidden,
    /// Card visible with current content
    Showing,
}

/// Proof of a hover request's recency
///
/// Issued by [`Hovercard::begin_request`]; only the most recently issued
/// token may present content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestToken(u64);

/// The single owned hovercard instance
///
/// DOM-free: holds the would-be innerHTML and a clamped position, so the
/// state machine is testable without a browser.
#[derive(Debug, Default)]
pub struct Hovercard {
    generation: u64,
    content: Option<String>,
    position: Option<Point>,
}

impl Hovercard {
    /// Create a hidden hovercard
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state
    #[inline]
    #[must_use]
    pub fn state(&self) -> HovercardState {
        if self.content.is_some() {
            HovercardState::Showing
        } else {
            HovercardState::Hidden
        }
    }

    /// Current content, when showing
    #[inline]
    #[must_use]
    pub fn content(&self) -> Option<&str> {
        self.content.as_deref()
    }

    /// Current clamped position, when showing
    #[inline]
    #[must_use]
    pub fn position(&self) -> Option<Point> {
        self.position
    }

    /// Start a hover request, invalidating all earlier tokens
    #[inline]
    pub fn begin_request(&mut self) -> RequestToken {
        self.generation += 1;
        RequestToken(self.generation)
    }

    /// Present content for a request
    ///
    /// Returns `false` (and changes nothing) when a newer request has
    /// started since `token` was issued. Presenting while already
    /// showing replaces the prior content; opening a new card implicitly
    /// closes the old one.
    pub fn present(
        &mut self,
        token: RequestToken,
        html: impl Into<String>,
        anchor: Point,
        card: CardSize,
        viewport: Viewport,
    ) -> bool {
        if token.0 != self.generation {
            return false;
        }
        self.content = Some(html.into());
        self.position = Some(clamp_position(anchor, card, viewport));
        true
    }

    /// Hide the card (hover leave, scroll, outside click)
    #[inline]
    pub fn dismiss(&mut self) {
        self.content = None;
        self.position = None;
    }
}

/// Clamp the card near its anchor while keeping it fully on-screen
///
/// The card prefers to sit `ANCHOR_OFFSET` below-right of the anchor and
/// is pushed back inside the viewport with `VIEWPORT_PAD` breathing room;
/// it never renders off-screen.
#[must_use]
pub fn clamp_position(anchor: Point, card: CardSize, viewport: Viewport) -> Point {
    let mut x = anchor.x + ANCHOR_OFFSET;
    let mut y = anchor.y + ANCHOR_OFFSET;

    if x + card.width + VIEWPORT_PAD > viewport.width {
        x = viewport.width - card.width - VIEWPORT_PAD;
    }
    if y + card.height + VIEWPORT_PAD > viewport.height {
        y = viewport.height - card.height - VIEWPORT_PAD;
    }
    x = x.max(VIEWPORT_PAD);
    y = y.max(VIEWPORT_PAD);

    Point { x, y }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CARD: CardSize = CardSize {
        width: 420,
        height: 200,
    };
    const VIEWPORT: Viewport = Viewport {
        width: 1280,
        height: 800,
    };

    #[test]
    fn starts_hidden() {
        let card = Hovercard::new();
        assert_eq!(card.state(), HovercardState::Hidden);
        assert!(card.content().is_none());
    }

    #[test]
    fn present_then_dismiss_cycles_states() {
        let mut card = Hovercard::new();
        let token = card.begin_request();
        assert!(card.present(token, "<div>hi</div>", Point { x: 100, y: 100 }, CARD, VIEWPORT));
        assert_eq!(card.state(), HovercardState::Showing);
        assert_eq!(card.content(), Some("<div>hi</div>"));

        card.dismiss();
        assert_eq!(card.state(), HovercardState::Hidden);
        assert!(card.position().is_none());
    }

    #[test]
    fn stale_response_does_not_overwrite_fresher_hover() {
        let mut card = Hovercard::new();
        let slow = card.begin_request();
        let fast = card.begin_request();

        assert!(card.present(fast, "fresh", Point { x: 0, y: 0 }, CARD, VIEWPORT));
        // The slow fetch resolves late; its render is discarded.
        assert!(!card.present(slow, "stale", Point { x: 0, y: 0 }, CARD, VIEWPORT));
        assert_eq!(card.content(), Some("fresh"));
    }

    #[test]
    fn newer_present_replaces_content() {
        let mut card = Hovercard::new();
        let first = card.begin_request();
        card.present(first, "one", Point { x: 10, y: 10 }, CARD, VIEWPORT);

        let second = card.begin_request();
        card.present(second, "two", Point { x: 20, y: 20 }, CARD, VIEWPORT);
        assert_eq!(card.content(), Some("two"));
    }

    #[test]
    fn position_offsets_from_anchor() {
        let p = clamp_position(Point { x: 100, y: 100 }, CARD, VIEWPORT);
        assert_eq!(p, Point { x: 112, y: 112 });
    }

    #[test]
    fn position_clamps_to_right_and_bottom_edges() {
        let p = clamp_position(Point { x: 1270, y: 790 }, CARD, VIEWPORT);
        assert_eq!(p.x, VIEWPORT.width - CARD.width - 16);
        assert_eq!(p.y, VIEWPORT.height - CARD.height - 16);
    }

    #[test]
    fn position_never_goes_negative() {
        let tiny = Viewport {
            width: 300,
            height: 100,
        };
        let p = clamp_position(Point { x: 0, y: 0 }, CARD, tiny);
        assert_eq!(p, Point { x: 16, y: 16 });
    }
}
