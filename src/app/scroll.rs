//! Scroll geometry: section spans, the scroll-spy lookup, back-to-top
//! visibility and the smooth-scroll animation. Everything here is pure so it
//! can be tested without a window.

/// Lead distance above a section at which its nav link lights up.
pub const NAV_LEAD: i32 = 100;
/// Fixed header height subtracted from smooth-scroll targets.
pub const HEADER_OFFSET: i32 = 80;
/// Offset past which the back-to-top control is shown.
pub const BACK_TO_TOP_THRESHOLD: i32 = 300;
/// Fraction of the skills section that must be inside the viewport before the
/// bars fill.
pub const SKILL_REVEAL_FRACTION: f64 = 0.3;
/// How often the scroll offset is sampled, in seconds.
pub const POLL_SECS: f64 = 0.05;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionId {
    Home,
    About,
    Skills,
    Contact,
}

impl SectionId {
    pub const ALL: [SectionId; 4] = [
        SectionId::Home,
        SectionId::About,
        SectionId::Skills,
        SectionId::Contact,
    ];

    pub fn title(self) -> &'static str {
        match self {
            SectionId::Home => "Home",
            SectionId::About => "About",
            SectionId::Skills => "Skills",
            SectionId::Contact => "Contact",
        }
    }
}

/// Vertical extent of one page section, in content coordinates.
#[derive(Debug, Clone, Copy)]
pub struct SectionSpan {
    pub id: SectionId,
    pub top: i32,
    pub height: i32,
}

impl SectionSpan {
    /// Whether a scroll offset falls inside this section's highlight span:
    /// `(top - NAV_LEAD, top - NAV_LEAD + height]`.
    pub fn contains(&self, offset: i32) -> bool {
        let lead_top = self.top - NAV_LEAD;
        offset > lead_top && offset <= lead_top + self.height
    }
}

/// The section whose span contains the offset. Adjacent spans overlap by the
/// lead distance; the later section wins there, matching the direction of
/// travel the lead is meant to anticipate. Lookup is by section identity, so
/// no link can be matched by accident.
pub fn active_section(spans: &[SectionSpan], offset: i32) -> Option<SectionId> {
    spans.iter().rev().find(|s| s.contains(offset)).map(|s| s.id)
}

pub fn back_to_top_visible(offset: i32) -> bool {
    offset > BACK_TO_TOP_THRESHOLD
}

/// Fraction of the span currently inside the viewport `[offset, offset + viewport_h)`.
pub fn visible_fraction(span: &SectionSpan, offset: i32, viewport_h: i32) -> f64 {
    if span.height <= 0 {
        return 0.0;
    }
    let top = span.top.max(offset);
    let bottom = (span.top + span.height).min(offset + viewport_h);
    ((bottom - top).max(0)) as f64 / span.height as f64
}

/// Confine a smooth-scroll target to the scrollable range `[0, max_scroll]`.
pub fn clamp_target(target: i32, max_scroll: i32) -> i32 {
    target.clamp(0, max_scroll.max(0))
}

/// Seconds between smooth-scroll animation frames.
pub const FRAME_SECS: f64 = 0.016;
const FRAMES: u32 = 18;

/// An in-flight smooth scroll toward a target offset. One instance at a time
/// is owned by the app state; starting a new scroll replaces it outright.
#[derive(Debug, Clone, Copy)]
pub struct ScrollAnimation {
    from: i32,
    to: i32,
    frame: u32,
}

impl ScrollAnimation {
    pub fn new(from: i32, to: i32) -> Self {
        Self { from, to, frame: 0 }
    }

    pub fn done(&self) -> bool {
        self.frame >= FRAMES
    }

    /// Advance one frame and return the offset to apply.
    pub fn advance(&mut self) -> i32 {
        self.frame = (self.frame + 1).min(FRAMES);
        let t = self.frame as f64 / FRAMES as f64;
        // ease-out cubic
        let eased = 1.0 - (1.0 - t).powi(3);
        self.from + ((self.to - self.from) as f64 * eased).round() as i32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spans() -> Vec<SectionSpan> {
        vec![
            SectionSpan { id: SectionId::Home, top: 0, height: 560 },
            SectionSpan { id: SectionId::About, top: 560, height: 420 },
            SectionSpan { id: SectionId::Skills, top: 980, height: 440 },
            SectionSpan { id: SectionId::Contact, top: 1420, height: 520 },
        ]
    }

    #[test]
    fn test_top_of_page_is_home() {
        assert_eq!(active_section(&spans(), 0), Some(SectionId::Home));
    }

    #[test]
    fn test_lead_activates_next_section_early() {
        // 60 px before About's top, already inside its lead
        assert_eq!(active_section(&spans(), 500), Some(SectionId::About));
    }

    #[test]
    fn test_offsets_map_to_their_section() {
        let spans = spans();
        assert_eq!(active_section(&spans, 700), Some(SectionId::About));
        assert_eq!(active_section(&spans, 1100), Some(SectionId::Skills));
        assert_eq!(active_section(&spans, 1800), Some(SectionId::Contact));
    }

    #[test]
    fn test_past_the_last_span_matches_nothing() {
        assert_eq!(active_section(&spans(), 5000), None);
    }

    #[test]
    fn test_at_most_one_section_wins() {
        let spans = spans();
        for offset in (0..2200).step_by(7) {
            let matching = spans.iter().filter(|s| s.contains(offset)).count();
            if matching > 0 {
                assert!(active_section(&spans, offset).is_some());
            } else {
                assert_eq!(active_section(&spans, offset), None);
            }
        }
    }

    #[test]
    fn test_lookup_is_by_identity_not_prefix() {
        // Two sections whose highlight spans overlap still yield one winner.
        let spans = vec![
            SectionSpan { id: SectionId::About, top: 0, height: 200 },
            SectionSpan { id: SectionId::Skills, top: 200, height: 200 },
        ];
        assert_eq!(active_section(&spans, 150), Some(SectionId::Skills));
    }

    #[test]
    fn test_back_to_top_threshold() {
        assert!(!back_to_top_visible(0));
        assert!(!back_to_top_visible(300));
        assert!(back_to_top_visible(301));
        assert!(back_to_top_visible(500));
        assert!(!back_to_top_visible(100));
    }

    #[test]
    fn test_visible_fraction_bounds() {
        let span = SectionSpan { id: SectionId::Skills, top: 980, height: 440 };
        // Entirely below the viewport
        assert_eq!(visible_fraction(&span, 0, 700), 0.0);
        // Fully inside
        assert_eq!(visible_fraction(&span, 900, 700), 1.0);
        // Partially visible from the bottom edge
        let f = visible_fraction(&span, 500, 700);
        assert!(f > 0.0 && f < 1.0);
    }

    #[test]
    fn test_reveal_fraction_threshold_crossing() {
        let span = SectionSpan { id: SectionId::Skills, top: 1000, height: 400 };
        // 120 of 400 px visible: exactly 30%
        assert!(visible_fraction(&span, 420, 700) >= SKILL_REVEAL_FRACTION);
        assert!(visible_fraction(&span, 380, 700) < SKILL_REVEAL_FRACTION);
    }

    #[test]
    fn test_target_clamps_above_the_lead() {
        // Home minus the header offset would land above the page top
        assert_eq!(clamp_target(0 - HEADER_OFFSET, 1230), 0);
    }

    #[test]
    fn test_target_clamps_past_the_bottom() {
        assert_eq!(clamp_target(5000, 1230), 1230);
        assert_eq!(clamp_target(1230, 1230), 1230);
    }

    #[test]
    fn test_in_range_target_passes_through() {
        assert_eq!(clamp_target(900, 1230), 900);
    }

    #[test]
    fn test_unscrollable_page_pins_target_to_zero() {
        // Content shorter than the viewport
        assert_eq!(clamp_target(400, -120), 0);
    }

    #[test]
    fn test_animation_reaches_target() {
        let mut anim = ScrollAnimation::new(1230, 0);
        let mut last = 1230;
        while !anim.done() {
            last = anim.advance();
        }
        assert_eq!(last, 0);
    }

    #[test]
    fn test_animation_is_monotonic() {
        let mut anim = ScrollAnimation::new(0, 900);
        let mut prev = 0;
        while !anim.done() {
            let pos = anim.advance();
            assert!(pos >= prev);
            prev = pos;
        }
        assert_eq!(prev, 900);
    }

    #[test]
    fn test_zero_distance_animation_finishes() {
        let mut anim = ScrollAnimation::new(50, 50);
        while !anim.done() {
            assert_eq!(anim.advance(), 50);
        }
    }
}
