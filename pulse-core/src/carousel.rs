//! Slide index for the hero and testimonial carousels.
//!
//! The index always stays in `[0, len)`. Timer ticks are ignored while the
//! carousel is paused; manual navigation is not.

use std::time::Duration;

/// Hero background rotation period.
pub const HERO_PERIOD: Duration = Duration::from_secs(5);

/// Testimonial rotation period.
pub const TESTIMONIAL_PERIOD: Duration = Duration::from_secs(6);

/// Cyclic index over `len` slides.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Carousel {
    index: usize,
    len: usize,
    paused: bool,
}

impl Carousel {
    /// Carousel over `len` slides, showing the first one.
    pub fn new(len: usize) -> Self {
        Self {
            index: 0,
            len,
            paused: false,
        }
    }

    /// Index of the visible slide.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Number of slides.
    pub fn len(&self) -> usize {
        self.len
    }

    /// No slides at all.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Whether slide `i` is the visible one.
    pub fn is_active(&self, i: usize) -> bool {
        self.index == i
    }

    /// Timer callback. Returns whether the slide changed.
    pub fn tick(&mut self) -> bool {
        if self.paused {
            return false;
        }
        self.next()
    }

    /// Show the following slide, wrapping to the first.
    pub fn next(&mut self) -> bool {
        if self.len < 2 {
            return false;
        }
        self.index = (self.index + 1) % self.len;
        true
    }

    /// Show the preceding slide, wrapping to the last.
    pub fn prev(&mut self) -> bool {
        if self.len < 2 {
            return false;
        }
        self.index = (self.index + self.len - 1) % self.len;
        true
    }

    /// Jump to slide `i` (dot indicators). Out-of-range indices are ignored.
    pub fn go_to(&mut self, i: usize) -> bool {
        if i >= self.len || i == self.index {
            return false;
        }
        self.index = i;
        true
    }

    /// Stop timer ticks from advancing (pointer over the carousel).
    pub fn pause(&mut self) {
        self.paused = true;
    }

    /// Let timer ticks advance again.
    pub fn resume(&mut self) {
        self.paused = false;
    }

    /// Whether timer ticks are currently ignored.
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Horizontal offset of the slide strip, in percent of one slide.
    pub fn offset_percent(&self) -> usize {
        self.index * 100
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_cycle_of_ticks_returns_to_start() {
        for len in 1..6 {
            for start in 0..len {
                let mut carousel = Carousel::new(len);
                carousel.go_to(start);
                for _ in 0..len {
                    carousel.tick();
                }
                assert_eq!(carousel.index(), start, "len={len} start={start}");
            }
        }
    }

    #[test]
    fn next_and_prev_wrap() {
        let mut carousel = Carousel::new(3);
        carousel.prev();
        assert_eq!(carousel.index(), 2);
        carousel.next();
        assert_eq!(carousel.index(), 0);
    }

    #[test]
    fn paused_carousel_ignores_ticks_but_not_clicks() {
        let mut carousel = Carousel::new(3);
        carousel.pause();
        assert!(!carousel.tick());
        assert_eq!(carousel.index(), 0);

        assert!(carousel.next());
        assert!(carousel.go_to(0));
        assert_eq!(carousel.index(), 0);

        carousel.resume();
        assert!(carousel.tick());
        assert_eq!(carousel.index(), 1);
    }

    #[test]
    fn go_to_rejects_out_of_range() {
        let mut carousel = Carousel::new(3);
        assert!(!carousel.go_to(3));
        assert!(carousel.go_to(2));
        assert!(carousel.is_active(2));
        assert_eq!(carousel.offset_percent(), 200);
    }

    #[test]
    fn empty_and_single_slide_never_move() {
        let mut empty = Carousel::new(0);
        assert!(empty.is_empty());
        assert!(!empty.tick());
        assert!(!empty.prev());
        assert_eq!(empty.index(), 0);

        let mut single = Carousel::new(1);
        assert!(!single.next());
        assert_eq!(single.index(), 0);
    }

    #[test]
    fn periods_match_the_page() {
        assert_eq!(HERO_PERIOD.as_millis(), 5000);
        assert_eq!(TESTIMONIAL_PERIOD.as_millis(), 6000);
    }
}
