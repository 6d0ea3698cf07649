//! Hero carousel state and its render projection.
//!
//! [`CarouselState`] is a single index cycling modulo the slide count.
//! It can only exist for a non-empty slide list, so wrap-around arithmetic
//! never sees `len == 0`.


use crate::error::CarouselError;
use crate::types::Slide;

/// Direction of a manual slide change.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Prev,
    Next,
}

/// Current slide index over a fixed, non-empty slide count.
///
/// # Example
///
/// ```rust
/// use hkupgrade_site::carousel::CarouselState;
///
/// let mut state = CarouselState::new(3).unwrap();
/// state.retreat();
/// assert_eq!(state.current(), 2);
/// state.advance();
/// assert_eq!(state.current(), 0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CarouselState {
    current: usize,
    len: usize,
}

impl CarouselState {
    /// Start at slide 0. Fails for an empty slide list.
    pub fn new(len: usize) -> Result<Self, CarouselError> {
        if len == 0 {
            return Err(CarouselError::Empty);
        }
        Ok(Self { current: 0, len })
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn len(&self) -> usize {
        self.len
    }

    /// A carousel always holds at least one slide.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// `current := (current + 1) mod len`
    pub fn advance(&mut self) {
        self.current = (self.current + 1) % self.len;
    }

    /// `current := (current - 1 + len) mod len`
    pub fn retreat(&mut self) {
        self.current = (self.current + self.len - 1) % self.len;
    }

    pub fn step(&mut self, direction: Direction) {
        match direction {
            Direction::Prev => self.retreat(),
            Direction::Next => self.advance(),
        }
    }

    /// Jump straight to `index` (indicator dots).
    pub fn jump_to(&mut self, index: usize) -> Result<(), CarouselError> {
        if index >= self.len {
            return Err(CarouselError::OutOfRange {
                index,
                len: self.len,
            });
        }
        self.current = index;
        Ok(())
    }
}

/// Fully visible slide opacity.
pub const OPACITY_SHOWN: f32 = 1.0;
/// Hidden slide opacity.
pub const OPACITY_HIDDEN: f32 = 0.0;

/// Render-ready description of one slide layer.
#[derive(Clone, Debug, PartialEq)]
pub struct SlideFrame {
    pub index: usize,
    pub image: String,
    pub link: String,
    pub show_button: bool,
    pub active: bool,
    pub opacity: f32,
    pub transition_ms: u64,
}

impl SlideFrame {
    /// Inline style for the stacked slide layer.
    pub fn style(&self) -> String {
        format!(
            "opacity: {}; transition: opacity {}ms ease-in-out;",
            self.opacity, self.transition_ms
        )
    }
}

/// Project the slide list onto layers: the current slide fully opaque,
/// every other slide transparent, all sharing the same fade duration.
pub fn slide_frames(state: &CarouselState, slides: &[Slide], transition_ms: u64) -> Vec<SlideFrame> {
    slides
        .iter()
        .enumerate()
        .map(|(index, slide)| {
            let active = index == state.current();
            SlideFrame {
                index,
                image: slide.image.clone(),
                link: slide.link.clone(),
                show_button: slide.show_button,
                active,
                opacity: if active { OPACITY_SHOWN } else { OPACITY_HIDDEN },
                transition_ms,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_carousel_is_rejected() {
        assert_eq!(CarouselState::new(0), Err(CarouselError::Empty));
    }

    #[test]
    fn starts_at_first_slide() {
        let state = CarouselState::new(4).unwrap();
        assert_eq!(state.current(), 0);
        assert_eq!(state.len(), 4);
        assert!(!state.is_empty());
    }

    #[test]
    fn index_stays_in_range_for_any_step_sequence() {
        for len in 1..=7 {
            let mut state = CarouselState::new(len).unwrap();
            // Deterministic pseudo-random walk.
            let mut seed: u32 = 0x9e37_79b9 ^ len as u32;
            for _ in 0..500 {
                seed ^= seed << 13;
                seed ^= seed >> 17;
                seed ^= seed << 5;
                if seed % 2 == 0 {
                    state.advance();
                } else {
                    state.retreat();
                }
                assert!(state.current() < len, "len={len} idx={}", state.current());
            }
        }
    }

    #[test]
    fn advancing_len_times_returns_to_start() {
        for len in 1..=6 {
            for start in 0..len {
                let mut state = CarouselState::new(len).unwrap();
                state.jump_to(start).unwrap();
                for _ in 0..len {
                    state.advance();
                }
                assert_eq!(state.current(), start);
            }
        }
    }

    #[test]
    fn retreat_inverts_advance() {
        for len in 1..=6 {
            for start in 0..len {
                let mut state = CarouselState::new(len).unwrap();
                state.jump_to(start).unwrap();
                state.advance();
                state.retreat();
                assert_eq!(state.current(), start);

                state.retreat();
                state.advance();
                assert_eq!(state.current(), start);
            }
        }
    }

    #[test]
    fn wraps_at_both_ends() {
        let mut state = CarouselState::new(2).unwrap();
        state.retreat();
        assert_eq!(state.current(), 1);
        state.step(Direction::Next);
        assert_eq!(state.current(), 0);
        state.step(Direction::Prev);
        assert_eq!(state.current(), 1);
    }

    #[test]
    fn single_slide_never_moves() {
        let mut state = CarouselState::new(1).unwrap();
        state.advance();
        state.retreat();
        assert_eq!(state.current(), 0);
    }

    #[test]
    fn jump_to_rejects_out_of_range() {
        let mut state = CarouselState::new(2).unwrap();
        assert_eq!(
            state.jump_to(2),
            Err(CarouselError::OutOfRange { index: 2, len: 2 })
        );
        assert_eq!(state.current(), 0);
    }

    #[test]
    fn frames_show_only_current_slide() {
        let slides = vec![
            Slide {
                image: "a.png".into(),
                link: "/x".into(),
                show_button: true,
            },
            Slide {
                image: "b.png".into(),
                link: "/y".into(),
                show_button: false,
            },
        ];
        let mut state = CarouselState::new(2).unwrap();
        state.advance();

        let frames = slide_frames(&state, &slides, 1000);
        assert_eq!(frames.len(), 2);
        assert!(!frames[0].active);
        assert_eq!(frames[0].opacity, OPACITY_HIDDEN);
        assert!(frames[1].active);
        assert_eq!(frames[1].opacity, OPACITY_SHOWN);
        assert!(frames.iter().all(|f| f.transition_ms == 1000));
        assert_eq!(
            frames[1].style(),
            "opacity: 1; transition: opacity 1000ms ease-in-out;"
        );
    }

    #[test]
    fn frames_carry_configured_fade_verbatim() {
        let slides = vec![Slide {
            image: "a.png".into(),
            link: "/x".into(),
            show_button: false,
        }];
        let state = CarouselState::new(1).unwrap();
        let frames = slide_frames(&state, &slides, 750);
        assert_eq!(frames[0].transition_ms, 750);
        assert_eq!(frames[0].style(), "opacity: 1; transition: opacity 750ms ease-in-out;");
    }
}
