//! Hover animation manager using iced_anim
//!
//! Tracks at most two keys: the card under the cursor and the one it just
//! left, so the cost stays constant however many cards are on screen.

use std::hash::Hash;
use std::time::{Duration, Instant};

use iced_anim::Animated;
use iced_anim::transition::Easing;

/// Hover fade duration
const HOVER_DURATION: Duration = Duration::from_millis(200);

/// Fade-in/out for an exclusive hover (one key at a time)
#[derive(Debug)]
pub struct HoverAnimations<K: Eq + Hash + Clone> {
    active_key: Option<K>,
    active_anim: Animated<f32>,
    /// Key that lost hover and is still fading out
    fading_key: Option<K>,
    fading_anim: Animated<f32>,
}

impl<K: Eq + Hash + Clone> Default for HoverAnimations<K> {
    fn default() -> Self {
        Self::new()
    }
}

fn hover_easing() -> Easing {
    Easing::EASE_OUT.with_duration(HOVER_DURATION)
}

/// Transition starting at `from` heading to `to`
fn transition(from: f32, to: f32) -> Animated<f32> {
    let mut anim = Animated::transition(from, hover_easing());
    if from != to {
        anim.update(to.into());
    }
    anim
}

impl<K: Eq + Hash + Clone> HoverAnimations<K> {
    pub fn new() -> Self {
        Self {
            active_key: None,
            active_anim: Animated::transition(0.0, hover_easing()),
            fading_key: None,
            fading_anim: Animated::transition(0.0, hover_easing()),
        }
    }

    /// Move hover to `key`; `None` releases the current key
    pub fn set_hovered_exclusive(&mut self, key: Option<K>) {
        if self.active_key == key {
            return;
        }

        // The old key fades out from wherever it currently is
        if let Some(old) = self.active_key.take() {
            let current = *self.active_anim.value();
            self.fading_key = Some(old);
            self.fading_anim = transition(current, 0.0);
        }

        if let Some(new_key) = key {
            // Re-entering a card that is still fading resumes from its value
            let start = if self.fading_key.as_ref() == Some(&new_key) {
                self.fading_key = None;
                *self.fading_anim.value()
            } else {
                0.0
            };
            self.active_key = Some(new_key);
            self.active_anim = transition(start, 1.0);
        }
    }

    /// Hover progress for `key` in `[0, 1]`
    pub fn get_progress(&self, key: &K) -> f32 {
        let value = if self.active_key.as_ref() == Some(key) {
            *self.active_anim.value()
        } else if self.fading_key.as_ref() == Some(key) {
            *self.fading_anim.value()
        } else {
            0.0
        };
        value.clamp(0.0, 1.0)
    }

    pub fn is_animating(&self) -> bool {
        self.active_anim.is_animating() || self.fading_anim.is_animating()
    }

    /// Forget the fading key once it has reached zero
    pub fn cleanup_completed(&mut self) {
        if self.fading_key.is_some()
            && *self.fading_anim.value() < 0.01
            && !self.fading_anim.is_animating()
        {
            self.fading_key = None;
        }
    }

    /// Drop every hover state (used when the cards leave the screen)
    pub fn clear(&mut self) {
        self.active_key = None;
        self.fading_key = None;
        self.active_anim = Animated::transition(0.0, hover_easing());
        self.fading_anim = Animated::transition(0.0, hover_easing());
    }

    /// Advance both transitions; call once per frame
    pub fn tick(&mut self, now: Instant) {
        self.active_anim.tick(now);
        self.fading_anim.tick(now);
    }
}

/// Open/close transition for a single element (the color dialog)
#[derive(Debug)]
pub struct SingleHoverAnimation {
    animation: Animated<f32>,
}

impl Default for SingleHoverAnimation {
    fn default() -> Self {
        Self::new()
    }
}

impl SingleHoverAnimation {
    pub fn new() -> Self {
        Self {
            animation: Animated::transition(0.0, Easing::EASE.with_duration(HOVER_DURATION)),
        }
    }

    /// Head towards 1.0
    pub fn start(&mut self) {
        self.animation.update(1.0.into());
    }

    /// Head towards 0.0
    pub fn stop(&mut self) {
        self.animation.update(0.0.into());
    }

    pub fn progress(&self) -> f32 {
        self.animation.value().clamp(0.0, 1.0)
    }

    pub fn is_animating(&self) -> bool {
        self.animation.is_animating()
    }

    pub fn tick(&mut self, now: Instant) {
        self.animation.tick(now);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq, Eq, Hash)]
    enum Card {
        Left,
        Right,
    }

    #[test]
    fn hover_is_exclusive() {
        let mut anims = HoverAnimations::new();
        assert_eq!(anims.get_progress(&Card::Left), 0.0);

        anims.set_hovered_exclusive(Some(Card::Left));
        assert_eq!(anims.active_key, Some(Card::Left));

        anims.set_hovered_exclusive(Some(Card::Right));
        assert_eq!(anims.active_key, Some(Card::Right));
        assert_ne!(anims.active_key, Some(Card::Left));
    }

    #[test]
    fn leaving_starts_a_fade() {
        let mut anims = HoverAnimations::new();
        anims.set_hovered_exclusive(Some(Card::Left));
        assert!(anims.is_animating());

        anims.set_hovered_exclusive(None);
        assert_ne!(anims.active_key, Some(Card::Left));
        assert!(anims.get_progress(&Card::Left) <= 1.0);
    }

    #[test]
    fn clear_resets_everything() {
        let mut anims = HoverAnimations::new();
        anims.set_hovered_exclusive(Some(Card::Left));
        anims.clear();
        assert_ne!(anims.active_key, Some(Card::Left));
        assert!(!anims.is_animating());
        assert_eq!(anims.get_progress(&Card::Left), 0.0);
    }

    #[test]
    fn dialog_transition_starts_closed() {
        let mut anim = SingleHoverAnimation::new();
        assert_eq!(anim.progress(), 0.0);

        anim.start();
        assert!(anim.is_animating() || anim.progress() > 0.0);
    }
}
