use crate::math::elastic_ease_out;

/// Timing of the one-shot arrival animation.
///
/// Holds no clock of its own: the host passes its frame timestamp to
/// [`InitAnimation::progress`], and the first timestamp seen becomes the
/// start.
#[derive(Clone, Debug)]
pub struct InitAnimation {
    /// Seconds.
    pub duration: f32,
    start: Option<f64>,
}

impl InitAnimation {
    pub fn new(duration: f32) -> Self {
        Self {
            duration,
            start: None,
        }
    }

    /// Start over from progress 0 on the next sample.
    pub fn restart(&mut self) {
        self.start = None;
    }

    /// Linear progress in `[0, 1]` at host time `now` (seconds).
    pub fn linear(&mut self, now: f64) -> f32 {
        let start = *self.start.get_or_insert(now);
        if !(self.duration > 0.0) {
            return 1.0;
        }
        let elapsed = (now - start).max(0.0) as f32;
        (elapsed / self.duration).min(1.0)
    }

    /// Eased progress at host time `now`. May overshoot 1 before settling.
    pub fn progress(&mut self, now: f64) -> f32 {
        elastic_ease_out(self.linear(now))
    }

    /// Whether the animation has run its full duration.
    pub fn is_finished(&self, now: f64) -> bool {
        match self.start {
            Some(start) => !(self.duration > 0.0) || (now - start) as f32 >= self.duration,
            None => !(self.duration > 0.0),
        }
    }
}
