//! Progress bar animation
//!
//! Bars animate from zero to their target value in a fixed number of steps
//! spread across the configured animation duration, clamp exactly at the
//! target and stop stepping once there.

use std::time::Duration;

/// Steps a bar takes from zero to its target
pub const ANIMATION_STEPS: u32 = 50;

/// Interval between animation steps for a total duration
pub fn step_period(total: Duration) -> Duration {
    total / ANIMATION_STEPS
}

/// Animates one progress bar towards its target value
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressAnimator {
    target: f32,
    current: f32,
    increment: f32,
    finished: bool,
}

impl ProgressAnimator {
    /// Start an animation from zero towards `target`
    pub fn new(target: f32) -> Self {
        Self {
            target,
            current: 0.0,
            increment: target / ANIMATION_STEPS as f32,
            // Nothing to animate for an empty bar
            finished: target <= 0.0,
        }
    }

    /// Advance one step, clamping at the target
    pub fn step(&mut self) {
        if self.finished {
            return;
        }

        self.current += self.increment;
        if self.current >= self.target {
            self.current = self.target;
            self.finished = true;
        }
    }

    /// Current displayed value
    pub fn value(&self) -> f32 {
        self.current
    }

    /// Final value the bar is heading for
    pub fn target(&self) -> f32 {
        self.target
    }

    /// Whether the animation has reached its target
    pub fn is_finished(&self) -> bool {
        self.finished
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reaches_target_exactly_in_fifty_steps() {
        let mut bar = ProgressAnimator::new(80.0);

        for _ in 0..ANIMATION_STEPS {
            bar.step();
        }

        assert_eq!(bar.value(), 80.0);
        assert!(bar.is_finished());
    }

    #[test]
    fn test_never_overshoots_and_is_monotonic() {
        let mut bar = ProgressAnimator::new(80.0);
        let mut previous = bar.value();

        for _ in 0..(ANIMATION_STEPS * 2) {
            bar.step();
            assert!(bar.value() >= previous);
            assert!(bar.value() <= 80.0);
            previous = bar.value();
        }

        assert_eq!(bar.value(), 80.0);
    }

    #[test]
    fn test_finished_bar_ignores_further_steps() {
        let mut bar = ProgressAnimator::new(10.0);
        for _ in 0..ANIMATION_STEPS {
            bar.step();
        }
        assert!(bar.is_finished());

        bar.step();
        assert_eq!(bar.value(), 10.0);
    }

    #[test]
    fn test_zero_target_finishes_immediately() {
        let bar = ProgressAnimator::new(0.0);
        assert!(bar.is_finished());
        assert_eq!(bar.value(), 0.0);
    }

    #[test]
    fn test_step_period_divides_duration() {
        assert_eq!(
            step_period(Duration::from_millis(300)),
            Duration::from_millis(6)
        );
    }
}
