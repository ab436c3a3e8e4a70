//! Presentation model of the three-bar strength indicator.
//!
//! A transition pulses the bar of the new tier (vertical scale up to
//! `pulse_scale` during the first half, back to 1.0 during the second half)
//! while every bar fades to the colors of the new tier.

use std::time::Duration;

use crate::strength::PasswordStrength;
use crate::style::{Hsba, IndicatorStyle};

pub const BAR_COUNT: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarFrame {
    pub color: Hsba,
    pub scale_y: f32,
}

/// One drawable state of the indicator.
#[derive(Debug, Clone, PartialEq)]
pub struct IndicatorFrame {
    pub bars: [BarFrame; BAR_COUNT],
    pub label: String,
}

impl IndicatorFrame {
    /// Settled frame for `strength`. `None` renders like `Weak`.
    pub fn resting(strength: Option<PasswordStrength>, style: &IndicatorStyle) -> Self {
        let strength = strength.unwrap_or(PasswordStrength::Weak);
        let bars = std::array::from_fn(|i| BarFrame {
            color: style.bar_color(i, strength),
            scale_y: 1.0,
        });
        Self {
            bars,
            label: style.labels.for_strength(strength).to_string(),
        }
    }
}

/// Animated move from a displayed frame to the resting frame of `target`.
#[derive(Debug, Clone, PartialEq)]
pub struct IndicatorTransition {
    from: [Hsba; BAR_COUNT],
    target: PasswordStrength,
    to: IndicatorFrame,
    pulse_scale: f32,
    duration: Duration,
}

impl IndicatorTransition {
    pub fn new(from: &IndicatorFrame, target: PasswordStrength, style: &IndicatorStyle) -> Self {
        Self {
            from: std::array::from_fn(|i| from.bars[i].color),
            target,
            to: IndicatorFrame::resting(Some(target), style),
            pulse_scale: style.pulse_scale,
            duration: Duration::from_millis(style.transition_ms),
        }
    }

    pub fn target(&self) -> PasswordStrength {
        self.target
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Normalized progress after `elapsed`. A zero duration is always complete.
    pub fn progress(&self, elapsed: Duration) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
    }

    /// Frame at normalized time `t`, clamped to `0.0..=1.0`.
    pub fn sample(&self, t: f32) -> IndicatorFrame {
        let t = t.clamp(0.0, 1.0);
        let pulse = if t <= 0.5 { t * 2.0 } else { (1.0 - t) * 2.0 };
        let peak = self.target.index();

        let bars = std::array::from_fn(|i| {
            let scale_y = if i == peak {
                1.0 + (self.pulse_scale - 1.0) * pulse
            } else {
                1.0
            };
            BarFrame {
                color: self.from[i].lerp(self.to.bars[i].color, t),
                scale_y,
            }
        });

        IndicatorFrame {
            bars,
            label: self.to.label.clone(),
        }
    }

    pub fn sample_at(&self, elapsed: Duration) -> IndicatorFrame {
        self.sample(self.progress(elapsed))
    }

    pub fn is_complete(&self, elapsed: Duration) -> bool {
        self.progress(elapsed) >= 1.0
    }
}
