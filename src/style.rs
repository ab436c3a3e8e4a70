//! Styling constants for the field and its strength indicator.
//!
//! Nothing here is read by the classification logic; hosts receive a
//! `FieldStyle` at construction and draw with it.

use serde::{Deserialize, Serialize};

use crate::strength::PasswordStrength;

/// Color in hue/saturation/brightness space, every component in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hsba {
    pub hue: f32,
    pub saturation: f32,
    pub brightness: f32,
    #[serde(default = "default_alpha")]
    pub alpha: f32,
}

fn default_alpha() -> f32 {
    1.0
}

impl Hsba {
    /// Builds a color from a hue in degrees and percentages.
    pub const fn degrees(hue: f32, saturation: f32, brightness: f32) -> Self {
        Self {
            hue: hue / 360.0,
            saturation: saturation / 100.0,
            brightness: brightness / 100.0,
            alpha: 1.0,
        }
    }

    /// Component-wise interpolation, `t` clamped to `0.0..=1.0`.
    pub fn lerp(self, other: Self, t: f32) -> Self {
        if t <= 0.0 {
            return self;
        }
        if t >= 1.0 {
            return other;
        }
        Self {
            hue: self.hue + (other.hue - self.hue) * t,
            saturation: self.saturation + (other.saturation - self.saturation) * t,
            brightness: self.brightness + (other.brightness - self.brightness) * t,
            alpha: self.alpha + (other.alpha - self.alpha) * t,
        }
    }

    /// Converts to `[r, g, b, a]`.
    pub fn to_rgba(self) -> [f32; 4] {
        let mut h = self.hue.rem_euclid(1.0) * 6.0;
        // rem_euclid rounds tiny negative hues up to 1.0
        if h >= 6.0 {
            h = 0.0;
        }
        let s = self.saturation.clamp(0.0, 1.0);
        let v = self.brightness.clamp(0.0, 1.0);

        let sector = h.floor();
        let f = h - sector;
        let p = v * (1.0 - s);
        let q = v * (1.0 - s * f);
        let t = v * (1.0 - s * (1.0 - f));

        let (r, g, b) = match sector as u32 {
            0 => (v, t, p),
            1 => (q, v, p),
            2 => (p, v, t),
            3 => (p, q, v),
            4 => (t, p, v),
            _ => (v, p, q),
        };
        [r, g, b, self.alpha]
    }
}

/// Font weight for labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontWeight {
    Regular,
    Semibold,
    Bold,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FontStyle {
    pub size: f32,
    pub weight: FontWeight,
}

/// Texts shown next to the indicator, one per tier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StrengthLabels {
    pub weak: String,
    pub medium: String,
    pub strong: String,
}

impl StrengthLabels {
    pub fn for_strength(&self, strength: PasswordStrength) -> &str {
        match strength {
            PasswordStrength::Weak => &self.weak,
            PasswordStrength::Medium => &self.medium,
            PasswordStrength::Strong => &self.strong,
        }
    }
}

impl Default for StrengthLabels {
    fn default() -> Self {
        Self {
            weak: PasswordStrength::Weak.label().to_string(),
            medium: PasswordStrength::Medium.label().to_string(),
            strong: PasswordStrength::Strong.label().to_string(),
        }
    }
}

/// Three-bar strength indicator: colors, geometry, labels and transition timing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IndicatorStyle {
    pub unused_color: Hsba,
    pub weak_color: Hsba,
    pub medium_color: Hsba,
    pub strong_color: Hsba,
    /// Bar size as `[width, height]`.
    pub bar_size: [f32; 2],
    pub labels: StrengthLabels,
    pub transition_ms: u64,
    /// Peak vertical scale of the pulsing bar.
    pub pulse_scale: f32,
    pub frame_interval_ms: u64,
}

impl IndicatorStyle {
    /// Color of the bar at `index` once `strength` is reached.
    pub fn bar_color(&self, index: usize, strength: PasswordStrength) -> Hsba {
        if index > strength.index() {
            return self.unused_color;
        }
        match index {
            0 => self.weak_color,
            1 => self.medium_color,
            _ => self.strong_color,
        }
    }
}

impl Default for IndicatorStyle {
    fn default() -> Self {
        Self {
            unused_color: Hsba::degrees(210.0, 5.0, 86.0),
            weak_color: Hsba::degrees(0.0, 60.0, 90.0),
            medium_color: Hsba::degrees(39.0, 60.0, 90.0),
            strong_color: Hsba::degrees(132.0, 60.0, 75.0),
            bar_size: [60.0, 5.0],
            labels: StrengthLabels::default(),
            transition_ms: 1000,
            pulse_scale: 1.75,
            frame_interval_ms: 16,
        }
    }
}

/// Everything a host needs to lay out and paint the field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldStyle {
    pub title: String,
    pub standard_margin: f32,
    pub text_field_height: f32,
    pub text_field_margin: f32,
    pub text_field_border_width: f32,
    pub text_field_border_color: Hsba,
    pub background_color: Hsba,
    pub label_color: Hsba,
    pub label_font: FontStyle,
    pub indicator: IndicatorStyle,
}

impl Default for FieldStyle {
    fn default() -> Self {
        Self {
            title: "ENTER PASSWORD".to_string(),
            standard_margin: 8.0,
            text_field_height: 50.0,
            text_field_margin: 6.0,
            text_field_border_width: 2.0,
            text_field_border_color: Hsba::degrees(208.0, 80.0, 94.0),
            background_color: Hsba::degrees(0.0, 0.0, 97.0),
            label_color: Hsba::degrees(233.0, 16.0, 41.0),
            label_font: FontStyle {
                size: 14.0,
                weight: FontWeight::Semibold,
            },
            indicator: IndicatorStyle::default(),
        }
    }
}
