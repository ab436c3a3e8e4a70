//! Password field state: live text, committed password, strength and masking.

use std::fmt;

use secrecy::{ExposeSecret, SecretString};

use crate::config::FieldConfig;
use crate::handler::InputHandler;
use crate::indicator::IndicatorFrame;
use crate::observer::{PublishCause, StrengthEvent, StrengthObserver};
use crate::strength::PasswordStrength;

const MASK_CHAR: char = '•';

/// Whether typed characters are shown in clear text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    #[default]
    Revealed,
    Masked,
}

impl Visibility {
    pub fn toggled(self) -> Self {
        match self {
            Visibility::Revealed => Visibility::Masked,
            Visibility::Masked => Visibility::Revealed,
        }
    }

    /// Image asset name for the show/hide button.
    pub fn icon(self) -> &'static str {
        match self {
            Visibility::Revealed => "eyes-open",
            Visibility::Masked => "eyes-closed",
        }
    }
}

/// A password entry control without any UI toolkit attached.
///
/// The host forwards edits and submissions through [`InputHandler`] and
/// subscribes a [`StrengthObserver`] to drive the indicator.
pub struct PasswordField {
    config: FieldConfig,
    text: SecretString,
    password: SecretString,
    current_strength: Option<PasswordStrength>,
    visibility: Visibility,
    focused: bool,
    observers: Vec<Box<dyn StrengthObserver>>,
}

impl PasswordField {
    pub fn new(config: FieldConfig) -> Self {
        Self {
            config,
            text: empty_secret(),
            password: empty_secret(),
            current_strength: None,
            visibility: Visibility::default(),
            focused: false,
            observers: Vec::new(),
        }
    }

    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    /// Last submitted value. Empty until the first submission.
    pub fn password(&self) -> &SecretString {
        &self.password
    }

    /// Text currently in the edit buffer.
    pub fn text(&self) -> &SecretString {
        &self.text
    }

    /// `None` until some text has been evaluated.
    pub fn current_strength(&self) -> Option<PasswordStrength> {
        self.current_strength
    }

    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    pub fn is_masked(&self) -> bool {
        self.visibility == Visibility::Masked
    }

    pub fn visibility_icon(&self) -> &'static str {
        self.visibility.icon()
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn focus(&mut self) {
        self.focused = true;
    }

    pub fn subscribe<O>(&mut self, observer: O)
    where
        O: StrengthObserver + 'static,
    {
        self.observers.push(Box::new(observer));
    }

    /// Flips between masked and revealed. Strength and password are untouched.
    pub fn toggle_visibility(&mut self) -> Visibility {
        self.visibility = self.visibility.toggled();

        #[cfg(feature = "tracing")]
        tracing::debug!("visibility toggled to {:?}", self.visibility);

        self.visibility
    }

    /// Buffer as it should be drawn: one bullet per character when masked.
    pub fn display_text(&self) -> String {
        let text = self.text.expose_secret();
        match self.visibility {
            Visibility::Revealed => text.to_string(),
            Visibility::Masked => text.chars().map(|_| MASK_CHAR).collect(),
        }
    }

    /// Resting indicator for the current strength.
    pub fn indicator(&self) -> IndicatorFrame {
        IndicatorFrame::resting(self.current_strength, &self.config.style.indicator)
    }

    /// Submits the field's own edit buffer.
    pub fn commit(&mut self) -> bool {
        let current = self.text.expose_secret().to_string();
        self.on_submit(Some(&current))
    }

    fn classify(&self, text: &str) -> PasswordStrength {
        self.config.thresholds.classify(text)
    }

    fn publish(&mut self, strength: PasswordStrength, cause: PublishCause) {
        let event = StrengthEvent {
            strength,
            previous: self.current_strength,
            cause,
        };
        self.current_strength = Some(strength);

        #[cfg(feature = "tracing")]
        tracing::debug!(
            "strength published: {:?} -> {:?} ({:?})",
            event.previous,
            event.strength,
            event.cause
        );

        for observer in &mut self.observers {
            observer.strength_published(&event);
        }
    }
}

impl Default for PasswordField {
    fn default() -> Self {
        Self::new(FieldConfig::default())
    }
}

impl fmt::Debug for PasswordField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PasswordField")
            .field("text", &self.text)
            .field("password", &self.password)
            .field("current_strength", &self.current_strength)
            .field("visibility", &self.visibility)
            .field("focused", &self.focused)
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl InputHandler for PasswordField {
    fn on_text_change(&mut self, candidate: Option<&str>) -> bool {
        let Some(candidate) = candidate else {
            #[cfg(feature = "tracing")]
            tracing::warn!("edit rejected: no text available");
            return false;
        };

        let strength = self.classify(candidate);
        self.text = secret_from(candidate);

        if self.current_strength != Some(strength) {
            self.publish(strength, PublishCause::Edit);
        }
        true
    }

    fn on_submit(&mut self, current: Option<&str>) -> bool {
        let Some(current) = current else {
            #[cfg(feature = "tracing")]
            tracing::warn!("submit rejected: no text available");
            return false;
        };

        let strength = self.classify(current);
        self.text = secret_from(current);
        self.password = secret_from(current);

        #[cfg(feature = "tracing")]
        tracing::info!(
            "password committed: {} characters, {:?}",
            current.chars().count(),
            strength
        );

        self.publish(strength, PublishCause::Submit);
        self.focused = false;
        true
    }
}

fn empty_secret() -> SecretString {
    SecretString::new(String::new().into())
}

fn secret_from(text: &str) -> SecretString {
    SecretString::new(text.to_string().into())
}
