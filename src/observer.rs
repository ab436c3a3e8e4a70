//! Strength change notifications.
//!
//! The field publishes a [`StrengthEvent`] whenever the indicator should
//! react; renderers subscribe and own every animation concern.

use crate::strength::PasswordStrength;

#[cfg(feature = "async")]
use tokio::sync::mpsc;

/// What caused a publication.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PublishCause {
    /// Live edit that moved the text into another tier.
    Edit,
    /// Explicit submission; published even when the tier is unchanged.
    Submit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StrengthEvent {
    pub strength: PasswordStrength,
    /// Tier stored before this publication, `None` on the first evaluation.
    pub previous: Option<PasswordStrength>,
    pub cause: PublishCause,
}

impl StrengthEvent {
    pub fn is_change(&self) -> bool {
        self.previous != Some(self.strength)
    }
}

/// Receives strength publications from a `PasswordField`.
pub trait StrengthObserver {
    fn strength_published(&mut self, event: &StrengthEvent);
}

impl<F> StrengthObserver for F
where
    F: FnMut(&StrengthEvent),
{
    fn strength_published(&mut self, event: &StrengthEvent) {
        self(event)
    }
}

/// Forwards events to an async consumer such as the indicator animator.
#[cfg(feature = "async")]
#[derive(Debug, Clone)]
pub struct ChannelObserver {
    tx: mpsc::UnboundedSender<StrengthEvent>,
}

#[cfg(feature = "async")]
impl ChannelObserver {
    pub fn new(tx: mpsc::UnboundedSender<StrengthEvent>) -> Self {
        Self { tx }
    }

    /// Creates an observer together with the receiving half.
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<StrengthEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self::new(tx), rx)
    }
}

#[cfg(feature = "async")]
impl StrengthObserver for ChannelObserver {
    fn strength_published(&mut self, event: &StrengthEvent) {
        if let Err(_e) = self.tx.send(*event) {
            #[cfg(feature = "tracing")]
            tracing::warn!("Failed to forward strength event: {}", _e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(strength: PasswordStrength, previous: Option<PasswordStrength>) -> StrengthEvent {
        StrengthEvent {
            strength,
            previous,
            cause: PublishCause::Submit,
        }
    }

    #[test]
    fn test_is_change() {
        assert!(event(PasswordStrength::Weak, None).is_change());
        assert!(event(PasswordStrength::Medium, Some(PasswordStrength::Weak)).is_change());
        assert!(!event(PasswordStrength::Medium, Some(PasswordStrength::Medium)).is_change());
    }

    #[test]
    fn test_closure_observer() {
        let mut seen = Vec::new();
        {
            let mut observer = |e: &StrengthEvent| seen.push(e.strength);
            observer.strength_published(&event(PasswordStrength::Strong, None));
        }
        assert_eq!(seen, vec![PasswordStrength::Strong]);
    }
}
