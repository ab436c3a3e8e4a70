//! Password entry field with a length-based strength indicator
//!
//! This library models a password field independently of any UI toolkit:
//! the host forwards edits and submissions, draws the text and the
//! three-bar indicator, and optionally runs the indicator animator.
//!
//! # Features
//!
//! - `async` (default): Enables the channel observer and the indicator animator
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! - `PWD_FIELD_CONFIG_PATH`: Custom path to the TOML configuration
//!   (default: `./assets/pwd-field.toml`)
//!
//! # Example
//!
//! ```rust
//! use pwd_field::{InputHandler, PasswordField, PasswordStrength, StrengthEvent};
//! use secrecy::ExposeSecret;
//!
//! let config = pwd_field::load_config_or_default().expect("Invalid config");
//! let mut field = PasswordField::new(config);
//! field.subscribe(|event: &StrengthEvent| println!("indicator -> {:?}", event.strength));
//!
//! field.on_text_change(Some("correct horse"));
//! assert_eq!(field.current_strength(), Some(PasswordStrength::Medium));
//!
//! field.on_submit(Some("correct horse battery staple"));
//! assert_eq!(field.password().expose_secret(), "correct horse battery staple");
//! assert_eq!(field.current_strength(), Some(PasswordStrength::Strong));
//! ```
//!
//! Strength is a function of character count only (9 / 19 / 20 by default).
//! It is a display aid, not a security assessment.

mod config;
mod field;
mod handler;
mod indicator;
mod observer;
mod strength;
mod style;

#[cfg(feature = "async")]
mod animator;

// Public API
pub use config::{
    get_config_path, load_config, load_config_from_path, load_config_or_default, ConfigError,
    FieldConfig,
};
pub use field::{PasswordField, Visibility};
pub use handler::InputHandler;
pub use indicator::{BarFrame, IndicatorFrame, IndicatorTransition, BAR_COUNT};
pub use observer::{PublishCause, StrengthEvent, StrengthObserver};
pub use strength::{classify_strength, PasswordStrength, StrengthThresholds};
pub use style::{FieldStyle, FontStyle, FontWeight, Hsba, IndicatorStyle, StrengthLabels};

#[cfg(feature = "async")]
pub use animator::run_indicator_animator;

#[cfg(feature = "async")]
pub use observer::ChannelObserver;
