//! Edit/submit callbacks invoked by the hosting view layer.

/// Input callbacks of a text entry control.
///
/// `None` means the host could not read the current text; implementations
/// reject the operation and leave their state untouched.
pub trait InputHandler {
    /// Called on every edit with the candidate text. Returns whether the edit
    /// is accepted.
    fn on_text_change(&mut self, candidate: Option<&str>) -> bool;

    /// Called when the user submits. Returns whether the submission was
    /// handled.
    fn on_submit(&mut self, current: Option<&str>) -> bool;
}
