//! Signals exchanged between a screen controller and its host.

/// How a screen ended, reported back to whoever opened it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenResult {
    Ok,
    Cancelled,
}

/// External lifecycle signal delivered alongside user requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleEvent {
    /// The screen became active again.
    Resumed,
    /// A screen opened with [`ScreenEffect::NavigateForResult`] closed.
    Returned(ScreenResult),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    Login,
    Register,
    ForgotPassword,
    Purchase,
    Checkout { plan_id: i64, plan_name: String },
}

/// One-shot side effect for the host to perform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScreenEffect {
    Navigate(Destination),
    /// Open a screen and deliver its [`ScreenResult`] back as
    /// [`LifecycleEvent::Returned`].
    NavigateForResult(Destination),
    /// Open a URL outside the app.
    OpenUrl(String),
    /// Transient confirmation message.
    Toast(String),
    /// Rebuild the screen, e.g. after a language change.
    Recreate,
    /// Close this screen.
    Finish(ScreenResult),
    /// Close every screen.
    FinishAll,
}

impl ScreenEffect {
    pub fn is_terminal(&self) -> bool {
        matches!(self, ScreenEffect::Finish(_) | ScreenEffect::FinishAll)
    }
}
