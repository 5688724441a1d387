//! Activation gating for user-generated events.

/// Whether a qualifying activation event may reach the caller's callback.
pub fn should_activate(effective_disabled: bool) -> bool {
    !effective_disabled
}

/// Interaction guard bound to one render's effective disabled flag and optional callback.
///
/// Activation is fire-and-forget: a panic raised by the callback unwinds straight through
/// [`dispatch`](Self::dispatch) to the host's event boundary.
pub struct ActivationGuard<'a, E> {
    effective_disabled: bool,
    on_activate: Option<&'a dyn Fn(E)>,
}

impl<'a, E> ActivationGuard<'a, E> {
    /// Bind a guard to the render's effective disabled flag.
    pub fn new(effective_disabled: bool, on_activate: Option<&'a dyn Fn(E)>) -> Self {
        Self {
            effective_disabled,
            on_activate,
        }
    }

    /// Whether events currently reach the callback.
    pub fn is_armed(&self) -> bool {
        should_activate(self.effective_disabled)
    }

    /// Route one activation event, returning whether the callback ran.
    pub fn dispatch(&self, event: E) -> bool {
        if !self.is_armed() {
            return false;
        }
        match self.on_activate {
            Some(on_activate) => {
                on_activate(event);
                true
            }
            None => false,
        }
    }
}
