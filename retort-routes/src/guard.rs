/// The authorization gate consulted for admin-gated routes.
///
/// The session-check mechanism lives with the caller (the console's
/// `Session` implements this over its signed-in state); the table only asks
/// the yes/no question. An unauthorized hit on a gated row resolves to a
/// replace-style redirect to `/login`.
pub trait AuthGuard {
    /// Whether the current session may see admin views.
    fn is_authorized(&self) -> bool;
}

/// Fixed-answer guard, mostly useful in tests and examples.
impl AuthGuard for bool {
    fn is_authorized(&self) -> bool {
        *self
    }
}
