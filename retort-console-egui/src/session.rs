use retort_routes::AuthGuard;

/// The signed-in admin, if any.
///
/// Presence of a session is the whole authorization check here; the real
/// credential exchange belongs to the authentication collaborator and stays
/// out of scope.
#[derive(Clone, Debug, Default)]
pub struct Session {
    admin: Option<String>,
}

impl Session {
    /// An anonymous session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a session for the named admin.
    pub fn sign_in(&mut self, name: impl Into<String>) {
        let name = name.into();
        log::info!("session opened for {name}");
        self.admin = Some(name);
    }

    /// Drop back to anonymous.
    pub fn sign_out(&mut self) {
        self.admin = None;
    }

    /// Name of the signed-in admin, if any.
    pub fn admin_name(&self) -> Option<&str> {
        self.admin.as_deref()
    }
}

impl AuthGuard for Session {
    fn is_authorized(&self) -> bool {
        self.admin.is_some()
    }
}
