use crate::{AuthGuard, Pattern};

/// Top-level views the console can mount. The three scraping views are
/// routing targets only; their screens are placeholders owned by the
/// scraping subsystem.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum View {
    Home,
    Login,
    Dashboard,
    ScrapingConfigurator,
    SavedSelectors,
    ScrapingHistory,
}

/// Whether a row is public or sits behind the authorization gate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Access {
    Public,
    Admin,
}

/// What a matched row does: mount a view, or bounce somewhere else.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Target {
    Render(View),
    Redirect(&'static str),
}

/// One row of the table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Route {
    pub pattern: Pattern,
    pub access: Access,
    pub target: Target,
}

impl Route {
    pub const fn new(pattern: Pattern, access: Access, target: Target) -> Self {
        Self {
            pattern,
            access,
            target,
        }
    }
}

/// The outcome of resolving one path against the table.
///
/// Redirects are replace-style: a caller maintaining history must substitute
/// the redirecting entry, never stack on top of it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Resolution {
    Render(View),
    Redirect(&'static str),
}

/// An ordered route table, evaluated first-match-wins in declaration order.
#[derive(Clone, Debug)]
pub struct RouteTable {
    routes: Vec<Route>,
}

impl RouteTable {
    /// Build a table from rows in match order.
    pub fn new(routes: Vec<Route>) -> Self {
        Self { routes }
    }

    /// The console's table: public landing and login, the gated admin
    /// subtree, a gated admin catch-all onto the dashboard, and a global
    /// catch-all onto the landing page.
    pub fn standard() -> Self {
        use Access::{Admin, Public};
        use Pattern::{Any, Exact, Prefix};
        use Target::{Redirect, Render};

        Self::new(vec![
            Route::new(Exact("/"), Public, Render(View::Home)),
            Route::new(Exact("/login"), Public, Render(View::Login)),
            Route::new(Exact("/admin/dashboard"), Admin, Render(View::Dashboard)),
            Route::new(
                Exact("/admin/scraping/configurator"),
                Admin,
                Render(View::ScrapingConfigurator),
            ),
            Route::new(
                Exact("/admin/scraping/selectors"),
                Admin,
                Render(View::SavedSelectors),
            ),
            Route::new(
                Exact("/admin/scraping/history"),
                Admin,
                Render(View::ScrapingHistory),
            ),
            Route::new(Prefix("/admin"), Admin, Redirect("/admin/dashboard")),
            Route::new(Any, Public, Redirect("/")),
        ])
    }

    /// The rows, in match order.
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Resolve one step: the first matching row decides, with the guard
    /// consulted before any gated target. `None` means no row matched
    /// (impossible for a table ending in a catch-all).
    pub fn resolve(&self, path: &str, guard: &dyn AuthGuard) -> Option<Resolution> {
        let route = self.routes.iter().find(|r| r.pattern.matches(path))?;

        if route.access == Access::Admin && !guard.is_authorized() {
            log::debug!("gate refused {path}, redirecting to /login");
            return Some(Resolution::Redirect("/login"));
        }

        Some(match route.target {
            Target::Render(view) => Resolution::Render(view),
            Target::Redirect(to) => Resolution::Redirect(to),
        })
    }

    /// Follow redirects to a terminal view.
    ///
    /// The standard table is statically acyclic; the hop bound is a backstop
    /// against a misdeclared custom table, falling back to the landing view.
    pub fn navigate(&self, path: &str, guard: &dyn AuthGuard) -> View {
        const MAX_HOPS: usize = 8;

        let mut current = path;
        for _ in 0..MAX_HOPS {
            match self.resolve(current, guard) {
                Some(Resolution::Render(view)) => return view,
                Some(Resolution::Redirect(to)) => current = to,
                None => break,
            }
        }
        log::warn!("no terminal view for {path}, falling back to landing");
        View::Home
    }
}

impl Default for RouteTable {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const AUTHORIZED: bool = true;
    const ANONYMOUS: bool = false;

    #[test]
    fn public_paths_render_for_everyone() {
        let table = RouteTable::standard();
        assert_eq!(
            table.resolve("/", &ANONYMOUS),
            Some(Resolution::Render(View::Home))
        );
        assert_eq!(
            table.resolve("/login", &ANONYMOUS),
            Some(Resolution::Render(View::Login))
        );
    }

    #[test]
    fn admin_paths_render_when_authorized() {
        let table = RouteTable::standard();
        assert_eq!(
            table.resolve("/admin/dashboard", &AUTHORIZED),
            Some(Resolution::Render(View::Dashboard))
        );
        assert_eq!(
            table.resolve("/admin/scraping/configurator", &AUTHORIZED),
            Some(Resolution::Render(View::ScrapingConfigurator))
        );
        assert_eq!(
            table.resolve("/admin/scraping/selectors", &AUTHORIZED),
            Some(Resolution::Render(View::SavedSelectors))
        );
        assert_eq!(
            table.resolve("/admin/scraping/history", &AUTHORIZED),
            Some(Resolution::Render(View::ScrapingHistory))
        );
    }

    #[test]
    fn unknown_admin_path_redirects_to_dashboard_when_authorized() {
        let table = RouteTable::standard();
        assert_eq!(
            table.resolve("/admin/anything-unrecognized", &AUTHORIZED),
            Some(Resolution::Redirect("/admin/dashboard"))
        );
        assert_eq!(
            table.navigate("/admin/anything-unrecognized", &AUTHORIZED),
            View::Dashboard
        );
    }

    #[test]
    fn any_admin_path_lands_on_login_when_anonymous() {
        let table = RouteTable::standard();
        for path in [
            "/admin/dashboard",
            "/admin/scraping/history",
            "/admin/anything-unrecognized",
        ] {
            assert_eq!(
                table.resolve(path, &ANONYMOUS),
                Some(Resolution::Redirect("/login")),
                "gate must refuse {path}"
            );
            assert_eq!(table.navigate(path, &ANONYMOUS), View::Login);
        }
    }

    #[test]
    fn unmatched_path_redirects_to_landing() {
        let table = RouteTable::standard();
        assert_eq!(
            table.resolve("/unknown/path", &AUTHORIZED),
            Some(Resolution::Redirect("/"))
        );
        assert_eq!(table.navigate("/unknown/path", &ANONYMOUS), View::Home);
    }

    #[test]
    fn first_match_wins_over_later_rows() {
        // The dashboard row precedes the /admin catch-all; swapping the
        // order would shadow it, so resolution must pick the earlier row.
        let table = RouteTable::standard();
        assert_eq!(
            table.resolve("/admin/dashboard", &AUTHORIZED),
            Some(Resolution::Render(View::Dashboard))
        );
    }

    #[test]
    fn empty_table_resolves_nothing() {
        let table = RouteTable::new(Vec::new());
        assert_eq!(table.resolve("/", &AUTHORIZED), None);
        assert_eq!(table.navigate("/", &AUTHORIZED), View::Home);
    }

    #[test]
    fn redirect_cycle_hits_the_hop_bound() {
        use Access::Public;
        use Pattern::Exact;
        use Target::Redirect;

        let table = RouteTable::new(vec![
            Route::new(Exact("/a"), Public, Redirect("/b")),
            Route::new(Exact("/b"), Public, Redirect("/a")),
        ]);
        assert_eq!(table.navigate("/a", &AUTHORIZED), View::Home);
    }
}
