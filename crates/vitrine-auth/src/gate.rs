//! Request classification for the access gate.
//!
//! Every path falls into one of three buckets: exempt (the gate does not
//! run), classified by the route table (exact entries checked before prefix
//! entries, first match wins), or unmatched. Unmatched paths are protected
//! by default: they pass only with a valid session.

/// Classification kinds for gated routes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteKind {
    /// Always allow, regardless of auth state.
    Passthrough,
    /// Login-like pages: allow only unauthenticated visitors; authenticated
    /// ones are sent to the admin dashboard.
    AuthRedirect,
}

/// Outcome of a gate decision for one request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateDecision {
    /// Continue to the route handler.
    Continue,
    /// Redirect to the login page.
    RedirectToLogin,
    /// Redirect to the admin dashboard.
    RedirectToDashboard,
    /// Respond 401 with the structured JSON body (private API only).
    Unauthorized,
}

/// The static route table.
///
/// Immutable after construction; built once at startup and shared by
/// reference with the gate middleware. There is no mutation path.
#[derive(Debug, Clone)]
pub struct RouteTable {
    exact: Vec<(&'static str, RouteKind)>,
    prefixes: Vec<(&'static str, RouteKind)>,
    exempt_exact: Vec<&'static str>,
    exempt_prefixes: Vec<&'static str>,
    private_api_prefix: &'static str,
}

impl RouteTable {
    /// The storefront's route table.
    pub fn storefront() -> Self {
        Self {
            exact: vec![
                ("/", RouteKind::Passthrough),
                ("/login", RouteKind::AuthRedirect),
                ("/reset-password", RouteKind::AuthRedirect),
                ("/sobre", RouteKind::Passthrough),
                ("/termos", RouteKind::Passthrough),
                ("/cookies", RouteKind::Passthrough),
                ("/privacidade", RouteKind::Passthrough),
                ("/produtos", RouteKind::Passthrough),
                ("/categorias", RouteKind::Passthrough),
                ("/contato", RouteKind::Passthrough),
            ],
            prefixes: vec![
                ("/produto", RouteKind::Passthrough),
                ("/categorias", RouteKind::Passthrough),
            ],
            exempt_exact: vec![
                "/favicon.ico",
                "/sitemap.xml",
                "/robots.txt",
                "/healthz",
                "/readyz",
            ],
            exempt_prefixes: vec!["/api/auth", "/api/public", "/uploads"],
            private_api_prefix: "/api/private",
        }
    }

    /// True when the gate must not run at all for this path.
    pub fn is_exempt(&self, path: &str) -> bool {
        if self.exempt_exact.contains(&path) {
            return true;
        }
        self.exempt_prefixes.iter().any(|p| path.starts_with(p))
    }

    /// Classifies a path against the tables. Exact entries win over prefix
    /// entries; within each table the first match wins.
    pub fn classify(&self, path: &str) -> Option<RouteKind> {
        if let Some((_, kind)) = self.exact.iter().find(|(p, _)| *p == path) {
            return Some(*kind);
        }
        self.prefixes
            .iter()
            .find(|(p, _)| path.starts_with(p))
            .map(|(_, kind)| *kind)
    }

    /// Decides the gate outcome for a path given the session state.
    ///
    /// Exempt paths never reach this point; the middleware short-circuits
    /// them before verifying the session.
    pub fn decide(&self, path: &str, authenticated: bool) -> GateDecision {
        if path.starts_with(self.private_api_prefix) {
            return if authenticated {
                GateDecision::Continue
            } else {
                GateDecision::Unauthorized
            };
        }

        match self.classify(path) {
            Some(RouteKind::Passthrough) => GateDecision::Continue,
            Some(RouteKind::AuthRedirect) if authenticated => GateDecision::RedirectToDashboard,
            Some(RouteKind::AuthRedirect) => GateDecision::Continue,
            // Protect-by-default: anything not in the tables needs a session.
            None if authenticated => GateDecision::Continue,
            None => GateDecision::RedirectToLogin,
        }
    }
}
