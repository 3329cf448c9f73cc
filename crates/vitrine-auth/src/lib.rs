//! Session authentication and the request access gate.
//!
//! The gate intercepts every inbound request, classifies its path against a
//! static route table and decides between passing through, redirecting to
//! the login page or the admin dashboard, and answering 401 for the private
//! API. Session state is a signed cookie; verifying it is the only auth
//! fact the gate consumes.

pub mod error;
pub mod gate;
pub mod middleware;
pub mod password;
pub mod session;

pub use error::AuthError;
pub use gate::{GateDecision, RouteKind, RouteTable};
pub use middleware::{GateState, access_gate};
pub use session::{SESSION_COOKIE, SessionClaims, SessionService};
