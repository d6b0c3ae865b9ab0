//! Declarative routing for the retort admin console.
//!
//! A route table is an ordered list of `(pattern, access, target)` rows,
//! evaluated first-match-wins. The authorization check is a separate
//! [`AuthGuard`] predicate applied to admin-gated rows, never baked into a
//! row itself, so the gate is testable on its own.
//!
//! Redirects are replace-style: following one must not leave the redirecting
//! path in any history the caller keeps.

mod pattern;
pub use pattern::Pattern;

mod guard;
pub use guard::AuthGuard;

mod table;
pub use table::{Access, Resolution, Route, RouteTable, Target, View};
