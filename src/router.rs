//! Static route table for the two views.
//!
//! DESIGN
//! ======
//! Three records: `/` redirects to `/ranking`, `/ranking` and `/matches`
//! map to their views. No guards, no lazy loading. Matching behaves like a
//! browser history router in its default mode: query and fragment are
//! ignored, one trailing slash is tolerated, and case does not matter.

use std::fmt;

/// A top-level view the router can land on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum View {
    Ranking,
    Matches,
}

impl View {
    /// Route name, as used by [`by_name`].
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Ranking => "ranking",
            Self::Matches => "matches",
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteTarget {
    View(View),
    Redirect(&'static str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteRecord {
    pub path: &'static str,
    pub name: Option<&'static str>,
    pub target: RouteTarget,
}

/// Where a path ends up after redirects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolved {
    pub view: View,
    pub path: &'static str,
}

static ROUTES: [RouteRecord; 3] = [
    RouteRecord { path: "/", name: None, target: RouteTarget::Redirect("/ranking") },
    RouteRecord { path: "/ranking", name: Some("ranking"), target: RouteTarget::View(View::Ranking) },
    RouteRecord { path: "/matches", name: Some("matches"), target: RouteTarget::View(View::Matches) },
];

#[must_use]
pub fn routes() -> &'static [RouteRecord] {
    &ROUTES
}

/// Resolve `path` to a view, following redirects. `None` for unknown paths.
#[must_use]
pub fn resolve(path: &str) -> Option<Resolved> {
    let mut record = find(path)?;
    // A chain longer than the table must be a cycle.
    for _ in 0..ROUTES.len() {
        match record.target {
            RouteTarget::View(view) => return Some(Resolved { view, path: record.path }),
            RouteTarget::Redirect(to) => record = find(to)?,
        }
    }
    None
}

/// Canonical path of a view.
#[must_use]
pub fn path_for(view: View) -> &'static str {
    ROUTES
        .iter()
        .find(|r| r.target == RouteTarget::View(view))
        .map_or("/", |r| r.path)
}

/// Look up a view by route name.
#[must_use]
pub fn by_name(name: &str) -> Option<View> {
    ROUTES.iter().find_map(|r| match (r.name, r.target) {
        (Some(n), RouteTarget::View(view)) if n == name => Some(view),
        _ => None,
    })
}

fn find(path: &str) -> Option<&'static RouteRecord> {
    let path = normalize(path);
    ROUTES.iter().find(|r| r.path.eq_ignore_ascii_case(path))
}

fn normalize(raw: &str) -> &str {
    let end = raw.find(&['?', '#'][..]).unwrap_or(raw.len());
    let path = &raw[..end];
    match path.strip_suffix('/') {
        Some(stripped) if !stripped.is_empty() => stripped,
        _ if path.is_empty() => "/",
        _ => path,
    }
}

#[cfg(test)]
#[path = "router_test.rs"]
mod tests;
