//! Route table for hash-based navigation.
//!
//! URL format: `#/path` (e.g., `#/home`, `#/profile`). The bare root
//! `#/` never maps to an entry; it is resolved by [`RootPolicy`].

use crate::core::error::RouteTableError;
use crate::models::View;

/// Canonical root path.
pub const ROOT_PATH: &str = "/";

/// A single row of the route table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RouteEntry {
    /// Exact path, always starting with `/`.
    pub path: &'static str,
    /// View rendered when navigation is allowed.
    pub view: View,
    /// Whether an active session is needed to reach this route.
    pub requires_auth: bool,
}

impl RouteEntry {
    /// Route reachable without a session.
    pub const fn public(path: &'static str, view: View) -> Self {
        Self {
            path,
            view,
            requires_auth: false,
        }
    }

    /// Route gated behind an active session.
    pub const fn protected(path: &'static str, view: View) -> Self {
        Self {
            path,
            view,
            requires_auth: true,
        }
    }
}

/// Target of the bare root path.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RootPolicy {
    /// `#/` goes to the login route, even with an active session.
    RedirectToLogin,
    /// `#/` goes to the home route (which is itself guarded).
    RedirectToHome,
}

/// Immutable, validated route table.
///
/// Invariants checked at construction:
/// - every path starts with `/` and is not the root path
/// - paths are unique
/// - exactly one entry is public (the login entry)
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RouteTable {
    entries: Vec<RouteEntry>,
    login: usize,
}

impl RouteTable {
    pub fn new(entries: Vec<RouteEntry>) -> Result<Self, RouteTableError> {
        for (i, entry) in entries.iter().enumerate() {
            if !entry.path.starts_with('/') || entry.path == ROOT_PATH {
                return Err(RouteTableError::InvalidPath(entry.path.to_string()));
            }
            if entries[..i].iter().any(|e| e.path == entry.path) {
                return Err(RouteTableError::DuplicatePath(entry.path.to_string()));
            }
        }

        let mut public = entries
            .iter()
            .enumerate()
            .filter(|(_, e)| !e.requires_auth)
            .map(|(i, _)| i);
        let login = public.next().ok_or(RouteTableError::NoPublicEntry)?;
        if public.next().is_some() {
            let count = entries.iter().filter(|e| !e.requires_auth).count();
            return Err(RouteTableError::MultiplePublicEntries(count));
        }

        Ok(Self { entries, login })
    }

    /// Table with no invariant checks; `login` indexes the login entry.
    #[cfg(test)]
    pub(crate) fn new_unchecked(entries: Vec<RouteEntry>, login: usize) -> Self {
        Self { entries, login }
    }

    /// The application's route table.
    pub fn default_routes() -> Self {
        Self {
            entries: vec![
                RouteEntry::public("/login", View::Login),
                RouteEntry::protected("/home", View::Home),
                RouteEntry::protected("/profile", View::Profile),
                RouteEntry::protected("/search", View::Search),
            ],
            login: 0,
        }
    }

    /// Exact match on an already normalized path.
    pub fn lookup(&self, path: &str) -> Option<&RouteEntry> {
        self.entries.iter().find(|e| e.path == path)
    }

    /// First entry rendering `view`.
    pub fn path_of(&self, view: View) -> Option<&'static str> {
        self.entries.iter().find(|e| e.view == view).map(|e| e.path)
    }

    /// The single public entry.
    pub fn login_entry(&self) -> &RouteEntry {
        &self.entries[self.login]
    }

    pub fn entries(&self) -> &[RouteEntry] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &RouteEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for RouteTable {
    fn default() -> Self {
        Self::default_routes()
    }
}

/// Normalize a URL hash or raw path into route-table form.
///
/// `""`, `"#"`, `"#/"` → `/`; `"#/home/"` → `/home`; `"home?x=1"` → `/home`.
pub fn normalize_path(raw: &str) -> String {
    let path = raw.trim_start_matches('#');
    let path = path.split('?').next().unwrap_or_default();
    let path = path.trim_start_matches('/').trim_end_matches('/');

    if path.is_empty() {
        return ROOT_PATH.to_string();
    }
    format!("/{}", path)
}

/// Convert a table path to a URL hash.
pub fn to_hash(path: &str) -> String {
    format!("#{}", normalize_path(path))
}

/// Current path from the browser URL hash.
pub fn current_path() -> String {
    normalize_path(&crate::utils::dom::get_hash())
}
