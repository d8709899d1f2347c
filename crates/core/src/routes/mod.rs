//! Route table lookup
//!
//! The tree itself is plain data (see [`table`]). This module resolves concrete
//! paths against it, builds paths for named routes, and hands role
//! requirements to the guard in [`guard`].

pub mod guard;
pub mod table;


pub use guard::{GuardDecision, check_access};
pub use table::{RouteEntry, View, route_table};

use crate::role::Role;
use std::collections::BTreeMap;

/// Result of matching a concrete path against the route table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedRoute {
    /// Names of the matched entries, outermost first
    pub names: Vec<&'static str>,
    /// View of the innermost matched entry
    pub view: View,
    /// Layout view of a gated parent, when the leaf is one of its children
    pub layout: Option<View>,
    /// Captured `:param` segments
    pub params: BTreeMap<String, String>,
    /// Role inherited from the nearest gated ancestor
    pub required_role: Option<Role>,
}

impl ResolvedRoute {
    /// Name of the innermost matched entry
    pub fn name(&self) -> &'static str {
        self.names.last().copied().unwrap_or_default()
    }

    pub fn param(&self, key: &str) -> Option<&str> {
        self.params.get(key).map(String::as_str)
    }
}

/// Resolve a path such as `/doctor/patients/12?tab=notes`
pub fn resolve(path: &str) -> Option<ResolvedRoute> {
    let segments = path_segments(path);
    route_table()
        .iter()
        .find_map(|entry| resolve_entry(entry, &segments, None, &[]))
}

fn resolve_entry(
    entry: &'static RouteEntry,
    segments: &[&str],
    inherited_role: Option<Role>,
    parents: &[&'static RouteEntry],
) -> Option<ResolvedRoute> {
    let mut params = BTreeMap::new();
    let rest = match_prefix(entry, segments, &mut params)?;
    let required_role = entry.required_role.or(inherited_role);

    let mut chain = parents.to_vec();
    chain.push(entry);

    if rest.is_empty() {
        return Some(build_resolved(&chain, params, required_role));
    }

    entry.children.iter().find_map(|child| {
        resolve_entry(child, rest, required_role, &chain).map(|mut resolved| {
            for (key, value) in &params {
                resolved.params.entry(key.clone()).or_insert_with(|| value.clone());
            }
            resolved
        })
    })
}

fn build_resolved(
    chain: &[&'static RouteEntry],
    params: BTreeMap<String, String>,
    required_role: Option<Role>,
) -> ResolvedRoute {
    let leaf = chain[chain.len() - 1];
    let layout = if chain.len() > 1 {
        Some(chain[0].view)
    } else {
        None
    };

    ResolvedRoute {
        names: chain.iter().map(|entry| entry.name).collect(),
        view: leaf.view,
        layout,
        params,
        required_role,
    }
}

/// Match the entry's pattern against the front of `segments`, returning the rest
fn match_prefix<'a>(
    entry: &RouteEntry,
    segments: &'a [&'a str],
    params: &mut BTreeMap<String, String>,
) -> Option<&'a [&'a str]> {
    let mut rest = segments;
    for pattern in entry.segments() {
        let (first, tail) = rest.split_first()?;
        if let Some(name) = pattern.strip_prefix(':') {
            params.insert(name.to_string(), (*first).to_string());
        } else if pattern != *first {
            return None;
        }
        rest = tail;
    }
    Some(rest)
}

fn path_segments(path: &str) -> Vec<&str> {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    path.split('/').filter(|segment| !segment.is_empty()).collect()
}

/// Find an entry anywhere in the tree by its name
pub fn find_by_name(name: &str) -> Option<&'static RouteEntry> {
    fn search(entries: &'static [RouteEntry], name: &str) -> Option<&'static RouteEntry> {
        entries.iter().find_map(|entry| {
            if entry.name == name {
                Some(entry)
            } else {
                search(entry.children, name)
            }
        })
    }
    search(route_table(), name)
}

/// Build a concrete path for a named route, filling `:param` segments.
///
/// Returns `None` for an unknown name or a missing parameter.
pub fn href(name: &str, params: &[(&str, &str)]) -> Option<String> {
    let pattern = full_pattern(route_table(), name, "")?;
    let mut path = String::new();
    for segment in pattern.split('/').filter(|segment| !segment.is_empty()) {
        path.push('/');
        match segment.strip_prefix(':') {
            Some(key) => {
                let (_, value) = params.iter().find(|(param, _)| *param == key)?;
                path.push_str(value);
            }
            None => path.push_str(segment),
        }
    }
    if path.is_empty() {
        path.push('/');
    }
    Some(path)
}

fn full_pattern(entries: &'static [RouteEntry], name: &str, prefix: &str) -> Option<String> {
    entries.iter().find_map(|entry| {
        let joined = format!("{}/{}", prefix.trim_end_matches('/'), entry.path.trim_start_matches('/'));
        if entry.name == name {
            Some(joined)
        } else {
            full_pattern(entry.children, name, &joined)
        }
    })
}
