//! Static registry of the five University of Iceland departments.
//!
//! The remote endpoint addresses departments ("svið") by a small integer id.
//! The registry maps the human-readable name and URL slug onto that id; the
//! slug doubles as the cache key everywhere else in the crate.

use serde::Serialize;

/// One department entry: display name, slug, and the id the remote expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Department {
    pub name: &'static str,
    pub slug: &'static str,
    pub id: i32,
}

/// The five departments, in registry order. Ids are fixed by the remote.
pub const DEPARTMENTS: [Department; 5] = [
    Department {
        name: "Félagsvísindasvið",
        slug: "felagsvisindasvid",
        id: 1,
    },
    Department {
        name: "Heilbrigðisvísindasvið",
        slug: "heilbrigdisvisindasvid",
        id: 2,
    },
    Department {
        name: "Hugvísindasvið",
        slug: "hugvisindasvid",
        id: 3,
    },
    Department {
        name: "Menntavísindasvið",
        slug: "menntavisindasvid",
        id: 4,
    },
    Department {
        name: "Verkfræði- og náttúruvísindasvið",
        slug: "verkfraedi-og-natturuvisindasvid",
        id: 5,
    },
];

/// Look up a department by slug.
///
/// Returns `None` for anything outside the registry; callers that go on to
/// hit the network must treat that as [`crate::Error::UnknownDepartment`].
pub fn find(slug: &str) -> Option<&'static Department> {
    DEPARTMENTS.iter().find(|d| d.slug == slug)
}

/// Resolve a slug to the raw department id.
///
/// Pure and infallible: known slugs map to `1..=5`, anything else (including
/// the empty string) yields the `-1` sentinel. Prefer [`find`] when the id is
/// about to be forwarded into a request.
pub fn resolve_id(slug: &str) -> i32 {
    find(slug).map_or(-1, |d| d.id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_known_slugs_resolve_to_unique_ids() {
        let ids: HashSet<i32> = DEPARTMENTS.iter().map(|d| resolve_id(d.slug)).collect();
        assert_eq!(ids.len(), 5);
        for id in ids {
            assert!((1..=5).contains(&id));
        }
    }

    #[test]
    fn test_registry_order_matches_ids() {
        for (index, department) in DEPARTMENTS.iter().enumerate() {
            assert_eq!(department.id, index as i32 + 1);
        }
    }

    #[test]
    fn test_unknown_slug_resolves_to_sentinel() {
        assert_eq!(resolve_id("raunvisindasvid"), -1);
        assert_eq!(resolve_id(""), -1);
        assert_eq!(resolve_id("Hugvisindasvid"), -1);
    }

    #[test]
    fn test_find_rejects_unknown_slug() {
        assert!(find("felagsvisindasvid").is_some());
        assert!(find("not-a-department").is_none());
    }
}
