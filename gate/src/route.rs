//! Route table and path matching.
//!
//! DESIGN
//! ======
//! The table is fixed at compile time. Paths are matched segment-wise with
//! `:name` segments capturing parameters; there is no regex and no
//! backtracking. Patterns of different segment counts can never collide, so
//! `/products/:id` and `/products/:id/edit` stay disjoint.

#[cfg(test)]
#[path = "route_test.rs"]
mod tests;

/// A resolved view with its captured parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Route {
    Home,
    SignUp,
    SignIn,
    SignOut,
    Products,
    ProductDetail { id: String },
    ProductCreate,
    ProductEdit { id: String },
}

/// Access requirement for a route.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Access {
    /// Renders for every identity state.
    Public,
    /// Requires an authenticated identity; otherwise redirect to `fallback`.
    Protected {
        /// Path-specific redirect target, not a shared default.
        fallback: &'static str,
    },
}

/// Parameters captured from `:name` pattern segments.
struct Params(Vec<(&'static str, String)>);

impl Params {
    /// Captured value for `name`, or empty if the pattern has no such
    /// segment. Table builders only ask for names their own pattern binds.
    fn take(&mut self, name: &str) -> String {
        self.0
            .iter_mut()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| std::mem::take(v))
            .unwrap_or_default()
    }
}

struct RouteDef {
    pattern: &'static str,
    access: Access,
    build: fn(&mut Params) -> Route,
}

const ROUTES: &[RouteDef] = &[
    RouteDef { pattern: "/", access: Access::Public, build: |_| Route::Home },
    RouteDef { pattern: "/sign-up", access: Access::Public, build: |_| Route::SignUp },
    RouteDef { pattern: "/sign-in", access: Access::Public, build: |_| Route::SignIn },
    RouteDef { pattern: "/sign-out", access: Access::Public, build: |_| Route::SignOut },
    RouteDef { pattern: "/products", access: Access::Public, build: |_| Route::Products },
    RouteDef {
        pattern: "/add-product",
        access: Access::Protected { fallback: "/sign-up" },
        build: |_| Route::ProductCreate,
    },
    RouteDef {
        pattern: "/products/:id/edit",
        access: Access::Protected { fallback: "/" },
        build: |p| Route::ProductEdit { id: p.take("id") },
    },
    RouteDef {
        pattern: "/products/:id",
        access: Access::Public,
        build: |p| Route::ProductDetail { id: p.take("id") },
    },
];

/// Match a request path against the fixed table.
///
/// A trailing slash and anything from `?` or `#` onward are ignored.
/// Returns the resolved route and its access requirement, or `None` for a
/// path with no table entry.
#[must_use]
pub fn match_path(path: &str) -> Option<(Route, Access)> {
    let segments = normalize(path);
    for def in ROUTES {
        if let Some(mut params) = match_pattern(def.pattern, &segments) {
            return Some(((def.build)(&mut params), def.access));
        }
    }
    None
}

fn normalize(path: &str) -> Vec<&str> {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    path.split('/').filter(|s| !s.is_empty()).collect()
}

fn match_pattern(pattern: &'static str, segments: &[&str]) -> Option<Params> {
    let pattern_segments: Vec<&'static str> =
        pattern.split('/').filter(|s| !s.is_empty()).collect();
    if pattern_segments.len() != segments.len() {
        return None;
    }

    let mut captured = Vec::new();
    for (pat, seg) in pattern_segments.iter().zip(segments) {
        if let Some(name) = pat.strip_prefix(':') {
            captured.push((name, (*seg).to_owned()));
        } else if pat != seg {
            return None;
        }
    }
    Some(Params(captured))
}
