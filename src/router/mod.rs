// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Path based navigation between the main views.
//!
//! Three static routes map URL-style paths to views:
//!
//! | name       | path            |
//! |------------|-----------------|
//! | `home`     | `/`             |
//! | `search`   | `/search`       |
//! | `playlist` | `/playlist/:id` |
//!
//! There are no guards, redirects or fallback route, a path that matches
//! nothing is simply refused. The [`Router`] keeps a history stack so the
//! user can step back through visited views.

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub(crate) enum RouteError {
    #[error("no route matches {0}")]
    NoMatch(String),
}

/// A resolved route, carrying any path parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Route {
    Home,
    Search,
    Playlist { id: String },
}

struct RouteDef {
    name: &'static str,
    pattern: &'static str,
}

const ROUTES: [RouteDef; 3] = [
    RouteDef { name: "home", pattern: "/" },
    RouteDef { name: "search", pattern: "/search" },
    RouteDef { name: "playlist", pattern: "/playlist/:id" },
];

impl Route {
    pub(crate) fn name(&self) -> &'static str {
        match self {
            Route::Home => "home",
            Route::Search => "search",
            Route::Playlist { .. } => "playlist",
        }
    }

    pub(crate) fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::Search => "/search".to_string(),
            Route::Playlist { id } => format!("/playlist/{}", id),
        }
    }

    // Builds a route from a matched definition and its captured parameters.
    fn from_match(name: &str, params: &[(&str, &str)]) -> Option<Self> {
        let param = |key: &str| params.iter().find(|(k, _)| *k == key).map(|(_, v)| *v);

        match name {
            "home" => Some(Route::Home),
            "search" => Some(Route::Search),
            "playlist" => param("id").map(|id| Route::Playlist { id: id.to_string() }),
            _ => None,
        }
    }
}

/// Matches a path against the route table.
///
/// Query strings, fragments and trailing slashes are ignored.
pub(crate) fn resolve(path: &str) -> Option<Route> {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

    ROUTES.iter().find_map(|def| {
        let pattern: Vec<&str> = def.pattern.split('/').filter(|s| !s.is_empty()).collect();
        if pattern.len() != segments.len() {
            return None;
        }

        let mut params = Vec::new();
        for (expected, actual) in pattern.iter().zip(&segments) {
            match expected.strip_prefix(':') {
                Some(key) => params.push((key, *actual)),
                None if expected == actual => {}
                None => return None,
            }
        }

        Route::from_match(def.name, &params)
    })
}

/// Navigation history, most recent route last.
pub(crate) struct Router {
    history: Vec<Route>,
}

impl Router {
    /// Creates a router positioned at the home route.
    pub(crate) fn new() -> Self {
        Self {
            history: vec![Route::Home],
        }
    }

    pub(crate) fn current(&self) -> &Route {
        // History is never empty, `back` refuses to pop the last entry
        &self.history[self.history.len() - 1]
    }

    /// Navigates to `path`, returning the new current route.
    ///
    /// Navigating to the route already showing does not grow the history.
    pub(crate) fn push(&mut self, path: &str) -> Result<&Route, RouteError> {
        let route = resolve(path).ok_or_else(|| RouteError::NoMatch(path.to_string()))?;
        if *self.current() != route {
            self.history.push(route);
        }
        Ok(self.current())
    }

    /// Returns to the previous route, or `None` when already at the start.
    pub(crate) fn back(&mut self) -> Option<&Route> {
        if self.history.len() <= 1 {
            return None;
        }
        self.history.pop();
        Some(self.current())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_the_three_static_routes() {
        assert_eq!(resolve("/"), Some(Route::Home));
        assert_eq!(resolve("/search"), Some(Route::Search));
        assert_eq!(resolve("/playlist/42"), Some(Route::Playlist { id: "42".to_string() }));
    }

    #[test]
    fn ignores_query_and_trailing_slash() {
        assert_eq!(resolve("/search/?keyword=abc"), Some(Route::Search));
        assert_eq!(resolve("/playlist/7/#top"), Some(Route::Playlist { id: "7".to_string() }));
        assert_eq!(resolve(""), Some(Route::Home));
    }

    #[test]
    fn refuses_unknown_paths() {
        assert_eq!(resolve("/playlist"), None);
        assert_eq!(resolve("/playlist/1/tracks"), None);
        assert_eq!(resolve("/settings"), None);
    }

    #[test]
    fn names_and_paths_round_trip() {
        let route = Route::Playlist { id: "abc".to_string() };
        assert_eq!(route.name(), "playlist");
        assert_eq!(resolve(&route.path()), Some(route));
        assert_eq!(Route::Search.name(), "search");
        assert_eq!(Route::Home.path(), "/");
    }

    #[test]
    fn history_steps_back_to_home() {
        let mut router = Router::new();
        router.push("/search").unwrap();
        router.push("/playlist/3").unwrap();

        assert_eq!(router.back(), Some(&Route::Search));
        assert_eq!(router.back(), Some(&Route::Home));
        assert_eq!(router.back(), None);
        assert_eq!(router.current(), &Route::Home);
    }

    #[test]
    fn repeated_navigation_is_not_recorded_twice() {
        let mut router = Router::new();
        router.push("/search").unwrap();
        router.push("/search?keyword=x").unwrap();

        assert_eq!(router.back(), Some(&Route::Home));
    }

    #[test]
    fn unknown_path_leaves_history_alone() {
        let mut router = Router::new();
        router.push("/search").unwrap();

        let err = router.push("/nowhere").unwrap_err();
        assert_eq!(err, RouteError::NoMatch("/nowhere".to_string()));
        assert_eq!(router.current(), &Route::Search);
    }
}
