//! The static route table
//!
//! Four top-level views, no parameters, no guards. The table is declarative:
//! a view layer resolves a [Route] to whatever rendering it owns.

use std::fmt;
use std::str::FromStr;

/// A navigable top-level view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    Transactions,
    Statistics,
    Settings,
}

impl Route {
    /// All routes in navigation order
    pub fn all() -> &'static [Route] {
        &[
            Route::Home,
            Route::Transactions,
            Route::Statistics,
            Route::Settings,
        ]
    }

    /// The path for this route
    pub fn path(&self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Transactions => "/transactions",
            Route::Statistics => "/statistics",
            Route::Settings => "/settings",
        }
    }

    /// The display title for this route
    pub fn title(&self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::Transactions => "Transactions",
            Route::Statistics => "Statistics",
            Route::Settings => "Settings",
        }
    }

    /// Resolve a path to its route, if any
    pub fn from_path(path: &str) -> Option<Route> {
        Route::all().iter().copied().find(|r| r.path() == path)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title())
    }
}

impl FromStr for Route {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Route::from_path(s).ok_or_else(|| format!("Unknown route: {}", s))
    }
}
