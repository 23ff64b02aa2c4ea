//! Static routing table: three paths, each bound to one page.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    Users,
    Posts,
}

impl Route {
    pub const ALL: [Route; 3] = [Route::Home, Route::Users, Route::Posts];

    /// Matches a path exactly; a single trailing slash is tolerated.
    /// Query strings and extra segments are not routes.
    pub fn resolve(path: &str) -> Option<Self> {
        let path = match path.strip_suffix('/') {
            Some(rest) if !rest.is_empty() && !rest.ends_with('/') => rest,
            _ => path,
        };
        Route::ALL.into_iter().find(|route| route.path() == path)
    }

    pub fn path(&self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Users => "/users",
            Route::Posts => "/posts",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::Users => "Users",
            Route::Posts => "Posts",
        }
    }
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.path())
    }
}
