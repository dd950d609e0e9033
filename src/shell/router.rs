//! Path routing. There is one screen, mounted at `/`.

/// The screens reachable by path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    OrderEntry,
}

/// Maps a path to its screen. Only the root path is routed.
pub fn resolve(path: &str) -> Option<Route> {
    match path {
        "/" => Some(Route::OrderEntry),
        _ => None,
    }
}
