//! Navigation port

/// Port for the global navigation primitive.
///
/// Mirrors a browser location: the current path can be read, and a full
/// redirect replaces it.
pub trait Navigator: Send + Sync {
    /// Returns the path currently shown.
    fn current_path(&self) -> String;

    /// Performs a full redirect to `path` unless the current location is
    /// already `path`, ignoring its query string and fragment. Returns true
    /// if a redirect was issued.
    ///
    /// The check and the redirect must be a single step: of any number of
    /// concurrent callers targeting the same path, at most one redirects.
    fn redirect_unless_at(&self, path: &str) -> bool;
}
