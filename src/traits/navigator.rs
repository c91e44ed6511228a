//! Navigation trait abstraction.

/// Moves the user on to the results page once a result has been stored.
pub trait Navigator: Send + Sync {
    /// Navigate to `target`.
    fn navigate(&self, target: &str) -> std::io::Result<()>;
}

impl<N: Navigator + ?Sized> Navigator for Box<N> {
    fn navigate(&self, target: &str) -> std::io::Result<()> {
        (**self).navigate(target)
    }
}
