//! Navigator adapters.

use crate::traits::Navigator;

/// Opens the results page in the user's default browser.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserNavigator;

impl Navigator for BrowserNavigator {
    fn navigate(&self, target: &str) -> std::io::Result<()> {
        tracing::info!(url = target, "Opening results page");
        webbrowser::open(target)
    }
}

/// Prints the results location instead of opening it.
#[derive(Debug, Clone, Copy, Default)]
pub struct PrintNavigator;

impl Navigator for PrintNavigator {
    fn navigate(&self, target: &str) -> std::io::Result<()> {
        println!("Open {} to view the course.", target);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_print_navigator_succeeds() {
        assert!(PrintNavigator.navigate("http://localhost:8080/course.html").is_ok());
    }
}
