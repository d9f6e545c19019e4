//! Page shell loading state.

use std::fmt;

/// Whether the preloader still covers the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadState {
    #[default]
    Loading,
    Loaded,
}

impl fmt::Display for LoadState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadState::Loading => f.write_str("loading"),
            LoadState::Loaded => f.write_str("loaded"),
        }
    }
}

/// Loading flag owned by the page shell. Flips to `Loaded` at most once.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PageShell {
    state: LoadState,
}

impl PageShell {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> LoadState {
        self.state
    }

    pub fn is_loading(&self) -> bool {
        self.state == LoadState::Loading
    }

    /// Preloader finished. Returns `true` only for the first call.
    pub fn complete(&mut self) -> bool {
        if self.state == LoadState::Loaded {
            return false;
        }
        self.state = LoadState::Loaded;
        true
    }

    /// `overflow` value for the document body.
    pub fn body_overflow(&self) -> &'static str {
        match self.state {
            LoadState::Loading => "hidden",
            LoadState::Loaded => "visible",
        }
    }

    /// Opacity class of the main content wrapper.
    pub fn content_class(&self) -> &'static str {
        match self.state {
            LoadState::Loading => "page-content opacity-0",
            LoadState::Loaded => "page-content opacity-100",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_completes_once() {
        let mut shell = PageShell::new();
        assert!(shell.is_loading());
        assert_eq!(shell.body_overflow(), "hidden");

        assert!(shell.complete());
        assert!(!shell.complete());
        assert_eq!(shell.state(), LoadState::Loaded);
        assert_eq!(shell.body_overflow(), "visible");
    }

    #[test]
    fn test_content_hidden_while_loading() {
        let mut shell = PageShell::new();
        assert!(shell.content_class().ends_with("opacity-0"));
        shell.complete();
        assert!(shell.content_class().ends_with("opacity-100"));
    }
}
