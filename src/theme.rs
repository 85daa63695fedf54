/// Global light/dark presentation switch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ThemeState {
    dark: bool,
}

impl ThemeState {
    pub fn is_dark(&self) -> bool {
        self.dark
    }

    /// Flip the flag and return the new value.
    pub fn toggle(&mut self) -> bool {
        self.dark = !self.dark;
        tracing::debug!("Theme switched to {}", if self.dark { "dark" } else { "light" });
        self.dark
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_light() {
        assert!(!ThemeState::default().is_dark());
    }

    #[test]
    fn toggle_flips_and_returns_new_value() {
        let mut theme = ThemeState::default();
        assert!(theme.toggle());
        assert!(theme.is_dark());
        assert!(!theme.toggle());
        assert!(!theme.is_dark());
    }
}
