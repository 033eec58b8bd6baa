pub const THEME_KEY: &str = "theme";
pub const PROFILE_IMAGE_LIGHT: &str = "/images/profile-light.png";
pub const PROFILE_IMAGE_DARK: &str = "/images/profile-dark.png";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn from_dark(is_dark: bool) -> Self {
        if is_dark {
            Self::Dark
        } else {
            Self::Light
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    /// Root class for this theme. Exactly one of the two is present at a time.
    pub fn root_class(self) -> &'static str {
        match self {
            Self::Light => "light-mode",
            Self::Dark => "dark-mode",
        }
    }

    pub fn toggle_label(self) -> String {
        let next = self.toggled().as_str();
        format!("Switch to {next} theme")
    }

    pub fn profile_image(self) -> &'static str {
        match self {
            Self::Light => PROFILE_IMAGE_LIGHT,
            Self::Dark => PROFILE_IMAGE_DARK,
        }
    }
}

/// Everything the theme manager needs from its surroundings: the persisted
/// key, the environment's colour-scheme signal, and the page root.
pub trait ThemeHost {
    fn stored_theme(&self) -> Option<String>;
    fn persist_theme(&self, theme: Theme);
    fn system_prefers_dark(&self) -> bool;
    /// Called on first paint. Must leave exactly one theme marker on the root.
    fn apply_theme(&self, theme: Theme);
    /// Called on user toggles. Hosts may animate the swap.
    fn transition_theme(&self, theme: Theme) {
        self.apply_theme(theme);
    }
}

/// Any non-empty stored value counts as an explicit choice: only `"dark"`
/// means dark, everything else means light.
pub fn resolve_theme(host: &impl ThemeHost) -> Theme {
    match host.stored_theme().filter(|value| !value.is_empty()) {
        Some(value) => Theme::from_dark(value == Theme::Dark.as_str()),
        None => Theme::from_dark(host.system_prefers_dark()),
    }
}

type Observer = Box<dyn Fn(bool)>;

pub struct ThemeManager<H: ThemeHost> {
    host: H,
    current: Theme,
    observers: Vec<Observer>,
}

impl<H: ThemeHost> ThemeManager<H> {
    pub fn initialize(host: H) -> Self {
        let current = resolve_theme(&host);
        host.apply_theme(current);
        host.persist_theme(current);

        Self {
            host,
            current,
            observers: Vec::new(),
        }
    }

    pub fn current(&self) -> Theme {
        self.current
    }

    /// Flips the theme. The new value is always written back, even when a
    /// later toggle will undo it.
    pub fn toggle(&mut self) -> Theme {
        let next = self.current.toggled();
        self.current = next;
        self.host.persist_theme(next);
        self.host.transition_theme(next);

        for observer in &self.observers {
            observer(next.is_dark());
        }

        next
    }

    pub fn on_change(&mut self, observer: impl Fn(bool) + 'static) {
        self.observers.push(Box::new(observer));
    }

    #[cfg(test)]
    fn host(&self) -> &H {
        &self.host
    }
}
