use std::path::PathBuf;

const APP_DIR: &str = "links-widget";
const STATE_FILE: &str = "links.json";
const CONFIG_FILE: &str = "config.yml";

/// Per-user directory kinds the widget keeps files in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppDir {
    /// Saved widget state; `LINKS_WIDGET_DATA_DIR` overrides it
    Data,
    Config,
}

impl AppDir {
    fn override_var(self) -> Option<&'static str> {
        match self {
            Self::Data => Some("LINKS_WIDGET_DATA_DIR"),
            Self::Config => None,
        }
    }

    fn xdg_var(self) -> &'static str {
        match self {
            Self::Data => "XDG_DATA_HOME",
            Self::Config => "XDG_CONFIG_HOME",
        }
    }

    fn home_relative(self) -> &'static str {
        match self {
            Self::Data => ".local/share",
            Self::Config => ".config",
        }
    }

    /// Resolve the directory from the process environment
    pub fn path(self) -> PathBuf {
        self.resolve(|key| std::env::var(key).ok())
    }

    /// Resolve the directory, reading variables through `env`
    ///
    /// Order: app override, XDG variable, `$HOME`, `%APPDATA%`, then the
    /// current directory.
    fn resolve(self, env: impl Fn(&str) -> Option<String>) -> PathBuf {
        if let Some(path) = self.override_var().and_then(&env) {
            return PathBuf::from(path);
        }
        if let Some(base) = env(self.xdg_var()) {
            return PathBuf::from(base).join(APP_DIR);
        }
        if let Some(home) = env("HOME") {
            return PathBuf::from(home).join(self.home_relative()).join(APP_DIR);
        }
        if let Some(appdata) = env("APPDATA") {
            return PathBuf::from(appdata).join(APP_DIR);
        }
        std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
    }
}

/// Default location of the config file
pub fn config_path() -> PathBuf {
    AppDir::Config.path().join(CONFIG_FILE)
}

/// Where the host keeps the widget's serialized state by default
pub fn default_state_path() -> PathBuf {
    AppDir::Data.path().join(STATE_FILE)
}
