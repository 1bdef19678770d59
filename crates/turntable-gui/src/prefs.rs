use std::path::PathBuf;

use turntable_core::sequence::SequenceSpec;

/// Light/dark preference, persisted across runs.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Dark,
    Light,
}

impl ThemeMode {
    pub fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    pub fn visuals(self) -> egui::Visuals {
        match self {
            Self::Dark => egui::Visuals::dark(),
            Self::Light => egui::Visuals::light(),
        }
    }
}

/// Persisted preferences: the theme flag, plus the last opened sequence as
/// a convenience. Read once at startup; written on every theme toggle.
#[derive(Clone, Debug, Default, serde::Serialize, serde::Deserialize)]
pub struct Prefs {
    #[serde(rename = "theme-mode", default)]
    pub theme_mode: ThemeMode,

    #[serde(rename = "last-sequence", default, skip_serializing_if = "Option::is_none")]
    pub last_sequence: Option<SequenceSpec>,
}

impl Prefs {
    /// `$XDG_CONFIG_HOME/turntable/prefs.toml`, falling back to
    /// `~/.config/turntable/prefs.toml`.
    pub fn path() -> Option<PathBuf> {
        if let Some(base) = std::env::var_os("XDG_CONFIG_HOME") {
            return Some(PathBuf::from(base).join("turntable").join("prefs.toml"));
        }
        std::env::var_os("HOME")
            .map(|home| PathBuf::from(home).join(".config").join("turntable").join("prefs.toml"))
    }

    /// Load preferences, falling back to defaults on any failure. A corrupt
    /// or missing file is not an error worth surfacing.
    pub fn load() -> Self {
        let Some(path) = Self::path() else {
            return Self::default();
        };
        match std::fs::read_to_string(&path) {
            Ok(content) => toml::from_str(&content).unwrap_or_else(|e| {
                tracing::warn!(path = %path.display(), error = %e, "ignoring corrupt prefs file");
                Self::default()
            }),
            Err(_) => Self::default(),
        }
    }

    pub fn save(&self) {
        let Some(path) = Self::path() else {
            return;
        };
        let content = match toml::to_string_pretty(self) {
            Ok(content) => content,
            Err(e) => {
                tracing::warn!(error = %e, "failed to serialize prefs");
                return;
            }
        };
        if let Some(parent) = path.parent() {
            if let Err(e) = std::fs::create_dir_all(parent) {
                tracing::warn!(error = %e, "failed to create prefs directory");
                return;
            }
        }
        if let Err(e) = std::fs::write(&path, content) {
            tracing::warn!(path = %path.display(), error = %e, "failed to write prefs");
        }
    }
}
