//! Application settings.
//!
//! # Responsibility
//! - Define the persisted settings singleton and its defaults.
//! - Provide merge semantics for partial settings updates.
//!
//! # Invariants
//! - Defaults are seeded and persisted when the `settings` key is absent.

use serde::{Deserialize, Serialize};

/// Color theme for the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

/// Editor preferences.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditorSettings {
    pub font_size: u8,
    pub line_height: f32,
    pub word_wrap: bool,
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self {
            font_size: 16,
            line_height: 1.6,
            word_wrap: true,
        }
    }
}

/// Focus timer durations in minutes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PomodoroSettings {
    pub work_minutes: u32,
    pub break_minutes: u32,
}

impl Default for PomodoroSettings {
    fn default() -> Self {
        Self {
            work_minutes: 25,
            break_minutes: 5,
        }
    }
}

/// Persisted settings singleton.
///
/// Decoding fills any missing field from the seeded defaults, so partial
/// settings objects (older exports, hand-edited imports) are tolerated
/// uniformly across fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    pub theme: Theme,
    pub editor: EditorSettings,
    pub pomodoro: PomodoroSettings,
    pub auto_save: bool,
}

/// Partial update for settings. `None` fields are left untouched.
#[derive(Debug, Clone, Default)]
pub struct SettingsPatch {
    pub theme: Option<Theme>,
    pub font_size: Option<u8>,
    pub line_height: Option<f32>,
    pub word_wrap: Option<bool>,
    pub work_minutes: Option<u32>,
    pub break_minutes: Option<u32>,
    pub auto_save: Option<bool>,
}

impl Default for Settings {
    fn default() -> Self {
        Self::seeded()
    }
}

impl Settings {
    /// Seed values installed on first run.
    pub fn seeded() -> Self {
        Self {
            theme: Theme::Light,
            editor: EditorSettings::default(),
            pomodoro: PomodoroSettings::default(),
            auto_save: true,
        }
    }

    /// Merges a partial update into this settings record.
    pub fn apply_patch(&mut self, patch: SettingsPatch) {
        if let Some(theme) = patch.theme {
            self.theme = theme;
        }
        if let Some(font_size) = patch.font_size {
            self.editor.font_size = font_size;
        }
        if let Some(line_height) = patch.line_height {
            self.editor.line_height = line_height;
        }
        if let Some(word_wrap) = patch.word_wrap {
            self.editor.word_wrap = word_wrap;
        }
        if let Some(work_minutes) = patch.work_minutes {
            self.pomodoro.work_minutes = work_minutes;
        }
        if let Some(break_minutes) = patch.break_minutes {
            self.pomodoro.break_minutes = break_minutes;
        }
        if let Some(auto_save) = patch.auto_save {
            self.auto_save = auto_save;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Settings, SettingsPatch, Theme};

    #[test]
    fn seeded_settings_match_documented_defaults() {
        let settings = Settings::seeded();
        assert_eq!(settings.theme, Theme::Light);
        assert_eq!(settings.editor.font_size, 16);
        assert!(settings.editor.word_wrap);
        assert_eq!(settings.pomodoro.work_minutes, 25);
        assert_eq!(settings.pomodoro.break_minutes, 5);
        assert!(settings.auto_save);
    }

    #[test]
    fn partial_settings_object_fills_every_missing_field_from_seeds() {
        let decoded: Settings =
            serde_json::from_str(r#"{"pomodoro":{"workMinutes":40,"breakMinutes":10}}"#).unwrap();
        assert_eq!(decoded.theme, Theme::Light);
        assert!(decoded.auto_save);
        assert_eq!(decoded.editor.font_size, 16);
        assert_eq!(decoded.pomodoro.work_minutes, 40);

        let empty: Settings = serde_json::from_str("{}").unwrap();
        assert_eq!(empty, Settings::seeded());
    }

    #[test]
    fn patch_merges_only_present_fields() {
        let mut settings = Settings::seeded();
        settings.apply_patch(SettingsPatch {
            theme: Some(Theme::Dark),
            work_minutes: Some(50),
            ..SettingsPatch::default()
        });
        assert_eq!(settings.theme, Theme::Dark);
        assert_eq!(settings.pomodoro.work_minutes, 50);
        assert_eq!(settings.pomodoro.break_minutes, 5);
        assert_eq!(settings.editor.font_size, 16);
    }
}
