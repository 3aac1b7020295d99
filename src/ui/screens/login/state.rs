use crate::ui::controller::ViewStatus;
use crate::ui::mvi::{ScreenState, UiState};

/// Code meaning "follow the system language". Persisted as blank.
pub const SYSTEM_LANGUAGE: &str = "system";

/// Selectable languages as (code, label).
pub const LANGUAGES: [(&str, &str); 8] = [
    (SYSTEM_LANGUAGE, "System default"),
    ("en", "English"),
    ("zh", "简体中文"),
    ("zh-TW", "繁體中文"),
    ("ja", "日本語"),
    ("ko", "한국어"),
    ("ru", "Русский"),
    ("vi", "Tiếng Việt"),
];

/// Display label for a stored language code. Blank is the system default,
/// unknown codes are shown as-is.
pub fn language_label(code: &str) -> String {
    let code = if code.trim().is_empty() {
        SYSTEM_LANGUAGE
    } else {
        code
    };
    LANGUAGES
        .iter()
        .find(|(known, _)| *known == code)
        .map(|(_, label)| label.to_string())
        .unwrap_or_else(|| code.to_string())
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct LoginState {
    pub status: ViewStatus,
    pub language_label: String,
}

impl UiState for LoginState {}

impl ScreenState for LoginState {
    fn status(&self) -> &ViewStatus {
        &self.status
    }

    fn status_mut(&mut self) -> &mut ViewStatus {
        &mut self.status
    }
}
