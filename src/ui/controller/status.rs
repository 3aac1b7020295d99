use std::collections::BTreeMap;

/// Input fields a backend validation error can point at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Email,
    Password,
    EmailCode,
    InviteCode,
}

impl Field {
    pub fn key(&self) -> &'static str {
        match self {
            Field::Email => "email",
            Field::Password => "password",
            Field::EmailCode => "email_code",
            Field::InviteCode => "invite_code",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "email" => Some(Field::Email),
            "password" => Some(Field::Password),
            "email_code" => Some(Field::EmailCode),
            "invite_code" => Some(Field::InviteCode),
            _ => None,
        }
    }
}

/// Loading flag plus field-level and general errors, common to every screen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewStatus {
    pub loading: bool,
    pub field_errors: BTreeMap<Field, String>,
    /// Dismissible inline message.
    pub general_error: Option<String>,
}

impl ViewStatus {
    pub fn field_error(&self, field: Field) -> Option<&str> {
        self.field_errors.get(&field).map(String::as_str)
    }

    pub fn has_errors(&self) -> bool {
        !self.field_errors.is_empty() || self.general_error.is_some()
    }

    pub fn clear_errors(&mut self) {
        self.field_errors.clear();
        self.general_error = None;
    }
}
