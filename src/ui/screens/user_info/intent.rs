use crate::ui::mvi::Intent;

#[derive(Debug, Clone, PartialEq)]
pub enum UserInfoIntent {
    Logout,
}

impl Intent for UserInfoIntent {}
