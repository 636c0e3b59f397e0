//! # Form Types
//!
//! Bodies posted by the registration and login forms
//! (`application/x-www-form-urlencoded`).

use serde::Deserialize;

/// `email` + `password`, shared by `/registro` and `/login`
///
/// ## Example body
/// ```text
/// email=a%40x.com&password=pw1
/// ```
#[derive(Deserialize)]
pub struct CredentialsForm {
    pub email: String,
    pub password: String,
}

// Keep the password out of logs
impl std::fmt::Debug for CredentialsForm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialsForm")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}
