use crate::auth::{password, UserDirectory};
use crate::db::models::Account;
use crate::error::{AppError, AppResult};

impl UserDirectory {
    /// Check an email/password pair and return the matching account.
    ///
    /// Unknown emails yield `AccountNotFound`; a wrong password yields
    /// `BadCredentials`. The two are kept apart so the login page can word
    /// them differently.
    pub async fn verify(&self, email: &str, password: &str) -> AppResult<Account> {
        let account = self.find_by_email(email)?.ok_or(AppError::AccountNotFound)?;

        let candidate = password.to_owned();
        let stored_hash = account.password_hash.clone();
        let matches = tokio::task::spawn_blocking(move || {
            password::verify_password(&candidate, &stored_hash)
        })
        .await??;

        if !matches {
            return Err(AppError::BadCredentials);
        }

        Ok(account)
    }
}

#[cfg(test)]
mod tests {
    use crate::auth::UserDirectory;
    use crate::db::accounts::MemoryAccountStore;
    use crate::error::AppError;
    use std::sync::Arc;

    fn directory() -> UserDirectory {
        UserDirectory::new(Arc::new(MemoryAccountStore::new()))
    }

    #[tokio::test]
    async fn verify_returns_the_registered_account() {
        let directory = directory();
        let pairs = [("a@x.com", "pw1"), ("b@x.com", "another secret"), ("c@x.com", "")];

        let mut registered = Vec::new();
        for (email, pw) in pairs {
            registered.push(directory.register(email, pw).await.unwrap());
        }

        for ((email, pw), account) in pairs.iter().zip(&registered) {
            let verified = directory.verify(email, pw).await.unwrap();
            assert_eq!(verified.id, account.id);
        }
    }

    #[tokio::test]
    async fn wrong_password_is_bad_credentials() {
        let directory = directory();
        directory.register("a@x.com", "pw1").await.unwrap();

        for wrong in ["pw2", "PW1", "pw1 ", ""] {
            let err = directory.verify("a@x.com", wrong).await.unwrap_err();
            assert!(matches!(err, AppError::BadCredentials), "password {wrong:?}");
        }
    }

    #[tokio::test]
    async fn unknown_email_is_account_not_found() {
        let directory = directory();
        directory.register("a@x.com", "pw1").await.unwrap();

        let err = directory.verify("b@x.com", "pw1").await.unwrap_err();
        assert!(matches!(err, AppError::AccountNotFound));
    }
}
