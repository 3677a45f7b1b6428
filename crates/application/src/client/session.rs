//! Login, logout and session termination.

use gradely_domain::auth::token_preview;
use gradely_domain::{ApiRequest, CredentialPair, LoginRequest, endpoints};
use tracing::{info, warn};

use super::{ApiClient, ClientInner};
use crate::error::ApplicationResult;
use crate::ports::HttpTransport;

impl<T: HttpTransport + 'static> ApiClient<T> {
    /// Exchanges email and password for a credential pair and stores it.
    ///
    /// # Errors
    ///
    /// Propagates the backend error unchanged (401 for bad credentials,
    /// which also ends any previous session). No retry is attempted.
    pub async fn login(&self, email: &str, password: &str) -> ApplicationResult<CredentialPair> {
        let request = ApiRequest::post_json(
            endpoints::TOKEN,
            &LoginRequest {
                email: email.to_string(),
                password: password.to_string(),
            },
        )?;
        let pair: CredentialPair = self.fetch(request).await?;
        self.inner.store.save(&pair).await?;
        info!(email, token_preview = %token_preview(&pair.access), "logged in");
        Ok(pair)
    }

    /// Discards the stored credentials. Safe to call when logged out.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be cleared.
    pub async fn logout(&self) -> ApplicationResult<()> {
        self.inner.store.clear().await?;
        info!("logged out");
        Ok(())
    }

    /// Returns the currently stored access credential.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    pub async fn access_token(&self) -> ApplicationResult<Option<String>> {
        Ok(self.inner.store.access().await?)
    }
}

impl<T> ClientInner<T> {
    /// Clears the stored credentials and sends the user to the login
    /// entry point.
    pub(super) async fn terminate_session(&self) {
        warn!(entry_point = endpoints::LOGIN_ENTRY_POINT, "session terminated");
        if let Err(e) = self.store.clear().await {
            warn!(error = %e, "could not clear stored credentials");
        }
        self.navigator.redirect_to(endpoints::LOGIN_ENTRY_POINT);
    }
}
