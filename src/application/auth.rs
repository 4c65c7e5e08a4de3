//! Sign-in, sign-out and session lookup use cases

use crate::domain::Identity;
use crate::error::{LuminaError, Result};
use crate::infrastructure::{AuthListener, FileIdentityService, IdentityService, SubscriptionId};

/// The signed-in identity, or `NotSignedIn`
pub fn require_identity<I: IdentityService + ?Sized>(identity: &I) -> Result<Identity> {
    identity.current_identity()?.ok_or(LuminaError::NotSignedIn)
}

/// Service for managing the active session
pub struct AuthService {
    identity: FileIdentityService,
}

impl AuthService {
    pub fn new(identity: FileIdentityService) -> Self {
        AuthService { identity }
    }

    /// Sign in with an email when given, otherwise start an anonymous demo session
    pub fn sign_in(&self, email: Option<&str>, display_name: Option<&str>) -> Result<Identity> {
        match email {
            Some(email) => self.identity.sign_in_with_email(email, display_name),
            None => self.identity.sign_in_anonymous(),
        }
    }

    /// Be told about sign-ins and sign-outs made through this service
    pub fn subscribe(&mut self, listener: AuthListener) -> SubscriptionId {
        self.identity.subscribe(listener)
    }

    pub fn sign_out(&self) -> Result<()> {
        self.identity.sign_out()
    }

    pub fn whoami(&self) -> Result<Identity> {
        require_identity(&self.identity)
    }
}
