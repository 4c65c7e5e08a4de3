//! Identity service: sessions and sign-in

use crate::domain::Identity;
use crate::error::{LuminaError, Result};
use crate::infrastructure::FileSystemRepository;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;
use uuid::Uuid;

const AUTH_FILE: &str = "auth.toml";

/// Change in who is signed in
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthEvent {
    SignedIn(Identity),
    SignedOut,
}

pub type AuthListener = Box<dyn Fn(&AuthEvent)>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Issues identities and tracks the active session
pub trait IdentityService {
    /// The signed-in identity, if any
    fn current_identity(&self) -> Result<Option<Identity>>;

    /// Start a session under a fresh anonymous (demo) identity
    fn sign_in_anonymous(&self) -> Result<Identity>;

    /// End the active session. Signing out with no session is not an error.
    fn sign_out(&self) -> Result<()>;

    /// Register a listener for sign-in and sign-out events
    fn subscribe(&mut self, listener: AuthListener) -> SubscriptionId;

    /// Remove a listener; returns whether it was registered
    fn unsubscribe(&mut self, id: SubscriptionId) -> bool;
}

fn email_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap())
}

/// Whether `email` has the shape of an address
pub fn is_valid_email(email: &str) -> bool {
    email_regex().is_match(email)
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct AuthDocument {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    current: Option<Uuid>,
    #[serde(default)]
    identities: Vec<Identity>,
}

/// Identity service backed by `.lumina/auth.toml`
pub struct FileIdentityService {
    repository: FileSystemRepository,
    listeners: Vec<(SubscriptionId, AuthListener)>,
    next_subscription: u64,
}

impl FileIdentityService {
    pub fn new(repository: FileSystemRepository) -> Self {
        FileIdentityService {
            repository,
            listeners: Vec::new(),
            next_subscription: 0,
        }
    }

    fn load(&self) -> Result<AuthDocument> {
        self.repository.read_document(AUTH_FILE)
    }

    fn save(&self, document: &AuthDocument) -> Result<()> {
        self.repository.write_document(AUTH_FILE, document)
    }

    fn notify(&self, event: &AuthEvent) {
        for (_, listener) in &self.listeners {
            listener(event);
        }
    }

    fn start_session(&self, mut document: AuthDocument, identity: Identity) -> Result<Identity> {
        document.current = Some(identity.id);
        self.save(&document)?;
        tracing::info!(user_id = %identity.id, anonymous = identity.anonymous, "signed in");
        self.notify(&AuthEvent::SignedIn(identity.clone()));
        Ok(identity)
    }

    /// Sign in with an email address.
    ///
    /// An identity already registered under the same email (case-insensitive)
    /// is reused; a provided display name replaces the stored one.
    pub fn sign_in_with_email(&self, email: &str, display_name: Option<&str>) -> Result<Identity> {
        let email = email.trim();
        if !is_valid_email(email) {
            return Err(LuminaError::Auth(format!(
                "'{}' is not a valid email address",
                email
            )));
        }

        let mut document = self.load()?;
        let existing = document.identities.iter_mut().find(|identity| {
            identity
                .email
                .as_deref()
                .is_some_and(|known| known.eq_ignore_ascii_case(email))
        });

        let identity = match existing {
            Some(identity) => {
                if let Some(name) = display_name {
                    identity.display_name = Some(name.to_string());
                }
                identity.clone()
            }
            None => {
                let identity =
                    Identity::with_email(email, display_name.map(str::to_string));
                document.identities.push(identity.clone());
                identity
            }
        };

        self.start_session(document, identity)
    }
}

impl IdentityService for FileIdentityService {
    fn current_identity(&self) -> Result<Option<Identity>> {
        let document = self.load()?;
        let Some(current) = document.current else {
            return Ok(None);
        };

        let identity = document.identities.into_iter().find(|i| i.id == current);
        if identity.is_none() {
            tracing::warn!(user_id = %current, "session refers to an unknown identity");
        }
        Ok(identity)
    }

    fn sign_in_anonymous(&self) -> Result<Identity> {
        let mut document = self.load()?;
        let identity = Identity::anonymous();
        document.identities.push(identity.clone());
        self.start_session(document, identity)
    }

    fn sign_out(&self) -> Result<()> {
        let mut document = self.load()?;
        if document.current.take().is_none() {
            tracing::debug!("sign out without an active session");
            return Ok(());
        }
        self.save(&document)?;
        tracing::info!("signed out");
        self.notify(&AuthEvent::SignedOut);
        Ok(())
    }

    fn subscribe(&mut self, listener: AuthListener) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, listener));
        id
    }

    fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(sub, _)| *sub != id);
        self.listeners.len() != before
    }
}
