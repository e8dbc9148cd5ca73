use serde::{Serialize, Deserialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SessionUser {
    pub email: String,
    pub is_signed_in: bool,
}

impl SessionUser {
    /// The address jobs are filed under, when the account has one.
    pub fn lookup_email(&self) -> Option<&str> {
        let email = self.email.trim();
        (!email.is_empty()).then_some(email)
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum SessionState {
    #[default]
    Loading,
    Ready(Option<SessionUser>),
}

impl SessionState {
    pub fn user(&self) -> Option<&SessionUser> {
        match self {
            SessionState::Ready(Some(user)) if user.is_signed_in => Some(user),
            _ => None,
        }
    }

    pub fn is_signed_in(&self) -> bool {
        self.user().is_some()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Public,
    /// Visible to signed-out visitors; signed-in users are sent to the app.
    SignedOutOnly,
    SignedInOnly,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gate {
    Pending,
    Render,
    RedirectToApp,
    RedirectToSignIn,
}

pub fn gate(access: Access, session: &SessionState) -> Gate {
    match (access, session) {
        (Access::Public, _) => Gate::Render,
        (_, SessionState::Loading) => Gate::Pending,
        (Access::SignedOutOnly, s) if s.is_signed_in() => Gate::RedirectToApp,
        (Access::SignedOutOnly, _) => Gate::Render,
        (Access::SignedInOnly, s) if s.is_signed_in() => Gate::Render,
        (Access::SignedInOnly, _) => Gate::RedirectToSignIn,
    }
}
