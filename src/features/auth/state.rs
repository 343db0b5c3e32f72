//! Auth session state and context for the frontend. The provider hydrates
//! the session once on mount from the persisted record and exposes derived
//! auth signals for guards and routes. Only the record's non-sensitive user
//! fields should ever be rendered; the token stays out of the view tree.

use crate::app_lib::session::{self, SessionRecord, UserAccount};
use crate::features::auth::client;
use leptos::prelude::*;

#[derive(Clone, Copy)]
/// Auth session context shared through Leptos.
pub struct AuthContext {
    pub session: RwSignal<Option<SessionRecord>>,
    pub is_authenticated: Signal<bool>,
}

impl AuthContext {
    /// Builds a context around the provided session signal.
    fn new(session: RwSignal<Option<SessionRecord>>) -> Self {
        let is_authenticated = Signal::derive(move || session.get().is_some());
        Self {
            session,
            is_authenticated,
        }
    }

    /// Returns the signed-in user, when the record carries one.
    pub fn current_user(&self) -> Option<UserAccount> {
        self.session.get().and_then(|record| record.user)
    }

    /// Replaces the in-memory and persisted session after login.
    pub fn set_session(&self, record: SessionRecord) {
        session::save(&record);
        self.session.set(Some(record));
    }

    /// Updates the user half of the session, keeping the token.
    pub fn set_current_user(&self, user: UserAccount) {
        if let Some(updated) = self.session.get_untracked().map(|r| r.with_user(user)) {
            session::save(&updated);
            self.session.set(Some(updated));
        }
    }

    /// Clears the in-memory and persisted session, typically on logout.
    pub fn clear_session(&self) {
        client::logout();
        self.session.set(None);
    }
}

/// Provides auth context and hydrates the session once on mount.
#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let session = RwSignal::new(session::load());
    let auth = AuthContext::new(session);
    provide_context(auth);

    view! { {children()} }
}

/// Returns the current auth context or a fallback empty context.
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().unwrap_or_else(|| {
        let session = RwSignal::new(None);
        AuthContext::new(session)
    })
}

/// UX-only guard; real access control must live on the API.
#[component]
pub fn RequireAuth(children: Children) -> impl IntoView {
    let auth = use_auth();
    let navigate = leptos_router::hooks::use_navigate();

    Effect::new(move |_| {
        if !auth.is_authenticated.get() {
            navigate("/login", Default::default());
        }
    });

    view! { {children()} }
}
