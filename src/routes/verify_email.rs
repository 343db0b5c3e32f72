//! Email verification page. Submitting the emailed code logs the user in:
//! the backend answers with a token that the auth client persists.

use crate::app_lib::AppError;
use crate::app_lib::session::SessionRecord;
use crate::components::{Alert, AlertKind, AppShell, Button, Spinner};
use crate::features::auth::client;
use crate::features::auth::state::use_auth;
use crate::features::auth::types::{ResendCodeRequest, VerifyEmailRequest};
use crate::routes::paths;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

#[derive(Clone, Debug, PartialEq)]
enum ResendStatus {
    Idle,
    Pending,
    Success,
    Error(String),
}

#[derive(Clone)]
struct VerifyInput {
    email: String,
    code: String,
}

#[component]
pub fn VerifyEmailPage() -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();
    let (email, set_email) = signal(String::new());
    let (code, set_code) = signal(String::new());
    let (error, set_error) = signal::<Option<AppError>>(None);
    let (resend_status, set_resend_status) = signal(ResendStatus::Idle);

    let verify_action = Action::new_local(move |input: &VerifyInput| {
        let input = input.clone();
        async move {
            let request = VerifyEmailRequest {
                email: input.email,
                code: input.code,
            };
            client::verify_email(&request).await
        }
    });

    let resend_action = Action::new_local(move |email: &String| {
        let email = email.clone();
        async move {
            let request = ResendCodeRequest { email };
            client::resend_code(&request).await
        }
    });

    Effect::new(move |_| {
        if let Some(result) = verify_action.value().get() {
            match result {
                Ok(response) => {
                    let payload = if response.success { response.data } else { None };
                    let record = payload.and_then(|p| {
                        p.token.map(|token| SessionRecord::new(token, p.user))
                    });
                    match record {
                        Some(record) => {
                            auth.set_session(record);
                            navigate(paths::DASHBOARD, Default::default());
                        }
                        None => {
                            set_error.set(Some(AppError::Parse(
                                response
                                    .message
                                    .unwrap_or_else(|| "Verification failed.".to_string()),
                            )));
                        }
                    }
                }
                Err(err) => set_error.set(Some(err)),
            }
        }
    });

    Effect::new(move |_| {
        if let Some(result) = resend_action.value().get() {
            match result {
                Ok(_) => set_resend_status.set(ResendStatus::Success),
                Err(err) => set_resend_status.set(ResendStatus::Error(err.to_string())),
            }
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        set_error.set(None);

        let email_value = email.get_untracked().trim().to_string();
        let code_value = code.get_untracked().trim().to_string();
        if email_value.is_empty() || code_value.is_empty() {
            set_error.set(Some(AppError::Config(
                "Email and verification code are required.".to_string(),
            )));
            return;
        }

        verify_action.dispatch(VerifyInput {
            email: email_value,
            code: code_value,
        });
    };

    let on_resend = move |_| {
        let email_value = email.get_untracked().trim().to_string();
        if email_value.is_empty() {
            set_resend_status.set(ResendStatus::Error(
                "Enter your email first.".to_string(),
            ));
            return;
        }
        set_resend_status.set(ResendStatus::Pending);
        resend_action.dispatch(email_value);
    };

    view! {
        <AppShell>
            <form class="max-w-sm mx-auto" on:submit=on_submit>
                <h1 class="text-2xl font-semibold text-gray-900 dark:text-white mb-2">
                    "Verify your email"
                </h1>
                <p class="text-sm text-gray-500 dark:text-gray-400 mb-6">
                    "Enter the code we sent to your inbox."
                </p>
                <div class="mb-5">
                    <label
                        class="block mb-2 text-sm font-medium text-gray-900 dark:text-white"
                        for="email"
                    >
                        "Email"
                    </label>
                    <input
                        id="email"
                        type="email"
                        class="bg-gray-50 border border-gray-300 text-gray-900 text-sm rounded-lg focus:ring-blue-500 focus:border-blue-500 block w-full p-2.5 dark:bg-gray-700 dark:border-gray-600 dark:placeholder-gray-400 dark:text-white"
                        autocomplete="email"
                        required
                        on:input=move |event| set_email.set(event_target_value(&event))
                    />
                </div>
                <div class="mb-5">
                    <label
                        class="block mb-2 text-sm font-medium text-gray-900 dark:text-white"
                        for="code"
                    >
                        "Verification code"
                    </label>
                    <input
                        id="code"
                        type="text"
                        inputmode="numeric"
                        class="bg-gray-50 border border-gray-300 text-gray-900 text-sm rounded-lg focus:ring-blue-500 focus:border-blue-500 block w-full p-2.5 tracking-widest dark:bg-gray-700 dark:border-gray-600 dark:placeholder-gray-400 dark:text-white"
                        autocomplete="one-time-code"
                        required
                        on:input=move |event| set_code.set(event_target_value(&event))
                    />
                </div>
                <div class="flex items-center gap-4">
                    <Button button_type="submit" disabled=verify_action.pending()>
                        "Verify"
                    </Button>
                    <button
                        type="button"
                        class="text-sm text-blue-600 hover:text-blue-800 dark:text-blue-400"
                        on:click=on_resend
                    >
                        "Resend code"
                    </button>
                </div>
                {move || {
                    verify_action
                        .pending()
                        .get()
                        .then_some(view! { <div class="mt-4"><Spinner /></div> })
                }}
                {move || match resend_status.get() {
                    ResendStatus::Success => Some(view! {
                        <div class="mt-4">
                            <Alert kind=AlertKind::Success message="A new code is on its way.".to_string() />
                        </div>
                    }),
                    ResendStatus::Error(message) => Some(view! {
                        <div class="mt-4">
                            <Alert kind=AlertKind::Error message=message />
                        </div>
                    }),
                    _ => None,
                }}
                {move || {
                    error
                        .get()
                        .map(|err| {
                            view! {
                                <div class="mt-4">
                                    <Alert kind=AlertKind::Error message=err.to_string() />
                                </div>
                            }
                        })
                }}
            </form>
        </AppShell>
    }
}
