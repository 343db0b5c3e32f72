//! Sign-in page: credentials plus the slider verification gate. The slider
//! verdict is forwarded to the API as an opaque flag; it is UX friction, not
//! an auth factor.

use crate::app_lib::AppError;
use crate::app_lib::session::SessionRecord;
use crate::components::{Alert, AlertKind, AppShell, Button, Spinner};
use crate::features::auth::client;
use crate::features::auth::state::use_auth;
use crate::features::auth::types::LoginRequest;
use crate::features::captcha::SliderCaptcha;
use crate::routes::paths;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

/// Opaque flag sent as the captcha token once the slider is passed.
const CAPTCHA_PASSED_TOKEN: &str = "slider-verified";

#[derive(Clone)]
struct LoginInput {
    username: String,
    password: String,
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();
    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error, set_error) = signal::<Option<AppError>>(None);
    let captcha_passed = RwSignal::new(false);
    let (captcha_reset, set_captcha_reset) = signal(0_u32);

    let login_action = Action::new_local(move |input: &LoginInput| {
        let input = input.clone();
        async move {
            let request = LoginRequest {
                username: input.username,
                password: input.password,
                captcha_token: CAPTCHA_PASSED_TOKEN.to_string(),
            };
            client::login(&request).await
        }
    });

    Effect::new(move |_| {
        if let Some(result) = login_action.value().get() {
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
                                    .unwrap_or_else(|| "Login failed.".to_string()),
                            )));
                            captcha_passed.set(false);
                            set_captcha_reset.update(|count| *count += 1);
                        }
                    }
                }
                Err(err) => {
                    set_error.set(Some(err));
                    // Failed logins get a fresh challenge.
                    captcha_passed.set(false);
                    set_captcha_reset.update(|count| *count += 1);
                }
            }
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        set_error.set(None);

        let username_value = username.get_untracked().trim().to_string();
        let password_value = password.get_untracked();
        if username_value.is_empty() || password_value.trim().is_empty() {
            set_error.set(Some(AppError::Config(
                "Username and password are required.".to_string(),
            )));
            return;
        }
        if !captcha_passed.get_untracked() {
            set_error.set(Some(AppError::Config(
                "Please complete the verification slider first.".to_string(),
            )));
            return;
        }

        login_action.dispatch(LoginInput {
            username: username_value,
            password: password_value,
        });
    };

    view! {
        <AppShell>
            <form class="max-w-sm mx-auto" on:submit=on_submit>
                <h1 class="text-2xl font-semibold text-gray-900 dark:text-white mb-6">
                    "Sign in"
                </h1>
                <div class="mb-5">
                    <label
                        class="block mb-2 text-sm font-medium text-gray-900 dark:text-white"
                        for="username"
                    >
                        "Username"
                    </label>
                    <input
                        id="username"
                        type="text"
                        class="bg-gray-50 border border-gray-300 text-gray-900 text-sm rounded-lg focus:ring-blue-500 focus:border-blue-500 block w-full p-2.5 dark:bg-gray-700 dark:border-gray-600 dark:placeholder-gray-400 dark:text-white"
                        autocomplete="username"
                        required
                        on:input=move |event| set_username.set(event_target_value(&event))
                    />
                </div>
                <div class="mb-5">
                    <label
                        class="block mb-2 text-sm font-medium text-gray-900 dark:text-white"
                        for="password"
                    >
                        "Password"
                    </label>
                    <input
                        id="password"
                        type="password"
                        class="bg-gray-50 border border-gray-300 text-gray-900 text-sm rounded-lg focus:ring-blue-500 focus:border-blue-500 block w-full p-2.5 dark:bg-gray-700 dark:border-gray-600 dark:placeholder-gray-400 dark:text-white"
                        autocomplete="current-password"
                        required
                        on:input=move |event| set_password.set(event_target_value(&event))
                    />
                </div>
                <div class="mb-5">
                    <SliderCaptcha
                        on_verified=Callback::new(move |()| captcha_passed.set(true))
                        reset=captcha_reset
                    />
                </div>
                <Button button_type="submit" disabled=login_action.pending()>
                    "Sign In"
                </Button>
                {move || {
                    login_action
                        .pending()
                        .get()
                        .then_some(view! { <div class="mt-4"><Spinner /></div> })
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
                <p class="mt-6 text-sm text-gray-500 dark:text-gray-400">
                    "No account yet? "
                    <A
                        href=paths::SIGNUP
                        {..}
                        class="text-blue-600 hover:text-blue-800 dark:text-blue-400"
                    >
                        "Register"
                    </A>
                </p>
            </form>
        </AppShell>
    }
}
