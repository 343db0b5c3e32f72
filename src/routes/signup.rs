//! Registration page. A successful signup hands off to email verification;
//! no session exists until the emailed code is confirmed.

use crate::app_lib::AppError;
use crate::components::{Alert, AlertKind, AppShell, Button, Spinner};
use crate::features::auth::client;
use crate::features::auth::types::RegisterRequest;
use crate::features::captcha::SliderCaptcha;
use crate::routes::paths;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

const CAPTCHA_PASSED_TOKEN: &str = "slider-verified";

#[derive(Clone)]
struct SignUpInput {
    username: String,
    email: String,
    password: String,
}

#[component]
pub fn SignUpPage() -> impl IntoView {
    let navigate = use_navigate();
    let (username, set_username) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error, set_error) = signal::<Option<AppError>>(None);
    let captcha_passed = RwSignal::new(false);
    let (captcha_reset, set_captcha_reset) = signal(0_u32);

    let signup_action = Action::new_local(move |input: &SignUpInput| {
        let input = input.clone();
        async move {
            let request = RegisterRequest {
                username: input.username,
                email: input.email,
                password: input.password,
                captcha_token: CAPTCHA_PASSED_TOKEN.to_string(),
            };
            client::register(&request).await
        }
    });

    Effect::new(move |_| {
        if let Some(result) = signup_action.value().get() {
            match result {
                Ok(response) if response.success => {
                    navigate(paths::VERIFY_EMAIL, Default::default());
                }
                Ok(response) => {
                    set_error.set(Some(AppError::Parse(
                        response
                            .message
                            .unwrap_or_else(|| "Registration failed.".to_string()),
                    )));
                    captcha_passed.set(false);
                    set_captcha_reset.update(|count| *count += 1);
                }
                Err(err) => {
                    set_error.set(Some(err));
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
        let email_value = email.get_untracked().trim().to_string();
        let password_value = password.get_untracked();
        if username_value.is_empty() || email_value.is_empty() || password_value.trim().is_empty() {
            set_error.set(Some(AppError::Config(
                "Username, email, and password are required.".to_string(),
            )));
            return;
        }
        if !captcha_passed.get_untracked() {
            set_error.set(Some(AppError::Config(
                "Please complete the verification slider first.".to_string(),
            )));
            return;
        }

        signup_action.dispatch(SignUpInput {
            username: username_value,
            email: email_value,
            password: password_value,
        });
    };

    view! {
        <AppShell>
            <form class="max-w-sm mx-auto" on:submit=on_submit>
                <h1 class="text-2xl font-semibold text-gray-900 dark:text-white mb-6">
                    "Create an account"
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
                        for="email"
                    >
                        "Email"
                    </label>
                    <input
                        id="email"
                        type="email"
                        class="bg-gray-50 border border-gray-300 text-gray-900 text-sm rounded-lg focus:ring-blue-500 focus:border-blue-500 block w-full p-2.5 dark:bg-gray-700 dark:border-gray-600 dark:placeholder-gray-400 dark:text-white"
                        autocomplete="email"
                        placeholder="name@precinct.example"
                        required
                        on:input=move |event| set_email.set(event_target_value(&event))
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
                        autocomplete="new-password"
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
                <Button button_type="submit" disabled=signup_action.pending()>
                    "Register"
                </Button>
                {move || {
                    signup_action
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
            </form>
        </AppShell>
    }
}
