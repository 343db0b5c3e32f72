//! Shared layout wrapper with navigation and content container. It
//! centralizes header markup and the mobile menu toggle so routes can focus
//! on content. Navigation remains client-side; the API must enforce access
//! control on every endpoint.

use crate::app_lib::GIT_COMMIT_HASH;
use crate::features::auth::state::use_auth;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

/// Wraps routes with a header and main content container.
#[component]
pub fn AppShell(children: Children) -> impl IntoView {
    let (menu_open, set_menu_open) = signal(false);
    let toggle_menu = move |_| {
        set_menu_open.update(|open| *open = !*open);
    };
    let auth = use_auth();
    let is_authenticated = auth.is_authenticated;
    let navigate = use_navigate();

    let on_sign_out = Callback::new(move |()| {
        auth.clear_session();
        navigate("/login", Default::default());
    });

    view! {
        <div class="min-h-screen flex flex-col">
            <header class="border-b border-gray-200 dark:border-gray-700 dark:bg-gray-900">
                <div class="max-w-screen-xl flex flex-wrap items-center justify-between mx-auto p-4">
                    <A
                        href="/"
                        {..}
                        class="flex items-center space-x-3"
                        on:click=move |_| set_menu_open.set(false)
                    >
                        <span class="material-symbols-outlined text-blue-700">"local_police"</span>
                        <span class="font-semibold whitespace-nowrap dark:text-white">
                            "Blotter"
                        </span>
                    </A>
                    <button
                        type="button"
                        class="inline-flex items-center p-2 w-10 h-10 justify-center text-sm text-gray-500 rounded-lg md:hidden hover:bg-gray-100 focus:outline-none focus:ring-2 focus:ring-gray-200 dark:text-gray-400 dark:hover:bg-gray-700 dark:focus:ring-gray-600"
                        aria-controls="navbar-default"
                        aria-expanded=move || menu_open.get().to_string()
                        on:click=toggle_menu
                    >
                        <span class="sr-only">"Open main menu"</span>
                        <span class="material-symbols-outlined">"menu"</span>
                    </button>
                    <div
                        id="navbar-default"
                        class="w-full md:block md:w-auto"
                        class:hidden=move || !menu_open.get()
                    >
                        <ul class="font-medium flex flex-col p-4 md:p-0 mt-4 border border-gray-100 rounded-lg bg-gray-50 md:flex-row md:space-x-8 md:mt-0 md:border-0 md:bg-white dark:bg-gray-800 md:dark:bg-gray-900 dark:border-gray-700">
                            <Show
                                when=move || is_authenticated.get()
                                fallback=move || {
                                    view! {
                                        <li>
                                            <A
                                                href="/login"
                                                {..}
                                                class="block py-2 px-3 text-gray-900 rounded hover:bg-gray-100 md:hover:bg-transparent md:p-0 dark:text-white md:dark:hover:text-blue-500"
                                            >
                                                "Sign In"
                                            </A>
                                        </li>
                                    }
                                }
                            >
                                <li>
                                    <A
                                        href="/"
                                        {..}
                                        class="block py-2 px-3 text-gray-900 rounded hover:bg-gray-100 md:hover:bg-transparent md:p-0 dark:text-white md:dark:hover:text-blue-500"
                                    >
                                        "Dashboard"
                                    </A>
                                </li>
                                <li>
                                    <A
                                        href="/reports"
                                        {..}
                                        class="block py-2 px-3 text-gray-900 rounded hover:bg-gray-100 md:hover:bg-transparent md:p-0 dark:text-white md:dark:hover:text-blue-500"
                                    >
                                        "Reports"
                                    </A>
                                </li>
                                <li>
                                    <A
                                        href="/officers"
                                        {..}
                                        class="block py-2 px-3 text-gray-900 rounded hover:bg-gray-100 md:hover:bg-transparent md:p-0 dark:text-white md:dark:hover:text-blue-500"
                                    >
                                        "Officers"
                                    </A>
                                </li>
                                <li>
                                    <button
                                        type="button"
                                        class="block py-2 px-3 text-gray-900 rounded hover:bg-gray-100 md:hover:bg-transparent md:p-0 dark:text-white md:dark:hover:text-blue-500"
                                        on:click=move |_| on_sign_out.run(())
                                    >
                                        "Sign Out"
                                    </button>
                                </li>
                            </Show>
                        </ul>
                    </div>
                </div>
            </header>
            <main class="flex-1 max-w-screen-xl w-full mx-auto p-4">{children()}</main>
            <footer class="text-center text-xs text-gray-400 py-4">
                {format!("blotter-web {}", &GIT_COMMIT_HASH[..GIT_COMMIT_HASH.len().min(7)])}
            </footer>
        </div>
    }
}
