//! Officer roster route guarded by the auth gate. Read-only directory; the
//! backend owns roster management.

use crate::components::{Alert, AlertKind, AppShell, Spinner};
use crate::features::auth::state::RequireAuth;
use crate::features::officers::client;
use leptos::prelude::*;

#[component]
pub fn OfficersPage() -> impl IntoView {
    view! {
        <AppShell>
            <RequireAuth children=move || {
                view! { <OfficersContent /> }
            } />
        </AppShell>
    }
}

#[component]
fn OfficersContent() -> impl IntoView {
    let officers = LocalResource::new(move || async move { client::list_officers().await });

    view! {
        <div class="space-y-6">
            <div class="space-y-1">
                <h1 class="text-2xl font-semibold text-gray-900 dark:text-white">
                    "Officers"
                </h1>
                <p class="text-sm text-gray-500 dark:text-gray-400">
                    "Personnel assigned to this station."
                </p>
            </div>

            <div class="overflow-hidden bg-white dark:bg-gray-800 shadow-sm border border-gray-200 dark:border-gray-700 rounded-lg">
                <table class="min-w-full divide-y divide-gray-200 dark:divide-gray-700">
                    <thead class="bg-gray-50 dark:bg-gray-900/50">
                        <tr>
                            <th scope="col" class="px-6 py-3 text-left text-xs font-medium text-gray-500 dark:text-gray-400 uppercase tracking-wider">
                                "Name"
                            </th>
                            <th scope="col" class="px-6 py-3 text-left text-xs font-medium text-gray-500 dark:text-gray-400 uppercase tracking-wider">
                                "Rank"
                            </th>
                            <th scope="col" class="px-6 py-3 text-left text-xs font-medium text-gray-500 dark:text-gray-400 uppercase tracking-wider">
                                "Badge"
                            </th>
                        </tr>
                    </thead>
                    <tbody class="divide-y divide-gray-200 dark:divide-gray-700">
                        <Suspense fallback=move || view! {
                            <tr>
                                <td colspan="3" class="px-6 py-12 text-center">
                                    <Spinner />
                                </td>
                            </tr>
                        }>
                            {move || match officers.get() {
                                Some(Ok(list)) if list.is_empty() => {
                                    view! {
                                        <tr>
                                            <td colspan="3" class="px-6 py-12 text-center text-sm text-gray-500 dark:text-gray-400">
                                                "No officers on file."
                                            </td>
                                        </tr>
                                    }
                                        .into_any()
                                }
                                Some(Ok(list)) => {
                                    view! {
                                        <For
                                            each=move || list.clone()
                                            key=|officer| officer.id.clone()
                                            children=|officer| {
                                                view! {
                                                    <tr class="hover:bg-gray-50 dark:hover:bg-gray-700/50 transition-colors">
                                                        <td class="px-6 py-4 whitespace-nowrap text-sm font-medium text-gray-900 dark:text-white">
                                                            {officer.name.clone()}
                                                        </td>
                                                        <td class="px-6 py-4 whitespace-nowrap text-sm text-gray-500 dark:text-gray-400">
                                                            {officer.rank.clone().unwrap_or_else(|| "-".to_string())}
                                                        </td>
                                                        <td class="px-6 py-4 whitespace-nowrap text-sm text-gray-500 dark:text-gray-400">
                                                            {officer
                                                                .badge_number
                                                                .clone()
                                                                .unwrap_or_else(|| "-".to_string())}
                                                        </td>
                                                    </tr>
                                                }
                                            }
                                        />
                                    }
                                        .into_any()
                                }
                                Some(Err(err)) => {
                                    view! {
                                        <tr>
                                            <td colspan="3" class="px-6 py-6">
                                                <Alert kind=AlertKind::Error message=err.to_string() />
                                            </td>
                                        </tr>
                                    }
                                        .into_any()
                                }
                                None => {
                                    view! {
                                        <tr>
                                            <td colspan="3" class="px-6 py-12 text-center">
                                                <Spinner />
                                            </td>
                                        </tr>
                                    }
                                        .into_any()
                                }
                            }}
                        </Suspense>
                    </tbody>
                </table>
            </div>
        </div>
    }
}
