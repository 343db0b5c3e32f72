//! Landing page for signed-in users: aggregate counters, unread
//! notifications, and upcoming hearings.

use crate::components::{Alert, AlertKind, AppShell, Spinner};
use crate::features::auth::state::RequireAuth;
use crate::features::dashboard::client as dashboard_client;
use crate::features::dashboard::types::DashboardStats;
use crate::features::hearings::client as hearings_client;
use crate::features::notifications::client as notifications_client;
use leptos::prelude::*;

#[component]
pub fn DashboardPage() -> impl IntoView {
    view! {
        <AppShell>
            <RequireAuth children=move || {
                view! { <DashboardContent /> }
            } />
        </AppShell>
    }
}

#[component]
fn DashboardContent() -> impl IntoView {
    let stats = LocalResource::new(move || async move { dashboard_client::fetch_stats().await });
    let hearings =
        LocalResource::new(move || async move { hearings_client::list_hearings().await });
    let notifications = LocalResource::new(move || async move {
        notifications_client::list_notifications().await
    });

    let mark_read_action = Action::new_local(move |id: &String| {
        let id = id.clone();
        async move {
            let result = notifications_client::mark_read(&id).await;
            if result.is_ok() {
                notifications.refetch();
            }
            result
        }
    });

    view! {
        <div class="space-y-8">
            <h1 class="text-2xl font-semibold text-gray-900 dark:text-white">"Dashboard"</h1>

            <Suspense fallback=move || view! { <Spinner /> }>
                {move || match stats.get() {
                    Some(Ok(stats)) => view! { <StatCards stats=stats /> }.into_any(),
                    Some(Err(err)) => {
                        view! { <Alert kind=AlertKind::Error message=err.to_string() /> }.into_any()
                    }
                    None => view! { <Spinner /> }.into_any(),
                }}
            </Suspense>

            <section class="space-y-3">
                <h2 class="text-lg font-medium text-gray-900 dark:text-white">
                    "Notifications"
                </h2>
                <Suspense fallback=move || view! { <Spinner /> }>
                    {move || match notifications.get() {
                        Some(Ok(list)) if list.is_empty() => {
                            view! {
                                <p class="text-sm text-gray-500 dark:text-gray-400">
                                    "You're all caught up."
                                </p>
                            }
                                .into_any()
                        }
                        Some(Ok(list)) => {
                            view! {
                                <ul class="divide-y divide-gray-200 dark:divide-gray-700 rounded-lg border border-gray-200 dark:border-gray-700 bg-white dark:bg-gray-800">
                                    <For
                                        each=move || list.clone()
                                        key=|notification| notification.id.clone()
                                        children=move |notification| {
                                            let id = notification.id.clone();
                                            view! {
                                                <li class="flex items-center justify-between px-4 py-3">
                                                    <span
                                                        class="text-sm text-gray-900 dark:text-white"
                                                        class:opacity-60=notification.read
                                                    >
                                                        {notification.message.clone()}
                                                    </span>
                                                    {(!notification.read)
                                                        .then(|| {
                                                            let id = id.clone();
                                                            view! {
                                                                <button
                                                                    type="button"
                                                                    class="text-xs text-blue-600 hover:text-blue-800 dark:text-blue-400"
                                                                    on:click=move |_| {
                                                                        mark_read_action.dispatch(id.clone());
                                                                    }
                                                                >
                                                                    "Mark read"
                                                                </button>
                                                            }
                                                        })}
                                                </li>
                                            }
                                        }
                                    />
                                </ul>
                            }
                                .into_any()
                        }
                        Some(Err(err)) => {
                            view! { <Alert kind=AlertKind::Error message=err.to_string() /> }
                                .into_any()
                        }
                        None => view! { <Spinner /> }.into_any(),
                    }}
                </Suspense>
            </section>

            <section class="space-y-3">
                <h2 class="text-lg font-medium text-gray-900 dark:text-white">
                    "Upcoming hearings"
                </h2>
                <Suspense fallback=move || view! { <Spinner /> }>
                    {move || match hearings.get() {
                        Some(Ok(list)) if list.is_empty() => {
                            view! {
                                <p class="text-sm text-gray-500 dark:text-gray-400">
                                    "No hearings scheduled."
                                </p>
                            }
                                .into_any()
                        }
                        Some(Ok(list)) => {
                            view! {
                                <ul class="divide-y divide-gray-200 dark:divide-gray-700 rounded-lg border border-gray-200 dark:border-gray-700 bg-white dark:bg-gray-800">
                                    <For
                                        each=move || list.clone()
                                        key=|hearing| hearing.id.clone()
                                        children=|hearing| {
                                            view! {
                                                <li class="px-4 py-3 text-sm text-gray-900 dark:text-white">
                                                    <span class="font-medium">
                                                        {hearing.scheduled_at.clone()}
                                                    </span>
                                                    <span class="text-gray-500 dark:text-gray-400">
                                                        {format!(
                                                            " · report {}{}",
                                                            hearing.report_id,
                                                            hearing
                                                                .location
                                                                .as_deref()
                                                                .map(|l| format!(", {l}"))
                                                                .unwrap_or_default(),
                                                        )}
                                                    </span>
                                                </li>
                                            }
                                        }
                                    />
                                </ul>
                            }
                                .into_any()
                        }
                        Some(Err(err)) => {
                            view! { <Alert kind=AlertKind::Error message=err.to_string() /> }
                                .into_any()
                        }
                        None => view! { <Spinner /> }.into_any(),
                    }}
                </Suspense>
            </section>
        </div>
    }
}

#[component]
fn StatCards(stats: DashboardStats) -> impl IntoView {
    let cards = [
        ("Total reports", stats.total_reports),
        ("Pending", stats.pending_reports),
        ("Resolved", stats.resolved_reports),
        ("Upcoming hearings", stats.upcoming_hearings),
    ];

    view! {
        <div class="grid grid-cols-2 gap-4 md:grid-cols-4">
            {cards
                .into_iter()
                .map(|(label, value)| {
                    view! {
                        <div class="rounded-lg border border-gray-200 bg-white p-4 shadow-sm dark:border-gray-700 dark:bg-gray-800">
                            <p class="text-sm text-gray-500 dark:text-gray-400">{label}</p>
                            <p class="text-3xl font-semibold text-gray-900 dark:text-white">
                                {value}
                            </p>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}
