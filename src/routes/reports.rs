//! Reports list route guarded by the auth gate: table of filed reports plus
//! a minimal inline form for filing a new one.

use crate::components::{Alert, AlertKind, AppShell, Button, Spinner};
use crate::features::auth::state::RequireAuth;
use crate::features::reports::client;
use crate::features::reports::types::ReportDraft;
use crate::routes::paths;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn ReportsPage() -> impl IntoView {
    view! {
        <AppShell>
            <RequireAuth children=move || {
                view! { <ReportsContent /> }
            } />
        </AppShell>
    }
}

#[component]
fn ReportsContent() -> impl IntoView {
    let reports = LocalResource::new(move || async move { client::list_reports().await });
    let (error, set_error) = signal::<Option<String>>(None);

    let (complainant, set_complainant) = signal(String::new());
    let (respondent, set_respondent) = signal(String::new());
    let (incident_type, set_incident_type) = signal(String::new());
    let (description, set_description) = signal(String::new());

    let create_action = Action::new_local(move |draft: &ReportDraft| {
        let draft = draft.clone();
        async move {
            let result = client::create_report(&draft).await;
            if result.is_ok() {
                reports.refetch();
            }
            result
        }
    });

    let delete_action = Action::new_local(move |id: &String| {
        let id = id.clone();
        async move {
            let result = client::delete_report(&id).await;
            if result.is_ok() {
                reports.refetch();
            }
            result
        }
    });

    Effect::new(move |_| {
        if let Some(Err(err)) = create_action.value().get() {
            set_error.set(Some(err.to_string()));
        }
    });
    Effect::new(move |_| {
        if let Some(Err(err)) = delete_action.value().get() {
            set_error.set(Some(err.to_string()));
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        set_error.set(None);

        let draft = ReportDraft {
            complainant: complainant.get_untracked().trim().to_string(),
            respondent: respondent.get_untracked().trim().to_string(),
            incident_type: incident_type.get_untracked().trim().to_string(),
            description: description.get_untracked().trim().to_string(),
            ..Default::default()
        };
        if draft.complainant.is_empty() || draft.incident_type.is_empty() {
            set_error.set(Some(
                "Complainant and incident type are required.".to_string(),
            ));
            return;
        }

        create_action.dispatch(draft);
    };

    view! {
        <div class="space-y-6">
            <div class="flex items-center justify-between">
                <div class="space-y-1">
                    <h1 class="text-2xl font-semibold text-gray-900 dark:text-white">
                        "Reports"
                    </h1>
                    <p class="text-sm text-gray-500 dark:text-gray-400">
                        "Blotter entries filed at this station."
                    </p>
                </div>
            </div>

            {move || {
                error
                    .get()
                    .map(|message| view! { <Alert kind=AlertKind::Error message=message /> })
            }}

            <form
                class="grid gap-3 rounded-lg border border-gray-200 bg-white p-4 dark:border-gray-700 dark:bg-gray-800 md:grid-cols-2"
                on:submit=on_submit
            >
                <input
                    type="text"
                    class="bg-gray-50 border border-gray-300 text-gray-900 text-sm rounded-lg block w-full p-2.5 dark:bg-gray-700 dark:border-gray-600 dark:text-white"
                    placeholder="Complainant"
                    on:input=move |event| set_complainant.set(event_target_value(&event))
                />
                <input
                    type="text"
                    class="bg-gray-50 border border-gray-300 text-gray-900 text-sm rounded-lg block w-full p-2.5 dark:bg-gray-700 dark:border-gray-600 dark:text-white"
                    placeholder="Respondent"
                    on:input=move |event| set_respondent.set(event_target_value(&event))
                />
                <input
                    type="text"
                    class="bg-gray-50 border border-gray-300 text-gray-900 text-sm rounded-lg block w-full p-2.5 dark:bg-gray-700 dark:border-gray-600 dark:text-white"
                    placeholder="Incident type"
                    on:input=move |event| set_incident_type.set(event_target_value(&event))
                />
                <input
                    type="text"
                    class="bg-gray-50 border border-gray-300 text-gray-900 text-sm rounded-lg block w-full p-2.5 dark:bg-gray-700 dark:border-gray-600 dark:text-white"
                    placeholder="Description"
                    on:input=move |event| set_description.set(event_target_value(&event))
                />
                <div class="md:col-span-2">
                    <Button button_type="submit" disabled=create_action.pending()>
                        "File report"
                    </Button>
                </div>
            </form>

            <div class="overflow-hidden bg-white dark:bg-gray-800 shadow-sm border border-gray-200 dark:border-gray-700 rounded-lg">
                <table class="min-w-full divide-y divide-gray-200 dark:divide-gray-700">
                    <thead class="bg-gray-50 dark:bg-gray-900/50">
                        <tr>
                            <th scope="col" class="px-6 py-3 text-left text-xs font-medium text-gray-500 dark:text-gray-400 uppercase tracking-wider">
                                "Incident"
                            </th>
                            <th scope="col" class="px-6 py-3 text-left text-xs font-medium text-gray-500 dark:text-gray-400 uppercase tracking-wider">
                                "Complainant"
                            </th>
                            <th scope="col" class="px-6 py-3 text-left text-xs font-medium text-gray-500 dark:text-gray-400 uppercase tracking-wider">
                                "Status"
                            </th>
                            <th scope="col" class="px-6 py-3 text-right text-xs font-medium text-gray-500 dark:text-gray-400 uppercase tracking-wider">
                                "Actions"
                            </th>
                        </tr>
                    </thead>
                    <tbody class="divide-y divide-gray-200 dark:divide-gray-700">
                        <Suspense fallback=move || view! {
                            <tr>
                                <td colspan="4" class="px-6 py-12 text-center">
                                    <Spinner />
                                </td>
                            </tr>
                        }>
                            {move || match reports.get() {
                                Some(Ok(list)) if list.is_empty() => {
                                    view! {
                                        <tr>
                                            <td colspan="4" class="px-6 py-12 text-center text-sm text-gray-500 dark:text-gray-400">
                                                "No reports filed."
                                            </td>
                                        </tr>
                                    }
                                        .into_any()
                                }
                                Some(Ok(list)) => {
                                    view! {
                                        <For
                                            each=move || list.clone()
                                            key=|report| report.id.clone()
                                            children=move |report| {
                                                let id = report.id.clone();
                                                view! {
                                                    <tr class="hover:bg-gray-50 dark:hover:bg-gray-700/50 transition-colors">
                                                        <td class="px-6 py-4 whitespace-nowrap text-sm font-medium text-gray-900 dark:text-white">
                                                            <A
                                                                href=paths::report_detail(&report.id)
                                                                {..}
                                                                class="text-blue-600 hover:text-blue-800 dark:text-blue-400"
                                                            >
                                                                {report.incident_type.clone()}
                                                            </A>
                                                        </td>
                                                        <td class="px-6 py-4 whitespace-nowrap text-sm text-gray-500 dark:text-gray-400">
                                                            {report.complainant.clone()}
                                                        </td>
                                                        <td class="px-6 py-4 whitespace-nowrap text-sm">
                                                            <span class=format!(
                                                                "inline-flex rounded-full px-2 py-0.5 text-xs font-medium {}",
                                                                report.status.badge_class(),
                                                            )>
                                                                {report.status.to_string()}
                                                            </span>
                                                        </td>
                                                        <td class="px-6 py-4 whitespace-nowrap text-right text-sm">
                                                            <button
                                                                type="button"
                                                                class="text-red-600 hover:text-red-800 dark:text-red-400"
                                                                on:click=move |_| {
                                                                    delete_action.dispatch(id.clone());
                                                                }
                                                            >
                                                                "Delete"
                                                            </button>
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
                                            <td colspan="4" class="px-6 py-6">
                                                <Alert kind=AlertKind::Error message=err.to_string() />
                                            </td>
                                        </tr>
                                    }
                                        .into_any()
                                }
                                None => {
                                    view! {
                                        <tr>
                                            <td colspan="4" class="px-6 py-12 text-center">
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
