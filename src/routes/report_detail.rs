//! Single-report view: status updates and evidence attachment. The upload
//! goes through the multipart client and the returned URL is saved onto the
//! report with a regular update call.

use crate::components::{Alert, AlertKind, AppShell, Button, Spinner};
use crate::features::auth::state::RequireAuth;
use crate::features::reports::client;
use crate::features::reports::types::{Report, ReportDraft, ReportStatus};
use crate::features::uploads::client as uploads_client;
use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

const STATUS_CHOICES: [ReportStatus; 5] = [
    ReportStatus::Pending,
    ReportStatus::InProgress,
    ReportStatus::Resolved,
    ReportStatus::Closed,
    ReportStatus::Rejected,
];

#[component]
pub fn ReportDetailPage() -> impl IntoView {
    view! {
        <AppShell>
            <RequireAuth children=move || {
                view! { <ReportDetailContent /> }
            } />
        </AppShell>
    }
}

#[component]
fn ReportDetailContent() -> impl IntoView {
    let params = use_params_map();
    let report_id = move || params.read().get("id").unwrap_or_default();

    let report = LocalResource::new(move || {
        let id = report_id();
        async move { client::get_report(&id).await }
    });
    let (error, set_error) = signal::<Option<String>>(None);

    let update_action = Action::new_local(move |input: &(String, ReportDraft)| {
        let (id, draft) = input.clone();
        async move {
            let result = client::update_report(&id, &draft).await;
            if result.is_ok() {
                report.refetch();
            }
            result
        }
    });

    let attach_action = Action::new_local(move |input: &(String, ReportDraft, web_sys::File)| {
        let (id, mut draft, file) = input.clone();
        async move {
            let uploaded = uploads_client::upload_file(&file).await?;
            draft.evidence_uri = Some(uploaded.url);
            let result = client::update_report(&id, &draft).await;
            if result.is_ok() {
                report.refetch();
            }
            result
        }
    });

    Effect::new(move |_| {
        if let Some(Err(err)) = update_action.value().get() {
            set_error.set(Some(err.to_string()));
        }
    });
    Effect::new(move |_| {
        if let Some(Err(err)) = attach_action.value().get() {
            set_error.set(Some(err.to_string()));
        }
    });

    view! {
        <div class="space-y-6 max-w-2xl">
            {move || {
                error
                    .get()
                    .map(|message| view! { <Alert kind=AlertKind::Error message=message /> })
            }}

            <Suspense fallback=move || view! { <Spinner /> }>
                {move || match report.get() {
                    Some(Ok(report)) => {
                        view! {
                            <ReportCard
                                report=report
                                on_status=Callback::new(move |(id, draft)| {
                                    update_action.dispatch((id, draft));
                                })
                                on_attach=Callback::new(move |(id, draft, file)| {
                                    attach_action.dispatch((id, draft, file));
                                })
                                busy=Signal::derive(move || {
                                    update_action.pending().get() || attach_action.pending().get()
                                })
                            />
                        }
                            .into_any()
                    }
                    Some(Err(err)) => {
                        view! { <Alert kind=AlertKind::Error message=err.to_string() /> }.into_any()
                    }
                    None => view! { <Spinner /> }.into_any(),
                }}
            </Suspense>
        </div>
    }
}

/// Builds the update payload for an existing report, keeping every field the
/// backend already knows about.
fn draft_from(report: &Report) -> ReportDraft {
    ReportDraft {
        complainant: report.complainant.clone(),
        respondent: report.respondent.clone(),
        incident_type: report.incident_type.clone(),
        description: report.description.clone(),
        location: report.location.clone(),
        status: Some(report.status),
        evidence_uri: report.evidence_uri.clone(),
    }
}

#[component]
fn ReportCard(
    report: Report,
    on_status: Callback<(String, ReportDraft)>,
    on_attach: Callback<(String, ReportDraft, web_sys::File)>,
    busy: Signal<bool>,
) -> impl IntoView {
    let file_input_ref = NodeRef::<leptos::html::Input>::new();
    let status_report = report.clone();
    let attach_report = report.clone();

    let on_status_change = move |event: leptos::ev::Event| {
        let Some(status) = ReportStatus::from_wire(&event_target_value(&event)) else {
            return;
        };
        let mut draft = draft_from(&status_report);
        draft.status = Some(status);
        on_status.run((status_report.id.clone(), draft));
    };

    let on_attach_click = move |_| {
        let Some(input) = file_input_ref.get_untracked() else {
            return;
        };
        let Some(file) = input.files().and_then(|files| files.get(0)) else {
            return;
        };
        on_attach.run((
            attach_report.id.clone(),
            draft_from(&attach_report),
            file,
        ));
    };

    view! {
        <div class="rounded-lg border border-gray-200 bg-white p-6 shadow-sm dark:border-gray-700 dark:bg-gray-800 space-y-4">
            <div class="flex items-center justify-between">
                <h1 class="text-xl font-semibold text-gray-900 dark:text-white">
                    {report.incident_type.clone()}
                </h1>
                <span class=format!(
                    "inline-flex rounded-full px-2 py-0.5 text-xs font-medium {}",
                    report.status.badge_class(),
                )>{report.status.to_string()}</span>
            </div>

            <dl class="grid grid-cols-2 gap-x-6 gap-y-2 text-sm">
                <dt class="text-gray-500 dark:text-gray-400">"Complainant"</dt>
                <dd class="text-gray-900 dark:text-white">{report.complainant.clone()}</dd>
                <dt class="text-gray-500 dark:text-gray-400">"Respondent"</dt>
                <dd class="text-gray-900 dark:text-white">{report.respondent.clone()}</dd>
                <dt class="text-gray-500 dark:text-gray-400">"Filed"</dt>
                <dd class="text-gray-900 dark:text-white">{report.created_at.clone()}</dd>
                <dt class="text-gray-500 dark:text-gray-400">"Location"</dt>
                <dd class="text-gray-900 dark:text-white">
                    {report.location.clone().unwrap_or_else(|| "-".to_string())}
                </dd>
            </dl>

            <p class="text-sm text-gray-700 dark:text-gray-300">{report.description.clone()}</p>

            {report
                .evidence_uri
                .clone()
                .map(|uri| {
                    view! {
                        <p class="text-sm">
                            <a
                                href=uri
                                target="_blank"
                                class="text-blue-600 hover:text-blue-800 dark:text-blue-400"
                            >
                                "View attached evidence"
                            </a>
                        </p>
                    }
                })}

            <div class="flex flex-wrap items-end gap-4 border-t border-gray-200 pt-4 dark:border-gray-700">
                <div>
                    <label
                        class="block mb-2 text-sm font-medium text-gray-900 dark:text-white"
                        for="status"
                    >
                        "Status"
                    </label>
                    <select
                        id="status"
                        class="bg-gray-50 border border-gray-300 text-gray-900 text-sm rounded-lg block p-2.5 dark:bg-gray-700 dark:border-gray-600 dark:text-white"
                        prop:disabled=move || busy.get()
                        on:change=on_status_change
                    >
                        {STATUS_CHOICES
                            .into_iter()
                            .map(|status| {
                                view! {
                                    <option
                                        value=status.wire_name()
                                        selected=status == report.status
                                    >
                                        {status.to_string()}
                                    </option>
                                }
                            })
                            .collect_view()}
                    </select>
                </div>
                <div>
                    <label
                        class="block mb-2 text-sm font-medium text-gray-900 dark:text-white"
                        for="evidence"
                    >
                        "Evidence"
                    </label>
                    <input id="evidence" type="file" node_ref=file_input_ref class="text-sm" />
                </div>
                <Button disabled=busy {..} on:click=on_attach_click>
                    "Attach file"
                </Button>
            </div>
        </div>
    }
}
