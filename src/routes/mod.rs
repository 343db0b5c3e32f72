mod dashboard;
mod login;
mod not_found;
mod officers;
mod report_detail;
mod reports;
mod signup;
mod verify_email;

pub use dashboard::DashboardPage;
pub use login::LoginPage;
pub use not_found::NotFoundPage;
pub use officers::OfficersPage;
pub use report_detail::ReportDetailPage;
pub use reports::ReportsPage;
pub use signup::SignUpPage;
pub use verify_email::VerifyEmailPage;

use leptos::prelude::*;
use leptos_router::components::{Route, Routes};
use leptos_router::path;

/// Route paths shared by navigation and redirects.
pub mod paths {
    pub const DASHBOARD: &str = "/";
    pub const LOGIN: &str = "/login";
    pub const SIGNUP: &str = "/signup";
    pub const VERIFY_EMAIL: &str = "/verify-email";
    pub const REPORTS: &str = "/reports";
    pub const OFFICERS: &str = "/officers";

    pub fn report_detail(id: &str) -> String {
        format!("/reports/{id}")
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Routes fallback=|| view! { <NotFoundPage /> }>
            <Route path=path!("/") view=DashboardPage />
            <Route path=path!("/login") view=LoginPage />
            <Route path=path!("/signup") view=SignUpPage />
            <Route path=path!("/verify-email") view=VerifyEmailPage />
            <Route path=path!("/reports") view=ReportsPage />
            <Route path=path!("/reports/:id") view=ReportDetailPage />
            <Route path=path!("/officers") view=OfficersPage />
            <Route path=path!("/*any") view=NotFoundPage />
        </Routes>
    }
}
