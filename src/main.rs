// stackling landing page, Leptos 0.8 edition
// Developed with ⚡ by the stackling team (c)2026

use leptos::prelude::*;
use leptos_router::components::{Redirect, Route, Router, Routes};
use leptos_router::path;

mod pages;
mod report;
mod sections;

use pages::{HomePage, ReportIssuePage};
use sections::EasterEggs;

#[component]
fn App() -> impl IntoView {
    view! {
        <EasterEggs />
        <Router>
            <Routes fallback=|| view! { <Redirect path="/" /> }>
                <Route path=path!("/") view=HomePage />
                <Route path=path!("/report-an-issue") view=ReportIssuePage />
            </Routes>
        </Router>
    }
}

fn main() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(|| view! { <App /> });
}
