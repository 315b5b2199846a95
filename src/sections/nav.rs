use leptos::prelude::*;

use super::{GITHUB_URL, VERSION};

#[component]
pub fn Nav() -> impl IntoView {
    let (menu_open, set_menu_open) = signal(false);

    view! {
        <nav class="nav">
            <div class="nav-inner">
                <a href="/" class="nav-brand">
                    <span class="nav-logo">"⚡"</span>
                    <span class="nav-title">"stackling"</span>
                    <span class="nav-version">{VERSION}</span>
                </a>
                <div class="nav-links">
                    <a href="#features" class="nav-link">"Features"</a>
                    <a href="#getting-started" class="nav-link">"Get Started"</a>
                    <a href="#structure" class="nav-link">"Structure"</a>
                    <a href=GITHUB_URL target="_blank" class="nav-link">"GitHub"</a>
                    <a href="/report-an-issue" class="nav-cta">"Report an issue"</a>
                </div>
                <button
                    class="nav-menu-btn"
                    on:click=move |_| set_menu_open.update(|open| *open = !*open)
                >
                    {move || if menu_open.get() { "✕" } else { "☰" }}
                </button>
            </div>

            // Collapsed navigation for narrow screens
            <Show when=move || menu_open.get()>
                <div class="nav-drawer">
                    <a href="#features" class="nav-drawer-link">"Features"</a>
                    <a href="#getting-started" class="nav-drawer-link">"Get Started"</a>
                    <a href="#structure" class="nav-drawer-link">"Structure"</a>
                    <a href=GITHUB_URL target="_blank" class="nav-drawer-link">"GitHub"</a>
                    <a href="/report-an-issue" class="nav-drawer-link">"Report an issue"</a>
                </div>
            </Show>
        </nav>
    }
}
