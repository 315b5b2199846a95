use leptos::prelude::*;

use super::{GITHUB_URL, NPM_URL, VERSION};

const TAGS: [&str; 6] = ["vercel", "mongoose", "express", "starter", "template", "cli"];

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="container">
                <div class="footer-grid">
                    <div class="footer-brand">
                        <span class="footer-logo">"⚡ stackling"</span>
                        <p class="footer-blurb">
                            "Express + MongoDB scaffolding for serverless deploys. "
                            "Open source, MIT licensed."
                        </p>
                        <div class="footer-tags">
                            {TAGS
                                .into_iter()
                                .map(|tag| view! { <span class="footer-tag">{tag}</span> })
                                .collect_view()}
                        </div>
                    </div>
                    <div class="footer-links">
                        <h4>"Project"</h4>
                        <a href=GITHUB_URL target="_blank">"GitHub"</a>
                        <a href=NPM_URL target="_blank">"npm"</a>
                        <a href=format!("{GITHUB_URL}/blob/main/LICENSE") target="_blank">
                            "License"
                        </a>
                    </div>
                    <div class="footer-links">
                        <h4>"Help"</h4>
                        <a href="/report-an-issue">"Report an issue"</a>
                        <a href=format!("{GITHUB_URL}/discussions") target="_blank">
                            "Discussions"
                        </a>
                        <a href=format!("{GITHUB_URL}#readme") target="_blank">"Docs"</a>
                    </div>
                </div>
                <div class="footer-bottom">
                    <span>{format!("stackling {VERSION}")}</span>
                    <span>"Developed with ⚡ by the stackling team (c)2026"</span>
                </div>
            </div>
        </footer>
    }
}
