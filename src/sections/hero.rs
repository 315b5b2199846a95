use leptos::prelude::*;

use super::{NPM_URL, SCAFFOLD_COMMAND, VERSION};

#[component]
pub fn Hero() -> impl IntoView {
    let (copied, set_copied) = signal(false);
    let badge_text = format!("{VERSION} — TypeScript templates added");

    let copy_scaffold = move |_| {
        if let Some(window) = web_sys::window() {
            let clipboard = window.navigator().clipboard();
            let _ = clipboard.write_text(SCAFFOLD_COMMAND);
            set_copied.set(true);
            set_timeout(
                move || set_copied.set(false),
                std::time::Duration::from_millis(2000),
            );
        }
    };

    view! {
        <section class="hero">
            <div class="container">
                <div class="hero-grid">
                    <div class="hero-content">
                        <div class="hero-badge">
                            <span class="hero-badge-dot"></span>
                            {badge_text}
                        </div>
                        <h1 class="hero-title">
                            <span class="hero-title-accent">"Express + MongoDB,"</span>
                            <br />
                            "serverless in one command."
                        </h1>
                        <p class="hero-description">
                            "stackling scaffolds a serverless-ready Express backend with MongoDB "
                            "wiring, environment config, and deployment files included. "
                            "Pick JavaScript or TypeScript and ship."
                        </p>
                        <div class="hero-actions">
                            <button class="btn btn-primary" on:click=copy_scaffold>
                                {move || if copied.get() { "Copied ✓" } else { "Get Started" }}
                            </button>
                            <a href=NPM_URL target="_blank" class="btn btn-secondary">
                                "View on npm →"
                            </a>
                        </div>
                    </div>
                    <Terminal />
                </div>
            </div>
        </section>
    }
}

// Static scaffold session - animation via CSS
#[component]
fn Terminal() -> impl IntoView {
    view! {
        <div class="hero-terminal">
            <div class="terminal-header">
                <div class="terminal-dot red"></div>
                <div class="terminal-dot yellow"></div>
                <div class="terminal-dot green"></div>
                <span class="terminal-title">"~/projects"</span>
            </div>
            <div class="terminal-body">
                <div class="terminal-line">
                    <span class="terminal-prompt">"$"</span>
                    <span class="terminal-command">"npx stackling"</span>
                </div>
                <div class="terminal-output muted">"? Project name · my-app"</div>
                <div class="terminal-output muted">"? Language · TypeScript"</div>
                <div class="terminal-output">"[stackling] writing src/app.ts"</div>
                <div class="terminal-output">"[stackling] writing api/index.ts"</div>
                <div class="terminal-output">"[stackling] writing vercel.json"</div>
                <div class="terminal-output success">"✓ my-app ready — 14 files in 1.2s"</div>

                <div class="terminal-line" style="margin-top: 16px;">
                    <span class="terminal-prompt">"$"</span>
                    <span class="terminal-command">"cd my-app && npm run dev"</span>
                </div>
                <div class="terminal-output muted">"[server] listening on http://localhost:7000"</div>
                <div class="terminal-output success">"[mongo] connected"</div>
            </div>
        </div>
    }
}
