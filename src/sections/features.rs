use leptos::prelude::*;

#[component]
pub fn Features() -> impl IntoView {
    view! {
        <section class="features" id="features">
            <div class="container">
                <h2 class="section-title">"Everything wired, nothing to configure"</h2>
                <p class="section-subtitle">
                    "One command gives you a backend that runs locally and deploys "
                    "serverless without touching a config file."
                </p>
                <div class="features-grid">
                    <FeatureCard
                        icon="⚡"
                        title="Instant scaffold"
                        description="Answer two prompts and get a complete Express project. No boilerplate to copy, no starter repo to clone and gut."
                        code=Some("npx stackling")
                    />
                    <FeatureCard
                        icon="🗄️"
                        title="MongoDB wired in"
                        description="Mongoose connection handling with pooling and retry logic already in place. Point MONGODB_URI at your cluster and go."
                        code=Some("MONGODB_URI=mongodb://localhost:27017/my-app")
                    />
                    <FeatureCard
                        icon="🚀"
                        title="Serverless out of the box"
                        description="A vercel.json and api/ entry point ship with every project. Push the repo and the platform does the rest."
                        code=None
                    />
                    <FeatureCard
                        icon="🔷"
                        title="JavaScript or TypeScript"
                        description="Both templates stay in lockstep. The TypeScript one adds strict tsconfig, typed routes, and a build step that just works."
                        code=None
                    />
                    <FeatureCard
                        icon="🔐"
                        title="Environment handling"
                        description="dotenv is loaded before anything else, with a .env.example documenting every variable the server reads."
                        code=Some("cp .env.example .env")
                    />
                    <FeatureCard
                        icon="🧩"
                        title="Sensible structure"
                        description="Routes, models, and middleware live in their own directories from day one, so the project scales past the demo stage."
                        code=None
                    />
                </div>
            </div>
        </section>
    }
}

#[component]
fn FeatureCard(
    icon: &'static str,
    title: &'static str,
    description: &'static str,
    code: Option<&'static str>,
) -> impl IntoView {
    let (copied, set_copied) = signal(false);

    view! {
        <div class="feature-card">
            <div class="feature-icon">{icon}</div>
            <h3 class="feature-title">{title}</h3>
            <p class="feature-description">{description}</p>
            {code.map(|snippet| {
                let copy = move |_| {
                    if let Some(window) = web_sys::window() {
                        let clipboard = window.navigator().clipboard();
                        let _ = clipboard.write_text(snippet);
                        set_copied.set(true);
                        set_timeout(
                            move || set_copied.set(false),
                            std::time::Duration::from_millis(1500),
                        );
                    }
                };
                view! {
                    <div class="feature-code">
                        <code>{snippet}</code>
                        <button class="feature-code-copy" on:click=copy>
                            {move || if copied.get() { "ok" } else { "cp" }}
                        </button>
                    </div>
                }
            })}
        </div>
    }
}
