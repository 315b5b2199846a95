use leptos::prelude::*;

const INCLUDED: [&str; 8] = [
    "Express server with CORS enabled",
    "Mongoose connection with retry handling",
    "Sample model and CRUD routes",
    "Centralized error-handling middleware",
    "dotenv environment loading",
    "vercel.json and serverless entry point",
    "npm scripts for dev, build, and start",
    "Sensible .gitignore and README",
];

#[component]
pub fn StackSection() -> impl IntoView {
    view! {
        <section class="stack">
            <div class="container">
                <h2 class="section-title">"Built on boring, proven pieces"</h2>
                <div class="stack-grid">
                    <StackCard
                        name="Express"
                        tagline="The HTTP layer"
                        description="Minimal routing and middleware, the way most Node backends already work. Nothing exotic to learn."
                    />
                    <StackCard
                        name="MongoDB"
                        tagline="The data layer"
                        description="Document storage through Mongoose, with a connection module that survives cold starts and flaky networks."
                    />
                    <StackCard
                        name="Serverless"
                        tagline="The deploy target"
                        description="Every request funnels through one exported handler, so the same code runs locally and on Vercel unchanged."
                    />
                </div>
                <div class="included">
                    <h3 class="included-title">"What's included"</h3>
                    <ul class="included-list">
                        {INCLUDED
                            .into_iter()
                            .map(|item| {
                                view! {
                                    <li class="included-item">
                                        <span class="included-check">"✓"</span>
                                        {item}
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                </div>
            </div>
        </section>
    }
}

#[component]
fn StackCard(
    name: &'static str,
    tagline: &'static str,
    description: &'static str,
) -> impl IntoView {
    view! {
        <div class="stack-card">
            <h3 class="stack-card-name">{name}</h3>
            <span class="stack-card-tagline">{tagline}</span>
            <p class="stack-card-description">{description}</p>
        </div>
    }
}
