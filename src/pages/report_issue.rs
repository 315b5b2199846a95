use leptos::leptos_dom::helpers::{TimeoutHandle, event_target_value, set_timeout_with_handle};
use leptos::prelude::*;

use crate::report::{
    IssueCategory, IssueDraft, RESET_DELAY, SUBMIT_LATENCY, SubmitPhase, missing_fields_notice,
};
use crate::sections::GITHUB_URL;

#[component]
pub fn ReportIssuePage() -> impl IntoView {
    let (draft, set_draft) = signal(IssueDraft::default());
    let (phase, set_phase) = signal(SubmitPhase::Editing);
    let (notice, set_notice) = signal(None::<String>);

    // Whichever delay is currently running, so navigation can cancel it.
    let pending = StoredValue::new(None::<TimeoutHandle>);
    on_cleanup(move || {
        if let Some(Some(handle)) = pending.try_get_value() {
            handle.clear();
        }
    });

    Effect::new(move || {
        if let Some(window) = web_sys::window() {
            window.scroll_to_with_x_and_y(0.0, 0.0);
        }
    });

    let submit = move |_| {
        if !phase.get().accepts_submit() {
            return;
        }
        if !draft.with(|d| d.is_submittable()) {
            let missing = draft.with(|d| d.missing_required());
            set_notice.set(missing_fields_notice(&missing));
            return;
        }
        set_notice.set(None);
        set_phase.set(SubmitPhase::Submitting);
        let submitted = set_timeout_with_handle(
            move || {
                set_phase.set(SubmitPhase::Submitted);
                let reset = set_timeout_with_handle(
                    move || {
                        set_phase.set(SubmitPhase::Editing);
                        set_draft.set(IssueDraft::default());
                    },
                    RESET_DELAY,
                );
                if let Ok(handle) = reset {
                    pending.set_value(Some(handle));
                }
            },
            SUBMIT_LATENCY,
        );
        if let Ok(handle) = submitted {
            pending.set_value(Some(handle));
        }
    };

    let busy = move || phase.get().is_submitting();

    view! {
        <div class="issue-page">
            <ReportNav />
            <main class="container issue-container">
                <header class="issue-header">
                    <h1 class="issue-title">"Help Us Improve"</h1>
                    <p class="issue-subtitle">
                        "Found a bug, missing a feature, or just stuck? Tell us about it "
                        "and we'll take a look."
                    </p>
                </header>

                <Show when=move || !phase.get().is_submitted()>
                    <div class="issue-card">
                        <div class="form-field">
                            <label class="form-label">"What kind of issue is this?"</label>
                            <div class="issue-type-grid">
                                {IssueCategory::ALL
                                    .into_iter()
                                    .map(|category| {
                                        view! {
                                            <button
                                                class=move || {
                                                    if draft.with(|d| d.category == category) {
                                                        format!("issue-type-card active {}", category.accent())
                                                    } else {
                                                        "issue-type-card".to_string()
                                                    }
                                                }
                                                disabled=busy
                                                on:click=move |_| {
                                                    set_draft.update(|d| d.category = category)
                                                }
                                            >
                                                <span class="issue-type-glyph">{category.glyph()}</span>
                                                <span class="issue-type-title">{category.label()}</span>
                                                <span class="issue-type-blurb">{category.blurb()}</span>
                                            </button>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </div>

                        <div class="form-field">
                            <label class="form-label">"Title *"</label>
                            <input
                                class="form-input"
                                placeholder=move || {
                                    format!(
                                        "Brief description of your {}",
                                        draft.with(|d| d.category.label_lower()),
                                    )
                                }
                                prop:value=move || draft.with(|d| d.title.clone())
                                on:input=move |ev| {
                                    let value = event_target_value(&ev);
                                    set_draft.update(|d| d.title = value);
                                }
                                disabled=busy
                            />
                        </div>

                        <div class="form-field">
                            <label class="form-label">"Email *"</label>
                            <input
                                class="form-input"
                                type="email"
                                placeholder="your@email.com"
                                prop:value=move || draft.with(|d| d.email.clone())
                                on:input=move |ev| {
                                    let value = event_target_value(&ev);
                                    set_draft.update(|d| d.email = value);
                                }
                                disabled=busy
                            />
                        </div>

                        <div class="form-field">
                            <label class="form-label">"Description *"</label>
                            <textarea
                                class="form-input"
                                rows="6"
                                placeholder=move || draft.with(|d| d.category.description_prompt())
                                prop:value=move || draft.with(|d| d.description.clone())
                                on:input=move |ev| {
                                    let value = event_target_value(&ev);
                                    set_draft.update(|d| d.description = value);
                                }
                                disabled=busy
                            ></textarea>
                        </div>

                        <Show when=move || draft.with(|d| d.category.needs_reproduction())>
                            <div class="form-field">
                                <label class="form-label">"Steps to Reproduce"</label>
                                <textarea
                                    class="form-input"
                                    rows="4"
                                    placeholder="1. Go to...\n2. Click on...\n3. See error..."
                                    prop:value=move || draft.with(|d| d.reproduction.clone())
                                    on:input=move |ev| {
                                        let value = event_target_value(&ev);
                                        set_draft.update(|d| d.reproduction = value);
                                    }
                                    disabled=busy
                                ></textarea>
                            </div>
                        </Show>

                        <Show when=move || notice.get().is_some()>
                            <p class="form-notice">{move || notice.get().unwrap_or_default()}</p>
                        </Show>

                        <button
                            class=move || {
                                format!("submit-btn {}", draft.with(|d| d.category.accent()))
                            }
                            disabled=busy
                            on:click=submit
                        >
                            <Show when=busy>
                                <span class="spinner"></span>
                                "Submitting..."
                            </Show>
                            <Show when=move || !phase.get().is_submitting()>
                                {move || format!("Submit {}", draft.with(|d| d.category.label()))}
                            </Show>
                        </button>
                    </div>
                </Show>

                <Show when=move || phase.get().is_submitted()>
                    <div class="issue-card thank-you">
                        <div class="thank-you-badge">"✓"</div>
                        <h2 class="thank-you-title">"Thank You!"</h2>
                        <p class="thank-you-text">
                            {move || {
                                format!(
                                    "Your {} has been submitted successfully.",
                                    draft.with(|d| d.category.label_lower()),
                                )
                            }}
                        </p>
                        <p class="thank-you-text">"We'll get back to you soon!"</p>
                    </div>
                </Show>

                <div class="pro-tip">
                    <span class="pro-tip-glyph">"💡"</span>
                    <p>
                        "Pro tip: for code-level problems, include your Node version and "
                        "open the issue directly on "
                        <a href=format!("{GITHUB_URL}/issues") target="_blank">"GitHub"</a>
                        "."
                    </p>
                </div>
            </main>
        </div>
    }
}

#[component]
fn ReportNav() -> impl IntoView {
    view! {
        <nav class="nav report-nav">
            <div class="nav-inner">
                <a href="/" class="nav-brand">
                    <span class="nav-logo">"⚡"</span>
                    <span class="nav-title">"stackling"</span>
                </a>
                <a href="/" class="nav-link">"← Back to home"</a>
            </div>
        </nav>
    }
}
