use leptos::prelude::*;

/// Titled code block with a copy button. The "copied" indicator clears
/// itself after a moment.
#[component]
pub fn CodeBlock(title: &'static str, code: &'static str) -> impl IntoView {
    let (copied, set_copied) = signal(false);

    let copy_code = move |_| {
        if let Some(window) = web_sys::window() {
            let clipboard = window.navigator().clipboard();
            let _ = clipboard.write_text(code);
            set_copied.set(true);
            set_timeout(
                move || set_copied.set(false),
                std::time::Duration::from_millis(2000),
            );
        }
    };

    view! {
        <div class="code-block">
            <div class="code-block-head">
                <span class="code-block-title">{title}</span>
                <button class="code-copy-btn" on:click=copy_code>
                    {move || if copied.get() { "copied" } else { "copy" }}
                </button>
            </div>
            <pre class="code-block-body"><code>{code}</code></pre>
        </div>
    }
}
