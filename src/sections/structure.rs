use leptos::prelude::*;

/// One scaffold layout the selector can display.
pub struct StructurePreset {
    pub key: &'static str,
    pub title: &'static str,
    pub accent: &'static str,
    pub tree: &'static str,
}

pub const STRUCTURE_PRESETS: [StructurePreset; 2] = [
    StructurePreset {
        key: "javascript",
        title: "JavaScript",
        accent: "yellow",
        tree: r#"my-app/
├── api/
│   └── index.js
├── src/
│   ├── config/
│   │   └── database.js
│   ├── models/
│   │   └── User.js
│   ├── routes/
│   │   └── users.js
│   ├── middleware/
│   │   └── errorHandler.js
│   └── app.js
├── .env.example
├── .gitignore
├── package.json
├── vercel.json
└── README.md"#,
    },
    StructurePreset {
        key: "typescript",
        title: "TypeScript",
        accent: "blue",
        tree: r#"my-app/
├── api/
│   └── index.ts
├── src/
│   ├── config/
│   │   └── database.ts
│   ├── models/
│   │   └── User.ts
│   ├── routes/
│   │   └── users.ts
│   ├── middleware/
│   │   └── errorHandler.ts
│   ├── types/
│   │   └── express.d.ts
│   └── app.ts
├── .env.example
├── .gitignore
├── package.json
├── tsconfig.json
├── vercel.json
└── README.md"#,
    },
];

/// Unknown keys resolve to the TypeScript preset, the selector's default.
pub fn preset_for(key: &str) -> &'static StructurePreset {
    STRUCTURE_PRESETS
        .iter()
        .find(|preset| preset.key == key)
        .unwrap_or(&STRUCTURE_PRESETS[1])
}

#[component]
pub fn StructureSelector() -> impl IntoView {
    let (selected, set_selected) = signal("typescript");
    let (copied, set_copied) = signal(false);

    let copy_tree = move |_| {
        if let Some(window) = web_sys::window() {
            let clipboard = window.navigator().clipboard();
            let _ = clipboard.write_text(preset_for(selected.get()).tree);
            set_copied.set(true);
            set_timeout(
                move || set_copied.set(false),
                std::time::Duration::from_millis(2000),
            );
        }
    };

    view! {
        <section class="structure" id="structure">
            <div class="container">
                <h2 class="section-title">"What you get"</h2>
                <p class="section-subtitle">
                    "Both templates produce the same layout. The TypeScript one adds "
                    "a tsconfig and ambient types, nothing else moves."
                </p>
                <div class="structure-tabs">
                    <button
                        class=move || {
                            if selected.get() == "javascript" {
                                "structure-tab active yellow"
                            } else {
                                "structure-tab"
                            }
                        }
                        on:click=move |_| set_selected.set("javascript")
                    >
                        "JavaScript"
                    </button>
                    <button
                        class=move || {
                            if selected.get() == "typescript" {
                                "structure-tab active blue"
                            } else {
                                "structure-tab"
                            }
                        }
                        on:click=move |_| set_selected.set("typescript")
                    >
                        "TypeScript"
                    </button>
                </div>
                <div class="structure-panel">
                    <div class="structure-panel-head">
                        <span class=move || {
                            format!("structure-dot {}", preset_for(selected.get()).accent)
                        }></span>
                        <span class="structure-panel-title">
                            {move || format!("{} project", preset_for(selected.get()).title)}
                        </span>
                        <button class="code-copy-btn" on:click=copy_tree>
                            {move || if copied.get() { "copied" } else { "copy" }}
                        </button>
                    </div>
                    <pre class="structure-tree">
                        <code>{move || preset_for(selected.get()).tree}</code>
                    </pre>
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn exactly_two_presets_with_distinct_keys() {
        assert_eq!(STRUCTURE_PRESETS.len(), 2);
        assert_ne!(STRUCTURE_PRESETS[0].key, STRUCTURE_PRESETS[1].key);
        assert_ne!(STRUCTURE_PRESETS[0].accent, STRUCTURE_PRESETS[1].accent);
    }

    #[test]
    fn presets_show_their_ecosystem_marker_files() {
        let js = preset_for("javascript");
        assert!(js.tree.contains("package.json"));
        assert!(js.tree.contains("app.js"));
        assert!(!js.tree.contains("tsconfig.json"));

        let ts = preset_for("typescript");
        assert!(ts.tree.contains("tsconfig.json"));
        assert!(ts.tree.contains("api/"));
        assert!(ts.tree.contains("app.ts"));
    }

    #[test]
    fn unknown_key_falls_back_to_typescript() {
        assert_eq!(preset_for("rust").key, "typescript");
        assert_eq!(preset_for("").key, "typescript");
    }

    #[test]
    fn tree_blocks_are_multi_line() {
        for preset in &STRUCTURE_PRESETS {
            assert!(preset.tree.lines().count() > 10, "{} tree too short", preset.key);
            assert!(preset.tree.starts_with("my-app/"));
        }
    }
}
