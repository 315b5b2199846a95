//! Easter eggs for people who open the console.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

use super::VERSION;
use super::structure::preset_for;

const KONAMI_CODE: [&str; 10] = [
    "ArrowUp",
    "ArrowUp",
    "ArrowDown",
    "ArrowDown",
    "ArrowLeft",
    "ArrowRight",
    "ArrowLeft",
    "ArrowRight",
    "b",
    "a",
];

fn ascii_logo() -> String {
    format!(
        r#"
     _             _    _ _
 ___| |_ __ _  ___| | _| (_)_ __   __ _
/ __| __/ _` |/ __| |/ / | | '_ \ / _` |
\__ \ || (_| | (__|   <| | | | | | (_| |
|___/\__\__,_|\___|_|\_\_|_|_| |_|\__, |
                                  |___/  {VERSION}
"#
    )
}

fn print_console_art() {
    web_sys::console::log_1(&JsValue::from_str(&ascii_logo()));
    web_sys::console::log_2(
        &JsValue::from_str("%cExpress + MongoDB, serverless in one command."),
        &JsValue::from_str("color: #facc15; font-weight: bold; font-size: 13px;"),
    );
    web_sys::console::log_1(&JsValue::from_str(
        "Curious? Try window.stackling.blueprint() or window.stackling.credits(). There is also a code.",
    ));
}

// window.stackling.{blueprint,credits} for people who open devtools
fn setup_secret_commands() {
    let Some(window) = web_sys::window() else {
        return;
    };

    let obj = js_sys::Object::new();

    let blueprint = Closure::wrap(Box::new(|| {
        web_sys::console::log_1(&JsValue::from_str(preset_for("typescript").tree));
    }) as Box<dyn Fn()>);
    let _ = js_sys::Reflect::set(
        &obj,
        &JsValue::from_str("blueprint"),
        blueprint.as_ref(),
    );
    blueprint.forget();

    let credits = Closure::wrap(Box::new(|| {
        web_sys::console::log_2(
            &JsValue::from_str("%cDeveloped with ⚡ by the stackling team (c)2026"),
            &JsValue::from_str("color: #60a5fa; font-style: italic;"),
        );
    }) as Box<dyn Fn()>);
    let _ = js_sys::Reflect::set(&obj, &JsValue::from_str("credits"), credits.as_ref());
    credits.forget();

    let _ = js_sys::Reflect::set(&window, &JsValue::from_str("stackling"), &obj);
}

fn trigger_konami() {
    let Some(body) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body())
    else {
        return;
    };

    let _ = body.class_list().add_1("konami-activated");
    web_sys::console::log_2(
        &JsValue::from_str("%c⚡ lightning mode"),
        &JsValue::from_str("color: #facc15; font-size: 16px; font-weight: bold;"),
    );
    set_timeout(
        move || {
            let _ = body.class_list().remove_1("konami-activated");
        },
        std::time::Duration::from_millis(3000),
    );
}

/// Rolling window of the last ten keys pressed; true when they spell the
/// code. Clears itself on a hit so the trigger can re-arm.
fn advance_konami(recent: &mut Vec<String>, key: String) -> bool {
    recent.push(key);
    if recent.len() > KONAMI_CODE.len() {
        recent.remove(0);
    }
    let complete = recent.len() == KONAMI_CODE.len()
        && recent.iter().zip(KONAMI_CODE).all(|(pressed, step)| pressed == step);
    if complete {
        recent.clear();
    }
    complete
}

fn setup_konami_listener() {
    let Some(window) = web_sys::window() else {
        return;
    };

    let recent: Rc<RefCell<Vec<String>>> = Rc::new(RefCell::new(Vec::new()));
    let handler = Closure::wrap(Box::new(move |event: web_sys::KeyboardEvent| {
        let fired = advance_konami(&mut recent.borrow_mut(), event.key());
        if fired {
            trigger_konami();
        }
    }) as Box<dyn FnMut(_)>);

    let _ = window
        .add_event_listener_with_callback("keydown", handler.as_ref().unchecked_ref());
    handler.forget();
}

/// Renders nothing, wires up the console toys once on mount.
#[component]
pub fn EasterEggs() -> impl IntoView {
    Effect::new(move || {
        print_console_art();
        setup_secret_commands();
        setup_konami_listener();
    });

    view! {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn konami_sequence_ends_with_b_a() {
        assert_eq!(KONAMI_CODE[8], "b");
        assert_eq!(KONAMI_CODE[9], "a");
        assert_eq!(KONAMI_CODE.len(), 10);
    }

    #[test]
    fn logo_carries_the_release_version() {
        assert!(ascii_logo().contains(VERSION));
    }

    #[test]
    fn the_code_fires_and_rearms() {
        let mut recent = Vec::new();
        for _ in 0..2 {
            let mut fired = false;
            for key in KONAMI_CODE {
                fired = advance_konami(&mut recent, key.to_string());
            }
            assert!(fired, "full sequence should trigger");
        }
    }

    #[test]
    fn extra_leading_up_presses_still_complete_the_code() {
        let presses = [
            "ArrowUp", "ArrowUp", "ArrowUp", "ArrowDown", "ArrowDown", "ArrowLeft",
            "ArrowRight", "ArrowLeft", "ArrowRight", "b", "a",
        ];
        let mut recent = Vec::new();
        let mut fired = 0;
        for key in presses {
            if advance_konami(&mut recent, key.to_string()) {
                fired += 1;
            }
        }
        assert_eq!(fired, 1);
    }

    #[test]
    fn a_stray_key_mid_run_blocks_the_trigger() {
        let presses = [
            "ArrowUp", "ArrowUp", "x", "ArrowDown", "ArrowDown", "ArrowLeft",
            "ArrowRight", "ArrowLeft", "ArrowRight", "b", "a",
        ];
        let mut recent = Vec::new();
        for key in presses {
            assert!(!advance_konami(&mut recent, key.to_string()));
        }
    }
}
