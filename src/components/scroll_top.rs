use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{MouseEvent, ScrollBehavior, ScrollToOptions};
use yew::prelude::*;

use crate::config;

/// Floating button in the page corner. Visibility tracks the scroll offset
/// (shown past `SCROLL_TOP_THRESHOLD`); clicking smooth-scrolls back to the
/// top.
#[function_component(ScrollTopButton)]
pub fn scroll_top_button() -> Html {
    let visible = use_state(|| false);

    {
        let visible = visible.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().unwrap();
                let window_clone = window.clone();

                let scroll_callback = Closure::wrap(Box::new(move || {
                    let y = window_clone.scroll_y().unwrap_or(0.0);
                    visible.set(y > config::SCROLL_TOP_THRESHOLD);
                }) as Box<dyn FnMut()>);

                window
                    .add_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    )
                    .unwrap();

                move || {
                    window
                        .remove_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        )
                        .unwrap();
                }
            },
            (),
        );
    }

    let onclick = Callback::from(move |_: MouseEvent| {
        if let Some(window) = web_sys::window() {
            let options = ScrollToOptions::new();
            options.set_top(0.0);
            options.set_behavior(ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&options);
        }
    });

    html! {
        <button
            id="scrollTopBtn"
            class="scroll-top"
            style={if *visible { "display: block;" } else { "display: none;" }}
            {onclick}
        >
            {"↑"}
            <style>
                {r#"
                    .scroll-top {
                        position: fixed;
                        right: 1.4rem;
                        bottom: 1.4rem;
                        width: 44px;
                        height: 44px;
                        border: none;
                        border-radius: 50%;
                        background: #f36f21;
                        color: #fff;
                        font-size: 1.2rem;
                        cursor: pointer;
                        box-shadow: 0 4px 14px rgba(0, 0, 0, 0.2);
                        z-index: 90;
                    }

                    .scroll-top:hover {
                        background: #d95c12;
                    }
                "#}
            </style>
        </button>
    }
}
