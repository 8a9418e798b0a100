use log::debug;
use wasm_bindgen::JsCast;
use web_sys::MouseEvent;
use yew::prelude::*;

/// Key of every overlay on the page. At most one popup is open at a time;
/// the page owns an `Option<PopupId>` and every open implicitly closes the
/// previous popup, so body scroll-lock never needs reference counting.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum PopupId {
    Register,
    Contact,
    Poem,
    Program(&'static str),
    Alumni(&'static str),
    News(&'static str),
}

impl PopupId {
    /// Stable identifier, also used as the overlay's DOM id.
    pub fn dom_id(self) -> String {
        match self {
            PopupId::Register => "registerPopup".to_string(),
            PopupId::Contact => "contactPopup".to_string(),
            PopupId::Poem => "poemPopup".to_string(),
            PopupId::Program(key) => format!("popup-{}", key),
            PopupId::Alumni(key) => format!("popup-{}", key),
            PopupId::News(key) => format!("popup-{}", key),
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct PopupProps {
    pub id: PopupId,
    pub active: bool,
    pub on_close: Callback<()>,
    pub children: Children,
    #[prop_or_default]
    pub title: Option<String>,
}

/// Dimmed overlay with a centered panel. A click that lands on the overlay
/// itself (the backdrop, not the panel) dismisses the popup, as does the
/// close button in the panel corner.
#[function_component(Popup)]
pub fn popup(props: &PopupProps) -> Html {
    let overlay_ref = use_node_ref();

    let on_backdrop_click = {
        let overlay_ref = overlay_ref.clone();
        let on_close = props.on_close.clone();
        let id = props.id;
        Callback::from(move |e: MouseEvent| {
            let target = e
                .target()
                .and_then(|t| t.dyn_into::<web_sys::Element>().ok());
            if let (Some(overlay), Some(target)) = (overlay_ref.cast::<web_sys::Element>(), target)
            {
                if overlay == target {
                    debug!("backdrop click closes {:?}", id);
                    on_close.emit(());
                }
            }
        })
    };

    let on_close_btn = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    html! {
        <div
            id={props.id.dom_id()}
            class={classes!("popup-overlay", props.active.then(|| "active"))}
            ref={overlay_ref}
            onclick={on_backdrop_click}
        >
            <div class="popup-panel">
                <button class="popup-close" onclick={on_close_btn}>{"×"}</button>
                {
                    if let Some(title) = &props.title {
                        html! { <h3 class="popup-title">{title}</h3> }
                    } else {
                        html! {}
                    }
                }
                { for props.children.iter() }
            </div>
            <style>
                {r#"
                    .popup-overlay {
                        position: fixed;
                        inset: 0;
                        background: rgba(20, 16, 12, 0.6);
                        display: none;
                        align-items: center;
                        justify-content: center;
                        z-index: 100;
                        padding: 1rem;
                    }

                    .popup-overlay.active {
                        display: flex;
                    }

                    .popup-panel {
                        position: relative;
                        background: #fff;
                        border-radius: 16px;
                        padding: 2rem;
                        max-width: 520px;
                        width: 100%;
                        max-height: 85vh;
                        overflow-y: auto;
                        box-shadow: 0 12px 40px rgba(0, 0, 0, 0.25);
                    }

                    .popup-title {
                        margin: 0 0 1rem 0;
                        color: #f36f21;
                        font-size: 1.4rem;
                    }

                    .popup-close {
                        position: absolute;
                        top: 0.6rem;
                        right: 0.8rem;
                        border: none;
                        background: none;
                        font-size: 1.6rem;
                        line-height: 1;
                        color: #888;
                        cursor: pointer;
                    }

                    .popup-close:hover {
                        color: #f36f21;
                    }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dom_ids_match_markup_contract() {
        assert_eq!(PopupId::Register.dom_id(), "registerPopup");
        assert_eq!(PopupId::Contact.dom_id(), "contactPopup");
        assert_eq!(PopupId::Poem.dom_id(), "poemPopup");
        assert_eq!(PopupId::Program("design").dom_id(), "popup-design");
        assert_eq!(PopupId::Alumni("thanh").dom_id(), "popup-thanh");
        assert_eq!(PopupId::News("yakult").dom_id(), "popup-yakult");
    }

    #[test]
    fn distinct_keys_have_distinct_ids() {
        let ids = [
            PopupId::Register,
            PopupId::Contact,
            PopupId::Poem,
            PopupId::Program("it"),
            PopupId::Alumni("mai"),
            PopupId::News("chieusang"),
        ];
        for (i, a) in ids.iter().enumerate() {
            for b in ids.iter().skip(i + 1) {
                assert_ne!(a.dom_id(), b.dom_id());
            }
        }
    }
}
