use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{HtmlInputElement, MouseEvent, Node};
use yew::prelude::*;

use crate::components::popup::PopupId;

struct DropdownGroup {
    label: &'static str,
    items: &'static [(&'static str, &'static str)],
}

const DROPDOWNS: [DropdownGroup; 2] = [
    DropdownGroup {
        label: "Ngành học",
        items: &[
            ("Thiết kế đồ họa", "#programs"),
            ("Quản trị kinh doanh", "#programs"),
            ("Công nghệ thông tin", "#programs"),
            ("Công nghệ bán dẫn", "#programs"),
        ],
    },
    DropdownGroup {
        label: "Tuyển sinh",
        items: &[
            ("Học phí", "#about-program"),
            ("Học bổng", "#about-program"),
            ("Hồ sơ nhập học", "#about-program"),
        ],
    },
];

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub on_open: Callback<PopupId>,
}

/// Top navigation bar: burger menu on mobile, two dropdown groups (opening
/// one closes the other), and a search popup that grabs focus when shown.
/// A document-level click listener closes whatever the click landed outside
/// of.
#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let menu_open = use_state(|| false);
    let open_dropdown = use_state(|| None::<usize>);
    let search_open = use_state(|| false);

    let nav_ref = use_node_ref();
    let dropdown_refs = [use_node_ref(), use_node_ref()];
    let search_wrapper_ref = use_node_ref();
    let search_input_ref = use_node_ref();

    {
        let menu_open = menu_open.clone();
        let open_dropdown = open_dropdown.clone();
        let search_open = search_open.clone();
        let nav_ref = nav_ref.clone();
        let first_dropdown = dropdown_refs[0].clone();
        let second_dropdown = dropdown_refs[1].clone();
        let search_wrapper_ref = search_wrapper_ref.clone();
        use_effect_with_deps(
            move |_| {
                let document = web_sys::window().unwrap().document().unwrap();

                let click_callback = Closure::wrap(Box::new(move |e: MouseEvent| {
                    let target = e.target().and_then(|t| t.dyn_into::<Node>().ok());
                    let inside = |node_ref: &NodeRef| match (node_ref.get(), target.as_ref()) {
                        (Some(node), Some(target)) => node.contains(Some(target)),
                        _ => false,
                    };
                    if !inside(&nav_ref) {
                        menu_open.set(false);
                    }
                    if !inside(&first_dropdown) && !inside(&second_dropdown) {
                        open_dropdown.set(None);
                    }
                    if !inside(&search_wrapper_ref) {
                        search_open.set(false);
                    }
                }) as Box<dyn FnMut(MouseEvent)>);

                document
                    .add_event_listener_with_callback(
                        "click",
                        click_callback.as_ref().unchecked_ref(),
                    )
                    .unwrap();

                move || {
                    document
                        .remove_event_listener_with_callback(
                            "click",
                            click_callback.as_ref().unchecked_ref(),
                        )
                        .unwrap();
                }
            },
            (),
        );
    }

    // focus the field as soon as the search popup opens
    {
        let search_input_ref = search_input_ref.clone();
        use_effect_with_deps(
            move |open: &bool| {
                if *open {
                    if let Some(input) = search_input_ref.cast::<HtmlInputElement>() {
                        let _ = input.focus();
                    }
                }
                || ()
            },
            *search_open,
        );
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let open_search = {
        let search_open = search_open.clone();
        Callback::from(move |e: MouseEvent| {
            // keep the document listener from instantly closing it again
            e.stop_propagation();
            search_open.set(true);
        })
    };

    let close_search = {
        let search_open = search_open.clone();
        Callback::from(move |_: MouseEvent| search_open.set(false))
    };

    let open_contact = {
        let on_open = props.on_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_open.emit(PopupId::Contact);
        })
    };

    html! {
        <header class="top-bar">
            <nav id="mainNav" class={classes!("main-nav", (*menu_open).then(|| "open"))} ref={nav_ref.clone()}>
                <a href="#top" class="nav-logo">{"BTEC FPT"}</a>

                <button id="menuToggle" class="burger-menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>

                <div class="nav-links">
                    <a href="#top" class="nav-link">{"Trang chủ"}</a>
                    {
                        DROPDOWNS.iter().enumerate().map(|(i, group)| {
                            let is_open = *open_dropdown == Some(i);
                            let toggle = {
                                let open_dropdown = open_dropdown.clone();
                                Callback::from(move |e: MouseEvent| {
                                    e.prevent_default();
                                    // opening one dropdown closes its sibling
                                    open_dropdown.set(if is_open { None } else { Some(i) });
                                })
                            };
                            html! {
                                <div
                                    class={classes!("dropdown", is_open.then(|| "open"))}
                                    ref={dropdown_refs[i].clone()}
                                >
                                    <a href="#" class="dropdown-toggle" onclick={toggle}>
                                        { group.label }{" ▾"}
                                    </a>
                                    <div class="dropdown-menu">
                                        {
                                            group.items.iter().map(|(label, href)| html! {
                                                <a href={*href} class="dropdown-item">{*label}</a>
                                            }).collect::<Html>()
                                        }
                                    </div>
                                </div>
                            }
                        }).collect::<Html>()
                    }
                    <a href="#alumni" class="nav-link">{"Cựu sinh viên"}</a>
                    <a href="#news" class="nav-link">{"Tin tức"}</a>
                    <a href="#" id="contactBtn" class="nav-link" onclick={open_contact}>{"Liên hệ"}</a>
                </div>

                <button id="searchBtn" class="search-btn" onclick={open_search}>{"🔍"}</button>
                <div
                    id="searchInputWrapper"
                    class="search-popup"
                    style={if *search_open { "display: flex;" } else { "display: none;" }}
                    ref={search_wrapper_ref.clone()}
                >
                    <input id="searchInput" type="text" placeholder="Tìm kiếm..." ref={search_input_ref.clone()} />
                    <button id="closeSearch" onclick={close_search}>{"×"}</button>
                </div>
            </nav>
            <style>
                {r#"
                    .top-bar {
                        position: sticky;
                        top: 0;
                        background: #fff;
                        border-bottom: 1px solid #f0e4da;
                        z-index: 50;
                    }

                    .main-nav {
                        display: flex;
                        align-items: center;
                        gap: 1.4rem;
                        max-width: 1100px;
                        margin: 0 auto;
                        padding: 0.8rem 1.2rem;
                        position: relative;
                    }

                    .nav-logo {
                        font-weight: 800;
                        font-size: 1.3rem;
                        color: #f36f21;
                        text-decoration: none;
                        margin-right: auto;
                    }

                    .nav-links {
                        display: flex;
                        align-items: center;
                        gap: 1.2rem;
                    }

                    .nav-link, .dropdown-toggle {
                        color: #333;
                        text-decoration: none;
                        font-size: 0.95rem;
                    }

                    .nav-link:hover, .dropdown-toggle:hover {
                        color: #f36f21;
                    }

                    .dropdown {
                        position: relative;
                    }

                    .dropdown-menu {
                        display: none;
                        position: absolute;
                        top: 100%;
                        left: 0;
                        background: #fff;
                        border: 1px solid #f0e4da;
                        border-radius: 10px;
                        min-width: 200px;
                        padding: 0.4rem 0;
                        box-shadow: 0 8px 24px rgba(0, 0, 0, 0.1);
                    }

                    .dropdown.open .dropdown-menu {
                        display: block;
                    }

                    .dropdown-item {
                        display: block;
                        padding: 0.5rem 1rem;
                        color: #333;
                        text-decoration: none;
                        font-size: 0.9rem;
                    }

                    .dropdown-item:hover {
                        background: #fdf2ea;
                        color: #f36f21;
                    }

                    .burger-menu {
                        display: none;
                        flex-direction: column;
                        gap: 4px;
                        border: none;
                        background: none;
                        cursor: pointer;
                        padding: 6px;
                    }

                    .burger-menu span {
                        width: 22px;
                        height: 2px;
                        background: #333;
                    }

                    .search-btn {
                        border: none;
                        background: none;
                        font-size: 1.1rem;
                        cursor: pointer;
                    }

                    .search-popup {
                        position: absolute;
                        top: 100%;
                        right: 1.2rem;
                        background: #fff;
                        border: 1px solid #f0e4da;
                        border-radius: 10px;
                        padding: 0.5rem;
                        gap: 0.4rem;
                        box-shadow: 0 8px 24px rgba(0, 0, 0, 0.1);
                    }

                    .search-popup input {
                        border: 1px solid #ddd;
                        border-radius: 6px;
                        padding: 0.4rem 0.7rem;
                    }

                    .search-popup button {
                        border: none;
                        background: none;
                        font-size: 1.1rem;
                        cursor: pointer;
                        color: #888;
                    }

                    @media (max-width: 768px) {
                        .burger-menu {
                            display: flex;
                        }

                        .nav-links {
                            display: none;
                            position: absolute;
                            top: 100%;
                            left: 0;
                            right: 0;
                            flex-direction: column;
                            align-items: flex-start;
                            background: #fff;
                            border-bottom: 1px solid #f0e4da;
                            padding: 1rem 1.2rem;
                        }

                        .main-nav.open .nav-links {
                            display: flex;
                        }
                    }
                "#}
            </style>
        </header>
    }
}
