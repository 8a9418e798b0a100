use gloo_timers::callback::Timeout;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::config;

/// Newsletter signup form. Submission never leaves the page: the field is
/// cleared, a success banner shows, and a timer hides it again after
/// `NEWSLETTER_BANNER_MS`. Re-submitting replaces the pending timer so the
/// banner always gets a full display window.
#[function_component(NewsletterForm)]
pub fn newsletter_form() -> Html {
    let email = use_state(String::new);
    let submitted = use_state(|| false);
    let banner_timer = use_mut_ref(|| None::<Timeout>);

    let oninput = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
        })
    };

    let onsubmit = {
        let email = email.clone();
        let submitted = submitted.clone();
        let banner_timer = banner_timer.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            email.set(String::new());
            submitted.set(true);

            let submitted = submitted.clone();
            *banner_timer.borrow_mut() = Some(Timeout::new(config::NEWSLETTER_BANNER_MS, move || {
                submitted.set(false);
            }));
        })
    };

    html! {
        <form id="newsletterForm" class="newsletter-form" {onsubmit}>
            <div class="newsletter-row">
                <input
                    type="email"
                    required=true
                    placeholder="Nhập email của bạn"
                    value={(*email).clone()}
                    {oninput}
                />
                <button type="submit">{"Đăng ký nhận tin"}</button>
            </div>
            <p
                id="newsletterSuccess"
                class="newsletter-success"
                style={if *submitted { "display: block;" } else { "display: none;" }}
            >
                {"Cảm ơn bạn đã đăng ký nhận bản tin!"}
            </p>
            <style>
                {r#"
                    .newsletter-form {
                        max-width: 420px;
                    }

                    .newsletter-row {
                        display: flex;
                        gap: 0.5rem;
                    }

                    .newsletter-row input {
                        flex: 1;
                        padding: 0.6rem 0.9rem;
                        border: 1px solid #ddd;
                        border-radius: 8px;
                        font-size: 0.95rem;
                    }

                    .newsletter-row button {
                        border: none;
                        background: #f36f21;
                        color: #fff;
                        border-radius: 8px;
                        padding: 0.6rem 1.1rem;
                        cursor: pointer;
                        white-space: nowrap;
                    }

                    .newsletter-row button:hover {
                        background: #d95c12;
                    }

                    .newsletter-success {
                        color: #2e9e44;
                        font-size: 0.9rem;
                        margin: 0.6rem 0 0 0;
                    }
                "#}
            </style>
        </form>
    }
}
