use log::{debug, info};
use web_sys::{MouseEvent, ScrollBehavior, ScrollIntoViewOptions};
use yew::prelude::*;

use crate::components::carousel::{AlumniCarousel, NewsRow, ALUMNI, NEWS};
use crate::components::filter::{FilterBar, ProgramFilter};
use crate::components::nav::Nav;
use crate::components::newsletter::NewsletterForm;
use crate::components::popup::{Popup, PopupId};
use crate::components::scroll_top::ScrollTopButton;
use crate::components::typewriter::Typewriter;
use crate::config;

struct Program {
    key: &'static str,
    name: &'static str,
    is_hot: bool,
    blurb: &'static str,
    detail: &'static str,
}

const PROGRAMS: [Program; 4] = [
    Program {
        key: "design",
        name: "Thiết kế đồ họa",
        is_hot: false,
        blurb: "Từ ý tưởng đến sản phẩm: nhận diện thương hiệu, minh họa số, motion.",
        detail: "Chương trình hai năm rưỡi theo chuẩn BTEC, học qua dự án thật với doanh nghiệp. Sinh viên tốt nghiệp làm việc tại các studio thiết kế, agency quảng cáo hoặc làm tự do.",
    },
    Program {
        key: "business",
        name: "Quản trị kinh doanh",
        is_hot: false,
        blurb: "Nền tảng quản trị, marketing và khởi nghiệp cho người dẫn dắt.",
        detail: "Học phần trải dài từ tài chính doanh nghiệp đến hành vi khách hàng, kết thúc bằng đồ án khởi nghiệp được hội đồng doanh nhân chấm điểm.",
    },
    Program {
        key: "it",
        name: "Công nghệ thông tin",
        is_hot: true,
        blurb: "Lập trình web, di động và hệ thống với lộ trình thực chiến.",
        detail: "Sinh viên viết phần mềm từ học kỳ đầu tiên, thực tập tại doanh nghiệp từ năm hai và có thể chọn chuyên sâu phát triển web, di động hoặc kiểm thử.",
    },
    Program {
        key: "semicon",
        name: "Công nghệ bán dẫn",
        is_hot: true,
        blurb: "Ngành mới đón đầu làn sóng sản xuất chip tại Việt Nam.",
        detail: "Chương trình hợp tác với các nhà máy đóng gói và kiểm thử chip, trang bị kiến thức vật liệu, quy trình sản xuất và vận hành phòng sạch.",
    },
];

fn scroll_to_section(id: &str) {
    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
        if let Some(element) = document.get_element_by_id(id) {
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            element.scroll_into_view_with_scroll_into_view_options(&options);
        }
    }
}

/// The whole landing page. Owns the single-popup state: opening any popup
/// replaces the previous one, and body scroll-lock follows whether anything
/// is open.
#[function_component(Home)]
pub fn home() -> Html {
    let active_popup = use_state(|| None::<PopupId>);
    let filter = use_state(ProgramFilter::default);

    // Scroll to top only on initial mount
    {
        use_effect_with_deps(
            move |_| {
                info!("Rendering landing page");
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    // scroll-lock is a pure function of the popup state
    {
        use_effect_with_deps(
            move |active: &Option<PopupId>| {
                if let Some(body) = web_sys::window()
                    .and_then(|w| w.document())
                    .and_then(|d| d.body())
                {
                    let overflow = if active.is_some() { "hidden" } else { "" };
                    let _ = body.style().set_property("overflow", overflow);
                }
                || ()
            },
            *active_popup,
        );
    }

    let open_popup = {
        let active_popup = active_popup.clone();
        Callback::from(move |id: PopupId| {
            debug!("opening popup {:?}", id);
            active_popup.set(Some(id));
        })
    };

    let close_popup = {
        let active_popup = active_popup.clone();
        Callback::from(move |_: ()| active_popup.set(None))
    };

    let open_register = {
        let open_popup = open_popup.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            open_popup.emit(PopupId::Register);
        })
    };

    let open_poem = {
        let open_popup = open_popup.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            open_popup.emit(PopupId::Poem);
        })
    };

    let scroll_to_about = Callback::from(|e: MouseEvent| {
        e.prevent_default();
        scroll_to_section("about-program");
    });

    let on_filter = {
        let filter = filter.clone();
        Callback::from(move |tag: ProgramFilter| filter.set(tag))
    };

    let social_click = |key: &'static str| {
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            if let Some(url) = config::social_url(key) {
                if let Some(window) = web_sys::window() {
                    let _ = window.open_with_url_and_target(url, "_blank");
                }
            }
        })
    };

    let poem_lines: Vec<String> = config::HERO_POEM.iter().map(|l| l.to_string()).collect();

    html! {
        <div id="top" class="landing-page">
            <Nav on_open={open_popup.clone()} />

            <header class="hero">
                <h1>{"Mùa Hè BTEC 2026"}</h1>
                <div id="heroTypewriter" class="hero-typewriter">
                    <Typewriter lines={poem_lines.clone()} />
                </div>
                <div class="hero-cta-group">
                    <button id="openRegister" class="hero-cta" onclick={open_register.clone()}>
                        {"Đăng Ký Ngay"}
                    </button>
                    <button id="scrollToAbout" class="hero-cta secondary" onclick={scroll_to_about}>
                        {"Tìm Hiểu Thêm"}
                    </button>
                    <a href="#" id="openPoem" class="poem-link" onclick={open_poem}>
                        {"Đọc trọn bài thơ Trạng Code"}
                    </a>
                </div>
            </header>

            <section id="about-program" class="about-section">
                <h2>{"Về chương trình"}</h2>
                <p>
                    {"BTEC FPT đào tạo theo chuẩn Anh quốc với phương châm học qua dự án. \
                      Chương trình mùa hè mở cửa xưởng thực hành, studio và phòng lab cho \
                      học sinh trải nghiệm trước khi chọn ngành."}
                </p>
            </section>

            <section id="programs" class="programs-section">
                <h2>{"Ngành học"}</h2>
                <FilterBar active={*filter} on_select={on_filter} />
                <div class="program-grid">
                    {
                        PROGRAMS.iter().map(|program| {
                            let visible = filter.matches(program.is_hot);
                            let style = if visible { "" } else { "display: none;" };
                            let on_info = {
                                let open_popup = open_popup.clone();
                                let key = program.key;
                                Callback::from(move |_: MouseEvent| open_popup.emit(PopupId::Program(key)))
                            };
                            html! {
                                <div class={classes!("program-card", program.is_hot.then(|| "hot"))} {style}>
                                    {
                                        if program.is_hot {
                                            html! { <span class="hot-badge">{"HOT"}</span> }
                                        } else {
                                            html! {}
                                        }
                                    }
                                    <h3>{ program.name }</h3>
                                    <p>{ program.blurb }</p>
                                    <button class="program-info-btn" onclick={on_info}>{"Xem chi tiết"}</button>
                                </div>
                            }
                        }).collect::<Html>()
                    }
                </div>
            </section>

            <section id="alumni" class="alumni-section">
                <h2>{"Cựu sinh viên"}</h2>
                <AlumniCarousel on_open={open_popup.clone()} />
            </section>

            <section id="news" class="news-section">
                <h2>{"Tin tức"}</h2>
                <NewsRow on_open={open_popup.clone()} />
            </section>

            <footer class="footer">
                <div class="footer-columns">
                    <div>
                        <h4>{"BTEC FPT"}</h4>
                        <p>{"Tòa nhà FPT Polytechnic, Trịnh Văn Bô, Hà Nội"}</p>
                        <div class="footer-socials">
                            <a href="#" class="footer-icon" onclick={social_click("facebook")}>{"Facebook"}</a>
                            <a href="#" class="footer-icon" onclick={social_click("youtube")}>{"YouTube"}</a>
                            <a href="#" class="footer-icon" onclick={social_click("tiktok")}>{"TikTok"}</a>
                        </div>
                    </div>
                    <div>
                        <h4>{"Bản tin"}</h4>
                        <NewsletterForm />
                    </div>
                    <div>
                        <h4>{"Sẵn sàng cho mùa hè?"}</h4>
                        <button id="footerRegisterBtn" class="hero-cta" onclick={open_register}>
                            {"Đăng Ký Ngay"}
                        </button>
                    </div>
                </div>
                <p class="footer-note">{"© 2026 BTEC FPT. Chương trình trải nghiệm mùa hè."}</p>
            </footer>

            <ScrollTopButton />

            <Popup
                id={PopupId::Register}
                active={*active_popup == Some(PopupId::Register)}
                on_close={close_popup.clone()}
                title={"Đăng ký trải nghiệm".to_string()}
            >
                <p>{"Để lại thông tin, phòng tuyển sinh sẽ liên hệ trong 24 giờ."}</p>
                <div class="register-fields">
                    <input type="text" placeholder="Họ và tên" />
                    <input type="tel" placeholder="Số điện thoại" />
                </div>
                <button class="hero-cta" onclick={{
                    let close_popup = close_popup.clone();
                    Callback::from(move |e: MouseEvent| {
                        e.prevent_default();
                        close_popup.emit(());
                    })
                }}>
                    {"Gửi đăng ký"}
                </button>
            </Popup>

            <Popup
                id={PopupId::Contact}
                active={*active_popup == Some(PopupId::Contact)}
                on_close={close_popup.clone()}
                title={"Liên hệ".to_string()}
            >
                <p>{"Hotline tuyển sinh: 0981 725 836"}</p>
                <p>{"Email: tuyensinh@btec.fpt.edu.vn"}</p>
                <p>{"Giờ làm việc: 8h00 – 17h30, thứ Hai đến thứ Bảy."}</p>
            </Popup>

            <Popup
                id={PopupId::Poem}
                active={*active_popup == Some(PopupId::Poem)}
                on_close={close_popup.clone()}
                title={"Trạng Code".to_string()}
            >
                <p style="white-space: pre-line;">{ config::HERO_POEM.join("\n") }</p>
            </Popup>

            {
                PROGRAMS.iter().map(|program| html! {
                    <Popup
                        id={PopupId::Program(program.key)}
                        active={*active_popup == Some(PopupId::Program(program.key))}
                        on_close={close_popup.clone()}
                        title={program.name.to_string()}
                    >
                        <p>{ program.detail }</p>
                    </Popup>
                }).collect::<Html>()
            }

            {
                ALUMNI.iter().map(|alumnus| html! {
                    <Popup
                        id={PopupId::Alumni(alumnus.key)}
                        active={*active_popup == Some(PopupId::Alumni(alumnus.key))}
                        on_close={close_popup.clone()}
                        title={alumnus.name.to_string()}
                    >
                        <p class="popup-subtitle">{ alumnus.role }</p>
                        <p>{ alumnus.story }</p>
                    </Popup>
                }).collect::<Html>()
            }

            {
                NEWS.iter().map(|item| html! {
                    <Popup
                        id={PopupId::News(item.key)}
                        active={*active_popup == Some(PopupId::News(item.key))}
                        on_close={close_popup.clone()}
                        title={item.title.to_string()}
                    >
                        <p>{ item.body }</p>
                    </Popup>
                }).collect::<Html>()
            }

            <style>
                {r#"
                    .landing-page {
                        font-family: 'Segoe UI', system-ui, sans-serif;
                        color: #2b2b2b;
                        background: #fffaf6;
                    }

                    .landing-page h2 {
                        text-align: center;
                        font-size: 1.8rem;
                        margin: 0 0 1.4rem 0;
                    }

                    .hero {
                        text-align: center;
                        padding: 5rem 1.2rem 4rem;
                        background: linear-gradient(160deg, #f36f21 0%, #ff9d5c 100%);
                        color: #fff;
                    }

                    .hero h1 {
                        font-size: 2.6rem;
                        margin: 0 0 1.2rem 0;
                    }

                    .hero-typewriter {
                        min-height: 7rem;
                        font-size: 1.15rem;
                        font-style: italic;
                        opacity: 0.95;
                    }

                    .hero-cta-group {
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        gap: 0.8rem;
                        margin-top: 1.6rem;
                    }

                    .hero-cta {
                        border: none;
                        background: #fff;
                        color: #f36f21;
                        font-weight: 700;
                        font-size: 1rem;
                        border-radius: 999px;
                        padding: 0.7rem 2rem;
                        cursor: pointer;
                    }

                    .hero-cta.secondary {
                        background: none;
                        border: 2px solid #fff;
                        color: #fff;
                    }

                    .poem-link {
                        color: #fff;
                        font-size: 0.85rem;
                        text-decoration: underline;
                    }

                    .about-section, .programs-section, .alumni-section, .news-section {
                        max-width: 1100px;
                        margin: 0 auto;
                        padding: 3.5rem 1.2rem;
                    }

                    .about-section p {
                        max-width: 640px;
                        margin: 0 auto;
                        text-align: center;
                        color: #555;
                        line-height: 1.7;
                    }

                    .program-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(230px, 1fr));
                        gap: 1.2rem;
                    }

                    .program-card {
                        position: relative;
                        background: #fff;
                        border: 1px solid #f0e4da;
                        border-radius: 14px;
                        padding: 1.4rem;
                    }

                    .program-card h3 {
                        margin: 0 0 0.6rem 0;
                    }

                    .program-card p {
                        color: #666;
                        font-size: 0.9rem;
                        line-height: 1.5;
                    }

                    .hot-badge {
                        position: absolute;
                        top: 0.8rem;
                        right: 0.8rem;
                        background: #e63b2e;
                        color: #fff;
                        font-size: 0.7rem;
                        font-weight: 700;
                        border-radius: 6px;
                        padding: 0.15rem 0.5rem;
                    }

                    .program-info-btn {
                        border: none;
                        background: none;
                        color: #f36f21;
                        font-weight: 600;
                        cursor: pointer;
                        padding: 0;
                    }

                    .register-fields {
                        display: flex;
                        flex-direction: column;
                        gap: 0.6rem;
                        margin: 1rem 0 1.2rem;
                    }

                    .register-fields input {
                        border: 1px solid #ddd;
                        border-radius: 8px;
                        padding: 0.6rem 0.9rem;
                    }

                    .popup-subtitle {
                        color: #888;
                        font-size: 0.9rem;
                        margin-top: 0;
                    }

                    .footer {
                        background: #2b2118;
                        color: #f3e9e0;
                        padding: 3rem 1.2rem 1.5rem;
                    }

                    .footer-columns {
                        max-width: 1100px;
                        margin: 0 auto;
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(240px, 1fr));
                        gap: 2rem;
                    }

                    .footer h4 {
                        color: #fff;
                        margin-top: 0;
                    }

                    .footer-socials {
                        display: flex;
                        gap: 0.8rem;
                    }

                    .footer-icon {
                        color: #ffb98a;
                        text-decoration: none;
                        font-size: 0.9rem;
                    }

                    .footer-icon:hover {
                        text-decoration: underline;
                    }

                    .footer-note {
                        text-align: center;
                        color: #a8968a;
                        font-size: 0.8rem;
                        margin: 2.5rem 0 0 0;
                    }
                "#}
            </style>
        </div>
    }
}
