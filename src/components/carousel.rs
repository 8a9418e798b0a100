use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{MouseEvent, WheelEvent};
use yew::prelude::*;

use crate::components::popup::PopupId;

/// Cards visible at once for a given viewport width.
pub fn cards_per_view(viewport_width: i32) -> usize {
    if viewport_width <= 600 {
        1
    } else if viewport_width <= 900 {
        2
    } else {
        5
    }
}

/// The cursor always addresses a full window where one exists; a shrunken
/// viewport or an out-of-range cursor is pulled back into
/// `[0, total - per_view]`.
pub fn clamp_cursor(cursor: usize, total: usize, per_view: usize) -> usize {
    cursor.min(total.saturating_sub(per_view))
}

pub fn advance(cursor: usize, total: usize, per_view: usize) -> usize {
    clamp_cursor(cursor + per_view, total, per_view)
}

pub fn retreat(cursor: usize, per_view: usize) -> usize {
    cursor.saturating_sub(per_view)
}

pub struct Alumnus {
    pub key: &'static str,
    pub name: &'static str,
    pub class_of: &'static str,
    pub role: &'static str,
    pub story: &'static str,
}

pub const ALUMNI: [Alumnus; 5] = [
    Alumnus {
        key: "thanh",
        name: "Nguyễn Văn Thành",
        class_of: "Khóa 2019",
        role: "Backend Developer tại FPT Software",
        story: "Từ sinh viên năm nhất chưa biết lập trình, Thành tốt nghiệp loại giỏi và hiện dẫn dắt một nhóm phát triển dịch vụ thanh toán.",
    },
    Alumnus {
        key: "mai",
        name: "Trần Thị Mai",
        class_of: "Khóa 2020",
        role: "UI/UX Designer tại VNG",
        story: "Mai bắt đầu với đam mê vẽ tay, chọn ngành Thiết kế đồ họa và giành giải nhất cuộc thi thiết kế sinh viên toàn quốc.",
    },
    Alumnus {
        key: "quyet",
        name: "Lê Minh Quyết",
        class_of: "Khóa 2018",
        role: "Đồng sáng lập startup logistics",
        story: "Sau hai năm làm quản trị kinh doanh, Quyết cùng bạn học mở công ty riêng và gọi vốn thành công vòng hạt giống.",
    },
    Alumnus {
        key: "huong",
        name: "Phạm Thu Hương",
        class_of: "Khóa 2021",
        role: "Data Analyst tại ngân hàng TMCP",
        story: "Hương chuyển hướng từ kế toán sang phân tích dữ liệu nhờ các học phần tự chọn và kỳ thực tập doanh nghiệp.",
    },
    Alumnus {
        key: "dung",
        name: "Đỗ Việt Dũng",
        class_of: "Khóa 2019",
        role: "Kỹ sư kiểm thử bán dẫn",
        story: "Dũng thuộc lứa sinh viên đầu tiên của chương trình bán dẫn và hiện làm việc tại một nhà máy đóng gói chip ở Bắc Ninh.",
    },
];

fn current_viewport_width() -> i32 {
    web_sys::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
        .map(|v| v as i32)
        .unwrap_or(1200)
}

#[derive(Properties, PartialEq)]
pub struct AlumniCarouselProps {
    pub on_open: Callback<PopupId>,
}

/// Paginated row of alumni cards. The cursor survives viewport resizes and is
/// re-clamped on every render, so shrinking the window never strands it past
/// the end.
#[function_component(AlumniCarousel)]
pub fn alumni_carousel(props: &AlumniCarouselProps) -> Html {
    let cursor = use_state(|| 0usize);
    let viewport_width = use_state(current_viewport_width);

    {
        let viewport_width = viewport_width.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().unwrap();
                let resize_callback = Closure::wrap(Box::new(move || {
                    viewport_width.set(current_viewport_width());
                }) as Box<dyn FnMut()>);

                window
                    .add_event_listener_with_callback(
                        "resize",
                        resize_callback.as_ref().unchecked_ref(),
                    )
                    .unwrap();

                move || {
                    window
                        .remove_event_listener_with_callback(
                            "resize",
                            resize_callback.as_ref().unchecked_ref(),
                        )
                        .unwrap();
                }
            },
            (),
        );
    }

    let per_view = cards_per_view(*viewport_width);
    let shown = clamp_cursor(*cursor, ALUMNI.len(), per_view);

    let on_prev = {
        let cursor = cursor.clone();
        let viewport_width = viewport_width.clone();
        Callback::from(move |_: MouseEvent| {
            let per_view = cards_per_view(*viewport_width);
            let clamped = clamp_cursor(*cursor, ALUMNI.len(), per_view);
            cursor.set(retreat(clamped, per_view));
        })
    };

    let on_next = {
        let cursor = cursor.clone();
        let viewport_width = viewport_width.clone();
        Callback::from(move |_: MouseEvent| {
            let per_view = cards_per_view(*viewport_width);
            let clamped = clamp_cursor(*cursor, ALUMNI.len(), per_view);
            cursor.set(advance(clamped, ALUMNI.len(), per_view));
        })
    };

    html! {
        <div class="alumni-carousel-wrapper">
            <button id="alumniPrev" class="carousel-arrow" onclick={on_prev}>{"‹"}</button>
            <div id="alumniCarousel" class="alumni-carousel">
                {
                    ALUMNI.iter().enumerate().map(|(i, alumnus)| {
                        let visible = i >= shown && i < shown + per_view;
                        let style = if visible { "display: flex;" } else { "display: none;" };
                        let on_more = {
                            let on_open = props.on_open.clone();
                            let key = alumnus.key;
                            Callback::from(move |_: MouseEvent| on_open.emit(PopupId::Alumni(key)))
                        };
                        html! {
                            <div class="alumni-card" {style}>
                                <div class="alumni-avatar">{ alumnus.name.chars().next().map(String::from).unwrap_or_default() }</div>
                                <h4>{ alumnus.name }</h4>
                                <p class="alumni-class">{ alumnus.class_of }</p>
                                <p class="alumni-role">{ alumnus.role }</p>
                                <button class="alumni-more-btn" onclick={on_more}>{"Xem thêm"}</button>
                            </div>
                        }
                    }).collect::<Html>()
                }
            </div>
            <button id="alumniNext" class="carousel-arrow" onclick={on_next}>{"›"}</button>
            <style>
                {r#"
                    .alumni-carousel-wrapper {
                        display: flex;
                        align-items: stretch;
                        gap: 0.8rem;
                    }

                    .alumni-carousel {
                        display: flex;
                        gap: 1rem;
                        flex: 1;
                        justify-content: center;
                    }

                    .alumni-card {
                        flex-direction: column;
                        align-items: center;
                        gap: 0.4rem;
                        background: #fff;
                        border: 1px solid #f0e4da;
                        border-radius: 14px;
                        padding: 1.2rem;
                        width: 180px;
                        text-align: center;
                    }

                    .alumni-avatar {
                        width: 56px;
                        height: 56px;
                        border-radius: 50%;
                        background: #f36f21;
                        color: #fff;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        font-size: 1.4rem;
                        font-weight: 700;
                    }

                    .alumni-card h4 {
                        margin: 0.4rem 0 0 0;
                        font-size: 1rem;
                    }

                    .alumni-class {
                        color: #999;
                        font-size: 0.8rem;
                        margin: 0;
                    }

                    .alumni-role {
                        font-size: 0.85rem;
                        color: #555;
                        margin: 0;
                    }

                    .alumni-more-btn {
                        margin-top: auto;
                        border: 1px solid #f36f21;
                        background: none;
                        color: #f36f21;
                        border-radius: 999px;
                        padding: 0.3rem 1rem;
                        cursor: pointer;
                    }

                    .alumni-more-btn:hover {
                        background: #f36f21;
                        color: #fff;
                    }

                    .carousel-arrow {
                        border: none;
                        background: #fdf2ea;
                        color: #f36f21;
                        font-size: 1.6rem;
                        border-radius: 10px;
                        padding: 0 0.8rem;
                        cursor: pointer;
                    }
                "#}
            </style>
        </div>
    }
}

pub struct NewsItem {
    pub key: &'static str,
    pub title: &'static str,
    pub teaser: &'static str,
    pub body: &'static str,
}

pub const NEWS: [NewsItem; 3] = [
    NewsItem {
        key: "chieusang",
        title: "Đêm hội chiếu sáng khuôn viên",
        teaser: "Sinh viên ngành thiết kế biến sân trường thành triển lãm ánh sáng.",
        body: "Hơn 30 tác phẩm sắp đặt ánh sáng do sinh viên tự thiết kế và thi công đã được trưng bày trong đêm hội thường niên, thu hút hàng nghìn lượt khách tham quan.",
    },
    NewsItem {
        key: "hanhtrinh",
        title: "Hành trình thực tập doanh nghiệp",
        teaser: "200 sinh viên bắt đầu kỳ thực tập tại các đối tác của trường.",
        body: "Kỳ thực tập hè năm nay mở rộng sang các doanh nghiệp bán dẫn và logistics, với mức hỗ trợ thực tập sinh cao nhất từ trước đến nay.",
    },
    NewsItem {
        key: "yakult",
        title: "Tham quan nhà máy Yakult",
        teaser: "Chuyến đi thực tế của sinh viên khối ngành kinh doanh.",
        body: "Sinh viên năm hai ngành Quản trị kinh doanh tìm hiểu quy trình sản xuất và chuỗi cung ứng lạnh trong chuyến tham quan nhà máy tại Bình Dương.",
    },
];

#[derive(Properties, PartialEq)]
pub struct NewsRowProps {
    pub on_open: Callback<PopupId>,
}

/// Free-scrolling news strip. Vertical wheel motion is translated into
/// horizontal scroll; the browser clamps the offset at either end.
#[function_component(NewsRow)]
pub fn news_row(props: &NewsRowProps) -> Html {
    let row_ref = use_node_ref();

    let onwheel = {
        let row_ref = row_ref.clone();
        Callback::from(move |e: WheelEvent| {
            if let Some(row) = row_ref.cast::<web_sys::Element>() {
                row.set_scroll_left(row.scroll_left() + e.delta_y() as i32);
            }
        })
    };

    html! {
        <div class="news-row" ref={row_ref} {onwheel}>
            {
                NEWS.iter().map(|item| {
                    let on_more = {
                        let on_open = props.on_open.clone();
                        let key = item.key;
                        Callback::from(move |_: MouseEvent| on_open.emit(PopupId::News(key)))
                    };
                    html! {
                        <div class="news-card">
                            <h4>{ item.title }</h4>
                            <p>{ item.teaser }</p>
                            <button class="news-more-btn" onclick={on_more}>{"Xem thêm"}</button>
                        </div>
                    }
                }).collect::<Html>()
            }
            <style>
                {r#"
                    .news-row {
                        display: flex;
                        gap: 1rem;
                        overflow-x: auto;
                        padding-bottom: 0.6rem;
                        scrollbar-width: thin;
                    }

                    .news-card {
                        min-width: 280px;
                        background: #fff;
                        border: 1px solid #f0e4da;
                        border-radius: 14px;
                        padding: 1.2rem;
                    }

                    .news-card h4 {
                        margin: 0 0 0.5rem 0;
                        color: #2b2b2b;
                    }

                    .news-card p {
                        color: #666;
                        font-size: 0.9rem;
                        margin: 0 0 0.8rem 0;
                    }

                    .news-more-btn {
                        border: none;
                        background: none;
                        color: #f36f21;
                        cursor: pointer;
                        padding: 0;
                        font-weight: 600;
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
    fn per_view_thresholds() {
        assert_eq!(cards_per_view(320), 1);
        assert_eq!(cards_per_view(600), 1);
        assert_eq!(cards_per_view(601), 2);
        assert_eq!(cards_per_view(900), 2);
        assert_eq!(cards_per_view(901), 5);
        assert_eq!(cards_per_view(1920), 5);
    }

    #[test]
    fn full_page_next_is_noop() {
        // 5 cards at desktop width show all at once
        let per_view = cards_per_view(1200);
        assert_eq!(per_view, 5);
        assert_eq!(advance(0, ALUMNI.len(), per_view), 0);
    }

    #[test]
    fn resize_to_narrow_then_next_shows_second_card() {
        let mut cursor = 0;
        cursor = advance(cursor, ALUMNI.len(), cards_per_view(1200));
        assert_eq!(cursor, 0);
        // viewport shrinks to 500px; cursor carries over and is re-clamped
        let per_view = cards_per_view(500);
        cursor = clamp_cursor(cursor, ALUMNI.len(), per_view);
        cursor = advance(cursor, ALUMNI.len(), per_view);
        assert_eq!(cursor, 1);
    }

    #[test]
    fn trailing_partial_page_advances_short() {
        // 5 cards, 2 per view: 0 -> 2 -> 3 (clamped), not 4
        let total = 5;
        let mut cursor = 0;
        cursor = advance(cursor, total, 2);
        assert_eq!(cursor, 2);
        cursor = advance(cursor, total, 2);
        assert_eq!(cursor, 3);
        cursor = advance(cursor, total, 2);
        assert_eq!(cursor, 3);
    }

    #[test]
    fn cursor_stays_in_range_over_any_sequence() {
        let total = ALUMNI.len();
        for width in [320, 700, 1200] {
            let per_view = cards_per_view(width);
            let max = total - per_view;
            let mut cursor = 0;
            for step in 0..40 {
                cursor = if step % 3 == 0 {
                    retreat(cursor, per_view)
                } else {
                    advance(cursor, total, per_view)
                };
                assert!(cursor <= max, "cursor {} out of range at width {}", cursor, width);
            }
        }
    }

    #[test]
    fn retreat_stops_at_zero() {
        assert_eq!(retreat(0, 2), 0);
        assert_eq!(retreat(1, 2), 0);
        assert_eq!(retreat(3, 2), 1);
    }

    #[test]
    fn shrunken_collection_reclamps() {
        // cursor left at 4 from a narrow viewport, then per_view grows
        assert_eq!(clamp_cursor(4, 5, 5), 0);
        assert_eq!(clamp_cursor(4, 5, 2), 3);
    }
}
