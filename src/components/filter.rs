use web_sys::MouseEvent;
use yew::prelude::*;

/// Program filter tags. Exactly one is active at a time; `All` is the
/// default.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ProgramFilter {
    All,
    Hot,
}

impl ProgramFilter {
    pub const ALL_TAGS: [ProgramFilter; 2] = [ProgramFilter::All, ProgramFilter::Hot];

    pub fn label(self) -> &'static str {
        match self {
            ProgramFilter::All => "Tất cả",
            ProgramFilter::Hot => "Ngành hot",
        }
    }

    /// Visibility predicate applied to each program card.
    pub fn matches(self, card_is_hot: bool) -> bool {
        match self {
            ProgramFilter::All => true,
            ProgramFilter::Hot => card_is_hot,
        }
    }
}

impl Default for ProgramFilter {
    fn default() -> Self {
        ProgramFilter::All
    }
}

#[derive(Properties, PartialEq)]
pub struct FilterBarProps {
    pub active: ProgramFilter,
    pub on_select: Callback<ProgramFilter>,
}

#[function_component(FilterBar)]
pub fn filter_bar(props: &FilterBarProps) -> Html {
    html! {
        <div class="filter-bar">
            {
                ProgramFilter::ALL_TAGS.iter().map(|&tag| {
                    let on_click = {
                        let on_select = props.on_select.clone();
                        Callback::from(move |_: MouseEvent| on_select.emit(tag))
                    };
                    html! {
                        <button
                            class={classes!("filter-btn", (props.active == tag).then(|| "active"))}
                            onclick={on_click}
                        >
                            { tag.label() }
                        </button>
                    }
                }).collect::<Html>()
            }
            <style>
                {r#"
                    .filter-bar {
                        display: flex;
                        gap: 0.6rem;
                        justify-content: center;
                        margin-bottom: 1.6rem;
                    }

                    .filter-btn {
                        border: 1px solid #f36f21;
                        background: none;
                        color: #f36f21;
                        border-radius: 999px;
                        padding: 0.4rem 1.4rem;
                        cursor: pointer;
                        font-size: 0.95rem;
                    }

                    .filter-btn.active {
                        background: #f36f21;
                        color: #fff;
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
    fn all_accepts_everything() {
        assert!(ProgramFilter::All.matches(true));
        assert!(ProgramFilter::All.matches(false));
    }

    #[test]
    fn hot_accepts_only_hot_cards() {
        assert!(ProgramFilter::Hot.matches(true));
        assert!(!ProgramFilter::Hot.matches(false));
    }

    #[test]
    fn default_is_all() {
        assert_eq!(ProgramFilter::default(), ProgramFilter::All);
    }

    #[test]
    fn single_active_after_any_click_sequence() {
        // selection is a single enum value, so "exactly one active" holds by
        // construction; exercise the transitions anyway
        let mut active = ProgramFilter::default();
        for tag in [ProgramFilter::Hot, ProgramFilter::Hot, ProgramFilter::All] {
            active = tag;
            let marked: usize = ProgramFilter::ALL_TAGS
                .iter()
                .filter(|&&t| t == active)
                .count();
            assert_eq!(marked, 1);
        }
    }
}
