use leptos::*;

use content::FaqItem;

/// Which item is currently expanded. At most one item is open at a time;
/// `None` means everything is collapsed.
///
/// The state is a plain value. The component keeps it in a signal and swaps
/// in the result of [`AccordionState::toggle`] on each header click, so the
/// transition logic stays testable without a DOM.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AccordionState {
    open_id: Option<String>,
}

impl AccordionState {
    /// `default_open_id` does not have to match any item id. An id that
    /// matches nothing leaves every item collapsed.
    pub fn new(default_open_id: Option<String>) -> Self {
        Self {
            open_id: default_open_id,
        }
    }

    /// Clicking the open item collapses it; clicking any other item opens it
    /// and implicitly closes whatever was open before.
    pub fn toggle(&self, id: &str) -> Self {
        if self.is_open(id) {
            Self { open_id: None }
        } else {
            Self {
                open_id: Some(id.to_string()),
            }
        }
    }

    pub fn is_open(&self, id: &str) -> bool {
        self.open_id.as_deref() == Some(id)
    }

    pub fn open_id(&self) -> Option<&str> {
        self.open_id.as_deref()
    }
}

/// Visual treatment of one item, derived from its open/closed state.
#[derive(Clone, Copy, PartialEq)]
enum ItemStyle {
    Open,
    Closed,
}

impl ItemStyle {
    fn for_state(open: bool) -> Self {
        if open {
            ItemStyle::Open
        } else {
            ItemStyle::Closed
        }
    }

    fn header_class(self) -> &'static str {
        match self {
            ItemStyle::Open => "accordion-header open",
            ItemStyle::Closed => "accordion-header",
        }
    }

    fn chevron_class(self) -> &'static str {
        match self {
            ItemStyle::Open => "accordion-chevron rotated",
            ItemStyle::Closed => "accordion-chevron",
        }
    }

    fn content_class(self) -> &'static str {
        match self {
            ItemStyle::Open => "accordion-content open",
            ItemStyle::Closed => "accordion-content",
        }
    }

    fn aria_expanded(self) -> &'static str {
        match self {
            ItemStyle::Open => "true",
            ItemStyle::Closed => "false",
        }
    }
}

/// Stable DOM id linking a header to its content region.
fn content_dom_id(id: &str) -> String {
    format!("faq-content-{id}")
}

/// Single-select accordion. Closed content regions stay in the DOM collapsed
/// to zero height so the open/close transition can animate.
#[component]
pub fn Accordion(
    items: Vec<FaqItem>,
    default_open_id: Option<String>,
    #[prop(optional, into)] class: Option<String>,
) -> impl IntoView {
    let (state, set_state) = create_signal(AccordionState::new(default_open_id));

    let full_class = if let Some(extra) = class {
        format!("accordion {}", extra)
    } else {
        "accordion".to_string()
    };

    view! {
        <div class=full_class>
            {items.into_iter().map(|item| {
                let content_id = content_dom_id(&item.id);
                let style = {
                    let id = item.id.clone();
                    create_memo(move |_| ItemStyle::for_state(state.with(|s| s.is_open(&id))))
                };
                let toggle_id = item.id.clone();

                view! {
                    <div class="accordion-item">
                        <button
                            type="button"
                            class=move || style.get().header_class()
                            aria-expanded=move || style.get().aria_expanded()
                            aria-controls=content_id.clone()
                            on:click=move |_| set_state.update(|s| *s = s.toggle(&toggle_id))
                        >
                            <div class="accordion-heading">
                                {item.icon.map(|icon| view! {
                                    <span class="accordion-icon" aria-hidden="true">{icon}</span>
                                })}
                                <h3 class="accordion-title">{item.title}</h3>
                            </div>
                            <svg
                                class=move || style.get().chevron_class()
                                viewBox="0 0 24 24"
                                fill="none"
                                stroke="currentColor"
                                stroke-width="2"
                                aria-hidden="true"
                            >
                                <path stroke-linecap="round" stroke-linejoin="round" d="M19 9l-7 7-7-7" />
                            </svg>
                        </button>
                        <div id=content_id class=move || style.get().content_class()>
                            <div class="accordion-body">
                                <p>{item.content}</p>
                            </div>
                        </div>
                    </div>
                }
            }).collect_view()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn starts_collapsed_without_default() {
        let state = AccordionState::new(None);
        assert_eq!(state.open_id(), None);
        assert!(!state.is_open("q1"));
    }

    #[wasm_bindgen_test]
    fn toggle_opens_then_closes() {
        let state = AccordionState::new(None);
        let opened = state.toggle("q1");
        assert!(opened.is_open("q1"));
        let closed = opened.toggle("q1");
        assert_eq!(closed.open_id(), None);
        assert_eq!(closed, state);
    }

    #[wasm_bindgen_test]
    fn opening_second_item_closes_first() {
        let state = AccordionState::new(None).toggle("a");
        assert!(state.is_open("a"));
        let state = state.toggle("b");
        assert!(state.is_open("b"));
        assert!(!state.is_open("a"));
    }

    #[wasm_bindgen_test]
    fn at_most_one_item_open_across_any_toggle_sequence() {
        let ids = ["a", "b", "c"];
        let clicks = ["a", "b", "b", "c", "a", "a", "c", "b"];
        let mut state = AccordionState::new(Some("b".to_string()));
        for click in clicks {
            state = state.toggle(click);
            let open_count = ids.iter().filter(|id| state.is_open(id)).count();
            assert!(open_count <= 1, "multiple items open after clicking {click}");
        }
    }

    #[wasm_bindgen_test]
    fn ghost_default_id_leaves_items_closed() {
        let state = AccordionState::new(Some("missing".to_string()));
        assert_eq!(state.open_id(), Some("missing"));
        for id in ["q1", "q2"] {
            assert!(!state.is_open(id));
        }
    }

    #[wasm_bindgen_test]
    fn toggling_away_from_ghost_default_behaves_normally() {
        let state = AccordionState::new(Some("missing".to_string())).toggle("q1");
        assert!(state.is_open("q1"));
        assert!(!state.is_open("missing"));
    }

    #[wasm_bindgen_test]
    fn two_question_click_through() {
        // Both collapsed initially, q1 opens on click, second click collapses.
        let state = AccordionState::new(None);
        assert!(!state.is_open("q1"));
        assert!(!state.is_open("q2"));

        let state = state.toggle("q1");
        assert!(state.is_open("q1"));
        assert!(!state.is_open("q2"));
        assert_eq!(ItemStyle::for_state(state.is_open("q1")).aria_expanded(), "true");

        let state = state.toggle("q1");
        assert!(!state.is_open("q1"));
        assert!(!state.is_open("q2"));
    }

    #[wasm_bindgen_test]
    fn style_projection_is_deterministic() {
        assert!(ItemStyle::for_state(true) == ItemStyle::for_state(true));
        assert_eq!(ItemStyle::for_state(true).header_class(), "accordion-header open");
        assert_eq!(ItemStyle::for_state(false).header_class(), "accordion-header");
        assert_eq!(ItemStyle::for_state(true).chevron_class(), "accordion-chevron rotated");
        assert_eq!(ItemStyle::for_state(false).chevron_class(), "accordion-chevron");
        assert_eq!(ItemStyle::for_state(true).content_class(), "accordion-content open");
        assert_eq!(ItemStyle::for_state(false).content_class(), "accordion-content");
        assert_eq!(ItemStyle::for_state(false).aria_expanded(), "false");
    }

    #[wasm_bindgen_test]
    fn content_region_id_follows_item_id() {
        assert_eq!(content_dom_id("q1"), "faq-content-q1");
        assert_eq!(content_dom_id("what-is-skylark"), "faq-content-what-is-skylark");
        // Same id, same DOM id, render after render.
        assert_eq!(content_dom_id("q1"), content_dom_id("q1"));
    }
}
