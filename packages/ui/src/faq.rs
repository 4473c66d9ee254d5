use dioxus::prelude::*;

#[derive(Debug, Clone, PartialEq)]
pub struct FaqItem {
    pub question: String,
    pub answer: String,
}

/// Next open item after toggling `clicked`. Opening one closes every other.
pub fn toggle_open(open: Option<usize>, clicked: usize) -> Option<usize> {
    if open == Some(clicked) {
        None
    } else {
        Some(clicked)
    }
}

/// Accordion that keeps at most one answer open.
#[component]
pub fn Faq(items: Vec<FaqItem>) -> Element {
    let mut open = use_signal(|| None::<usize>);

    rsx! {
        div { class: "faq",
            for (idx, item) in items.into_iter().enumerate() {
                details {
                    key: "{idx}",
                    class: "faq-item",
                    open: open() == Some(idx),
                    summary {
                        onclick: move |evt: MouseEvent| {
                            evt.prevent_default();
                            let next = toggle_open(open(), idx);
                            open.set(next);
                        },
                        "{item.question}"
                    }
                    p { class: "faq-answer", "{item.answer}" }
                }
            }
        }
    }
}
