use dioxus::prelude::*;

use std::time::Duration;

const HERO_CSS: Asset = asset!("/assets/styling/hero.css");

/// Word shown after `tick` rotations. `None` for an empty list.
pub fn word_at(words: &[String], tick: usize) -> Option<&str> {
    if words.is_empty() {
        return None;
    }
    Some(words[tick % words.len()].as_str())
}

/// Cycles through `words` every `interval_ms`, wrapping around.
#[component]
pub fn RotatingWord(words: Vec<String>, #[props(default = 2200)] interval_ms: u64) -> Element {
    let mut tick = use_signal(|| 0_usize);
    let idle = words.is_empty();

    use_future(move || async move {
        if idle {
            return;
        }
        loop {
            gloo_timers::future::sleep(Duration::from_millis(interval_ms)).await;
            let next = tick.peek().wrapping_add(1);
            tick.set(next);
        }
    });

    let Some(word) = word_at(&words, tick()) else {
        return rsx! {};
    };

    rsx! {
        span { class: "hero_word", "{word}" }
    }
}

#[component]
pub fn Hero() -> Element {
    let lang = crate::use_lang()();
    let words: Vec<String> = crate::t(lang, "hero.words")
        .split('|')
        .map(str::to_string)
        .collect();

    rsx! {
        document::Link { rel: "stylesheet", href: HERO_CSS }

        div {
            id: "hero",
            "data-reveal": "",
            h1 {
                {crate::t(lang, "hero.title")}
                " "
                RotatingWord { words }
            }
            p { {crate::t(lang, "hero.subtitle")} }

            div { class: "cta_row",
                crate::Magnetic {
                    a { class: "btn primary", href: "#precios", {crate::t(lang, "hero.cta")} }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words() -> Vec<String> {
        ["venden", "convierten", "escalan"].map(String::from).to_vec()
    }

    #[test]
    fn rotation_wraps_around() {
        let words = words();
        assert_eq!(word_at(&words, 0), Some("venden"));
        assert_eq!(word_at(&words, 2), Some("escalan"));
        assert_eq!(word_at(&words, 3), Some("venden"));
        assert_eq!(word_at(&words, 7), Some("convierten"));
    }

    #[test]
    fn empty_list_has_no_word() {
        assert_eq!(word_at(&[], 0), None);
    }
}
