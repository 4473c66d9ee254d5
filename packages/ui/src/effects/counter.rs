use std::sync::atomic::{AtomicUsize, Ordering};

use dioxus::prelude::*;

use super::{clamp, lerp, FRAME};

pub const COUNTER_DURATION_MS: u64 = 900;

/// Share of the counter that must be on screen before it starts.
const COUNTER_THRESHOLD: f64 = 0.6;

static NEXT_COUNTER_ID: AtomicUsize = AtomicUsize::new(0);

pub fn ease_out_cubic(t: f64) -> f64 {
    1.0 - (1.0 - t).powi(3)
}

/// Displayed value `elapsed_ms` into the animation.
pub fn counter_value(to: i64, elapsed_ms: u64, duration_ms: u64) -> i64 {
    let t = if duration_ms == 0 {
        1.0
    } else {
        clamp(elapsed_ms as f64 / duration_ms as f64, 0.0, 1.0)
    };
    lerp(0.0, to as f64, ease_out_cubic(t)).round() as i64
}

pub fn counter_text(value: i64, suffix: &str) -> String {
    format!("{value}{suffix}")
}

fn visibility_script(id: &str) -> String {
    format!(
        r#"(function(){{
  const el = document.getElementById("{id}");
  if (!el || !("IntersectionObserver" in window)) {{ dioxus.send(true); return; }}
  const obs = new IntersectionObserver((entries) => {{
    if (entries.some((e) => e.isIntersecting)) {{
      obs.disconnect();
      dioxus.send(true);
    }}
  }}, {{ threshold: {COUNTER_THRESHOLD} }});
  obs.observe(el);
}})()"#
    )
}

/// Counts from zero up to `to` once, the first time it scrolls into view.
#[component]
pub fn Counter(to: i64, #[props(default)] suffix: String) -> Element {
    let id = use_hook(|| format!("counter-{}", NEXT_COUNTER_ID.fetch_add(1, Ordering::Relaxed)));
    let mut value = use_signal(|| 0_i64);
    let text = counter_text(value(), &suffix);
    let script = visibility_script(&id);

    rsx! {
        span {
            id: "{id}",
            class: "counter",
            onmounted: move |_| {
                let script = script.clone();
                async move {
                    let mut visible = document::eval(&script);
                    if visible.recv::<bool>().await.is_err() {
                        value.set(to);
                        return;
                    }
                    let frame_ms = FRAME.as_millis() as u64;
                    let mut elapsed = 0;
                    while elapsed < COUNTER_DURATION_MS {
                        gloo_timers::future::sleep(FRAME).await;
                        elapsed += frame_ms;
                        value.set(counter_value(to, elapsed, COUNTER_DURATION_MS));
                    }
                }
            },
            "{text}"
        }
    }
}
