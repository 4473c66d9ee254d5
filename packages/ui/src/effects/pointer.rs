use std::rc::Rc;

use dioxus::prelude::*;

use super::{clamp, lerp, FRAME};

/// Per-frame smoothing factor of the cursor glow.
pub const GLOW_SMOOTHING: f64 = 0.12;

pub const TILT_RESET: &str = "perspective(900px) rotateX(0deg) rotateY(0deg) translateY(0px)";

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BoxSize {
    pub width: f64,
    pub height: f64,
}

impl BoxSize {
    /// Position as a fraction of the box. A collapsed axis reads as centered.
    pub fn fraction(self, x: f64, y: f64) -> (f64, f64) {
        let fx = if self.width > 0.0 { x / self.width } else { 0.5 };
        let fy = if self.height > 0.0 { y / self.height } else { 0.5 };
        (fx, fy)
    }
}

/// 3D tilt for a pointer at fractional position `(px, py)` inside the element.
pub fn tilt_transform(px: f64, py: f64) -> String {
    let rx = lerp(6.0, -6.0, py);
    let ry = lerp(-8.0, 8.0, px);
    format!("perspective(900px) rotateX({rx:.2}deg) rotateY({ry:.2}deg) translateY(-1px)")
}

/// Pull toward the pointer: offset from center / 12, at most 10px each way.
pub fn magnetic_offset(x: f64, y: f64, size: BoxSize) -> (f64, f64) {
    let dx = clamp((x - size.width / 2.0) / 12.0, -10.0, 10.0);
    let dy = clamp((y - size.height / 2.0) / 12.0, -10.0, 10.0);
    (dx, dy)
}

pub fn magnetic_transform(dx: f64, dy: f64) -> String {
    format!("translate({dx:.2}px, {dy:.2}px)")
}

/// `--mx`/`--my` custom properties in percent of the element box.
pub fn spotlight_style(x: f64, y: f64, size: BoxSize) -> String {
    let (fx, fy) = size.fraction(x, y);
    format!("--mx: {:.2}%; --my: {:.2}%", fx * 100.0, fy * 100.0)
}

/// Eased follower for the cursor glow.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlowFollower {
    pub position: (f64, f64),
    pub target: (f64, f64),
}

impl GlowFollower {
    /// Starts centered horizontally, at 30% of the viewport height.
    pub fn for_viewport(width: f64, height: f64) -> Self {
        let start = (width * 0.5, height * 0.3);
        Self {
            position: start,
            target: start,
        }
    }

    /// Advance one frame. Returns `false` once the glow has caught up.
    pub fn step(&mut self) -> bool {
        let (x, y) = self.position;
        let (tx, ty) = self.target;
        if (tx - x).abs() < 0.1 && (ty - y).abs() < 0.1 {
            if self.position != self.target {
                self.position = self.target;
                return true;
            }
            return false;
        }
        self.position = (lerp(x, tx, GLOW_SMOOTHING), lerp(y, ty, GLOW_SMOOTHING));
        true
    }
}

/// Tracks an element's size, re-measured whenever the pointer enters it.
#[derive(Clone, Copy)]
struct Measured {
    mounted: Signal<Option<Rc<MountedData>>>,
    size: Signal<BoxSize>,
}

fn use_measured() -> Measured {
    Measured {
        mounted: use_signal(|| None),
        size: use_signal(BoxSize::default),
    }
}

impl Measured {
    fn attach(mut self, data: Rc<MountedData>) {
        self.mounted.set(Some(data));
        self.remeasure();
    }

    fn remeasure(mut self) {
        let Some(mounted) = self.mounted.peek().clone() else {
            return;
        };
        spawn(async move {
            if let Ok(rect) = mounted.get_client_rect().await {
                self.size.set(BoxSize {
                    width: rect.width(),
                    height: rect.height(),
                });
            }
        });
    }
}

/// Follows the pointer with a soft glow across `children`.
#[component]
pub fn CursorGlow(children: Element) -> Element {
    let mut follower = use_signal(|| {
        let (w, h) = crate::host::viewport_size().unwrap_or((1280.0, 800.0));
        GlowFollower::for_viewport(w, h)
    });

    use_future(move || async move {
        loop {
            gloo_timers::future::sleep(FRAME).await;
            let mut next = *follower.peek();
            if next.step() {
                follower.set(next);
            }
        }
    });

    let (x, y) = follower().position;
    let glow_style = format!("left: {x:.1}px; top: {y:.1}px");

    rsx! {
        div {
            class: "glow_area",
            onpointermove: move |evt: PointerEvent| {
                let p = evt.client_coordinates();
                follower.write().target = (p.x, p.y);
            },
            div {
                id: "cursorGlow",
                class: "cursor_glow",
                "aria-hidden": "true",
                style: "{glow_style}",
            }
            {children}
        }
    }
}

/// Perspective tilt following the pointer; resets on leave.
#[component]
pub fn Tilt(#[props(default)] class: String, children: Element) -> Element {
    let measured = use_measured();
    let mut transform = use_signal(|| TILT_RESET.to_string());

    rsx! {
        div {
            class: "{class}",
            "data-tilt": "",
            style: "transform: {transform}",
            onmounted: move |evt| measured.attach(evt.data()),
            onpointerenter: move |_| measured.remeasure(),
            onpointermove: move |evt: PointerEvent| {
                let p = evt.element_coordinates();
                let (px, py) = measured.size.peek().fraction(p.x, p.y);
                transform.set(tilt_transform(px, py));
            },
            onpointerleave: move |_| transform.set(TILT_RESET.to_string()),
            {children}
        }
    }
}

/// Drifts a few pixels toward the pointer; snaps back on leave.
#[component]
pub fn Magnetic(#[props(default)] class: String, children: Element) -> Element {
    let measured = use_measured();
    let mut offset = use_signal(|| (0.0, 0.0));
    let (dx, dy) = offset();
    let transform = magnetic_transform(dx, dy);

    rsx! {
        div {
            class: "magnetic {class}",
            style: "transform: {transform}",
            onmounted: move |evt| measured.attach(evt.data()),
            onpointerenter: move |_| measured.remeasure(),
            onpointermove: move |evt: PointerEvent| {
                let p = evt.element_coordinates();
                offset.set(magnetic_offset(p.x, p.y, *measured.size.peek()));
            },
            onpointerleave: move |_| offset.set((0.0, 0.0)),
            {children}
        }
    }
}

/// Exposes the pointer position as `--mx`/`--my` for CSS highlights.
#[component]
pub fn Spotlight(#[props(default)] class: String, children: Element) -> Element {
    let measured = use_measured();
    let mut style = use_signal(|| "--mx: 50.00%; --my: 50.00%".to_string());

    rsx! {
        div {
            class: "{class}",
            style: "{style}",
            onmounted: move |evt| measured.attach(evt.data()),
            onpointerenter: move |_| measured.remeasure(),
            onpointermove: move |evt: PointerEvent| {
                let p = evt.element_coordinates();
                style.set(spotlight_style(p.x, p.y, *measured.size.peek()));
            },
            {children}
        }
    }
}
