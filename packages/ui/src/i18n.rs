use dioxus::prelude::*;

/// localStorage key holding the chosen language code.
pub const LANG_STORAGE_KEY: &str = "landing_lang";

/// Supported languages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Lang {
    #[default]
    Es,
    En,
}

impl Lang {
    pub fn code(self) -> &'static str {
        match self {
            Lang::Es => "es",
            Lang::En => "en",
        }
    }

    /// Accepts bare codes and regional variants (`es-AR`, `en-US`, ...).
    pub fn from_code(code: &str) -> Option<Self> {
        let code = code.trim().to_ascii_lowercase();
        let primary = code.split(['-', '_']).next().unwrap_or_default();
        match primary {
            "es" => Some(Lang::Es),
            "en" => Some(Lang::En),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Lang::Es => Lang::En,
            Lang::En => Lang::Es,
        }
    }
}

/// Saved choice first, then the browser language.
pub fn initial_lang(saved: Option<&str>, browser: Option<&str>) -> Option<Lang> {
    saved
        .and_then(Lang::from_code)
        .or_else(|| browser.and_then(Lang::from_code))
}

/// Provide `Signal<Lang>` to the component tree, defaulting to Spanish.
#[component]
pub fn I18nProvider(children: Element) -> Element {
    let mut lang = use_signal(Lang::default);
    use_context_provider(|| lang);

    // Runs after mount to keep the first render identical to the static markup.
    use_effect(move || {
        let saved = crate::host::stored_value(LANG_STORAGE_KEY);
        let browser = crate::host::browser_language();
        if let Some(next) = initial_lang(saved.as_deref(), browser.as_deref()) {
            if next != *lang.peek() {
                lang.set(next);
            }
        }
    });

    rsx! { {children} }
}

pub fn use_lang() -> Signal<Lang> {
    if let Some(sig) = try_use_context::<Signal<Lang>>() {
        return sig;
    }

    tracing::warn!("missing I18nProvider context, using local Lang::Es signal");
    use_signal(Lang::default)
}

/// Switch language and persist the choice.
pub fn set_lang(mut signal: Signal<Lang>, lang: Lang) {
    signal.set(lang);
    crate::host::store_value(LANG_STORAGE_KEY, lang.code());
}

/// ES/EN toggle button for the nav bar.
#[component]
pub fn LangSwitch() -> Element {
    let signal = use_lang();
    let lang = signal();
    let next = lang.toggled();
    let label = t(lang, "lang.label");

    rsx! {
        button {
            class: "btn lang_switch",
            r#type: "button",
            "aria-label": "{label}",
            onclick: move |_| set_lang(signal, next),
            {next.code().to_ascii_uppercase()}
        }
    }
}

/// Translate a key for a given language. Falls back to Spanish if missing.
pub fn t(lang: Lang, key: &str) -> String {
    match (lang, key) {
        // Nav
        (Lang::Es, "nav.process") => "Proceso".to_string(),
        (Lang::En, "nav.process") => "Process".to_string(),
        (Lang::Es, "nav.benefits") => "Beneficios".to_string(),
        (Lang::En, "nav.benefits") => "Benefits".to_string(),
        (Lang::Es, "nav.services") => "Servicios".to_string(),
        (Lang::En, "nav.services") => "Services".to_string(),
        (Lang::Es, "nav.pricing") => "Precios".to_string(),
        (Lang::En, "nav.pricing") => "Pricing".to_string(),
        (Lang::Es, "nav.faq") => "FAQ".to_string(),
        (Lang::Es, "nav.menu") => "Abrir menú".to_string(),
        (Lang::En, "nav.menu") => "Open menu".to_string(),
        (Lang::Es, "lang.label") => "Cambiar idioma".to_string(),
        (Lang::En, "lang.label") => "Switch language".to_string(),

        // Hero
        (Lang::Es, "hero.title") => "Creamos webs que".to_string(),
        (Lang::En, "hero.title") => "We build websites that".to_string(),
        (Lang::Es, "hero.words") => "venden|convierten|escalan".to_string(),
        (Lang::En, "hero.words") => "sell|convert|scale".to_string(),
        (Lang::Es, "hero.subtitle") => "Landings rápidas, medibles y listas para crecer.".to_string(),
        (Lang::En, "hero.subtitle") => "Fast, measurable landing pages ready to grow.".to_string(),
        (Lang::Es, "hero.cta") => "Pedir presupuesto".to_string(),
        (Lang::En, "hero.cta") => "Get a quote".to_string(),

        (Lang::Es, "hero.model_alt") => "Modelo 3D interactivo".to_string(),
        (Lang::En, "hero.model_alt") => "Interactive 3D model".to_string(),

        // Process
        (Lang::Es, "process.step1") => "1. Nos contás tu idea".to_string(),
        (Lang::En, "process.step1") => "1. Tell us your idea".to_string(),
        (Lang::Es, "process.step2") => "2. Diseñamos y desarrollamos".to_string(),
        (Lang::En, "process.step2") => "2. We design and build".to_string(),
        (Lang::Es, "process.step3") => "3. Publicamos y medimos".to_string(),
        (Lang::En, "process.step3") => "3. We ship and measure".to_string(),

        // Pricing
        (Lang::Es, "pricing.starter") => "Landing".to_string(),
        (Lang::Es, "pricing.starter.body") => "Una página a medida, lista en 10 días.".to_string(),
        (Lang::En, "pricing.starter.body") => "One custom page, ready in 10 days.".to_string(),
        (Lang::Es, "pricing.growth") => "Landing + Automatización".to_string(),
        (Lang::En, "pricing.growth") => "Landing + Automation".to_string(),
        (Lang::Es, "pricing.growth.body") => "Landing, formularios conectados y reportes.".to_string(),
        (Lang::En, "pricing.growth.body") => "Landing page, connected forms and reports.".to_string(),

        // Carousel
        (Lang::Es, "projects.title") => "Proyectos".to_string(),
        (Lang::En, "projects.title") => "Projects".to_string(),
        (Lang::Es, "carousel.pause") => "Pausar".to_string(),
        (Lang::En, "carousel.pause") => "Pause".to_string(),
        (Lang::Es, "carousel.resume") => "Reanudar".to_string(),
        (Lang::En, "carousel.resume") => "Resume".to_string(),
        (Lang::Es, "carousel.speed") => "Velocidad".to_string(),
        (Lang::En, "carousel.speed") => "Speed".to_string(),
        (Lang::Es, "speed.slow") => "Lenta".to_string(),
        (Lang::En, "speed.slow") => "Slow".to_string(),
        (Lang::Es, "speed.normal") => "Normal".to_string(),
        (Lang::Es, "speed.fast") => "Rápida".to_string(),
        (Lang::En, "speed.fast") => "Fast".to_string(),
        (Lang::Es, "carousel.open_detail") => "Abrir detalle:".to_string(),
        (Lang::En, "carousel.open_detail") => "Open details:".to_string(),
        (Lang::Es, "carousel.preview") => "Vista previa".to_string(),
        (Lang::En, "carousel.preview") => "Preview".to_string(),
        (Lang::Es, "carousel.thumbnail") => "Miniatura".to_string(),
        (Lang::En, "carousel.thumbnail") => "Thumbnail".to_string(),
        (Lang::Es, "carousel.close") => "Cerrar".to_string(),
        (Lang::En, "carousel.close") => "Close".to_string(),
        (Lang::Es, "carousel.cta") => "Quiero uno así".to_string(),
        (Lang::En, "carousel.cta") => "I want one like this".to_string(),
        (Lang::Es, "carousel.cta_link") => "Ver proyecto".to_string(),
        (Lang::En, "carousel.cta_link") => "View project".to_string(),

        // Stats
        (Lang::Es, "stats.projects") => "proyectos entregados".to_string(),
        (Lang::En, "stats.projects") => "projects delivered".to_string(),
        (Lang::Es, "stats.days") => "días promedio de entrega".to_string(),
        (Lang::En, "stats.days") => "average delivery days".to_string(),
        (Lang::Es, "stats.satisfaction") => "clientes satisfechos".to_string(),
        (Lang::En, "stats.satisfaction") => "happy clients".to_string(),

        // FAQ
        (Lang::Es, "faq.title") => "Preguntas frecuentes".to_string(),
        (Lang::En, "faq.title") => "Frequently asked questions".to_string(),
        (Lang::Es, "faq.q1") => "¿Cuánto tarda una landing?".to_string(),
        (Lang::En, "faq.q1") => "How long does a landing page take?".to_string(),
        (Lang::Es, "faq.a1") => "Entre 7 y 10 días según el alcance.".to_string(),
        (Lang::En, "faq.a1") => "Between 7 and 10 days depending on scope.".to_string(),
        (Lang::Es, "faq.q2") => "¿Incluye hosting?".to_string(),
        (Lang::En, "faq.q2") => "Is hosting included?".to_string(),
        (Lang::Es, "faq.a2") => "Sí, dejamos el sitio publicado y optimizado.".to_string(),
        (Lang::En, "faq.a2") => "Yes, we ship the site deployed and optimized.".to_string(),
        (Lang::Es, "faq.q3") => "¿Puedo editar los textos después?".to_string(),
        (Lang::En, "faq.q3") => "Can I edit the copy later?".to_string(),
        (Lang::Es, "faq.a3") => "Sí, te entregamos la documentación para hacerlo.".to_string(),
        (Lang::En, "faq.a3") => "Yes, you get documentation to do it yourself.".to_string(),

        // Fallback: use Spanish string if present, else show key.
        (Lang::En, k) => t(Lang::Es, k),
        (Lang::Es, _) => key.to_string(),
    }
}
