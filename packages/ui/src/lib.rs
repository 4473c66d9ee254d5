//! This crate contains all shared UI for the landing pages.

mod bridge;

mod escape;
pub use escape::escape_html;

mod host;
pub use host::{BrowserHost, PageHost};

mod projects;
pub use projects::{builtin_catalog, parse_catalog, CatalogError, ProjectRecord};

pub mod carousel;
pub use carousel::ProjectCarousel;

pub mod effects;
pub use effects::{
    Counter, CursorGlow, Magnetic, ModelViewer, RevealConfig, RevealScope, Spotlight, Tilt,
};

mod faq;
pub use faq::{Faq, FaqItem};

mod hero;
pub use hero::{Hero, RotatingWord};

mod nav;
pub use nav::{NavSection, Navbar};

mod theme;
pub use theme::LandingTheme;

mod i18n;
pub use i18n::{set_lang, t, use_lang, I18nProvider, Lang, LangSwitch};
