use std::time::Duration;

use crate::host::PageHost;
use crate::i18n::{t, Lang};
use crate::projects::ProjectRecord;

/// Delay between fading the main image out and swapping its source.
pub const FADE_DELAY: Duration = Duration::from_millis(120);

/// Main image opacity while a thumbnail switch is fading out.
pub const FADED_OPACITY: f32 = 0.3;

/// A named scroll-speed tier for the track animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Speed {
    pub key: &'static str,
    pub seconds: u32,
}

impl Speed {
    pub fn label(self, lang: Lang) -> String {
        t(lang, self.key)
    }

    /// Value for the `--pcr-speed` CSS variable.
    pub fn css_duration(self) -> String {
        format!("{}s", self.seconds)
    }
}

pub const SPEEDS: [Speed; 3] = [
    Speed { key: "speed.slow", seconds: 34 },
    Speed { key: "speed.normal", seconds: 26 },
    Speed { key: "speed.fast", seconds: 18 },
];

pub const DEFAULT_SPEED_INDEX: usize = 1;

#[derive(Debug, Clone, PartialEq)]
pub enum FadePhase {
    /// Freshly opened; nothing has been switched yet.
    Settled,
    /// Opacity is down; `next` replaces the source when the ticket completes.
    FadingOut { next: String, ticket: FadeTicket },
    /// Source swapped, opacity back up.
    FadingIn,
}

/// Identifies one scheduled cross-fade. Only the latest ticket may complete.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FadeTicket(u64);

#[derive(Debug, Clone, PartialEq)]
pub struct MainImage {
    pub src: String,
    pub phase: FadePhase,
}

impl MainImage {
    pub fn opacity(&self) -> f32 {
        match self.phase {
            FadePhase::FadingOut { .. } => FADED_OPACITY,
            FadePhase::Settled | FadePhase::FadingIn => 1.0,
        }
    }
}

/// The open modal: which project, which thumbnail, what the main image shows.
#[derive(Debug, Clone, PartialEq)]
pub struct ModalState {
    pub project: usize,
    pub active_thumbnail: usize,
    pub main_image: MainImage,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    pub is_paused: bool,
    pub speed_index: usize,
    pub selected: Option<ModalState>,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            is_paused: false,
            speed_index: DEFAULT_SPEED_INDEX,
            selected: None,
        }
    }
}

/// Owns the project list and the carousel/modal state machine.
///
/// `Closed -> Open(p, 0)` on card activation, `Open(p, i) -> Open(p, j)` on
/// thumbnail selection, `Open -> Closed` on any dismissal.
pub struct CarouselController<H> {
    projects: Vec<ProjectRecord>,
    state: ViewState,
    host: H,
    last_ticket: u64,
}

impl<H: PageHost> CarouselController<H> {
    pub fn new(projects: Vec<ProjectRecord>, host: H) -> Self {
        Self {
            projects,
            state: ViewState::default(),
            host,
            last_ticket: 0,
        }
    }

    pub fn projects(&self) -> &[ProjectRecord] {
        &self.projects
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn is_open(&self) -> bool {
        self.state.selected.is_some()
    }

    pub fn speed(&self) -> Speed {
        SPEEDS[self.state.speed_index % SPEEDS.len()]
    }

    /// The open modal together with its project.
    pub fn selection(&self) -> Option<(&ProjectRecord, &ModalState)> {
        let modal = self.state.selected.as_ref()?;
        let project = self.projects.get(modal.project)?;
        Some((project, modal))
    }

    /// Returns the new paused state.
    pub fn toggle_pause(&mut self) -> bool {
        self.state.is_paused = !self.state.is_paused;
        self.state.is_paused
    }

    pub fn cycle_speed(&mut self) -> Speed {
        self.state.speed_index = (self.state.speed_index + 1) % SPEEDS.len();
        self.speed()
    }

    /// Open the modal for the card at `rendered_index` in the duplicated track.
    pub fn open_modal(&mut self, rendered_index: usize) -> Option<&ProjectRecord> {
        if self.projects.is_empty() {
            return None;
        }
        let project = rendered_index % self.projects.len();
        let src = self.projects[project].first_image();
        self.state.selected = Some(ModalState {
            project,
            active_thumbnail: 0,
            main_image: MainImage {
                src,
                phase: FadePhase::Settled,
            },
        });
        self.host.set_scroll_locked(true);
        tracing::debug!(rendered_index, project, "project modal opened");
        self.projects.get(project)
    }

    /// Mark thumbnail `index` current and start fading the main image out.
    ///
    /// The returned ticket must be passed to [`Self::finish_fade`] after
    /// [`FADE_DELAY`]. `None` when the modal is closed or the index is out of range.
    pub fn select_thumbnail(&mut self, index: usize) -> Option<FadeTicket> {
        let modal = self.state.selected.as_mut()?;
        let next = self.projects.get(modal.project)?.gallery().into_iter().nth(index)?;
        self.last_ticket += 1;
        let ticket = FadeTicket(self.last_ticket);
        modal.active_thumbnail = index;
        modal.main_image.phase = FadePhase::FadingOut { next, ticket };
        Some(ticket)
    }

    /// Swap in the pending source and restore opacity.
    ///
    /// Stale tickets (superseded by a later click, or outliving the modal)
    /// are ignored. Returns whether the swap happened.
    pub fn finish_fade(&mut self, ticket: FadeTicket) -> bool {
        let Some(modal) = self.state.selected.as_mut() else {
            return false;
        };
        let next = match &modal.main_image.phase {
            FadePhase::FadingOut { next, ticket: pending } if *pending == ticket => next.clone(),
            _ => return false,
        };
        modal.main_image.src = next;
        modal.main_image.phase = FadePhase::FadingIn;
        true
    }

    /// Swap in a new catalog. An open modal is closed first so its indices
    /// never point into the new list; pause and speed are kept.
    pub fn replace_projects(&mut self, projects: Vec<ProjectRecord>) {
        self.close_modal();
        self.projects = projects;
        tracing::debug!(count = self.projects.len(), "carousel catalog replaced");
    }

    /// Close the modal and restore page scrolling. No-op when already closed.
    pub fn close_modal(&mut self) -> bool {
        if self.state.selected.take().is_none() {
            return false;
        }
        self.host.set_scroll_locked(false);
        tracing::debug!("project modal closed");
        true
    }

    /// Open the selected project's call-to-action in a new browsing context.
    pub fn launch_cta(&self) {
        if let Some((project, _)) = self.selection() {
            self.host.open_in_new_context(project.cta_target());
        }
    }
}
