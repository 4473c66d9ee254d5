//! Project carousel: a looping card strip plus a detail modal.

mod component;
mod state;
mod view;


pub use component::ProjectCarousel;
pub use state::{
    CarouselController, FadePhase, FadeTicket, MainImage, ModalState, Speed, ViewState,
    DEFAULT_SPEED_INDEX, FADED_OPACITY, FADE_DELAY, SPEEDS,
};
pub use view::{render_track, CardView, GalleryView, ModalHeader, ModalView, ThumbnailView};
