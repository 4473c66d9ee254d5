//! State-to-view mapping for the carousel, one function per modal section.
//!
//! Nothing here touches the document; the component only copies these values
//! into markup.

use crate::escape::escape_html;
use crate::projects::ProjectRecord;

use super::state::ModalState;

/// One card in the scrolling track.
///
/// `*_html` fields are pre-escaped and meant for `dangerous_inner_html`.
/// Attribute values are set through the DOM and take raw text.
#[derive(Debug, Clone, PartialEq)]
pub struct CardView {
    pub index: usize,
    pub title_html: String,
    pub desc_html: String,
    pub tag_html: String,
    pub title: String,
    pub cover: String,
    pub days: String,
    pub tech_summary: String,
}

/// Cards for the track, rendered twice (`A ++ A`) so the scroll animation can
/// wrap from the end of the first copy into the second without a seam.
pub fn render_track(projects: &[ProjectRecord]) -> Vec<CardView> {
    let n = projects.len();
    (0..n * 2)
        .map(|index| render_card(&projects[index % n], index))
        .collect()
}

pub fn render_card(project: &ProjectRecord, index: usize) -> CardView {
    CardView {
        index,
        title_html: escape_html(&project.title),
        desc_html: escape_html(&project.desc),
        tag_html: escape_html(project.tag_label()),
        title: project.title.clone(),
        cover: project.cover.clone(),
        days: project.days.clone(),
        tech_summary: project.tech_summary(),
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ModalHeader {
    pub badge: String,
    pub title: String,
    pub desc: String,
    pub days: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ThumbnailView {
    pub index: usize,
    /// 1-based, for labels.
    pub position: usize,
    pub src: String,
    pub current: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GalleryView {
    pub main_src: String,
    pub main_opacity: f32,
    pub thumbnails: Vec<ThumbnailView>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ModalView {
    pub header: ModalHeader,
    pub tech: Vec<String>,
    pub includes: Vec<String>,
    pub gallery: GalleryView,
    pub cta_href: String,
}

impl ModalView {
    pub fn from_state(project: &ProjectRecord, modal: &ModalState) -> Self {
        Self {
            header: render_header(project),
            tech: render_tech(project),
            includes: render_includes(project),
            gallery: render_gallery(project, modal),
            cta_href: project.cta_target().to_string(),
        }
    }
}

pub fn render_header(project: &ProjectRecord) -> ModalHeader {
    ModalHeader {
        badge: project.badge_label().to_string(),
        title: project.title.clone(),
        desc: project.desc.clone(),
        days: project.days.clone(),
    }
}

/// Every tech entry; the two-item cut only applies on the card face.
pub fn render_tech(project: &ProjectRecord) -> Vec<String> {
    project.tech.clone()
}

pub fn render_includes(project: &ProjectRecord) -> Vec<String> {
    project.includes.clone()
}

pub fn render_gallery(project: &ProjectRecord, modal: &ModalState) -> GalleryView {
    let thumbnails = project
        .gallery()
        .into_iter()
        .enumerate()
        .map(|(index, src)| ThumbnailView {
            index,
            position: index + 1,
            src,
            current: index == modal.active_thumbnail,
        })
        .collect();
    GalleryView {
        main_src: modal.main_image.src.clone(),
        main_opacity: modal.main_image.opacity(),
        thumbnails,
    }
}
