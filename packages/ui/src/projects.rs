use serde::{Deserialize, Serialize};

const CATALOG_JSON: &str = include_str!("../assets/projects.json");

/// Label used when a project has no badge or tag.
pub const DEFAULT_LABEL: &str = "Proyecto";

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("invalid project catalog: {0}")]
    Parse(#[from] serde_json::Error),
}

/// One entry of the project showcase.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectRecord {
    pub badge: String,
    pub tag: String,
    pub title: String,
    pub desc: String,
    pub days: String,
    pub tech: Vec<String>,
    pub cover: String,
    pub images: Vec<String>,
    pub includes: Vec<String>,
    pub cta: String,
}

impl ProjectRecord {
    pub fn badge_label(&self) -> &str {
        non_empty_or(&self.badge, DEFAULT_LABEL)
    }

    pub fn tag_label(&self) -> &str {
        non_empty_or(&self.tag, DEFAULT_LABEL)
    }

    pub fn cta_target(&self) -> &str {
        non_empty_or(&self.cta, "#")
    }

    /// Gallery images, falling back to the cover. Empty references are dropped,
    /// so the result may be empty when neither is set.
    pub fn gallery(&self) -> Vec<String> {
        let source: &[String] = if self.images.is_empty() {
            std::slice::from_ref(&self.cover)
        } else {
            &self.images
        };
        source.iter().filter(|s| !s.is_empty()).cloned().collect()
    }

    /// Main image shown when the modal opens. Empty when no image resolves.
    pub fn first_image(&self) -> String {
        self.gallery().into_iter().next().unwrap_or_default()
    }

    /// Card-face tech line: first two entries, plus a marker when there are more.
    pub fn tech_summary(&self) -> String {
        let shown = self
            .tech
            .iter()
            .take(2)
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(" • ");
        if self.tech.len() > 2 {
            format!("{shown} +")
        } else {
            shown
        }
    }
}

fn non_empty_or<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    if value.trim().is_empty() {
        fallback
    } else {
        value
    }
}

pub fn parse_catalog(json: &str) -> Result<Vec<ProjectRecord>, CatalogError> {
    Ok(serde_json::from_str(json)?)
}

/// The catalog bundled with the site. A broken catalog disables the carousel.
pub fn builtin_catalog() -> Vec<ProjectRecord> {
    match parse_catalog(CATALOG_JSON) {
        Ok(projects) => {
            tracing::debug!(count = projects.len(), "loaded project catalog");
            projects
        }
        Err(err) => {
            tracing::warn!("project catalog disabled: {err}");
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_catalog_parses() {
        let projects = parse_catalog(CATALOG_JSON).expect("catalog");
        assert!(!projects.is_empty());
        assert!(projects.iter().all(|p| !p.title.is_empty()));
    }

    #[test]
    fn missing_fields_take_defaults() {
        let projects = parse_catalog(r#"[{"title": "Solo"}]"#).unwrap();
        let p = &projects[0];
        assert_eq!(p.title, "Solo");
        assert!(p.tech.is_empty());
        assert!(p.includes.is_empty());
        assert_eq!(p.cta_target(), "#");
        assert_eq!(p.badge_label(), DEFAULT_LABEL);
        assert_eq!(p.tag_label(), DEFAULT_LABEL);
        assert_eq!(p.first_image(), "");
        assert!(p.gallery().is_empty());
    }

    #[test]
    fn malformed_catalog_is_an_error() {
        assert!(matches!(
            parse_catalog("{not json"),
            Err(CatalogError::Parse(_))
        ));
    }

    #[test]
    fn gallery_falls_back_to_cover() {
        let p = ProjectRecord {
            cover: "x.jpg".into(),
            ..Default::default()
        };
        assert_eq!(p.gallery(), vec!["x.jpg".to_string()]);

        let p = ProjectRecord {
            cover: "x.jpg".into(),
            images: vec!["a.jpg".into(), "".into(), "b.jpg".into()],
            ..Default::default()
        };
        assert_eq!(p.gallery(), vec!["a.jpg".to_string(), "b.jpg".to_string()]);
    }

    #[test]
    fn tech_summary_shows_two_and_a_marker() {
        let mut p = ProjectRecord {
            tech: vec!["HTML".into(), "CSS".into()],
            ..Default::default()
        };
        assert_eq!(p.tech_summary(), "HTML • CSS");
        p.tech.push("JS".into());
        assert_eq!(p.tech_summary(), "HTML • CSS +");
        p.tech.clear();
        assert_eq!(p.tech_summary(), "");
    }
}
