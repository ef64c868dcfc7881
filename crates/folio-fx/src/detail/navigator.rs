use folio_common::FxError;
use folio_config::schema::ProjectEntry;
use serde::Serialize;
use tracing::{debug, info};

use super::preview::ImagePreview;

/// A catalog project with its 1-based id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Project {
    pub id: usize,
    pub title: String,
    pub summary: String,
    pub images: Vec<String>,
}

impl Project {
    /// Title used on prev/next buttons.
    pub fn short_title(&self) -> String {
        short_title(&self.title)
    }
}

/// The parenthesized part of `title`, or the whole title if there is none.
///
/// Only the first `(` splits and only the first `)` is removed, so
/// `"A (B) (C)"` yields `"B "`.
pub fn short_title(title: &str) -> String {
    match title.split('(').nth(1) {
        Some(rest) => {
            let short = rest.replacen(')', "", 1);
            if short.is_empty() {
                title.to_string()
            } else {
                short
            }
        }
        None => title.to_string(),
    }
}

/// Opens projects by id and steps through them with wrap-around.
#[derive(Debug, Clone, Default)]
pub struct ProjectNavigator {
    projects: Vec<Project>,
    current: Option<usize>,
    preview: ImagePreview,
}

impl ProjectNavigator {
    pub fn new(projects: Vec<Project>) -> Self {
        Self {
            projects,
            current: None,
            preview: ImagePreview::new(),
        }
    }

    /// Assign ids 1..=n in entry order.
    pub fn from_config(entries: &[ProjectEntry]) -> Self {
        let projects = entries
            .iter()
            .enumerate()
            .map(|(i, e)| Project {
                id: i + 1,
                title: e.title.clone(),
                summary: e.summary.clone(),
                images: e.images.clone(),
            })
            .collect();
        Self::new(projects)
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn get(&self, id: usize) -> Option<&Project> {
        id.checked_sub(1).and_then(|i| self.projects.get(i))
    }

    pub fn open(&mut self, id: usize) -> Result<&Project, FxError> {
        if self.projects.is_empty() {
            return Err(FxError::EmptyCatalog);
        }
        if self.get(id).is_none() {
            return Err(FxError::UnknownProject(id));
        }
        info!(project = id, "opening project");
        self.current = Some(id);
        self.preview.dismiss();
        self.get(id).ok_or(FxError::UnknownProject(id))
    }

    /// Close the detail view and any preview on top of it.
    pub fn close(&mut self) {
        if let Some(id) = self.current.take() {
            debug!(project = id, "closing project");
        }
        self.preview.dismiss();
    }

    pub fn current(&self) -> Option<&Project> {
        self.current.and_then(|id| self.get(id))
    }

    /// Id after the open one; the last project wraps to 1.
    pub fn next_id(&self) -> Result<usize, FxError> {
        let id = self.current.ok_or(FxError::NoProjectOpen)?;
        Ok(if id < self.projects.len() { id + 1 } else { 1 })
    }

    /// Id before the open one; project 1 wraps to the last.
    pub fn prev_id(&self) -> Result<usize, FxError> {
        let id = self.current.ok_or(FxError::NoProjectOpen)?;
        Ok(if id > 1 { id - 1 } else { self.projects.len() })
    }

    pub fn next(&mut self) -> Result<&Project, FxError> {
        let id = self.next_id()?;
        self.open(id)
    }

    pub fn prev(&mut self) -> Result<&Project, FxError> {
        let id = self.prev_id()?;
        self.open(id)
    }

    pub fn next_title(&self) -> Result<String, FxError> {
        let id = self.next_id()?;
        self.get(id)
            .map(Project::short_title)
            .ok_or(FxError::UnknownProject(id))
    }

    pub fn prev_title(&self) -> Result<String, FxError> {
        let id = self.prev_id()?;
        self.get(id)
            .map(Project::short_title)
            .ok_or(FxError::UnknownProject(id))
    }

    pub fn preview(&self) -> &ImagePreview {
        &self.preview
    }

    pub fn preview_mut(&mut self) -> &mut ImagePreview {
        &mut self.preview
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> ProjectNavigator {
        let entries: Vec<ProjectEntry> = ["星图 (Star Map)", "Lumen", "潮汐 (Tides)"]
            .iter()
            .map(|t| ProjectEntry {
                title: t.to_string(),
                ..Default::default()
            })
            .collect();
        ProjectNavigator::from_config(&entries)
    }

    #[test]
    fn short_title_extracts_parenthesized_name() {
        assert_eq!(short_title("星图 (Star Map)"), "Star Map");
        assert_eq!(short_title("Lumen"), "Lumen");
        assert_eq!(short_title("Empty ()"), "Empty ()");
        assert_eq!(short_title("A (B) (C)"), "B ");
        assert_eq!(short_title("Open (ended"), "ended");
    }

    #[test]
    fn ids_are_one_based() {
        let nav = catalog();
        assert_eq!(nav.len(), 3);
        assert_eq!(nav.get(1).map(|p| p.title.as_str()), Some("星图 (Star Map)"));
        assert!(nav.get(0).is_none());
        assert!(nav.get(4).is_none());
    }

    #[test]
    fn next_wraps_to_first() {
        let mut nav = catalog();
        nav.open(3).unwrap();
        assert_eq!(nav.next().unwrap().id, 1);
        assert_eq!(nav.next().unwrap().id, 2);
    }

    #[test]
    fn prev_wraps_to_last() {
        let mut nav = catalog();
        nav.open(1).unwrap();
        assert_eq!(nav.prev().unwrap().id, 3);
        assert_eq!(nav.current().map(|p| p.id), Some(3));
    }

    #[test]
    fn neighbor_titles() {
        let mut nav = catalog();
        nav.open(1).unwrap();
        assert_eq!(nav.next_title().unwrap(), "Lumen");
        assert_eq!(nav.prev_title().unwrap(), "Tides");
    }

    #[test]
    fn unknown_id_is_rejected() {
        let mut nav = catalog();
        assert!(matches!(nav.open(0), Err(FxError::UnknownProject(0))));
        assert!(matches!(nav.open(9), Err(FxError::UnknownProject(9))));
        assert!(nav.current().is_none());
    }

    #[test]
    fn empty_catalog_is_rejected() {
        let mut nav = ProjectNavigator::default();
        assert!(matches!(nav.open(1), Err(FxError::EmptyCatalog)));
    }

    #[test]
    fn stepping_needs_an_open_project() {
        let mut nav = catalog();
        assert!(matches!(nav.next(), Err(FxError::NoProjectOpen)));
        assert!(matches!(nav.prev_title(), Err(FxError::NoProjectOpen)));
    }

    #[test]
    fn close_dismisses_preview() {
        let mut nav = catalog();
        nav.open(2).unwrap();
        nav.preview_mut().show("shot.png");
        nav.close();
        assert!(nav.current().is_none());
        assert!(!nav.preview().is_visible());
    }
}
