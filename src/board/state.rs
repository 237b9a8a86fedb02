//! Board state: committed snapshot, render preview, drag session.

use crate::model::{Article, Category};
use crate::ui::mvi::UiState;

/// The in-progress drag gesture, if any.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging {
        /// Id of the article currently grasped.
        active_id: String,
    },
}

impl DragState {
    pub fn active_id(&self) -> Option<&str> {
        match self {
            DragState::Idle => None,
            DragState::Dragging { active_id } => Some(active_id),
        }
    }
}

/// Category arrangement for one newsletter plus the drag session.
///
/// `committed` is the arrangement confirmed by the last completed drag (or
/// the initial fetch). `preview` exists only while a cross-category hover is
/// in progress and is always derived from `committed` plus the single active
/// article's displacement, never from a previous preview, so repeated
/// hovering cannot accumulate moves.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BoardState {
    pub(crate) committed: Vec<Category>,
    pub(crate) preview: Option<Vec<Category>>,
    pub(crate) drag: DragState,
}

impl UiState for BoardState {}

impl BoardState {
    /// Build the initial state from a fetched newsletter snapshot.
    pub fn new(categories: Vec<Category>) -> Self {
        Self {
            committed: categories,
            preview: None,
            drag: DragState::Idle,
        }
    }

    /// The arrangement to render: the hover preview while one exists,
    /// otherwise the committed snapshot.
    pub fn categories(&self) -> &[Category] {
        self.preview.as_deref().unwrap_or(&self.committed)
    }

    /// The last committed arrangement, ignoring any in-progress hover.
    pub fn committed(&self) -> &[Category] {
        &self.committed
    }

    pub fn drag(&self) -> &DragState {
        &self.drag
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.drag, DragState::Dragging { .. })
    }

    /// The article currently grasped, looked up in the rendered arrangement.
    ///
    /// Defensive: returns `None` when the active id no longer resolves (the
    /// article may have been deleted while the drag was in progress).
    pub fn active_article(&self) -> Option<&Article> {
        let active_id = self.drag.active_id()?;
        self.categories()
            .iter()
            .flat_map(|c| c.articles.iter())
            .find(|a| a.id == active_id)
    }

    /// Look up an article in the committed snapshot by id.
    pub fn find_article(&self, article_id: &str) -> Option<&Article> {
        self.committed
            .iter()
            .flat_map(|c| c.articles.iter())
            .find(|a| a.id == article_id)
    }
}
