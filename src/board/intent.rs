//! Intents and effects for the board reducer.

use crate::model::Article;
use crate::ui::mvi::Intent;

/// Semantic drag events plus edit results applied to the board.
///
/// `over_id` is a raw drop-target identifier: either a category name
/// (hovering the category surface) or an article id. Resolution happens in
/// the reducer, with the category-name match taking precedence.
#[derive(Debug, Clone, PartialEq)]
pub enum BoardIntent {
    /// A drag gesture grasped an article. Overwrites any active drag.
    DragStart { article_id: String },
    /// The pointer moved over a new drop target mid-drag.
    DragOver { over_id: String },
    /// The gesture ended. `over_id` is `None` when released outside any
    /// valid target.
    Drop { over_id: Option<String> },
    /// The gesture was aborted (escape, pointer lost).
    DragCancel,
    /// An article was deleted (locally initiated or observed remotely).
    ArticleRemoved { article_id: String },
    /// An article's text fields changed after a successful edit.
    ArticleUpdated { article: Article },
}

impl Intent for BoardIntent {}

/// Commands emitted by the reducer for the caller to execute.
#[derive(Debug, Clone, PartialEq)]
pub enum BoardEffect {
    /// Persist the new article order of a single category.
    PersistReorder {
        category_id: String,
        article_ids: Vec<String>,
    },
    /// Persist an article's move to another category.
    PersistRecategorize {
        article_id: String,
        from_category_id: String,
        to_category_id: String,
    },
    /// Move input focus to the article that just landed.
    FocusArticle { article_id: String },
}
