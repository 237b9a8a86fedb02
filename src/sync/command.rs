//! Persistence commands produced by completed board transitions.

/// One backend write derived from a committed local change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncCommand {
    /// Replace the article order of a single category.
    Reorder {
        category_id: String,
        article_ids: Vec<String>,
    },
    /// Move one article to another category.
    Recategorize {
        article_id: String,
        from_category_id: String,
        to_category_id: String,
    },
    /// Delete an article from the newsletter.
    RemoveArticle { article_id: String },
}

impl SyncCommand {
    /// Short label for logs and the sync status line.
    pub fn label(&self) -> &'static str {
        match self {
            SyncCommand::Reorder { .. } => "update order",
            SyncCommand::Recategorize { .. } => "update category",
            SyncCommand::RemoveArticle { .. } => "remove article",
        }
    }

    /// User-facing message shown when the write fails.
    pub fn failure_message(&self) -> &'static str {
        match self {
            SyncCommand::Reorder { .. } => "Failed to update order. Please try again.",
            SyncCommand::Recategorize { .. } => "Failed to update category. Please try again.",
            SyncCommand::RemoveArticle { .. } => "Failed to remove article. Please try again.",
        }
    }
}
