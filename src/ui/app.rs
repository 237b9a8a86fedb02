use crate::board::{BoardEffect, BoardIntent, BoardReducer, BoardState};
use crate::model::{Newsletter, NewsletterStatus};
use crate::sync::{SyncCommand, SyncHandle, SyncLog};
use crate::ui::layout::{board_layout, body_rect, BoardLayout, HitTarget};
use crate::ui::mvi::EffectReducer;
use crate::ui::toast::{Toast, ToastQueue};
use ratatui::layout::Rect;
use uuid::Uuid;

/// Keyboard selection on the board: a column, and a row within it when the
/// column has articles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cursor {
    pub column: usize,
    pub row: Option<usize>,
}

/// Top-level UI state: the board plus everything around it.
pub struct App {
    should_quit: bool,
    size: (u16, u16),
    newsletter_id: String,
    status: NewsletterStatus,
    summary: String,
    board: BoardState,
    sync_log: SyncLog,
    sync: SyncHandle,
    toasts: ToastQueue,
    cursor: Cursor,
}

impl App {
    pub fn new(newsletter: Newsletter, sync: SyncHandle) -> Self {
        let mut app = Self {
            should_quit: false,
            size: (80, 24),
            newsletter_id: newsletter.id,
            status: newsletter.status,
            summary: newsletter.summary,
            board: BoardState::new(newsletter.categories),
            sync_log: SyncLog::new(100),
            sync,
            toasts: ToastQueue::default(),
            cursor: Cursor::default(),
        };
        app.clamp_cursor();
        app
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn on_resize(&mut self, cols: u16, rows: u16) {
        self.size = (cols, rows);
    }

    pub fn on_tick(&mut self) {
        self.toasts.prune();
    }

    pub fn newsletter_id(&self) -> &str {
        &self.newsletter_id
    }

    pub fn status(&self) -> NewsletterStatus {
        self.status
    }

    pub fn summary(&self) -> &str {
        &self.summary
    }

    pub fn board(&self) -> &BoardState {
        &self.board
    }

    pub fn sync_log(&self) -> &SyncLog {
        &self.sync_log
    }

    pub fn toasts(&self) -> &ToastQueue {
        &self.toasts
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// Geometry of the currently rendered arrangement; the mouse handler
    /// resolves drop targets against this.
    pub fn layout(&self) -> BoardLayout {
        let (cols, rows) = self.size;
        let body = body_rect(Rect::new(0, 0, cols, rows));
        board_layout(body, self.board.categories())
    }

    // -- board dispatch -------------------------------------------------------

    /// Run the board reducer and carry out whatever effects it emits.
    pub fn dispatch(&mut self, intent: BoardIntent) {
        let (board, effects) = BoardReducer::reduce(std::mem::take(&mut self.board), intent);
        self.board = board;
        for effect in effects {
            self.handle_effect(effect);
        }
        self.clamp_cursor();
    }

    fn handle_effect(&mut self, effect: BoardEffect) {
        match effect {
            BoardEffect::PersistReorder {
                category_id,
                article_ids,
            } => self.queue_sync(SyncCommand::Reorder {
                category_id,
                article_ids,
            }),
            BoardEffect::PersistRecategorize {
                article_id,
                from_category_id,
                to_category_id,
            } => self.queue_sync(SyncCommand::Recategorize {
                article_id,
                from_category_id,
                to_category_id,
            }),
            BoardEffect::FocusArticle { article_id } => self.focus_article(&article_id),
        }
    }

    fn queue_sync(&mut self, command: SyncCommand) {
        let entry_id = self.sync_log.record(command.clone());
        if !self.sync.dispatch(entry_id, command) {
            self.sync_log
                .resolve(entry_id, Err("sync worker is gone".to_string()));
        }
    }

    /// A persistence request finished; update the log and report failures.
    /// Local state is never rolled back here.
    pub fn on_sync_resolved(&mut self, entry_id: Uuid, result: Result<(), crate::api::ApiError>) {
        let failure_message = self
            .sync_log
            .entries()
            .find(|e| e.id == entry_id)
            .map(|e| e.command.failure_message())
            .unwrap_or("Failed to save changes. Please try again.");

        match result {
            Ok(()) => self.sync_log.resolve(entry_id, Ok(())),
            Err(err) => {
                self.sync_log.resolve(entry_id, Err(err.to_string()));
                self.toasts.push(Toast::error(failure_message));
            }
        }
    }

    // -- drag gestures --------------------------------------------------------

    /// Grab the article under the cursor (keyboard) or at a hit position
    /// (mouse).
    pub fn begin_drag(&mut self, article_id: String) {
        self.dispatch(BoardIntent::DragStart { article_id });
    }

    pub fn hover(&mut self, target: &HitTarget) {
        self.dispatch(BoardIntent::DragOver {
            over_id: target.over_id().to_string(),
        });
    }

    pub fn drop_on(&mut self, target: Option<&HitTarget>) {
        self.dispatch(BoardIntent::Drop {
            over_id: target.map(|t| t.over_id().to_string()),
        });
    }

    pub fn cancel_drag(&mut self) {
        self.dispatch(BoardIntent::DragCancel);
    }

    /// Remove the selected article locally and queue the backend delete.
    pub fn remove_selected(&mut self) {
        let Some(article_id) = self.selected_article_id() else {
            return;
        };
        self.dispatch(BoardIntent::ArticleRemoved {
            article_id: article_id.clone(),
        });
        self.queue_sync(SyncCommand::RemoveArticle { article_id });
    }

    // -- cursor ---------------------------------------------------------------

    /// The drop target the keyboard cursor currently designates.
    pub fn selected_target(&self) -> Option<HitTarget> {
        let categories = self.board.categories();
        let category = categories.get(self.cursor.column)?;
        match self.cursor.row {
            Some(row) => category.articles.get(row).map(|a| HitTarget::Article {
                id: a.id.clone(),
            }),
            None => Some(HitTarget::Category {
                name: category.name.clone(),
            }),
        }
    }

    pub fn selected_article_id(&self) -> Option<String> {
        match self.selected_target()? {
            HitTarget::Article { id } => Some(id),
            HitTarget::Category { .. } => None,
        }
    }

    /// Move the cursor; while a drag is grabbed, every move re-targets the
    /// hover so the preview follows the keyboard.
    pub fn move_cursor(&mut self, d_column: isize, d_row: isize) {
        let categories = self.board.categories();
        if categories.is_empty() {
            self.cursor = Cursor::default();
            return;
        }

        let column = clamp_add(self.cursor.column, d_column, categories.len() - 1);
        let len = categories[column].articles.len();
        let row = if len == 0 {
            None
        } else {
            let current = match self.cursor.row {
                Some(r) if column == self.cursor.column => r as isize,
                // Entering a new column lands on its first article.
                _ => 0,
            };
            Some(clamp_add(current.max(0) as usize, d_row, len - 1))
        };
        self.cursor = Cursor { column, row };

        if self.board.is_dragging() {
            if let Some(target) = self.selected_target() {
                self.hover(&target);
                // The hover may have rearranged the preview under the
                // cursor; keep the selection in range.
                self.clamp_cursor();
            }
        }
    }

    fn focus_article(&mut self, article_id: &str) {
        // No-op when the article is gone, mirroring focus on a detached
        // element.
        let categories = self.board.categories();
        for (column, category) in categories.iter().enumerate() {
            if let Some(row) = category.position_of(article_id) {
                self.cursor = Cursor {
                    column,
                    row: Some(row),
                };
                return;
            }
        }
    }

    fn clamp_cursor(&mut self) {
        let categories = self.board.categories();
        if categories.is_empty() {
            self.cursor = Cursor::default();
            return;
        }
        let column = self.cursor.column.min(categories.len() - 1);
        let len = categories[column].articles.len();
        let row = match self.cursor.row {
            _ if len == 0 => None,
            Some(r) => Some(r.min(len - 1)),
            None => Some(0),
        };
        self.cursor = Cursor { column, row };
    }
}

fn clamp_add(value: usize, delta: isize, max: usize) -> usize {
    let moved = value as isize + delta;
    moved.clamp(0, max as isize) as usize
}
