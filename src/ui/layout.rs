//! Screen geometry and drop-target hit testing.
//!
//! The renderer and the mouse handler both derive geometry from
//! [`board_layout`], so the row that draws an article is exactly the row
//! that resolves to it as a drop target.

use ratatui::layout::Rect;

use crate::model::Category;

pub fn layout_regions(area: Rect) -> (Rect, Rect, Rect) {
    let header_height = area.height.min(3);
    let footer_height = 3.min(area.height.saturating_sub(header_height));
    let header = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: header_height,
    };
    let footer = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(footer_height),
        width: area.width,
        height: footer_height,
    };
    let body = Rect {
        x: area.x,
        y: area.y + header_height,
        width: area.width,
        height: area.height.saturating_sub(header_height + footer_height),
    };
    (header, body, footer)
}

pub fn body_rect(area: Rect) -> Rect {
    layout_regions(area).1
}

/// What the pointer is over, in drop-target identifier terms: an article id
/// or a category name (the category surface).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HitTarget {
    Article { id: String },
    Category { name: String },
}

impl HitTarget {
    /// The raw identifier handed to the board reducer.
    pub fn over_id(&self) -> &str {
        match self {
            HitTarget::Article { id } => id,
            HitTarget::Category { name } => name,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ColumnLayout {
    pub rect: Rect,
    pub category_name: String,
    /// One row rect per article, in category order.
    pub rows: Vec<(Rect, String)>,
}

/// Per-frame geometry of the category columns.
#[derive(Debug, Clone, Default)]
pub struct BoardLayout {
    pub columns: Vec<ColumnLayout>,
}

/// Split the body into equal-width columns, one per category, and lay out
/// one row per article inside each column's border.
pub fn board_layout(body: Rect, categories: &[Category]) -> BoardLayout {
    if categories.is_empty() || body.width < 4 || body.height < 3 {
        return BoardLayout::default();
    }

    let count = categories.len() as u16;
    let column_width = body.width / count;
    let mut columns = Vec::with_capacity(categories.len());

    for (i, category) in categories.iter().enumerate() {
        let x = body.x + column_width * i as u16;
        // Last column absorbs the division remainder.
        let width = if i as u16 == count - 1 {
            body.width - column_width * (count - 1)
        } else {
            column_width
        };
        let rect = Rect {
            x,
            y: body.y,
            width,
            height: body.height,
        };

        // Rows sit inside the column border.
        let inner_height = rect.height.saturating_sub(2) as usize;
        let rows = category
            .articles
            .iter()
            .take(inner_height)
            .enumerate()
            .map(|(row, article)| {
                let row_rect = Rect {
                    x: rect.x + 1,
                    y: rect.y + 1 + row as u16,
                    width: rect.width.saturating_sub(2),
                    height: 1,
                };
                (row_rect, article.id.clone())
            })
            .collect();

        columns.push(ColumnLayout {
            rect,
            category_name: category.name.clone(),
            rows,
        });
    }

    BoardLayout { columns }
}

impl BoardLayout {
    /// Resolve a screen position to a drop target. Article rows win over
    /// the surrounding category surface.
    pub fn target_at(&self, x: u16, y: u16) -> Option<HitTarget> {
        let column = self.columns.iter().find(|c| contains(c.rect, x, y))?;
        for (rect, article_id) in &column.rows {
            if contains(*rect, x, y) {
                return Some(HitTarget::Article {
                    id: article_id.clone(),
                });
            }
        }
        Some(HitTarget::Category {
            name: column.category_name.clone(),
        })
    }
}

fn contains(rect: Rect, x: u16, y: u16) -> bool {
    x >= rect.x && x < rect.x + rect.width && y >= rect.y && y < rect.y + rect.height
}
