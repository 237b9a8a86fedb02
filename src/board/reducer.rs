//! Reducer for drag-and-drop reordering and re-categorization.
//!
//! All transitions are computed from the committed snapshot. The hover
//! preview is recomputed wholesale on every `DragOver`; nothing is ever
//! derived from a previous preview. Unresolvable ids make an event inert;
//! the reducer never fails.

use crate::model::Category;
use crate::ui::mvi::EffectReducer;

use super::intent::{BoardEffect, BoardIntent};
use super::state::{BoardState, DragState};

pub struct BoardReducer;

impl EffectReducer for BoardReducer {
    type State = BoardState;
    type Intent = BoardIntent;
    type Effect = BoardEffect;

    fn reduce(state: Self::State, intent: Self::Intent) -> (Self::State, Vec<Self::Effect>) {
        match intent {
            BoardIntent::DragStart { article_id } => {
                // Overwrites any previous active item; a stray second
                // drag-start before drag-end is legal.
                let next = BoardState {
                    preview: None,
                    drag: DragState::Dragging {
                        active_id: article_id,
                    },
                    ..state
                };
                (next, Vec::new())
            }

            BoardIntent::DragOver { over_id } => reduce_drag_over(state, &over_id),

            BoardIntent::Drop { over_id } => reduce_drop(state, over_id.as_deref()),

            BoardIntent::DragCancel => {
                let next = BoardState {
                    preview: None,
                    drag: DragState::Idle,
                    ..state
                };
                (next, Vec::new())
            }

            BoardIntent::ArticleRemoved { article_id } => {
                let mut next = state;
                for category in &mut next.committed {
                    category.articles.retain(|a| a.id != article_id);
                }
                if let Some(preview) = &mut next.preview {
                    for category in preview {
                        category.articles.retain(|a| a.id != article_id);
                    }
                }
                // The drag session is left alone: active-article lookup is
                // defensive and simply stops resolving.
                (next, Vec::new())
            }

            BoardIntent::ArticleUpdated { article } => {
                let mut next = state;
                apply_field_update(&mut next.committed, &article);
                if let Some(preview) = &mut next.preview {
                    apply_field_update(preview, &article);
                }
                (next, Vec::new())
            }
        }
    }
}

fn reduce_drag_over(state: BoardState, over_id: &str) -> (BoardState, Vec<BoardEffect>) {
    let Some(active_id) = state.drag.active_id().map(str::to_owned) else {
        return (state, Vec::new());
    };

    let Some(source) = category_of(&state.committed, &active_id) else {
        return (state, Vec::new());
    };
    let Some(target) = resolve_target(&state.committed, over_id) else {
        return (state, Vec::new());
    };

    if source == target {
        // Pure reorder is deferred to the drop; no structural change to show.
        let next = BoardState {
            preview: None,
            ..state
        };
        return (next, Vec::new());
    }

    // Cross-category hover: show the active article appended to the target.
    // Derived from committed, so repeated hovers never stack displacements.
    let mut preview = state.committed.clone();
    let Some(pos) = preview[source].position_of(&active_id) else {
        return (state, Vec::new());
    };
    let article = preview[source].articles.remove(pos);
    preview[target].articles.push(article);

    let next = BoardState {
        preview: Some(preview),
        ..state
    };
    (next, Vec::new())
}

fn reduce_drop(state: BoardState, over_id: Option<&str>) -> (BoardState, Vec<BoardEffect>) {
    let active = state.drag.active_id().map(str::to_owned);

    // Drag-end always returns to Idle and discards the preview, whether or
    // not the drop resolves to anything.
    let mut next = BoardState {
        preview: None,
        drag: DragState::Idle,
        ..state
    };

    let Some(over_id) = over_id else {
        return (next, Vec::new());
    };
    let Some(active_id) = active else {
        return (next, Vec::new());
    };

    let Some(source) = category_of(&next.committed, &active_id) else {
        return (next, Vec::new());
    };
    let Some(target) = resolve_target(&next.committed, over_id) else {
        return (next, Vec::new());
    };

    let effects = if source == target {
        let Some(from) = next.committed[source].position_of(&active_id) else {
            return (next, Vec::new());
        };
        // Dropping on the category's own surface moves the article to the
        // end; dropping on an article takes that article's index.
        let to = next.committed[source]
            .position_of(over_id)
            .unwrap_or_else(|| next.committed[source].articles.len().saturating_sub(1));
        let category = &mut next.committed[source];
        array_move(&mut category.articles, from, to);

        vec![
            BoardEffect::PersistReorder {
                category_id: category.id.clone(),
                article_ids: category.articles.iter().map(|a| a.id.clone()).collect(),
            },
            BoardEffect::FocusArticle {
                article_id: active_id,
            },
        ]
    } else {
        let Some(from_pos) = next.committed[source].position_of(&active_id) else {
            return (next, Vec::new());
        };
        let mut article = next.committed[source].articles.remove(from_pos);

        let target_category = &mut next.committed[target];
        article.category_id = target_category.id.clone();
        let insert_at = target_category
            .position_of(over_id)
            .unwrap_or(target_category.articles.len());
        target_category.articles.insert(insert_at, article);

        vec![
            BoardEffect::PersistRecategorize {
                article_id: active_id.clone(),
                from_category_id: next.committed[source].id.clone(),
                to_category_id: next.committed[target].id.clone(),
            },
            BoardEffect::FocusArticle {
                article_id: active_id,
            },
        ]
    };

    (next, effects)
}

/// Index of the category containing the given article, if any.
fn category_of(categories: &[Category], article_id: &str) -> Option<usize> {
    categories.iter().position(|c| c.contains(article_id))
}

/// Resolve a drop-target id to a category index.
///
/// An exact category-name match wins over article membership so that empty
/// category surfaces remain valid targets.
fn resolve_target(categories: &[Category], over_id: &str) -> Option<usize> {
    categories
        .iter()
        .position(|c| c.name == over_id)
        .or_else(|| category_of(categories, over_id))
}

/// Splice-move: remove the element at `from`, insert it so it lands at
/// index `to` of the resulting list.
fn array_move<T>(items: &mut Vec<T>, from: usize, to: usize) {
    if from == to || from >= items.len() {
        return;
    }
    let item = items.remove(from);
    items.insert(to.min(items.len()), item);
}

fn apply_field_update(categories: &mut [Category], updated: &crate::model::Article) {
    for category in categories {
        if let Some(pos) = category.position_of(&updated.id) {
            let article = &mut category.articles[pos];
            article.title = updated.title.clone();
            article.description = updated.description.clone();
            article.link = updated.link.clone();
            article.updated_at = updated.updated_at;
            // Membership and position stay local: edits never move articles.
            return;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Article;
    use std::collections::BTreeSet;

    fn article(id: &str, category_id: &str) -> Article {
        Article {
            id: id.into(),
            title: format!("Article {id}"),
            link: format!("https://example.com/{id}"),
            description: String::new(),
            category_id: category_id.into(),
            created_at: None,
            updated_at: None,
        }
    }

    fn category(id: &str, name: &str, article_ids: &[&str]) -> Category {
        Category {
            id: id.into(),
            name: name.into(),
            articles: article_ids.iter().map(|a| article(a, id)).collect(),
        }
    }

    /// Categories A:[1,2,3], B:[4,5] from the drag scenarios.
    fn two_column_board() -> BoardState {
        BoardState::new(vec![
            category("cat-a", "A", &["1", "2", "3"]),
            category("cat-b", "B", &["4", "5"]),
        ])
    }

    fn ids(category: &Category) -> Vec<&str> {
        category.articles.iter().map(|a| a.id.as_str()).collect()
    }

    fn dispatch(state: BoardState, intent: BoardIntent) -> (BoardState, Vec<BoardEffect>) {
        BoardReducer::reduce(state, intent)
    }

    fn drag(state: BoardState, article_id: &str) -> BoardState {
        dispatch(
            state,
            BoardIntent::DragStart {
                article_id: article_id.into(),
            },
        )
        .0
    }

    fn hover(state: BoardState, over_id: &str) -> BoardState {
        dispatch(
            state,
            BoardIntent::DragOver {
                over_id: over_id.into(),
            },
        )
        .0
    }

    fn drop_on(state: BoardState, over_id: &str) -> (BoardState, Vec<BoardEffect>) {
        dispatch(
            state,
            BoardIntent::Drop {
                over_id: Some(over_id.into()),
            },
        )
    }

    // -- same-category reorder ------------------------------------------------

    #[test]
    fn reorder_moves_article_to_target_index() {
        // A:[1,2,3], drag 1, drop over 3 -> A:[2,3,1]
        let state = drag(two_column_board(), "1");
        let (state, effects) = drop_on(state, "3");

        assert_eq!(ids(&state.committed()[0]), vec!["2", "3", "1"]);
        assert_eq!(
            effects[0],
            BoardEffect::PersistReorder {
                category_id: "cat-a".into(),
                article_ids: vec!["2".into(), "3".into(), "1".into()],
            }
        );
        assert_eq!(
            effects[1],
            BoardEffect::FocusArticle {
                article_id: "1".into()
            }
        );
    }

    #[test]
    fn reorder_backwards_shifts_intervening_articles() {
        let state = drag(two_column_board(), "3");
        let (state, _) = drop_on(state, "1");
        assert_eq!(ids(&state.committed()[0]), vec!["3", "1", "2"]);
    }

    #[test]
    fn reorder_is_a_permutation() {
        let mut state = two_column_board();
        let original: BTreeSet<String> = state.committed()[0]
            .articles
            .iter()
            .map(|a| a.id.clone())
            .collect();

        for (grab, over) in [("1", "3"), ("2", "1"), ("3", "3"), ("1", "2")] {
            state = drag(state, grab);
            state = drop_on(state, over).0;
        }

        let after: BTreeSet<String> = state.committed()[0]
            .articles
            .iter()
            .map(|a| a.id.clone())
            .collect();
        assert_eq!(after, original);
        assert_eq!(state.committed()[0].articles.len(), 3);
    }

    #[test]
    fn reorder_to_same_index_is_identity() {
        let before = two_column_board();
        let state = drag(before.clone(), "2");
        let (state, effects) = drop_on(state, "2");

        assert_eq!(state.committed(), before.committed());
        // Persistence may still fire; the payload must carry the unchanged
        // order.
        assert_eq!(
            effects[0],
            BoardEffect::PersistReorder {
                category_id: "cat-a".into(),
                article_ids: vec!["1".into(), "2".into(), "3".into()],
            }
        );
    }

    #[test]
    fn reorder_drop_on_own_category_surface_moves_to_end() {
        let state = drag(two_column_board(), "1");
        let (state, effects) = drop_on(state, "A");

        assert_eq!(ids(&state.committed()[0]), vec!["2", "3", "1"]);
        assert!(matches!(effects[0], BoardEffect::PersistReorder { .. }));
    }

    // -- cross-category move --------------------------------------------------

    #[test]
    fn recategorize_inserts_at_target_article_index() {
        // A:[1,2,3], B:[4,5]; drag 2, drop over 5 -> A:[1,3], B:[4,2,5]
        let state = drag(two_column_board(), "2");
        let (state, effects) = drop_on(state, "5");

        assert_eq!(ids(&state.committed()[0]), vec!["1", "3"]);
        assert_eq!(ids(&state.committed()[1]), vec!["4", "2", "5"]);
        assert_eq!(
            effects[0],
            BoardEffect::PersistRecategorize {
                article_id: "2".into(),
                from_category_id: "cat-a".into(),
                to_category_id: "cat-b".into(),
            }
        );
    }

    #[test]
    fn recategorize_drop_on_category_surface_appends() {
        // Drag 1 out of A, release on the B column itself.
        let state = drag(two_column_board(), "1");
        let state = hover(state, "B");
        let (state, effects) = drop_on(state, "B");

        assert_eq!(ids(&state.committed()[0]), vec!["2", "3"]);
        assert_eq!(ids(&state.committed()[1]), vec!["4", "5", "1"]);
        assert!(matches!(
            effects[0],
            BoardEffect::PersistRecategorize { .. }
        ));
    }

    #[test]
    fn recategorize_updates_owning_category_id() {
        let state = drag(two_column_board(), "2");
        let (state, _) = drop_on(state, "5");

        let moved = state.find_article("2").unwrap();
        assert_eq!(moved.category_id, "cat-b");
    }

    #[test]
    fn moved_article_is_in_exactly_one_category() {
        let state = drag(two_column_board(), "2");
        let (state, _) = drop_on(state, "4");

        let owners = state
            .committed()
            .iter()
            .filter(|c| c.contains("2"))
            .count();
        assert_eq!(owners, 1);
    }

    // -- hover preview --------------------------------------------------------

    #[test]
    fn hover_over_other_category_previews_append() {
        let state = drag(two_column_board(), "2");
        let state = hover(state, "4");

        // Preview shows the displaced arrangement...
        assert_eq!(ids(&state.categories()[0]), vec!["1", "3"]);
        assert_eq!(ids(&state.categories()[1]), vec!["4", "5", "2"]);
        // ...while the committed snapshot is untouched.
        assert_eq!(ids(&state.committed()[0]), vec!["1", "2", "3"]);
        assert_eq!(ids(&state.committed()[1]), vec!["4", "5"]);
    }

    #[test]
    fn hover_within_source_category_shows_no_preview() {
        let state = drag(two_column_board(), "1");
        let state = hover(state, "3");
        assert_eq!(state.categories(), state.committed());
    }

    #[test]
    fn repeated_hovers_do_not_accumulate() {
        // Hover back and forth before dropping; the final preview must equal
        // a single hover's result.
        let single = hover(drag(two_column_board(), "2"), "4");

        let mut state = drag(two_column_board(), "2");
        for over in ["4", "1", "5", "B", "4"] {
            state = hover(state, over);
        }

        assert_eq!(state.categories(), single.categories());
        assert_eq!(state.committed(), single.committed());
    }

    #[test]
    fn drop_after_many_hovers_matches_drop_after_one() {
        let mut hovered = drag(two_column_board(), "2");
        for over in ["4", "5", "B", "4", "5"] {
            hovered = hover(hovered, over);
        }
        let (state, _) = drop_on(hovered, "5");

        let direct = drag(two_column_board(), "2");
        let (direct, _) = drop_on(direct, "5");

        assert_eq!(state.committed(), direct.committed());
    }

    // -- inert and cancel paths -----------------------------------------------

    #[test]
    fn hover_on_unknown_target_is_inert() {
        let state = hover(drag(two_column_board(), "1"), "nonsense");
        assert_eq!(state.categories(), two_column_board().committed());
        assert!(state.is_dragging());
    }

    #[test]
    fn drop_on_unknown_target_keeps_arrangement_and_clears_drag() {
        let state = drag(two_column_board(), "1");
        let (state, effects) = drop_on(state, "nonsense");

        assert_eq!(state.committed(), two_column_board().committed());
        assert!(effects.is_empty());
        assert!(!state.is_dragging());
    }

    #[test]
    fn drop_with_unknown_active_id_is_inert() {
        let state = drag(two_column_board(), "ghost");
        let (state, effects) = drop_on(state, "3");

        assert_eq!(state.committed(), two_column_board().committed());
        assert!(effects.is_empty());
        assert!(!state.is_dragging());
    }

    #[test]
    fn drop_outside_any_target_is_a_noop() {
        let state = hover(drag(two_column_board(), "2"), "4");
        let (state, effects) = dispatch(state, BoardIntent::Drop { over_id: None });

        assert_eq!(state.committed(), two_column_board().committed());
        assert!(state.preview.is_none());
        assert!(effects.is_empty());
        assert!(!state.is_dragging());
    }

    #[test]
    fn cancel_discards_preview_and_restores_committed() {
        let state = hover(drag(two_column_board(), "2"), "B");
        assert!(state.preview.is_some());

        let (state, effects) = dispatch(state, BoardIntent::DragCancel);
        assert_eq!(state.categories(), two_column_board().committed());
        assert!(effects.is_empty());
        assert!(!state.is_dragging());
    }

    #[test]
    fn hover_without_active_drag_is_inert() {
        let state = hover(two_column_board(), "4");
        assert_eq!(state, two_column_board());
    }

    #[test]
    fn second_drag_start_overwrites_active_item() {
        let state = drag(drag(two_column_board(), "1"), "4");
        assert_eq!(state.drag().active_id(), Some("4"));
        assert!(state.preview.is_none());
    }

    // -- edits ----------------------------------------------------------------

    #[test]
    fn removed_article_leaves_every_list() {
        let state = hover(drag(two_column_board(), "2"), "B");
        let (state, _) = dispatch(
            state,
            BoardIntent::ArticleRemoved {
                article_id: "2".into(),
            },
        );

        assert!(state.committed().iter().all(|c| !c.contains("2")));
        assert!(state.categories().iter().all(|c| !c.contains("2")));
        // Drag session survives; the lookup just stops resolving.
        assert!(state.is_dragging());
        assert!(state.active_article().is_none());
    }

    #[test]
    fn field_update_keeps_position_and_membership() {
        let mut edited = article("2", "elsewhere");
        edited.title = "Rewritten".into();
        edited.description = "New blurb".into();

        let (state, _) = dispatch(
            two_column_board(),
            BoardIntent::ArticleUpdated { article: edited },
        );

        let updated = state.find_article("2").unwrap();
        assert_eq!(updated.title, "Rewritten");
        assert_eq!(updated.description, "New blurb");
        // Arrangement is local truth: membership did not follow the payload.
        assert_eq!(updated.category_id, "cat-a");
        assert_eq!(state.committed()[0].position_of("2"), Some(1));
    }
}
