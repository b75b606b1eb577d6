//! Board assembler.
//! Picks a random window into the remote catalog, loads each category's
//! clues, and shapes the result into a full Board. All-or-nothing: if any
//! category fails to load, the whole assembly fails and no partial board is
//! ever handed to the caller.

use crate::board::{Board, CLUES_PER_CATEGORY, Category, Clue, NUM_CATEGORIES};
use crate::error::TriviaError;
use crate::source::TriviaSource;
use log::debug;
use rand::Rng;

/// Random catalog offsets are drawn from this window.
const OFFSET_WINDOW: usize = 100;

/// Picks `count` category ids via a random offset into the catalog.
/// Fails with SourceUnavailable when the listing call fails or comes back
/// with fewer than `count` entries.
pub async fn select_category_ids(
    source: &impl TriviaSource,
    count: usize,
) -> Result<Vec<u64>, TriviaError> {
    let offset = rand::rng().random_range(0..OFFSET_WINDOW);
    debug!("Listing {count} categories at catalog offset {offset}");

    let listing = source.list_categories(count, offset).await?;
    debug!(
        "Catalog window: {:?}",
        listing.iter().map(|c| &c.title).collect::<Vec<_>>()
    );
    if listing.len() < count {
        return Err(TriviaError::SourceUnavailable(format!(
            "catalog returned {} categories, need {count}",
            listing.len()
        )));
    }

    Ok(listing.into_iter().take(count).map(|s| s.id).collect())
}

/// Loads one category and shapes it to exactly CLUES_PER_CATEGORY clues,
/// each starting with nothing showing. Extra clues are truncated; fewer
/// than CLUES_PER_CATEGORY fails with MalformedCategory (no padding).
pub async fn load_category(
    source: &impl TriviaSource,
    id: u64,
) -> Result<Category, TriviaError> {
    let detail = source.get_category(id).await?;
    debug!(
        "Category {} ({:?}) returned {} clues",
        detail.id,
        detail.title,
        detail.clues.len()
    );

    if detail.clues.len() < CLUES_PER_CATEGORY {
        return Err(TriviaError::MalformedCategory {
            title: detail.title,
            got: detail.clues.len(),
            expected: CLUES_PER_CATEGORY,
        });
    }

    let clues = detail
        .clues
        .into_iter()
        .take(CLUES_PER_CATEGORY)
        .map(|entry| Clue::new(entry.question, entry.answer))
        .collect();

    Ok(Category {
        title: detail.title,
        clues,
    })
}

/// Builds a complete board: id selection, then one load per id. Fetches run
/// sequentially in id order, so the board's category order always matches
/// the order `select_category_ids` returned.
pub async fn assemble_board(source: &impl TriviaSource) -> Result<Board, TriviaError> {
    let ids = select_category_ids(source, NUM_CATEGORIES).await?;

    let mut categories = Vec::with_capacity(ids.len());
    for id in ids {
        categories.push(load_category(source, id).await?);
    }

    Board::new(categories)
}

// *************** Tests ***************
