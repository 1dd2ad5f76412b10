// ✅ Validation Layer - Item text rules
// Runs before anything is written; a rejected item leaves the database untouched

/// Shown when the submitted text is empty or only whitespace
pub const EMPTY_ITEM_ERROR: &str = "You can't have an empty list item";

/// Shown when the list already holds an item with exactly this text
pub const DUPLICATE_ITEM_ERROR: &str = "You've already got this in your list";

// ============================================================================
// ITEM ERROR
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ItemError {
    #[error("{}", EMPTY_ITEM_ERROR)]
    Empty,

    #[error("{}", DUPLICATE_ITEM_ERROR)]
    Duplicate,
}

impl ItemError {
    pub fn message(&self) -> &'static str {
        match self {
            ItemError::Empty => EMPTY_ITEM_ERROR,
            ItemError::Duplicate => DUPLICATE_ITEM_ERROR,
        }
    }
}

// ============================================================================
// VALIDATION
// ============================================================================

/// Validate candidate item text against the texts already in the target list.
///
/// Surrounding whitespace is stripped first. Duplicates are exact,
/// case-sensitive matches within the one list; other lists are never consulted.
/// A brand-new list passes an empty iterator.
///
/// Returns the cleaned text that should be persisted.
pub fn validate_item<'a, I>(text: &str, existing: I) -> Result<String, ItemError>
where
    I: IntoIterator<Item = &'a str>,
{
    let cleaned = text.trim();

    if cleaned.is_empty() {
        return Err(ItemError::Empty);
    }

    if existing.into_iter().any(|other| other == cleaned) {
        return Err(ItemError::Duplicate);
    }

    Ok(cleaned.to_string())
}
