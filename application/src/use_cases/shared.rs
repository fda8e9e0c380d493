//! Helpers shared by several use cases.

use crate::ports::review_store::{ReviewStore, StoreError};
use reviewng_domain::{Edit, EditGroup, EditReview, tally_votes};

/// Tally the current votes of an edit
pub(crate) async fn review_edit(
    store: &dyn ReviewStore,
    edit: Edit,
) -> Result<EditReview, StoreError> {
    let votes = store.votes_for_edit(edit.id).await?;
    Ok(EditReview::new(edit, tally_votes(&votes)))
}

/// All groups, lowest weight first. Ties are broken by id so the order is
/// stable across calls.
pub(crate) async fn groups_by_priority(
    store: &dyn ReviewStore,
) -> Result<Vec<EditGroup>, StoreError> {
    let mut groups = store.list_groups().await?;
    groups.sort_by(|a, b| a.weight.cmp(&b.weight).then(a.id.cmp(&b.id)));
    Ok(groups)
}

/// Edits of a group in ascending id order
pub(crate) async fn group_edits(
    store: &dyn ReviewStore,
    group: &EditGroup,
) -> Result<Vec<Edit>, StoreError> {
    let mut edits = store.list_edits_by_group(group.id).await?;
    edits.sort_by_key(|e| e.id);
    Ok(edits)
}

/// Every edit with its tally, grouped in priority order
pub(crate) async fn review_all(
    store: &dyn ReviewStore,
) -> Result<Vec<(EditGroup, Vec<EditReview>)>, StoreError> {
    let mut result = Vec::new();
    for group in groups_by_priority(store).await? {
        let mut reviews = Vec::new();
        for edit in group_edits(store, &group).await? {
            reviews.push(review_edit(store, edit).await?);
        }
        result.push((group, reviews));
    }
    Ok(result)
}
