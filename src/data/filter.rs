use super::model::{Dataset, Entity};

// ---------------------------------------------------------------------------
// Slug filter
// ---------------------------------------------------------------------------

/// Entities whose `slug` equals `slug`, in dataset order.
pub fn filter_by_slug<'a: 's, 's>(
    dataset: &'a Dataset,
    slug: &'s str,
) -> impl Iterator<Item = &'a Entity> + 's {
    dataset.entities.iter().filter(move |e| e.slug == slug)
}

/// Count of entities tagged with `slug`.
pub fn count_by_slug(dataset: &Dataset, slug: &str) -> usize {
    filter_by_slug(dataset, slug).count()
}
