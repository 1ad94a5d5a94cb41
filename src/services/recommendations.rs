use rand::Rng;

use crate::{
    models::{Idea, IdeaQuery, IdeasResponse},
    services::{
        catalog::Catalog,
        conditions::normalize_conditions,
        filter::apply_hard_filters,
        scoring::{rank, soft_tags},
        selection::{paginate, sample},
    },
};

/// Answers one recommendation query against the catalog.
///
/// Conditions are reduced to flags, the catalog is hard-filtered into a pool,
/// and the pool is either sampled at random or ranked by soft-tag score and
/// paginated. `total` is the pool size in both modes.
pub fn get_recommendations<R: Rng + ?Sized>(
    catalog: &Catalog,
    query: &IdeaQuery,
    rng: &mut R,
) -> IdeasResponse {
    let flags = normalize_conditions(&query.conditions);
    let pool = apply_hard_filters(catalog.activities(), query, &flags);

    tracing::debug!(
        catalog = catalog.len(),
        pool = pool.len(),
        ?flags,
        "Hard filters applied"
    );

    let page = if query.random {
        sample(&pool, query.limit, rng)
    } else {
        let soft = soft_tags(query, &flags);
        let ranked = rank(pool, &soft);
        paginate(&ranked, query.offset, query.limit)
    };

    IdeasResponse {
        ideas: page.items.into_iter().map(Idea::from).collect(),
        has_more: page.has_more,
        total: page.total,
    }
}
