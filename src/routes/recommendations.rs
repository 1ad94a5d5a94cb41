use axum::{body::Bytes, extract::State, Extension, Json};

use crate::{
    middleware::RequestId,
    models::{IdeaQuery, IdeasResponse},
    routes::AppState,
    services::recommendations,
};

/// Handler for the idea generation endpoint.
///
/// The body is decoded leniently: anything unreadable degrades to the
/// default query instead of a client error.
pub async fn generate(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    body: Bytes,
) -> Json<IdeasResponse> {
    let query = IdeaQuery::from_body(&body);

    tracing::debug!(request_id = %request_id, ?query, "Processing idea request");

    let mut rng = state.rng();
    let response = recommendations::get_recommendations(&state.catalog, &query, &mut rng);

    tracing::info!(
        request_id = %request_id,
        random = query.random,
        total = response.total,
        returned = response.ideas.len(),
        has_more = response.has_more,
        "Ideas generated"
    );

    Json(response)
}
