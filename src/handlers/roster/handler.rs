//! Roster handler implementations

use axum::{
    extract::{Query, State},
    Json,
};

use crate::{
    aggregation::RosterGroup, error::AppResult, services::StandingsService, state::AppState,
};

use super::request::RosterQuery;

/// Official groups and their members with medal and award tallies
pub async fn list_roster(
    State(state): State<AppState>,
    Query(query): Query<RosterQuery>,
) -> AppResult<Json<Vec<RosterGroup>>> {
    let enabled_only = query.is_enable.unwrap_or(false);

    let roster = StandingsService::get_roster(state.db(), enabled_only).await?;
    Ok(Json(roster))
}
