//! Handlers HTTP : rendu du formulaire et soumission.

use axum::{
    extract::{Form, Query, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
};
use tracing::{debug, info};

use super::form::{self, FormFields, Submission};
use super::page;
use super::state::AppState;

/// GET / (et toute route inconnue)
///
/// Formulaire pré-rempli depuis la query ; calcule directement si possible.
pub async fn index(
    State(state): State<AppState>,
    Query(fields): Query<FormFields>,
) -> Html<String> {
    let data = form::page_from_query(fields, &state.defaults, state.version);
    debug!(computed = data.result.is_some(), error = ?data.error, "render form");
    Html(page::render_page(&data))
}

/// POST /calc (GET accepté, champs en query)
///
/// Valide le formulaire puis redirige (302) vers `/` avec une query partageable.
pub async fn calc(State(state): State<AppState>, Form(fields): Form<FormFields>) -> Response {
    match form::submit(fields, &state.defaults, state.version) {
        Submission::Redirect(location) => {
            info!(%location, "calculation accepted");
            (StatusCode::FOUND, [(header::LOCATION, location)]).into_response()
        }
        Submission::Invalid(data) => {
            debug!(error = ?data.error, "calculation rejected");
            Html(page::render_page(&data)).into_response()
        }
    }
}
