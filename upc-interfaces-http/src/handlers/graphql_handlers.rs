use async_graphql::http::{parse_query_string, GraphiQLSource};
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::extract::{RawQuery, State};
use axum::response::{Html, IntoResponse, Response};

use crate::error::HttpError;
use crate::graphql::execute;
use crate::routes::ApiState;

pub async fn graphql_post(State(state): State<ApiState>, req: GraphQLRequest) -> GraphQLResponse {
    execute(&state.schema, req.into_inner()).await.into()
}

/// Executes a query passed in the query string, or serves GraphiQL when
/// there is none.
pub async fn graphql_get(
    State(state): State<ApiState>,
    RawQuery(raw): RawQuery,
) -> Result<Response, HttpError> {
    let raw = raw.unwrap_or_default();
    if !has_query_param(&raw) {
        if state.app.config.graphiql {
            return Ok(Html(graphiql_page(&state.app.config.graphql_path)).into_response());
        }
        return Err(HttpError::BadRequest("missing query".to_string()));
    }
    let request = parse_query_string(&raw).map_err(|err| HttpError::BadRequest(err.to_string()))?;
    let response: GraphQLResponse = execute(&state.schema, request).await.into();
    Ok(response.into_response())
}

fn graphiql_page(endpoint: &str) -> String {
    GraphiQLSource::build()
        .endpoint(endpoint)
        .title("UPC Database GraphiQL")
        .finish()
}

fn has_query_param(raw: &str) -> bool {
    form_urlencoded::parse(raw.as_bytes()).any(|(key, _)| key == "query")
}
