use std::collections::HashMap;
use std::sync::Arc;

use async_graphql::http::GraphiQLSource;
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::Router;
use axum::extract::{FromRequest, Query, Request, State};
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::config::ServerSettings;
use crate::error::{Result, TodoError};

use super::schema::TodoSchema;

#[derive(Clone)]
struct ServerState {
    schema: TodoSchema,
    /// GraphiQL page, only set in development.
    graphiql: Option<Arc<str>>,
}

async fn graphql_post(State(state): State<ServerState>, req: GraphQLRequest) -> GraphQLResponse {
    state.schema.execute(req.into_inner()).await.into()
}

/// GET executes the query given in the URL. Without a `query` parameter,
/// development serves GraphiQL instead.
async fn graphql_get(
    State(state): State<ServerState>,
    Query(params): Query<HashMap<String, String>>,
    request: Request,
) -> Response {
    if let Some(page) = state.graphiql.as_deref() {
        if !params.contains_key("query") {
            return Html(page.to_owned()).into_response();
        }
    }

    let req: std::result::Result<GraphQLRequest, _> =
        GraphQLRequest::from_request(request, &state).await;
    match req {
        Ok(req) => GraphQLResponse::from(state.schema.execute(req.into_inner()).await).into_response(),
        Err(rejection) => rejection.into_response(),
    }
}

/// Build the HTTP router: POST and GET execute GraphQL, and a bare GET serves
/// GraphiQL in development. Any origin is allowed.
pub fn router(schema: TodoSchema, settings: &ServerSettings) -> Router {
    let graphiql = settings
        .environment
        .serves_ide()
        .then(|| Arc::from(GraphiQLSource::build().endpoint(&settings.path).finish()));
    let state = ServerState { schema, graphiql };

    Router::new()
        .route(&settings.path, get(graphql_get).post(graphql_post))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Bind the configured host and port. The host may be a hostname.
pub async fn bind(settings: &ServerSettings) -> Result<TcpListener> {
    TcpListener::bind((settings.host.as_str(), settings.port))
        .await
        .map_err(|e| {
            TodoError::Server(format!(
                "Failed to bind {}:{}: {}",
                settings.host, settings.port, e
            ))
        })
}

/// Serve on an already bound listener until Ctrl-C.
pub async fn serve(listener: TcpListener, schema: TodoSchema, settings: &ServerSettings) -> Result<()> {
    let app = router(schema, settings);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| TodoError::Server(e.to_string()))
}

pub async fn run_server(schema: TodoSchema, settings: &ServerSettings) -> Result<()> {
    let listener = bind(settings).await?;
    let addr = listener.local_addr()?;

    tracing::info!(%addr, path = %settings.path, environment = %settings.environment, "GraphQL server is live");
    serve(listener, schema, settings).await
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "Failed to listen for Ctrl-C");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutting down");
}
