use crate::{api, SharedState};
use axum::{http::StatusCode, response::IntoResponse, routing::get, Router};
use std::net::{SocketAddr, TcpListener};
use tower_http::trace::TraceLayer;

/// The main application object
pub struct App {
    shared_state: SharedState,
}

impl App {
    /// Create a new application object
    ///
    /// # Arguments
    /// * `shared_state` - The store and clock handed to every handler
    pub fn new(shared_state: SharedState) -> Self {
        Self { shared_state }
    }

    /// Routes of the service, bound to `shared_state`.
    pub fn router(shared_state: SharedState) -> Router {
        Router::<_>::new()
            .route("/current-time", get(api::current_time::record_current_time))
            .route("/time-logs", get(api::time_logs::list_recent_times))
            .with_state(shared_state)
            .fallback(unknown_route)
            .layer(TraceLayer::new_for_http())
    }

    /// Start a server and serve the API
    ///
    /// # Arguments
    /// * `address` - The address to bind to
    ///
    /// # Returns
    /// * `Ok(())` if the server exited successfully
    /// * An error if binding or serving failed
    pub async fn serve(self, address: &str) -> Result<(), crate::err::Error> {
        let listener = TcpListener::bind(address)?;
        listener.set_nonblocking(true)?;

        tracing::info!("Listening on: http://{}", address);

        axum_server::from_tcp(listener)
            .serve(
                Self::router(self.shared_state)
                    .into_make_service_with_connect_info::<SocketAddr>(),
            )
            .await?;

        Ok(())
    }
}

async fn unknown_route() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, "Not Found")
}
