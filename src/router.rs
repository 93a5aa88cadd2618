use axum::Router;
use crate::handlers;

// no explicit routes, the status handler is the fallback for everything
pub fn build() -> Router {

    Router::new().fallback(handlers::status)

}
