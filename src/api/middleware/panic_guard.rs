//! Turns handler panics into the default redirect.

use std::any::Any;
use std::sync::Arc;

use axum::{body::Body, http::Response};
use tower_http::catch_panic::{CatchPanicLayer, ResponseForPanic};
use tracing::error;

use crate::api::render::Responder;
use crate::domain::resolution::FallbackReason;

/// Panic responder answering with the `Unexpected` default redirect.
#[derive(Clone)]
pub struct DefaultRedirectOnPanic {
    responder: Arc<Responder>,
}

impl ResponseForPanic for DefaultRedirectOnPanic {
    type ResponseBody = Body;

    fn response_for_panic(&mut self, err: Box<dyn Any + Send + 'static>) -> Response<Body> {
        error!(panic = panic_message(err.as_ref()), "Request handler panicked");
        metrics::counter!("redirect_resolutions_total", "outcome" => FallbackReason::Unexpected.as_str())
            .increment(1);
        self.responder.fallback(FallbackReason::Unexpected)
    }
}

/// Creates the panic guard.
///
/// A panic anywhere below this layer is logged and answered with the
/// default redirect using the `Unexpected` cache lifetime.
pub fn layer(responder: Arc<Responder>) -> CatchPanicLayer<DefaultRedirectOnPanic> {
    CatchPanicLayer::custom(DefaultRedirectOnPanic { responder })
}

fn panic_message(err: &(dyn Any + Send)) -> &str {
    if let Some(s) = err.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s
    } else {
        "unknown panic"
    }
}
