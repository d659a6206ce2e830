//! Panic recovery middleware.
//!
//! Wraps everything inside it in a per-request failure boundary: a panic
//! anywhere further down the pipeline is caught, logged, and turned into a
//! generic 500 while the worker keeps serving.

use std::any::Any;
use std::future::{Ready, ready};
use std::panic::AssertUnwindSafe;

use actix_web::body::EitherBody;
use actix_web::dev::{Service, ServiceRequest, ServiceResponse, Transform, forward_ready};
use actix_web::{Error, HttpResponse};
use futures_util::FutureExt;
use futures_util::future::LocalBoxFuture;

pub struct Recovery;

impl<S, B> Transform<S, ServiceRequest> for Recovery
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = RecoveryMiddleware<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RecoveryMiddleware { service }))
    }
}

pub struct RecoveryMiddleware<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for RecoveryMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let http_req = req.request().clone();
        let fut = AssertUnwindSafe(self.service.call(req)).catch_unwind();

        Box::pin(async move {
            match fut.await {
                Ok(result) => Ok(result?.map_into_left_body()),
                Err(panic) => {
                    log::error!("panic recovered: {}", panic_message(panic.as_ref()));
                    let response = HttpResponse::InternalServerError()
                        .content_type("application/json; charset=utf-8")
                        .body(r#"{"error":"Internal server error"}"#);
                    Ok(ServiceResponse::new(http_req, response).map_into_right_body())
                }
            }
        })
    }
}

fn panic_message(panic: &(dyn Any + Send)) -> &str {
    if let Some(s) = panic.downcast_ref::<&str>() {
        s
    } else if let Some(s) = panic.downcast_ref::<String>() {
        s
    } else {
        "unknown panic payload"
    }
}
