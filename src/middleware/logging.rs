//! Request logging middleware.

use std::future::{Ready, ready};
use std::time::Instant;

use actix_web::Error;
use actix_web::dev::{Service, ServiceRequest, ServiceResponse, Transform, forward_ready};
use futures_util::future::LocalBoxFuture;

/// Emits one line per completed request: method, path, protocol, status,
/// duration and peer address. Sits directly around the router, inside the
/// recovery boundary, so a panicking handler produces no access line.
pub struct RequestLogger;

impl<S, B> Transform<S, ServiceRequest> for RequestLogger
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Transform = RequestLoggerMiddleware<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequestLoggerMiddleware { service }))
    }
}

pub struct RequestLoggerMiddleware<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for RequestLoggerMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let start = Instant::now();
        let method = req.method().clone();
        let path = req.path().to_owned();
        let version = req.version();
        let peer_addr = req.connection_info().peer_addr().unwrap_or("-").to_owned();

        let fut = self.service.call(req);
        Box::pin(async move {
            let res = fut.await?;
            // A handler that never chose a status went through builders that
            // default to 200, so the observed status is always the final one.
            log::info!(
                "[{}] {} {:?} - Status: {} - Duration: {:?} - IP: {}",
                method,
                path,
                version,
                res.status().as_u16(),
                start.elapsed(),
                peer_addr
            );
            Ok(res)
        })
    }
}
