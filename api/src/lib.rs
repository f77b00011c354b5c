//! HTTP layer for the Course App backend: routes, request DTOs, the error
//! envelope, session cookies and the server bootstrap.

pub mod app;
pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod telemetry;
