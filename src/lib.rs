pub mod dns;
pub mod handlers;
pub mod models;
pub mod openapi;
pub mod rate_limit;
pub mod routes;

#[cfg(test)]
mod additional_tests;
