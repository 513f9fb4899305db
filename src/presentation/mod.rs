pub mod http;
pub mod openapi;
