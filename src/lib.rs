// Module layout (Clean Architecture style)
// - bootstrap: configuration and dependency wiring
// - infrastructure: Postgres/in-memory stores and token signing
// - presentation: HTTP handlers, auth extractor and routing
// - application: ports, use cases and input validation
// - domain: todo and user records

pub mod application;
pub mod bootstrap;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
