pub mod todo_repository;
pub mod token_service;
pub mod user_repository;
