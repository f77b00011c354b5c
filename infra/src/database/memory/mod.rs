//! Process-local storage, selected with a `memory://` database URL

mod user_repository;

pub use user_repository::InMemoryUserRepository;
