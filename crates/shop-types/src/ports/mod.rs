pub mod client_repository;
pub mod order_repository;
pub mod product_repository;

#[derive(thiserror::Error, Debug)]
pub enum RepoError {
    #[error("db error: {0}")]
    DbError(String),
}
