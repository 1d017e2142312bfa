use super::repository::UserRepository;
use crate::common::error::{AppError, AppResult};
use crate::infrastructure::db::pool::DbPool;

/// Read-only view of the user identity store. Accounts are provisioned
/// elsewhere; this service only answers whether an id is known.
pub struct UserService;

impl UserService {
    pub async fn ensure_exists(db: &DbPool, user_id: i64) -> AppResult<()> {
        if UserRepository::exists(db, user_id).await? {
            Ok(())
        } else {
            Err(AppError::not_found("user not found"))
        }
    }
}
