use chrono::{NaiveDateTime, Utc};
use entity::enums::UserRole;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter,
};

/// Append-only audit log of login attempts. Rows are never updated or
/// deleted.
pub struct LoginLogRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> LoginLogRepository<'a> {
    /// Creates a new instance of [`LoginLogRepository`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Appends one attempt; `user_id` and `role` are `None` when the
    /// attempted username matched no account
    pub async fn append(
        &self,
        user_id: Option<i32>,
        username: &str,
        role: Option<UserRole>,
        success: bool,
    ) -> Result<entity::login_log::Model, DbErr> {
        let log = entity::login_log::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            username: ActiveValue::Set(username.to_string()),
            role: ActiveValue::Set(role),
            success: ActiveValue::Set(success),
            logged_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        log.insert(self.db).await
    }

    /// Counts attempts inside an inclusive time window
    pub async fn count_in_range(
        &self,
        from: NaiveDateTime,
        to: NaiveDateTime,
    ) -> Result<u64, DbErr> {
        entity::prelude::LoginLog::find()
            .filter(entity::login_log::Column::LoggedAt.gte(from))
            .filter(entity::login_log::Column::LoggedAt.lte(to))
            .count(self.db)
            .await
    }

    /// Counts successful attempts inside an inclusive time window
    pub async fn count_success_in_range(
        &self,
        from: NaiveDateTime,
        to: NaiveDateTime,
    ) -> Result<u64, DbErr> {
        entity::prelude::LoginLog::find()
            .filter(entity::login_log::Column::Success.eq(true))
            .filter(entity::login_log::Column::LoggedAt.gte(from))
            .filter(entity::login_log::Column::LoggedAt.lte(to))
            .count(self.db)
            .await
    }
}
