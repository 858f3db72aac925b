use chrono::Utc;
use entity::enums::UserRole;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    /// Creates a new instance of [`UserRepository`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new user account
    pub async fn create(
        &self,
        username: &str,
        password_hash: &str,
        role: UserRole,
    ) -> Result<entity::user::Model, DbErr> {
        let user = entity::user::ActiveModel {
            username: ActiveValue::Set(username.to_string()),
            password_hash: ActiveValue::Set(password_hash.to_string()),
            role: ActiveValue::Set(role),
            is_active: ActiveValue::Set(true),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        user.insert(self.db).await
    }

    pub async fn get_by_id(&self, user_id: i32) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find_by_id(user_id).one(self.db).await
    }

    pub async fn get_by_username(
        &self,
        username: &str,
    ) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find()
            .filter(entity::user::Column::Username.eq(username))
            .one(self.db)
            .await
    }

    /// Lists accounts, optionally restricted to a single role
    pub async fn list(&self, role: Option<UserRole>) -> Result<Vec<entity::user::Model>, DbErr> {
        let mut query = entity::prelude::User::find();

        if let Some(role) = role {
            query = query.filter(entity::user::Column::Role.eq(role));
        }

        query
            .order_by_desc(entity::user::Column::CreatedAt)
            .all(self.db)
            .await
    }

    /// Sets the active flag on an account
    ///
    /// Returns the updated user, or `None` when the user does not exist.
    pub async fn set_active(
        &self,
        user_id: i32,
        is_active: bool,
    ) -> Result<Option<entity::user::Model>, DbErr> {
        let Some(user) = self.get_by_id(user_id).await? else {
            return Ok(None);
        };

        let mut user: entity::user::ActiveModel = user.into();
        user.is_active = ActiveValue::Set(is_active);

        Ok(Some(user.update(self.db).await?))
    }

    pub async fn count_by_role(&self, role: UserRole) -> Result<u64, DbErr> {
        entity::prelude::User::find()
            .filter(entity::user::Column::Role.eq(role))
            .count(self.db)
            .await
    }
}

#[cfg(test)]
mod tests {
    mod create_tests {
        use alumnet_test_utils::prelude::*;
        use entity::enums::UserRole;

        use crate::server::data::user::UserRepository;

        /// Expect success when creating a new user
        #[tokio::test]
        async fn test_create_user_success() -> Result<(), TestError> {
            let test = test_setup_with_tables!(entity::prelude::User)?;
            let user_repository = UserRepository::new(&test.state.db);

            let result = user_repository.create("jdoe", "hash", UserRole::Alumni).await;

            assert!(result.is_ok());
            let user = result.unwrap();

            assert_eq!(user.username, "jdoe");
            assert_eq!(user.role, UserRole::Alumni);
            assert!(user.is_active);

            Ok(())
        }

        /// Expect error when creating a user with a duplicate username
        #[tokio::test]
        async fn test_create_user_duplicate_username() -> Result<(), TestError> {
            let test = test_setup_with_tables!(entity::prelude::User)?;
            let user_repository = UserRepository::new(&test.state.db);

            user_repository
                .create("jdoe", "hash", UserRole::Alumni)
                .await?;
            let result = user_repository.create("jdoe", "hash", UserRole::Alumni).await;

            assert!(result.is_err());

            Ok(())
        }
    }

    mod set_active_tests {
        use alumnet_test_utils::prelude::*;
        use entity::enums::UserRole;

        use crate::server::data::user::UserRepository;

        /// Expect the active flag to be persisted
        #[tokio::test]
        async fn test_set_active_success() -> Result<(), TestError> {
            let test = test_setup_with_tables!(entity::prelude::User)?;
            let user_repository = UserRepository::new(&test.state.db);

            let user = user_repository
                .create("jdoe", "hash", UserRole::Alumni)
                .await?;
            let result = user_repository.set_active(user.id, false).await?;

            assert!(result.is_some());
            assert!(!result.unwrap().is_active);

            Ok(())
        }

        /// Expect None when the user does not exist
        #[tokio::test]
        async fn test_set_active_missing_user() -> Result<(), TestError> {
            let test = test_setup_with_tables!(entity::prelude::User)?;
            let user_repository = UserRepository::new(&test.state.db);

            let result = user_repository.set_active(42, false).await?;

            assert!(result.is_none());

            Ok(())
        }
    }
}
