use entity::enums::UserRole;
use sea_orm::DatabaseConnection;
use tracing::info;

use crate::{
    model::auth::{RegisterAlumniDto, RegisterPartnerDto},
    server::{
        data::{
            alumni::AlumniProfileRepository, company::PartnerCompanyRepository,
            login_log::LoginLogRepository, user::UserRepository,
        },
        error::{auth::AuthError, Error},
    },
};

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AuthService<'a> {
    /// Creates a new instance of [`AuthService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers an alumni account together with its profile row
    pub async fn register_alumni(
        &self,
        registration: RegisterAlumniDto,
    ) -> Result<entity::user::Model, Error> {
        let user_repository = UserRepository::new(self.db);

        if user_repository
            .get_by_username(&registration.username)
            .await?
            .is_some()
        {
            return Err(AuthError::UsernameTaken(registration.username).into());
        }

        let password_hash = bcrypt::hash(&registration.password, bcrypt::DEFAULT_COST)?;

        let user = user_repository
            .create(&registration.username, &password_hash, UserRole::Alumni)
            .await?;

        AlumniProfileRepository::new(self.db)
            .create(user.id, registration)
            .await?;

        info!(user_id = %user.id, "registered alumni account");

        Ok(user)
    }

    /// Registers a partner account together with its company row
    pub async fn register_partner(
        &self,
        registration: RegisterPartnerDto,
    ) -> Result<entity::user::Model, Error> {
        let user_repository = UserRepository::new(self.db);

        if user_repository
            .get_by_username(&registration.username)
            .await?
            .is_some()
        {
            return Err(AuthError::UsernameTaken(registration.username).into());
        }

        let password_hash = bcrypt::hash(&registration.password, bcrypt::DEFAULT_COST)?;

        let user = user_repository
            .create(&registration.username, &password_hash, UserRole::Partner)
            .await?;

        PartnerCompanyRepository::new(self.db)
            .create(user.id, registration)
            .await?;

        info!(user_id = %user.id, "registered partner account");

        Ok(user)
    }

    /// Verifies credentials and records the attempt in the login log
    ///
    /// Every attempt is appended to the audit log, including failures against
    /// unknown usernames and deactivated accounts. Deactivation is enforced
    /// here at login; tokens already issued are not revoked.
    pub async fn login(
        &self,
        username: &str,
        password: &str,
    ) -> Result<entity::user::Model, Error> {
        let login_log_repository = LoginLogRepository::new(self.db);

        let Some(user) = UserRepository::new(self.db).get_by_username(username).await? else {
            login_log_repository.append(None, username, None, false).await?;

            return Err(AuthError::InvalidCredentials.into());
        };

        if !bcrypt::verify(password, &user.password_hash)? {
            login_log_repository
                .append(Some(user.id), username, Some(user.role), false)
                .await?;

            return Err(AuthError::InvalidCredentials.into());
        }

        if !user.is_active {
            login_log_repository
                .append(Some(user.id), username, Some(user.role), false)
                .await?;

            return Err(AuthError::AccountInactive(user.id).into());
        }

        login_log_repository
            .append(Some(user.id), username, Some(user.role), true)
            .await?;

        Ok(user)
    }
}
