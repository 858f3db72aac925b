pub mod alumni_profile;
pub mod donation_drive;
pub mod enums;
pub mod event;
pub mod job;
pub mod job_application;
pub mod login_log;
pub mod notification;
pub mod partner_company;
pub mod user;

pub mod prelude {
    pub use super::alumni_profile::Entity as AlumniProfile;
    pub use super::donation_drive::Entity as DonationDrive;
    pub use super::event::Entity as Event;
    pub use super::job::Entity as Job;
    pub use super::job_application::Entity as JobApplication;
    pub use super::login_log::Entity as LoginLog;
    pub use super::notification::Entity as Notification;
    pub use super::partner_company::Entity as PartnerCompany;
    pub use super::user::Entity as User;
}
