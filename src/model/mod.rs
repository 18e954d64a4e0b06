mod company;
mod config;
mod forms;
mod job;
mod user;

pub use self::company::Company;
pub use self::config::{ClientConfig, ConfigFile, DEFAULT_BASE_URL};
pub use self::forms::{Credentials, ProfileUpdate, SignupData};
pub use self::job::Job;
pub use self::user::{TokenClaims, User};
