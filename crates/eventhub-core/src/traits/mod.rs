//! Repository traits (ports)

mod repositories;

pub use repositories::{
    EventRepository, HealthCheck, RegistrationRepository, RepoResult, TokenRepository,
    UserRepository,
};
