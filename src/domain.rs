mod user;
pub mod traits;

pub use traits::HostRuntime;
pub use user::User;
