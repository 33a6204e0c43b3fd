pub mod access;
pub mod users;

pub use users::AdminUsers;
