//! Domain ports for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod login_service;
mod member_edit_command;
mod member_repository;
mod members_query;

#[cfg(test)]
pub use login_service::MockLoginService;
pub use login_service::LoginService;
#[cfg(test)]
pub use member_edit_command::MockMemberEditCommand;
pub use member_edit_command::MemberEditCommand;
#[cfg(test)]
pub use member_repository::MockMemberRepository;
pub use member_repository::{MemberPersistenceError, MemberRepository};
#[cfg(test)]
pub use members_query::MockMembersQuery;
pub use members_query::MembersQuery;
