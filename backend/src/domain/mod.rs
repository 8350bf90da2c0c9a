//! Domain primitives, services and ports.
//!
//! Everything here is transport agnostic. Inbound adapters translate HTTP
//! into calls on the driving ports; outbound adapters implement the driven
//! ports.
//!
//! Public surface:
//! - [`Error`] / [`ErrorCode`]: the single error envelope.
//! - [`Member`], [`MemberId`], [`MemberProfile`], [`ProfileTitle`]: the
//!   directory aggregate.
//! - [`MemberEditService`], [`DirectoryService`], [`CredentialLoginService`]:
//!   services behind the driving ports in [`ports`].

pub mod auth;
pub mod directory;
pub mod error;
pub mod login;
pub mod member;
pub mod member_edit;
pub mod password;
pub mod ports;
pub mod trace_id;

pub use self::auth::{LoginCredentials, LoginValidationError};
pub use self::directory::{DIRECTORY_PAGE_SIZE, DirectoryFilter, DirectoryService};
pub use self::error::{Error, ErrorCode};
pub use self::login::CredentialLoginService;
pub use self::member::{
    Member, MemberId, MemberProfile, MemberValidationError, NewMember, ProfileTitle,
};
pub use self::member_edit::{
    ABOUT_MAX_CHARS, DescriptionDraft, EditOutcome, FieldErrors, LOCATION_MAX_CHARS,
    MemberEditService, NAME_MAX_CHARS, PINCODE_MAX_CHARS, ProfileDraft,
};
pub use self::password::PasswordDigest;
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
