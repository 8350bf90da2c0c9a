//! Generated member seed types.
//!
//! These types are independent of backend domain types; the backend maps them
//! into its own member records when seeding.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Password shared by every generated member.
pub const DEFAULT_PASSWORD: &str = "password";

/// Long-form introduction attached to every generated profile.
pub const ABOUT_TEXT: &str = "As a seasoned Full Stack Software Engineer, I bring a wealth of \
expertise in designing and implementing robust, scalable applications. Proficient in both \
front-end and back-end technologies, I excel in creating seamless user experiences and efficient \
server-side solutions. My skill set includes JavaScript, React, Ruby on Rails, Node.js, and \
database management with SQL and NoSQL. With a passion for continuous learning and staying \
abreast of industry trends, I thrive in collaborative environments and enjoy tackling complex \
problems. My commitment to code quality and best practices ensures the delivery of \
high-performing, maintainable software solutions.";

/// A generated example member record.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use example_data::{ABOUT_TEXT, DEFAULT_PASSWORD, ExampleMemberSeed};
///
/// let member = ExampleMemberSeed {
///     email: "ada@example.com".to_owned(),
///     username: "Ada-5".to_owned(),
///     first_name: "Ada".to_owned(),
///     last_name: "Lovelace".to_owned(),
///     profile_title: "Software Engineer".to_owned(),
///     date_of_birth: NaiveDate::from_ymd_opt(1990, 12, 10).expect("valid date"),
///     country: "United Kingdom".to_owned(),
///     state: "London".to_owned(),
///     city: "London".to_owned(),
///     contact_number: "+44 20 7946 0000".to_owned(),
///     about: ABOUT_TEXT.to_owned(),
///     password: DEFAULT_PASSWORD.to_owned(),
/// };
///
/// assert_eq!(member.first_name, "Ada");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExampleMemberSeed {
    /// Sign-in email, unique within one generation run.
    pub email: String,
    /// Public handle.
    pub username: String,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// One of [`crate::PROFILE_TITLES`].
    pub profile_title: String,
    /// Birth date, 24 to 35 years before the reference date.
    pub date_of_birth: NaiveDate,
    /// Country of residence.
    pub country: String,
    /// State or region.
    pub state: String,
    /// City.
    pub city: String,
    /// Contact phone number.
    pub contact_number: String,
    /// Free-text introduction.
    pub about: String,
    /// Plain-text password; hashed by the consumer before storage.
    pub password: String,
}
