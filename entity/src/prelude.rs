pub use super::lecture::Entity as Lecture;
pub use super::lecture_unit::Entity as LectureUnit;
pub use super::unit::Entity as Unit;
