pub mod decorator;
pub mod facade;
pub mod factory;
pub mod iter;
pub mod observer;
pub mod registry;

pub use crate::domain::model::{Person, Role, Student, Teacher};
pub use crate::domain::ports::{Console, FloatGradeParser, GradeParser, Observer, PersonLike};
pub use crate::utils::error::Result;
