use crate::domain::model::Role;
use crate::domain::ports::PersonLike;
use std::fmt;

pub const GOOD_PREFIX: &str = "Good";

/// Borrows a person and prefixes its rendering. Identity is delegated, so a
/// decorated person keeps the wrapped name and role. Decorators nest.
pub struct Decorated<'a, P: PersonLike + ?Sized> {
    inner: &'a P,
    prefix: String,
}

impl<'a, P: PersonLike + ?Sized> Decorated<'a, P> {
    pub fn new(inner: &'a P, prefix: impl Into<String>) -> Self {
        Self {
            inner,
            prefix: prefix.into(),
        }
    }

    pub fn good(inner: &'a P) -> Self {
        Self::new(inner, GOOD_PREFIX)
    }

    pub fn inner(&self) -> &'a P {
        self.inner
    }
}

impl<P: PersonLike + ?Sized> fmt::Display for Decorated<'_, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.prefix, self.inner)
    }
}

impl<P: PersonLike + ?Sized> PersonLike for Decorated<'_, P> {
    fn name(&self) -> &str {
        self.inner.name()
    }

    fn role(&self) -> Role {
        self.inner.role()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{Student, Teacher};

    #[test]
    fn test_good_student_rendering() {
        let student = Student::new("Ann");
        assert_eq!(Decorated::good(&student).to_string(), "Good Student: Ann");
    }

    #[test]
    fn test_decorators_stack() {
        let teacher = Teacher::new("Turing");
        let good = Decorated::good(&teacher);
        let very = Decorated::new(&good, "Very");
        assert_eq!(very.to_string(), "Very Good Teacher: Turing");
        assert_eq!(very.name(), "Turing");
        assert_eq!(very.role(), Role::Teacher);
    }

    #[test]
    fn test_decorating_leaves_person_untouched() {
        let mut student = Student::new("Ann");
        student.add_grade(9.0);
        let before = student.clone();

        let rendered = Decorated::good(&student as &dyn PersonLike).to_string();
        assert_eq!(rendered, "Good Student: Ann");
        assert_eq!(student, before);
        assert_eq!(student.to_string(), "Student: Ann");
    }
}
