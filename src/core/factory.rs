use crate::domain::model::{Person, Role, Student, Teacher};
use crate::utils::error::Result;

#[derive(Debug, Clone, Copy, Default)]
pub struct PersonFactory;

impl PersonFactory {
    pub fn new() -> Self {
        Self
    }

    pub fn create(&self, name: &str, role: Role) -> Person {
        match role {
            Role::Student => Person::Student(Student::new(name)),
            Role::Teacher => Person::Teacher(Teacher::new(name)),
        }
    }

    /// Like `create`, with the role given as text (`"student"` or `"teacher"`).
    pub fn create_from_kind(&self, name: &str, kind: &str) -> Result<Person> {
        let role = kind.parse::<Role>()?;
        Ok(self.create(name, role))
    }
}
