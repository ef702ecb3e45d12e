use crate::domain::model::{Person, Student, Teacher};
use crate::utils::error::{Result, UniversityError};
use std::sync::{Arc, Mutex, MutexGuard, OnceLock};

/// Students and teachers known to the university. Both collections only grow.
#[derive(Debug, Default)]
pub struct Registry {
    students: Vec<Student>,
    teachers: Vec<Teacher>,
}

impl Registry {
    pub fn enroll(&mut self, student: Student) {
        tracing::debug!("Enrolling {}", student);
        self.students.push(student);
    }

    pub fn hire(&mut self, teacher: Teacher) {
        tracing::debug!("Hiring {}", teacher);
        self.teachers.push(teacher);
    }

    /// Files a factory-built person under the collection matching its role.
    pub fn admit(&mut self, person: Person) {
        match person {
            Person::Student(student) => self.enroll(student),
            Person::Teacher(teacher) => self.hire(teacher),
        }
    }

    pub fn students(&self) -> &[Student] {
        &self.students
    }

    pub fn teachers(&self) -> &[Teacher] {
        &self.teachers
    }

    pub fn student_count(&self) -> usize {
        self.students.len()
    }

    /// First student whose name matches exactly.
    pub fn find_student(&self, name: &str) -> Option<&Student> {
        self.students.iter().find(|s| s.name() == name)
    }

    pub fn find_student_mut(&mut self, name: &str) -> Option<&mut Student> {
        self.students.iter_mut().find(|s| s.name() == name)
    }

    pub fn find_teacher_mut(&mut self, name: &str) -> Option<&mut Teacher> {
        self.teachers.iter_mut().find(|t| t.name() == name)
    }
}

/// Cloneable handle to one registry.
#[derive(Debug, Clone, Default)]
pub struct SharedRegistry {
    inner: Arc<Mutex<Registry>>,
}

impl SharedRegistry {
    pub fn new(registry: Registry) -> Self {
        Self {
            inner: Arc::new(Mutex::new(registry)),
        }
    }

    pub fn lock(&self) -> MutexGuard<'_, Registry> {
        // A panic while holding the lock cannot leave the vectors half-written.
        self.inner
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn ptr_eq(&self, other: &SharedRegistry) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

static INSTANCE: OnceLock<SharedRegistry> = OnceLock::new();

/// Process-wide owner of the single university registry.
pub struct University;

impl University {
    /// Explicitly constructs the process registry. Fails once one exists,
    /// whether it came from an earlier `construct` or from `get_instance`.
    pub fn construct() -> Result<SharedRegistry> {
        let fresh = SharedRegistry::default();
        INSTANCE
            .set(fresh.clone())
            .map_err(|_| UniversityError::AlreadyConstructed)?;
        tracing::debug!("University registry constructed");
        Ok(fresh)
    }

    /// Returns the process registry, creating it on first use.
    pub fn get_instance() -> SharedRegistry {
        INSTANCE.get_or_init(SharedRegistry::default).clone()
    }
}
