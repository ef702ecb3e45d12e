use crate::config::Settings;
use crate::core::decorator::Decorated;
use crate::core::factory::PersonFactory;
use crate::core::iter::StudentList;
use crate::core::registry::SharedRegistry;
use crate::domain::model::{format_grade, format_grades, Role, Student};
use crate::domain::ports::{Console, FloatGradeParser, GradeParser};
use crate::utils::error::Result;

/// Result of adding grades to a named student.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GradeEntry {
    Added(usize),
    StudentNotFound,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubjectAssignment {
    Assigned,
    TeacherNotFound,
}

/// Single entry point the menu uses to reach the registry.
pub struct UniversityFacade<P: GradeParser = FloatGradeParser> {
    registry: SharedRegistry,
    factory: PersonFactory,
    parser: P,
    settings: Settings,
}

impl UniversityFacade {
    pub fn new(registry: SharedRegistry) -> Self {
        Self::with_parts(registry, FloatGradeParser, Settings::default())
    }
}

impl<P: GradeParser> UniversityFacade<P> {
    pub fn with_parts(registry: SharedRegistry, parser: P, settings: Settings) -> Self {
        Self {
            registry,
            factory: PersonFactory::new(),
            parser,
            settings,
        }
    }

    pub fn registry(&self) -> &SharedRegistry {
        &self.registry
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn enroll_student(&self, name: &str) {
        let student = self.factory.create(name, Role::Student);
        self.registry.lock().admit(student);
    }

    pub fn hire_teacher(&self, name: &str) {
        let teacher = self.factory.create(name, Role::Teacher);
        self.registry.lock().admit(teacher);
    }

    /// Parses every grade before touching the registry, so a malformed token
    /// leaves the student unchanged.
    pub fn add_grades(&self, student_name: &str, grades_line: &str) -> Result<GradeEntry> {
        let mut registry = self.registry.lock();
        let Some(student) = registry.find_student_mut(student_name) else {
            return Ok(GradeEntry::StudentNotFound);
        };
        let grades = self.parser.parse_grades(grades_line)?;
        let added = grades.len();
        student.add_grades(grades);
        tracing::debug!(student = student_name, added, "Grades recorded");
        Ok(GradeEntry::Added(added))
    }

    pub fn assign_subject(&self, teacher_name: &str, subject: &str) -> SubjectAssignment {
        match self.registry.lock().find_teacher_mut(teacher_name) {
            Some(teacher) => {
                teacher.add_subject(subject);
                tracing::debug!(teacher = teacher_name, subject, "Subject assigned");
                SubjectAssignment::Assigned
            }
            None => SubjectAssignment::TeacherNotFound,
        }
    }

    pub fn display_students(&self, console: &mut dyn Console) -> Result<()> {
        let registry = self.registry.lock();
        for student in registry.students() {
            write_student_details(console, student)?;
        }
        Ok(())
    }

    pub fn enter_grades(&self, console: &mut dyn Console) -> Result<()> {
        let student_name = console.read_line("Enter student name: ")?;
        if self.registry.lock().find_student(&student_name).is_none() {
            return console.write_line("Student not found.");
        }

        let grades_line = console.read_line("Enter grades (comma-separated): ")?;
        match self.add_grades(&student_name, &grades_line)? {
            GradeEntry::Added(_) => console.write_line("Grades added successfully."),
            GradeEntry::StudentNotFound => console.write_line("Student not found."),
        }
    }

    pub fn display_grades(&self, console: &mut dyn Console) -> Result<()> {
        let student_name = console.read_line("Enter student name: ")?;
        let registry = self.registry.lock();
        match registry.find_student(&student_name) {
            Some(student) => {
                console.write_line(&format!("Grades for {}:", student.name()))?;
                for grade in student.grades() {
                    console.write_line(&format_grade(*grade))?;
                }
                Ok(())
            }
            None => console.write_line("Student not found."),
        }
    }

    pub fn display_teachers(&self, console: &mut dyn Console) -> Result<()> {
        let registry = self.registry.lock();
        for teacher in registry.teachers() {
            console.write_line(&teacher.to_string())?;
            console.write_line(&format!("Subjects: {:?}", teacher.subjects()))?;
        }
        Ok(())
    }

    pub fn display_students_with_only_tens(&self, console: &mut dyn Console) -> Result<()> {
        let filter = self.settings.perfect_score_filter();
        console.write_line(&format!(
            "Students with only grade {}:",
            filter.perfect_score
        ))?;

        let registry = self.registry.lock();
        let list = StudentList::with_filter(registry.students(), filter);
        for student in &list {
            write_student_details(console, student)?;
        }
        Ok(())
    }

    /// Renders a freshly built, unenrolled student through the decorator.
    pub fn decorate_student(&self, name: &str) -> String {
        let student = self.factory.create(name, Role::Student);
        Decorated::new(&student, self.settings.decorator_prefix.as_str()).to_string()
    }
}

fn write_student_details(console: &mut dyn Console, student: &Student) -> Result<()> {
    console.write_line(&student.to_string())?;
    console.write_line(&format!("Grades: {}", format_grades(student.grades())))?;
    console.write_line(&format!(
        "Average Grade: {}",
        format_grade(student.average_grade())
    ))?;
    console.write_line("")
}
