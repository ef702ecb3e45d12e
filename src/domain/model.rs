use crate::domain::ports::PersonLike;
use crate::utils::error::UniversityError;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Student,
    Teacher,
}

impl FromStr for Role {
    type Err = UniversityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "student" => Ok(Role::Student),
            "teacher" => Ok(Role::Teacher),
            other => Err(UniversityError::UnsupportedRole {
                role: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Student => write!(f, "student"),
            Role::Teacher => write!(f, "teacher"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Student {
    name: String,
    grades: Vec<f64>,
}

impl Student {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            grades: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Grades in insertion order, duplicates kept.
    pub fn grades(&self) -> &[f64] {
        &self.grades
    }

    pub fn add_grade(&mut self, grade: f64) {
        self.grades.push(grade);
    }

    pub fn add_grades<I: IntoIterator<Item = f64>>(&mut self, grades: I) {
        self.grades.extend(grades);
    }

    /// Arithmetic mean of the grades, 0 when there are none.
    pub fn average_grade(&self) -> f64 {
        if self.grades.is_empty() {
            return 0.0;
        }
        self.grades.iter().sum::<f64>() / self.grades.len() as f64
    }
}

impl fmt::Display for Student {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Student: {}", self.name)
    }
}

impl PersonLike for Student {
    fn name(&self) -> &str {
        &self.name
    }

    fn role(&self) -> Role {
        Role::Student
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Teacher {
    name: String,
    subjects: Vec<String>,
}

impl Teacher {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            subjects: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn add_subject(&mut self, subject: impl Into<String>) {
        self.subjects.push(subject.into());
    }

    pub fn subjects(&self) -> &[String] {
        &self.subjects
    }
}

impl fmt::Display for Teacher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Teacher: {}", self.name)
    }
}

impl PersonLike for Teacher {
    fn name(&self) -> &str {
        &self.name
    }

    fn role(&self) -> Role {
        Role::Teacher
    }
}

/// A person record as produced by the factory.
#[derive(Debug, Clone, PartialEq)]
pub enum Person {
    Student(Student),
    Teacher(Teacher),
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Person::Student(student) => student.fmt(f),
            Person::Teacher(teacher) => teacher.fmt(f),
        }
    }
}

impl PersonLike for Person {
    fn name(&self) -> &str {
        match self {
            Person::Student(student) => student.name(),
            Person::Teacher(teacher) => teacher.name(),
        }
    }

    fn role(&self) -> Role {
        match self {
            Person::Student(_) => Role::Student,
            Person::Teacher(_) => Role::Teacher,
        }
    }
}

/// Formats a float the way the menu prints grades: `10.0`, `9.5`.
pub fn format_grade(grade: f64) -> String {
    format!("{:?}", grade)
}

pub fn format_grades(grades: &[f64]) -> String {
    let items: Vec<String> = grades.iter().map(|g| format_grade(*g)).collect();
    format!("[{}]", items.join(", "))
}
