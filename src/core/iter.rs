use crate::domain::model::Student;

pub const PERFECT_SCORE: f64 = 10.0;

/// Criteria a student must meet to be listed as a perfect scorer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PerfectScoreFilter {
    pub perfect_score: f64,
    /// Students with no grades pass "every grade is perfect" vacuously.
    pub include_ungraded: bool,
}

impl Default for PerfectScoreFilter {
    fn default() -> Self {
        Self {
            perfect_score: PERFECT_SCORE,
            include_ungraded: true,
        }
    }
}

impl PerfectScoreFilter {
    pub fn accepts(&self, student: &Student) -> bool {
        if student.grades().is_empty() {
            return self.include_ungraded;
        }
        student.grades().iter().all(|g| *g == self.perfect_score)
    }
}

/// A view over a student slice that hands out fresh perfect-score cursors.
#[derive(Debug, Clone, Copy)]
pub struct StudentList<'a> {
    students: &'a [Student],
    filter: PerfectScoreFilter,
}

impl<'a> StudentList<'a> {
    pub fn new(students: &'a [Student]) -> Self {
        Self::with_filter(students, PerfectScoreFilter::default())
    }

    pub fn with_filter(students: &'a [Student], filter: PerfectScoreFilter) -> Self {
        Self { students, filter }
    }

    pub fn perfect_scores(&self) -> PerfectScoreIter<'a> {
        PerfectScoreIter {
            students: self.students,
            index: 0,
            filter: self.filter,
        }
    }
}

impl<'a> IntoIterator for &StudentList<'a> {
    type Item = &'a Student;
    type IntoIter = PerfectScoreIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.perfect_scores()
    }
}

/// Explicit cursor; once `index` passes the end it stays exhausted.
#[derive(Debug, Clone)]
pub struct PerfectScoreIter<'a> {
    students: &'a [Student],
    index: usize,
    filter: PerfectScoreFilter,
}

impl<'a> Iterator for PerfectScoreIter<'a> {
    type Item = &'a Student;

    fn next(&mut self) -> Option<Self::Item> {
        while self.index < self.students.len() {
            let student = &self.students[self.index];
            self.index += 1;
            if self.filter.accepts(student) {
                return Some(student);
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.students.len() - self.index))
    }
}

impl std::iter::FusedIterator for PerfectScoreIter<'_> {}

#[cfg(test)]
mod tests {
    use super::*;

    fn student(name: &str, grades: &[f64]) -> Student {
        let mut student = Student::new(name);
        student.add_grades(grades.iter().copied());
        student
    }

    fn sample() -> Vec<Student> {
        vec![
            student("A", &[10.0, 10.0]),
            student("B", &[10.0, 9.0]),
            student("C", &[]),
        ]
    }

    #[test]
    fn test_yields_perfect_and_ungraded_students() {
        let students = sample();
        let list = StudentList::new(&students);
        let names: Vec<&str> = list.perfect_scores().map(|s| s.name()).collect();
        assert_eq!(names, vec!["A", "C"]);
    }

    #[test]
    fn test_can_exclude_ungraded_students() {
        let students = sample();
        let filter = PerfectScoreFilter {
            include_ungraded: false,
            ..PerfectScoreFilter::default()
        };
        let list = StudentList::with_filter(&students, filter);
        let names: Vec<&str> = list.perfect_scores().map(|s| s.name()).collect();
        assert_eq!(names, vec!["A"]);
    }

    #[test]
    fn test_restartable() {
        let students = sample();
        let list = StudentList::new(&students);

        let mut first = list.perfect_scores();
        assert_eq!(first.next().map(|s| s.name()), Some("A"));
        assert_eq!(first.next().map(|s| s.name()), Some("C"));
        assert!(first.next().is_none());
        assert!(first.next().is_none());

        let again: Vec<&str> = (&list).into_iter().map(|s| s.name()).collect();
        assert_eq!(again, vec!["A", "C"]);
    }

    #[test]
    fn test_custom_perfect_score() {
        let students = vec![student("A", &[5.0, 5.0]), student("B", &[10.0])];
        let filter = PerfectScoreFilter {
            perfect_score: 5.0,
            include_ungraded: true,
        };
        let list = StudentList::with_filter(&students, filter);
        assert_eq!(list.perfect_scores().count(), 1);
    }

    #[test]
    fn test_empty_registry_yields_nothing() {
        let list = StudentList::new(&[]);
        assert!(list.perfect_scores().next().is_none());
    }
}
