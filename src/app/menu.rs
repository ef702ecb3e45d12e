use crate::core::facade::{SubjectAssignment, UniversityFacade};
use crate::core::observer::{Observable, StudentCountObserver};
use crate::domain::ports::{Console, FloatGradeParser, GradeParser};
use crate::utils::error::{Result, UniversityError};
use std::rc::Rc;

const MENU_LINES: [&str; 9] = [
    "",
    "Welcome to the University Management System",
    "1. Enroll Student",
    "2. Hire Teacher",
    "3. Display Students",
    "4. Display Students with Only Tens",
    "5. Enter Grades",
    "6. Display Grades",
    "7. Decorate Student",
];

const STAFF_MENU_LINES: [&str; 2] = ["8. Display Teachers", "9. Assign Subject"];

const QUIT_LINE: &str = "q. Quit\n";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    EnrollStudent,
    HireTeacher,
    DisplayStudents,
    DisplayPerfectScores,
    EnterGrades,
    DisplayGrades,
    DecorateStudent,
    DisplayTeachers,
    AssignSubject,
    Quit,
}

impl MenuChoice {
    /// Tokens match exactly; only the quit token ignores case. "8" and "9"
    /// exist only when `staff_options` is on.
    pub fn parse(input: &str, staff_options: bool) -> Option<Self> {
        let choice = match input {
            "1" => MenuChoice::EnrollStudent,
            "2" => MenuChoice::HireTeacher,
            "3" => MenuChoice::DisplayStudents,
            "4" => MenuChoice::DisplayPerfectScores,
            "5" => MenuChoice::EnterGrades,
            "6" => MenuChoice::DisplayGrades,
            "7" => MenuChoice::DecorateStudent,
            "8" if staff_options => MenuChoice::DisplayTeachers,
            "9" if staff_options => MenuChoice::AssignSubject,
            other if other.eq_ignore_ascii_case("q") => MenuChoice::Quit,
            _ => return None,
        };
        Some(choice)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

pub struct Menu<P: GradeParser = FloatGradeParser> {
    facade: UniversityFacade<P>,
    observable: Observable,
}

impl<P: GradeParser> Menu<P> {
    pub fn new(facade: UniversityFacade<P>, observable: Observable) -> Self {
        Self { facade, observable }
    }

    /// Wires the student-count observer to the facade's registry.
    pub fn with_default_observers(facade: UniversityFacade<P>) -> Self {
        let mut observable = Observable::new();
        observable.add_observer(Rc::new(StudentCountObserver::new(
            facade.registry().clone(),
        )));
        Self::new(facade, observable)
    }

    pub fn facade(&self) -> &UniversityFacade<P> {
        &self.facade
    }

    fn staff_options(&self) -> bool {
        self.facade.settings().staff_options
    }

    fn display_menu(&self, console: &mut dyn Console) -> Result<()> {
        for line in MENU_LINES {
            console.write_line(line)?;
        }
        if self.staff_options() {
            for line in STAFF_MENU_LINES {
                console.write_line(line)?;
            }
        }
        console.write_line(QUIT_LINE)
    }

    /// Runs until the user quits or input ends. Errors from a single choice
    /// are reported and the loop carries on.
    pub fn run(&self, console: &mut dyn Console) -> Result<()> {
        tracing::info!("Menu session started");
        loop {
            self.display_menu(console)?;
            let outcome = console
                .read_line("Enter your choice: ")
                .and_then(|input| self.handle_input(&input, console));

            match outcome {
                Ok(Flow::Continue) => {}
                Ok(Flow::Quit) => break,
                Err(UniversityError::InputClosed) => {
                    tracing::info!("Input closed, ending session");
                    break;
                }
                Err(e) if e.is_recoverable() => {
                    tracing::warn!("Menu action failed: {}", e);
                    console.write_line(&format!("Error: {}", e))?;
                }
                Err(e) => return Err(e),
            }
        }
        tracing::info!("Menu session ended");
        Ok(())
    }

    fn handle_input(&self, input: &str, console: &mut dyn Console) -> Result<Flow> {
        match MenuChoice::parse(input, self.staff_options()) {
            Some(choice) => self.dispatch(choice, console),
            None => {
                tracing::debug!("Rejected menu input {:?}", input);
                console.write_line("Invalid choice. Try again.")?;
                Ok(Flow::Continue)
            }
        }
    }

    fn dispatch(&self, choice: MenuChoice, console: &mut dyn Console) -> Result<Flow> {
        tracing::debug!(?choice, "Dispatching menu choice");
        match choice {
            MenuChoice::EnrollStudent => {
                let name = console.read_line("Enter student name: ")?;
                self.facade.enroll_student(&name);
                self.observable.notify_observers(console)?;
            }
            MenuChoice::HireTeacher => {
                let name = console.read_line("Enter teacher name: ")?;
                self.facade.hire_teacher(&name);
            }
            MenuChoice::DisplayStudents => {
                console.write_line("Students:")?;
                self.facade.display_students(console)?;
            }
            MenuChoice::DisplayPerfectScores => {
                self.facade.display_students_with_only_tens(console)?;
            }
            MenuChoice::EnterGrades => {
                self.facade.enter_grades(console)?;
            }
            MenuChoice::DisplayGrades => {
                console.write_line("Grades:")?;
                self.facade.display_grades(console)?;
            }
            MenuChoice::DecorateStudent => {
                let name = console.read_line("Enter student name: ")?;
                console.write_line(&self.facade.decorate_student(&name))?;
            }
            MenuChoice::DisplayTeachers => {
                console.write_line("Teachers:")?;
                self.facade.display_teachers(console)?;
            }
            MenuChoice::AssignSubject => {
                let teacher = console.read_line("Enter teacher name: ")?;
                let subject = console.read_line("Enter subject: ")?;
                match self.facade.assign_subject(&teacher, &subject) {
                    SubjectAssignment::Assigned => console.write_line("Subject assigned.")?,
                    SubjectAssignment::TeacherNotFound => {
                        console.write_line("Teacher not found.")?
                    }
                }
            }
            MenuChoice::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_menu_tokens() {
        assert_eq!(MenuChoice::parse("1", false), Some(MenuChoice::EnrollStudent));
        assert_eq!(MenuChoice::parse("7", false), Some(MenuChoice::DecorateStudent));
        assert_eq!(MenuChoice::parse("q", false), Some(MenuChoice::Quit));
        assert_eq!(MenuChoice::parse("Q", false), Some(MenuChoice::Quit));
    }

    #[test]
    fn test_parse_rejects_other_input() {
        for input in ["", "0", "8", "9", "10", " 1", "quit", "x"] {
            assert_eq!(MenuChoice::parse(input, false), None, "input {:?}", input);
        }
    }

    #[test]
    fn test_staff_options_enable_teacher_entries() {
        assert_eq!(MenuChoice::parse("8", true), Some(MenuChoice::DisplayTeachers));
        assert_eq!(MenuChoice::parse("9", true), Some(MenuChoice::AssignSubject));
        assert_eq!(MenuChoice::parse("10", true), None);
    }
}
