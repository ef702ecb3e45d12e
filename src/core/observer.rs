use crate::core::registry::SharedRegistry;
use crate::domain::ports::{Console, Observer};
use crate::utils::error::Result;
use std::rc::Rc;

/// Listeners notified synchronously, in registration order.
#[derive(Default)]
pub struct Observable {
    observers: Vec<Rc<dyn Observer>>,
}

impl Observable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_observer(&mut self, observer: Rc<dyn Observer>) {
        tracing::debug!("Registering observer '{}'", observer.label());
        self.observers.push(observer);
    }

    /// Removes the first registration of this exact observer. Returns whether
    /// anything was removed.
    pub fn remove_observer(&mut self, observer: &Rc<dyn Observer>) -> bool {
        match self.observers.iter().position(|o| Rc::ptr_eq(o, observer)) {
            Some(index) => {
                self.observers.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn len(&self) -> usize {
        self.observers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }

    /// Stops at the first observer that fails; later observers are not called.
    pub fn notify_observers(&self, console: &mut dyn Console) -> Result<()> {
        for observer in &self.observers {
            tracing::debug!("Notifying observer '{}'", observer.label());
            observer.update(console)?;
        }
        Ok(())
    }
}

/// Reports the number of enrolled students.
pub struct StudentCountObserver {
    registry: SharedRegistry,
}

impl StudentCountObserver {
    pub fn new(registry: SharedRegistry) -> Self {
        Self { registry }
    }
}

impl Observer for StudentCountObserver {
    fn label(&self) -> &str {
        "student-count"
    }

    fn update(&self, console: &mut dyn Console) -> Result<()> {
        let student_count = self.registry.lock().student_count();
        tracing::info!(student_count, "Student count changed");
        console.write_line(&format!(
            "Student count changed. Total students: {}",
            student_count
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::Student;
    use crate::utils::error::UniversityError;
    use std::cell::RefCell;

    #[derive(Default)]
    struct RecordingConsole {
        lines: Vec<String>,
    }

    impl Console for RecordingConsole {
        fn read_line(&mut self, _prompt: &str) -> Result<String> {
            Err(UniversityError::InputClosed)
        }

        fn write_line(&mut self, line: &str) -> Result<()> {
            self.lines.push(line.to_string());
            Ok(())
        }
    }

    struct Tagged {
        tag: &'static str,
        calls: Rc<RefCell<Vec<&'static str>>>,
        fail: bool,
    }

    impl Observer for Tagged {
        fn label(&self) -> &str {
            self.tag
        }

        fn update(&self, _console: &mut dyn Console) -> Result<()> {
            self.calls.borrow_mut().push(self.tag);
            if self.fail {
                return Err(UniversityError::ObserverFailed {
                    observer: self.tag.to_string(),
                    message: "boom".to_string(),
                });
            }
            Ok(())
        }
    }

    fn tagged(
        tag: &'static str,
        calls: &Rc<RefCell<Vec<&'static str>>>,
        fail: bool,
    ) -> Rc<dyn Observer> {
        Rc::new(Tagged {
            tag,
            calls: Rc::clone(calls),
            fail,
        })
    }

    #[test]
    fn test_student_count_observer_reports_count() {
        let registry = SharedRegistry::default();
        let mut observable = Observable::new();
        observable.add_observer(Rc::new(StudentCountObserver::new(registry.clone())));
        let mut console = RecordingConsole::default();

        for name in ["Ann", "Bob", "Cid"] {
            registry.lock().enroll(Student::new(name));
            observable.notify_observers(&mut console).unwrap();
        }

        assert_eq!(
            console.lines.last().map(String::as_str),
            Some("Student count changed. Total students: 3")
        );
        assert_eq!(console.lines.len(), 3);
    }

    #[test]
    fn test_notifies_in_registration_order() {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let mut observable = Observable::new();
        observable.add_observer(tagged("first", &calls, false));
        observable.add_observer(tagged("second", &calls, false));

        observable
            .notify_observers(&mut RecordingConsole::default())
            .unwrap();
        assert_eq!(*calls.borrow(), vec!["first", "second"]);
    }

    #[test]
    fn test_failure_aborts_remaining_notifications() {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let mut observable = Observable::new();
        observable.add_observer(tagged("first", &calls, true));
        observable.add_observer(tagged("second", &calls, false));

        let result = observable.notify_observers(&mut RecordingConsole::default());
        assert!(matches!(result, Err(UniversityError::ObserverFailed { .. })));
        assert_eq!(*calls.borrow(), vec!["first"]);
    }

    #[test]
    fn test_remove_observer() {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let mut observable = Observable::new();
        let first = tagged("first", &calls, false);
        observable.add_observer(Rc::clone(&first));
        observable.add_observer(tagged("second", &calls, false));

        assert!(observable.remove_observer(&first));
        assert!(!observable.remove_observer(&first));
        assert_eq!(observable.len(), 1);

        observable
            .notify_observers(&mut RecordingConsole::default())
            .unwrap();
        assert_eq!(*calls.borrow(), vec!["second"]);
    }
}
