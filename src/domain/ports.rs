use crate::domain::model::Role;
use crate::utils::error::{Result, UniversityError};
use std::fmt;

/// Line-oriented console the menu and facade talk through.
pub trait Console {
    /// Writes `prompt` without a newline, then reads one line with the
    /// line terminator stripped. End of input is `UniversityError::InputClosed`.
    fn read_line(&mut self, prompt: &str) -> Result<String>;
    fn write_line(&mut self, line: &str) -> Result<()>;
}

pub trait GradeParser {
    fn parse_grade(&self, token: &str) -> Result<f64>;

    /// Parses a comma-separated list. Fails on the first bad token, so callers
    /// never see a partial list.
    fn parse_grades(&self, line: &str) -> Result<Vec<f64>> {
        line.split(',').map(|token| self.parse_grade(token)).collect()
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct FloatGradeParser;

impl GradeParser for FloatGradeParser {
    fn parse_grade(&self, token: &str) -> Result<f64> {
        let trimmed = token.trim();
        trimmed
            .parse::<f64>()
            .map_err(|_| UniversityError::MalformedGrade {
                token: trimmed.to_string(),
            })
    }
}

/// Render and identity capability shared by people and their decorators.
pub trait PersonLike: fmt::Display {
    fn name(&self) -> &str;
    fn role(&self) -> Role;
}

pub trait Observer {
    /// Short label used in logs and error reports.
    fn label(&self) -> &str;
    fn update(&self, console: &mut dyn Console) -> Result<()>;
}
