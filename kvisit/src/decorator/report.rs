use std::cell::RefCell;

/// Lines written by reporting decorators during a visit.
///
/// Decorators borrow the report for the duration of the visit; the command
/// prints the lines once the visit has succeeded.
#[derive(Debug, Default)]
pub struct Report {
    lines: RefCell<Vec<String>>,
}

impl Report {
    pub fn push(&self, line: String) { self.lines.borrow_mut().push(line); }

    pub fn into_lines(self) -> Vec<String> { self.lines.into_inner() }
}
