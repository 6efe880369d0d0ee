//! The interactive `attendance menu` command.
//!
//! Reads menu choices and answers line by line, calls the store, and prints
//! results or `Error: ...` lines. Store errors never end the loop; only the
//! Exit choice or end of input does.

use std::io::{self, BufRead, Write};

use attendance_storage::{AttendanceStore, DisplayMessages, Student, Teacher};
use thiserror::Error;
use tracing::debug;

/// Why a single menu action stopped early
#[derive(Debug, Error)]
enum MenuError {
    #[error(transparent)]
    Store(#[from] attendance_core::Error),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("End of input")]
    EndOfInput,
}

/// Interactive menu over a caller-owned store
pub struct Menu<'a, R, W> {
    store: &'a mut AttendanceStore,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> Menu<'a, R, W> {
    pub fn new(store: &'a mut AttendanceStore, input: R, output: W) -> Self {
        Self {
            store,
            input,
            output,
        }
    }

    /// Run until the Exit choice or end of input.
    ///
    /// # Errors
    /// Only I/O failures on `input` or `output` are returned.
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            self.print_menu()?;

            let choice = match self.prompt(DisplayMessages::PROMPT_CHOICE) {
                Ok(choice) => choice,
                Err(MenuError::Io(e)) => return Err(e),
                Err(_) => break,
            };
            debug!(choice = %choice.trim(), "Menu choice");

            let outcome = match choice.trim() {
                "1" => self.add_student(),
                "2" => self.add_teacher(),
                "3" => self.mark_attendance(),
                "4" => self.view_by_person(),
                "5" => self.view_by_date(),
                "6" => break,
                _ => {
                    writeln!(self.output, "{}", DisplayMessages::INVALID_CHOICE)?;
                    continue;
                }
            };

            match outcome {
                Ok(()) => {}
                Err(MenuError::Store(e)) => {
                    writeln!(self.output, "{}", DisplayMessages::error(&e))?;
                }
                Err(MenuError::Io(e)) => return Err(e),
                Err(MenuError::EndOfInput) => break,
            }
        }

        writeln!(self.output, "{}", DisplayMessages::EXITING)?;
        self.output.flush()
    }

    fn print_menu(&mut self) -> io::Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "{}", DisplayMessages::MENU_TITLE)?;
        for (number, option) in DisplayMessages::MENU_OPTIONS.iter().enumerate() {
            writeln!(self.output, "{}. {}", number + 1, option)?;
        }
        Ok(())
    }

    /// Print `text` and read one line, without its line terminator.
    fn prompt(&mut self, text: &str) -> Result<String, MenuError> {
        write!(self.output, "{text}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(MenuError::EndOfInput);
        }

        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(line)
    }

    fn add_student(&mut self) -> Result<(), MenuError> {
        let id = self.prompt(DisplayMessages::PROMPT_STUDENT_ID)?;
        let name = self.prompt(DisplayMessages::PROMPT_STUDENT_NAME)?;

        self.store.add_student(Student::new(id, name.as_str()))?;
        writeln!(self.output, "{}", DisplayMessages::student_added(&name))?;
        Ok(())
    }

    fn add_teacher(&mut self) -> Result<(), MenuError> {
        let id = self.prompt(DisplayMessages::PROMPT_TEACHER_ID)?;
        let name = self.prompt(DisplayMessages::PROMPT_TEACHER_NAME)?;

        self.store.add_teacher(Teacher::new(id, name.as_str()))?;
        writeln!(self.output, "{}", DisplayMessages::teacher_added(&name))?;
        Ok(())
    }

    fn mark_attendance(&mut self) -> Result<(), MenuError> {
        let person_id = self.prompt(DisplayMessages::PROMPT_PERSON_ID)?;
        let date = self.prompt(DisplayMessages::PROMPT_DATE)?;
        // the menu is lenient about case, the store is not
        let status = self.prompt(DisplayMessages::PROMPT_STATUS)?.to_lowercase();

        let record = self.store.mark_attendance(&person_id, &date, &status)?;
        writeln!(self.output, "{}", DisplayMessages::attendance_marked(record))?;
        Ok(())
    }

    fn view_by_person(&mut self) -> Result<(), MenuError> {
        let person_id = self.prompt(DisplayMessages::PROMPT_VIEW_PERSON)?;

        let records = self.store.get_attendance_by_person(&person_id);
        if records.is_empty() {
            writeln!(
                self.output,
                "{}",
                DisplayMessages::no_records_for_person(&person_id)
            )?;
            return Ok(());
        }

        writeln!(self.output)?;
        writeln!(self.output, "{}", DisplayMessages::person_heading(&person_id))?;
        for record in records {
            writeln!(
                self.output,
                "  {}",
                DisplayMessages::person_record_line(record)
            )?;
        }
        Ok(())
    }

    fn view_by_date(&mut self) -> Result<(), MenuError> {
        let date = self.prompt(DisplayMessages::PROMPT_VIEW_DATE)?;

        let records = self.store.get_attendance_by_date(&date)?;
        if records.is_empty() {
            writeln!(self.output, "{}", DisplayMessages::no_records_for_date(&date))?;
            return Ok(());
        }

        writeln!(self.output)?;
        writeln!(self.output, "{}", DisplayMessages::date_heading(&date))?;
        for record in records {
            let person = self.store.find_person(record.person_id());
            writeln!(
                self.output,
                "  {}",
                DisplayMessages::date_record_line(record, person)
            )?;
        }
        Ok(())
    }
}

/// Run the menu on stdin/stdout with a fresh store.
pub fn execute() -> anyhow::Result<()> {
    let mut store = AttendanceStore::new();
    let stdin = io::stdin();
    let stdout = io::stdout();

    Menu::new(&mut store, stdin.lock(), stdout.lock()).run()?;

    debug!(
        students = store.student_count(),
        teachers = store.teacher_count(),
        records = store.record_count(),
        "Menu session ended"
    );
    Ok(())
}
