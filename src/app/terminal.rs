//! Terminal surface: prints the rendered board and prompts on stdin.

use std::io::{self, BufRead, BufReader, Write};
use std::sync::Mutex as StdMutex;

use tokio::runtime::{Handle, RuntimeFlavor};

use crate::interface::{Confirm, Surface};
use crate::notice::Notice;
use crate::view::{ActivityCard, ListView, SelectOption, LOAD_FAILURE_TEXT, NO_PARTICIPANTS_TEXT};

pub struct TerminalSurface {
    assume_yes: bool,
    out: StdMutex<Box<dyn Write + Send>>,
    input: StdMutex<Box<dyn BufRead + Send>>,
}

impl TerminalSurface {
    pub fn stdout(assume_yes: bool) -> Self {
        Self::new(Box::new(io::stdout()), assume_yes)
    }

    pub fn new(out: Box<dyn Write + Send>, assume_yes: bool) -> Self {
        Self::with_input(out, Box::new(BufReader::new(io::stdin())), assume_yes)
    }

    pub fn with_input(
        out: Box<dyn Write + Send>,
        input: Box<dyn BufRead + Send>,
        assume_yes: bool,
    ) -> Self {
        Self {
            assume_yes,
            out: StdMutex::new(out),
            input: StdMutex::new(input),
        }
    }

    fn read_answer(&self) -> Option<String> {
        let mut input = self.input.lock().ok()?;
        let mut answer = String::new();
        match input.read_line(&mut answer) {
            Ok(_) => Some(answer),
            Err(e) => {
                log::warn!("Failed to read answer: {}", e);
                None
            }
        }
    }

    fn emit(&self, text: &str) {
        let Ok(mut out) = self.out.lock() else {
            return;
        };
        if let Err(e) = out.write_all(text.as_bytes()).and_then(|_| out.flush()) {
            log::warn!("Failed to write to terminal: {}", e);
        }
    }
}

pub fn format_card(card: &ActivityCard) -> String {
    let mut text = String::new();
    text.push_str("=====================================\n");
    text.push_str(&format!("{}\n", card.name));
    text.push_str(&format!("{}\n", card.description));
    text.push_str(&format!("Schedule: {}\n", card.schedule));
    text.push_str(&format!("Availability: {} spots left\n", card.spots_left));
    text.push_str("Participants:\n");
    if card.participants.is_empty() {
        text.push_str(&format!("  {NO_PARTICIPANTS_TEXT}\n"));
    }
    for row in &card.participants {
        text.push_str(&format!(
            "  [{:<2}] {:<24} <{}>\n",
            row.initials, row.display_name, row.key.email
        ));
    }
    text
}

pub fn format_list(list: &ListView) -> String {
    match list {
        ListView::Cards(cards) => {
            let mut text: String = cards.iter().map(format_card).collect();
            text.push_str("=====================================\n");
            text
        }
        ListView::Failed => format!("{LOAD_FAILURE_TEXT}\n"),
    }
}

impl Surface for TerminalSurface {
    fn commit_list(&self, list: &ListView) {
        self.emit(&format_list(list));
    }

    fn commit_options(&self, options: &[SelectOption]) {
        let names: Vec<&str> = options
            .iter()
            .filter(|o| !o.is_placeholder())
            .map(|o| o.label.as_str())
            .collect();
        log::debug!("Activities available: {}", names.join(", "));
    }

    fn commit_notice(&self, notice: Option<&Notice>) {
        if let Some(notice) = notice {
            self.emit(&format!("[{}] {}\n", notice.kind.class(), notice.text));
        }
    }

    fn reset_form(&self) {}
}

impl Confirm for TerminalSurface {
    fn confirm(&self, prompt: &str) -> bool {
        if self.assume_yes {
            return true;
        }
        self.emit(&format!("{prompt} [y/N] "));

        // The read blocks; on a multi-thread runtime hand the worker's other
        // tasks (notice timers) to another thread first.
        let answer = match Handle::try_current() {
            Ok(handle) if handle.runtime_flavor() == RuntimeFlavor::MultiThread => {
                tokio::task::block_in_place(|| self.read_answer())
            }
            _ => self.read_answer(),
        };
        let Some(answer) = answer else {
            return false;
        };
        matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
    }
}
