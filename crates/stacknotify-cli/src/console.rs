// Console renditions of the notification and menu sinks
use stacknotify_core::{MenuHandle, MenuSink, Notifier, Question, Result};

/// Prints the banner a desktop notification would show.
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&mut self, question: &Question) -> Result<()> {
        println!("new question tagged {} on stackoverflow", question.tags.join(", "));
        println!("  {}", question.title);
        println!(
            "  votes: {} answers: {}  {}",
            question.score(),
            question.answer_count,
            question.url
        );
        Ok(())
    }
}

/// Stand-in for a tray menu: one line per entry added or removed.
/// Handles are minted from a counter; remove lines mark entries that
/// fell out of the recency window.
pub struct ConsoleMenu {
    next_handle: u64,
}

impl ConsoleMenu {
    pub fn new() -> Self {
        Self { next_handle: 0 }
    }
}

impl Default for ConsoleMenu {
    fn default() -> Self {
        Self::new()
    }
}

impl MenuSink for ConsoleMenu {
    fn add(&mut self, question: &Question) -> Result<MenuHandle> {
        println!(
            "+ {} {} / {}  {}",
            question.title,
            question.score(),
            question.answer_count,
            question.url
        );
        self.next_handle += 1;
        Ok(MenuHandle::new(self.next_handle))
    }

    fn remove(&mut self, question: &Question) -> Result<()> {
        println!("- {}", question.title);
        Ok(())
    }
}

/// One line per question for the `latest` listing, votes and answer
/// counts zero-padded so the columns line up.
pub fn latest_line(question: &Question) -> String {
    let tags: String = question.tags.iter().map(|tag| format!("[{}]", tag)).collect();
    format!(
        "{:02} {:02} {} {} {}",
        question.score(),
        question.answer_count,
        question.title,
        question.url,
        tags
    )
}
