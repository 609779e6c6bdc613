// End-to-end watcher scenario: scripted source batches through three
// poll cycles, with both sinks recording into one shared event log so
// cross-sink ordering is visible.
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use stacknotify_core::{
    MenuHandle, MenuSink, Notifier, Question, QuestionSource, QuestionTracker, Result, TagFilter,
    Watcher,
};

fn question(id: u64, tags: &[&str]) -> Question {
    Question {
        id,
        title: format!("question {}", id),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        up_votes: 2,
        down_votes: 0,
        answer_count: 1,
        created_at: Utc::now(),
        url: format!("https://stackoverflow.com/questions/{}/", id),
    }
}

type EventLog = Arc<Mutex<Vec<String>>>;

/// Serves pre-baked batches, one per poll; empty once the script runs out.
struct ScriptedSource {
    batches: Mutex<VecDeque<Vec<Question>>>,
}

impl ScriptedSource {
    fn new(batches: Vec<Vec<Question>>) -> Self {
        Self {
            batches: Mutex::new(batches.into()),
        }
    }
}

#[async_trait]
impl QuestionSource for ScriptedSource {
    async fn recent_questions(&self) -> Result<Vec<Question>> {
        Ok(self.batches.lock().unwrap().pop_front().unwrap_or_default())
    }
}

struct RecordingNotifier(EventLog);

impl Notifier for RecordingNotifier {
    fn notify(&mut self, question: &Question) -> Result<()> {
        self.0.lock().unwrap().push(format!("notify:{}", question.id));
        Ok(())
    }
}

struct RecordingMenu {
    events: EventLog,
    next_handle: u64,
}

impl MenuSink for RecordingMenu {
    fn add(&mut self, question: &Question) -> Result<MenuHandle> {
        self.events.lock().unwrap().push(format!("add:{}", question.id));
        self.next_handle += 1;
        Ok(MenuHandle::new(self.next_handle))
    }

    fn remove(&mut self, question: &Question) -> Result<()> {
        self.events
            .lock()
            .unwrap()
            .push(format!("remove:{}", question.id));
        Ok(())
    }
}

#[tokio::test]
async fn test_three_cycles_track_notify_and_evict() {
    // tracked tags {"go"}, limit 2
    let source = ScriptedSource::new(vec![
        vec![question(1, &["go"]), question(2, &["rust"])],
        vec![question(3, &["go"]), question(1, &["go"])],
        vec![question(4, &["go"])],
    ]);

    let events: EventLog = Arc::new(Mutex::new(Vec::new()));
    let mut watcher = Watcher::new(
        Box::new(source),
        QuestionTracker::new(TagFilter::new(["go"]), 2),
        Box::new(RecordingNotifier(events.clone())),
        Box::new(RecordingMenu {
            events: events.clone(),
            next_handle: 0,
        }),
        Duration::from_secs(60),
    );

    // cycle 1: only the go-tagged question is surfaced
    watcher.poll_now().await.unwrap();
    assert_eq!(watcher.tracker().len(), 1);

    // cycle 2: question 1 is already known, question 3 is new; at limit now
    watcher.poll_now().await.unwrap();
    assert_eq!(watcher.tracker().len(), 2);

    // cycle 3: question 4 pushes out the oldest survivor, question 1
    watcher.poll_now().await.unwrap();
    assert_eq!(watcher.tracker().len(), 2);
    assert!(watcher.tracker().contains(3));
    assert!(watcher.tracker().contains(4));
    assert!(!watcher.tracker().contains(1));

    assert_eq!(
        *events.lock().unwrap(),
        vec![
            "notify:1",
            "add:1",
            "notify:3",
            "add:3",
            "notify:4",
            "add:4",
            "remove:1",
        ]
    );
}

#[tokio::test]
async fn test_exhausted_source_keeps_state_stable() {
    let source = ScriptedSource::new(vec![vec![question(1, &["go"])]]);
    let events: EventLog = Arc::new(Mutex::new(Vec::new()));

    let mut watcher = Watcher::new(
        Box::new(source),
        QuestionTracker::new(TagFilter::new(["go"]), 2),
        Box::new(RecordingNotifier(events.clone())),
        Box::new(RecordingMenu {
            events: events.clone(),
            next_handle: 0,
        }),
        Duration::from_secs(60),
    );

    watcher.poll_now().await.unwrap();
    watcher.poll_now().await.unwrap();
    watcher.poll_now().await.unwrap();

    assert_eq!(watcher.tracker().len(), 1);
    assert_eq!(*events.lock().unwrap(), vec!["notify:1", "add:1"]);
}
