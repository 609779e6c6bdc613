use tracing::warn;

use crate::sinks::{MenuSink, Notifier};
use crate::tracker::{QuestionTracker, Reconciliation};

/// Push one reconciliation outcome out to the sinks.
///
/// For every admitted question the notifier fires before the menu
/// insertion, so a broken menu never suppresses the user-visible alert.
/// A sink failure affects only its own entry; the rest of the cycle
/// still dispatches. Evicted questions only get a menu removal, never a
/// second notification.
pub fn dispatch(
    outcome: Reconciliation,
    tracker: &mut QuestionTracker,
    notifier: &mut dyn Notifier,
    menu: &mut dyn MenuSink,
) {
    for question in &outcome.admitted {
        if let Err(e) = notifier.notify(question) {
            warn!("notifier failed for question {}: {}", question.id, e);
        }
        match menu.add(question) {
            Ok(handle) => tracker.attach_handle(question.id, handle),
            Err(e) => warn!("menu add failed for question {}: {}", question.id, e),
        }
    }

    for entry in outcome.evicted {
        if let Err(e) = menu.remove(&entry.question) {
            warn!("menu remove failed for question {}: {}", entry.question.id, e);
        }
        // entry dropped here; its menu handle goes with it
    }
}
