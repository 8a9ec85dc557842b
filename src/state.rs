use tokio::sync::watch;

use crate::model::WeatherModel;

/// Where the most recent fetch stands, as seen by the view.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum FetchPhase {
    #[default]
    Idle,
    Pending,
    Ready,
    Failed(String),
}

/// Observable holder of the current forecast.
///
/// One value, one writer path (the fetch completion), any number of
/// subscribed readers. The initial snapshot is supplied at construction.
/// The fetch phase rides in a second channel so readers can tell an
/// in-flight or failed fetch apart from the last-known-good model.
#[derive(Clone)]
pub struct WeatherCell {
    model: watch::Sender<WeatherModel>,
    phase: watch::Sender<FetchPhase>,
}

impl WeatherCell {
    pub fn new(initial: WeatherModel) -> Self {
        Self {
            model: watch::Sender::new(initial),
            phase: watch::Sender::new(FetchPhase::Idle),
        }
    }

    pub fn model(&self) -> watch::Receiver<WeatherModel> {
        self.model.subscribe()
    }

    pub fn phase(&self) -> watch::Receiver<FetchPhase> {
        self.phase.subscribe()
    }

    pub fn begin(&self) {
        self.phase.send_replace(FetchPhase::Pending);
    }

    /// Replaces the held model wholesale and marks the fetch done.
    pub fn complete(&self, model: WeatherModel) {
        self.model.send_replace(model);
        self.phase.send_replace(FetchPhase::Ready);
    }

    /// Records the failure without touching the model.
    pub fn fail(&self, reason: String) {
        self.phase.send_replace(FetchPhase::Failed(reason));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn readers_see_the_initial_snapshot() {
        let cell = WeatherCell::new(WeatherModel::placeholder());
        assert_eq!(*cell.model().borrow(), WeatherModel::placeholder());
        assert_eq!(*cell.phase().borrow(), FetchPhase::Idle);
    }

    #[test]
    fn complete_replaces_the_model_wholesale() {
        let cell = WeatherCell::new(WeatherModel::placeholder());
        let next = WeatherModel {
            id: Some(4),
            city: Some("Seattle".to_string()),
            ..WeatherModel::default()
        };
        cell.complete(next.clone());
        let held = cell.model().borrow().clone();
        assert_eq!(held, next);
        // high/low/current came back null and must not survive from before
        assert_eq!(held.high, None);
        assert_eq!(*cell.phase().borrow(), FetchPhase::Ready);
    }

    #[test]
    fn fail_leaves_the_model_untouched() {
        let cell = WeatherCell::new(WeatherModel::placeholder());
        cell.begin();
        assert_eq!(*cell.phase().borrow(), FetchPhase::Pending);
        cell.fail("server returned 500".to_string());
        assert_eq!(*cell.model().borrow(), WeatherModel::placeholder());
        assert_eq!(
            *cell.phase().borrow(),
            FetchPhase::Failed("server returned 500".to_string())
        );
    }
}
