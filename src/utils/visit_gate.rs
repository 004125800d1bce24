use dioxus::logger::tracing::{debug, info, warn};
use serde::Serialize;

use super::{device::DeviceCategory, error::AppError, storage::KeyValueStore};

pub const LAST_SHOWN_KEY: &str = "device_alert_last_shown";
pub const NEVER_SHOW_KEY: &str = "device_alert_never_show";
/// Five minutes between two alerts.
pub const REPROMPT_WINDOW_MS: u64 = 300_000;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct VisitGateState {
  pub last_shown_at: Option<u64>,
  pub never_show: bool,
}

impl VisitGateState {
  pub fn record_shown(self, now: u64) -> Self {
    Self { last_shown_at: Some(now), ..self }
  }

  pub fn record_never_show(self) -> Self {
    Self { never_show: true, ..self }
  }
}

pub fn should_alert(now: u64, state: &VisitGateState) -> bool {
  should_alert_within(now, state, REPROMPT_WINDOW_MS)
}

/// `never_show` wins over everything. Otherwise the alert is due when it was never
/// shown or strictly more than `window_ms` has passed. A clock that went backwards
/// counts as "still inside the window".
pub fn should_alert_within(now: u64, state: &VisitGateState, window_ms: u64) -> bool {
  if state.never_show {
    return false;
  }
  match state.last_shown_at {
    None => true,
    Some(at) => now.saturating_sub(at) > window_ms,
  }
}

/// The gate rules bound to a store. Storage failures never propagate: reads fall
/// back to first-visit state, writes are logged and dropped.
#[derive(Clone)]
pub struct VisitGate<S> {
  store: S,
  window_ms: u64,
}

impl<S: KeyValueStore> VisitGate<S> {
  pub fn new(store: S) -> Self {
    Self::with_window(store, REPROMPT_WINDOW_MS)
  }

  pub fn with_window(store: S, window_ms: u64) -> Self {
    Self { store, window_ms }
  }

  pub fn load(&self) -> VisitGateState {
    let last_shown_at = match self.store.get(LAST_SHOWN_KEY) {
      Ok(Some(raw)) => match raw.trim().parse::<u64>() {
        Ok(at) => Some(at),
        Err(_) => {
          warn!("ignoring malformed {} value {:?}", LAST_SHOWN_KEY, raw);
          None
        }
      },
      Ok(None) => None,
      Err(e) => {
        warn!("{}, treating as first visit", e);
        None
      }
    };

    let never_show = match self.store.get(NEVER_SHOW_KEY) {
      Ok(flag) => flag.as_deref() == Some("true"),
      Err(e) => {
        warn!("{}, treating as first visit", e);
        false
      }
    };

    VisitGateState { last_shown_at, never_show }
  }

  /// Decide against the stored state. An expired timestamp is cleared so the
  /// next visit starts over as a first visit.
  pub fn evaluate(&self, now: u64) -> bool {
    let state = self.load();
    let due = should_alert_within(now, &state, self.window_ms);
    if due && state.last_shown_at.is_some() {
      debug!("last alert at {:?} expired, clearing", state.last_shown_at);
      self.write(|store| store.remove(LAST_SHOWN_KEY));
    }
    due
  }

  pub fn acknowledge(&self, now: u64) -> VisitGateState {
    let next = self.load().record_shown(now);
    self.write(|store| store.set(LAST_SHOWN_KEY, &now.to_string()));
    next
  }

  pub fn never_show_again(&self) -> VisitGateState {
    let next = self.load().record_never_show();
    self.write(|store| store.set(NEVER_SHOW_KEY, "true"));
    info!("device alert suppressed permanently");
    next
  }

  /// Debug utility: forget everything the gate persisted.
  pub fn reset(&self) {
    self.write(|store| store.remove(LAST_SHOWN_KEY));
    self.write(|store| store.remove(NEVER_SHOW_KEY));
  }

  fn write<F>(&self, op: F)
  where
    F: FnOnce(&S) -> Result<(), AppError>,
  {
    if let Err(e) = op(&self.store) {
      warn!("{}, alert state not saved", e);
    }
  }
}

/// At most one alert per page life, however often the page re-renders.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct AlertSession {
  shown: bool,
}

impl AlertSession {
  pub fn has_shown(&self) -> bool {
    self.shown
  }

  pub fn try_show<S: KeyValueStore>(&mut self, gate: &VisitGate<S>, now: u64) -> bool {
    if self.shown || !gate.evaluate(now) {
      return false;
    }
    self.shown = true;
    true
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlertCopy {
  pub title: &'static str,
  pub body: &'static str,
  pub acknowledge: &'static str,
  pub never_show: &'static str,
}

impl AlertCopy {
  /// Desktop gets no alert.
  pub fn for_device(category: DeviceCategory) -> Option<Self> {
    match category {
      DeviceCategory::Mobile => Some(Self {
        title: "You're on a phone",
        body: "Order books and charts are cramped on small screens. Rotate to landscape or switch to desktop for the full trading view.",
        acknowledge: "Got it",
        never_show: "Don't show again",
      }),
      DeviceCategory::Tablet => Some(Self {
        title: "You're on a tablet",
        body: "Some trading panels are collapsed at this width. Landscape mode gives you the order book and chart side by side.",
        acknowledge: "Got it",
        never_show: "Don't show again",
      }),
      DeviceCategory::Desktop => None,
    }
  }
}
