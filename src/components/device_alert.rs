use std::{cell::Cell, rc::Rc, time::Duration};
use dioxus::{logger::tracing::{debug, info}, prelude::*};

use crate::{
  utils::{config::AppConfig, device::DeviceCategory, visit_gate::{AlertCopy, AlertSession}},
  AlertGate, DeviceContext,
};

fn now_ms() -> u64 {
  js_sys::Date::now() as u64
}

#[component]
pub fn DeviceAlert() -> Element {
  static CSS: Asset = asset!("/assets/template.css");
  let snapshot = use_context::<DeviceContext>().snapshot;
  let gate = use_context::<AlertGate>();
  let config = use_context::<AppConfig>();

  let category = use_memo(move || snapshot.read().category);
  let mut session = use_signal(AlertSession::default);
  let mut visible = use_signal(|| false);
  let pending = use_hook(|| Rc::new(Cell::new(None::<Task>)));

  // (re)arm the delayed check whenever the category changes; a rapid series of
  // rotations only leaves the last timer alive
  let scheduled_gate = gate.clone();
  let scheduled = pending.clone();
  use_effect(move || {
    let current = category();
    if let Some(task) = scheduled.take() {
      task.cancel();
    }
    if current == DeviceCategory::Desktop || session.peek().has_shown() {
      return;
    }

    let gate = scheduled_gate.clone();
    let slot = scheduled.clone();
    let delay = Duration::from_millis(config.show_delay_ms);
    let task = spawn(async move {
      async_std::task::sleep(delay).await;
      slot.set(None);
      if session.write().try_show(&gate, now_ms()) {
        info!("showing {} device alert", current);
        visible.set(true);
      } else {
        debug!("device alert suppressed for {}", current);
      }
    });
    scheduled.set(Some(task));
  });

  use_drop(move || {
    if let Some(task) = pending.take() {
      task.cancel();
    }
  });

  let Some(AlertCopy { title, body, acknowledge, never_show }) = AlertCopy::for_device(category()).filter(|_| visible()) else {
    return rsx! {};
  };

  let ack_gate = gate.clone();
  let never_gate = gate;

  rsx! {
    document::Stylesheet {href: CSS},
    div {
      class: "device-toast",
      role: "alert",
      h4 { class: "device-toast-title", "{title}" }
      p { class: "device-toast-body", "{body}" }
      div {
        class: "device-toast-actions",
        button {
          class: "toast-btn primary",
          onclick: move |_| {
            ack_gate.acknowledge(now_ms());
            visible.set(false);
          },
          "{acknowledge}"
        }
        button {
          class: "toast-btn",
          onclick: move |_| {
            never_gate.never_show_again();
            visible.set(false);
          },
          "{never_show}"
        }
      }
    }
  }
}
