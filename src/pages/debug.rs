use dioxus::{logger::tracing::{info, warn}, prelude::*};
use crate::{AlertGate, DeviceContext};

/// Shows what the classifier and the alert gate currently see.
#[component]
pub fn DeviceDebug() -> Element {
  static CSS: Asset = asset!("/assets/pages.css");
  let snapshot = use_context::<DeviceContext>().snapshot;
  let gate = use_context::<AlertGate>();
  let mut gate_state = use_signal(|| gate.load());

  let pretty = |value: Result<String, serde_json::Error>| value.unwrap_or_else(|e| {
    warn!("debug serialization failed: {}", e);
    String::from("<unavailable>")
  });
  let snapshot_json = pretty(serde_json::to_string_pretty(&*snapshot.read()));
  let gate_json = pretty(serde_json::to_string_pretty(&gate_state()));

  rsx! {
    document::Stylesheet {href: CSS},
    div {
      class: "info-page",
      h2 { "Device diagnostics" }
      h3 { "Device" }
      pre { "{snapshot_json}" }
      h3 { "Alert gate" }
      pre { "{gate_json}" }
      button {
        class: "cta-button",
        onclick: move |_| {
          gate.reset();
          info!("device alert state reset");
          gate_state.set(gate.load());
        },
        "Reset alert state"
      }
    }
  }
}
