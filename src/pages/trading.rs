use dioxus::prelude::*;
use crate::DeviceContext;

#[component]
pub fn Trading(pair: String) -> Element {
  static CSS: Asset = asset!("/assets/pages.css");
  let snapshot = use_context::<DeviceContext>().snapshot;
  let layout = if snapshot.read().is_handheld() { "trading-grid trading-grid-stacked" } else { "trading-grid" };

  rsx! {
    document::Stylesheet {href: CSS},
    div {
      class: "trading-page",
      div {
        class: "trading-header",
        h2 { "{pair}" }
        span { class: "trading-status", "Market open" }
      }
      div {
        class: layout,
        div { class: "table-card orderbook-card", "Order book" }
        div { class: "chart-card", "Price chart" }
        div { class: "table-card trades-card", "Recent trades" }
        div { class: "table-card order-form-card", "Place order" }
      }
    }
  }
}
