use dioxus::prelude::*;
use crate::Route;

const LISTED_PAIRS: [&str; 5] = ["BTC-USDT", "ETH-USDT", "SOL-USDT", "ETH-BTC", "XRP-USDT"];

#[component]
pub fn Markets() -> Element {
  static CSS: Asset = asset!("/assets/pages.css");
  rsx! {
    document::Stylesheet {href: CSS},
    div {
      class: "markets-page",
      h2 { "Markets" }
      table {
        class: "markets-table",
        thead {
          tr { th { "Pair" } th { "" } }
        }
        tbody {
          for pair in LISTED_PAIRS {
            tr {
              key: "{pair}",
              td { "{pair}" }
              td {
                Link {
                  class: "trade-link",
                  to: Route::Trading { pair: pair.to_string() },
                  "Trade"
                }
              }
            }
          }
        }
      }
    }
  }
}
