use dioxus::prelude::*;
use crate::Route;

#[component]
pub fn Home() -> Element {
  static CSS: Asset = asset!("/assets/pages.css");
  rsx! {
    document::Stylesheet {href: CSS},
    div {
      class: "home-page",
      section {
        class : "hero",
        h1 { "Trade digital assets around the clock" },
        p { "Spot markets with deep order books, live charts and fast execution. Open an account in minutes and start trading the pairs you follow." },
        Link {
          class: "cta-button",
          to: Route::Trading { pair: "BTC-USDT".to_string() },
          "Start trading"
        }
      },
      section {
        class: "features",
        div {
          class: "feature-card",
          h3 {
            class: "feature-card-title",
            span {"⚡"}
            "Fast Matching"
          }
          p { "Orders are matched in price-time priority and show up in the book the moment they land." }
        },
        div {
          class: "feature-card",
          h3 {
            class: "feature-card-title",
            span {"📈"}
            "Live Markets"
          }
          p { "Follow prices, spreads and 24h volume for every listed pair from the markets overview." }
        },
        div {
          class: "feature-card",
          h3 {
            class: "feature-card-title",
            span {"📱"}
            "Any Screen"
          }
          p { "The trading view adapts to phones and tablets. For the full order book and chart layout, use a desktop browser." }
        }
      }
    }
  }
}
