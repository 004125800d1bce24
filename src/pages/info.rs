use dioxus::prelude::*;

#[component]
pub fn About() -> Element {
  static CSS: Asset = asset!("/assets/pages.css");
  rsx! {
    document::Stylesheet {href: CSS},
    div {
      class: "info-page",
      h2 { "About" }
      p { "A spot exchange for digital assets. Balances are held in segregated wallets and every order is matched on a transparent price-time priority book." }
    }
  }
}

#[component]
pub fn TradingGuide() -> Element {
  static CSS: Asset = asset!("/assets/pages.css");
  rsx! {
    document::Stylesheet {href: CSS},
    div {
      class: "info-page",
      h2 { "Trading guide" }
      ol {
        li { "Pick a pair from the markets overview." }
        li { "Choose a limit order to set your price, or a market order to fill immediately at the best available price." }
        li { "Watch the order book: bids below the spread, asks above it." }
        li { "Filled orders appear under recent trades." }
      }
    }
  }
}
