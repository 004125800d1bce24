use dioxus::prelude::*;
use crate::{
  utils::footer_policy::{FooterMode, FooterRules},
  DeviceContext, Route,
};

#[component]
pub fn Template() -> Element {
  static CSS: Asset = asset!("/assets/template.css");

  rsx! {
    document::Stylesheet {href: CSS},
    Header { }
    Outlet::<Route> {}
    Footer { }
  }
}

#[component]
fn Header() -> Element {
  let snapshot = use_context::<DeviceContext>().snapshot;
  let mut menu_open = use_signal(|| false);
  let compact = snapshot.read().is_handheld();

  rsx!{
    nav {
      div {
        class: "nav-container",
        Link {
          class: "logo",
          active_class: "nav-active",
          to: Route::Home { },
          "Exchange",
        }
        if compact {
          button {
            class: "menu-button",
            onclick: move |_| menu_open.toggle(),
            span {
              class: "menu-icon",
              svg {
                class: "menu-icon-svg",
                xmlns: "http://www.w3.org/2000/svg",
                view_box: "0 0 24 24",
                path { d: "M6 8.5H18", stroke: "currentcolor", stroke_linecap: "round" }
                path { d: "M6 12H18", stroke: "currentcolor", stroke_linecap: "round" }
                path { d: "M6 15.5H18", stroke: "currentcolor", stroke_linecap: "round" }
              }
            }
          }
        }
        if !compact || menu_open() {
          div {
            class: if compact { "nav-links nav-links-stacked" } else { "nav-links" },
            Link {
              active_class: "nav-active",
              to: Route::Markets { },
              "Markets"
            },
            Link {
              active_class: "nav-active",
              to: Route::Trading { pair: "BTC-USDT".to_string() },
              "Trade"
            },
            Link {
              active_class: "nav-active",
              to: Route::TradingGuide { },
              "Guide"
            },
            Link {
              active_class: "nav-active",
              to: Route::About { },
              "About"
            },
          }
        }
      }
    }
  }
}

#[component]
fn Footer() -> Element {
  let route = use_route::<Route>();
  let rules = use_context::<FooterRules>();

  match rules.resolve(&route.to_string()) {
    FooterMode::Hidden => rsx! {},
    FooterMode::Simplified => rsx! {
      footer {
        class: "footer-simplified",
        div {
          class: "copyright",
          p { "© 2025 Exchange" }
        }
      }
    },
    FooterMode::Full => rsx! {
      footer {
        div {
          class: "footer-container",
          div {
            class: "copyright",
            p { "© 2025 Exchange" }
            p { "Digital asset trading involves risk." }
          },
          div {
            class: "footer-links",
            Link { class: "footer-link", to: Route::Markets { }, "Markets" }
            Link { class: "footer-link", to: Route::TradingGuide { }, "Trading guide" }
            Link { class: "footer-link", to: Route::About { }, "About" }
            Link { class: "footer-link", to: Route::DeviceDebug { }, "Device diagnostics" }
          }
        }
      }
    },
  }
}
