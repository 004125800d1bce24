#![allow(non_snake_case)]
mod pages;
mod components;
mod utils;

use std::rc::Rc;
use dioxus::{logger::tracing::{info, warn}, prelude::*};
use web_sys::window;

use components::{device_alert::DeviceAlert, template::Template};
use pages::{debug::DeviceDebug, home::Home, info::{About, TradingGuide}, markets::Markets, trading::Trading};
use utils::{
  config::AppConfig,
  device::{DeviceSnapshot, Environment, DESKTOP_BREAKPOINT},
  footer_policy::FooterRules,
  storage::{browser_store, KeyValueStore},
  viewport::{read_environment, DeviceNotifier, ViewportWatcher},
  visit_gate::VisitGate,
};

pub type AlertGate = VisitGate<Rc<dyn KeyValueStore>>;

#[derive(Clone, Copy)]
pub struct DeviceContext {
  pub snapshot: Signal<DeviceSnapshot>,
}

#[derive(Routable, PartialEq, Clone)]
enum Route {
  #[layout(Template)]
  #[route("/")]
  Home {},
  #[route("/markets")]
  Markets {},
  #[route("/trading/:pair")]
  Trading { pair: String },
  #[route("/trading-guide")]
  TradingGuide {},
  #[route("/about")]
  About {},
  #[route("/debug/device")]
  DeviceDebug {},
  #[end_layout]
  #[route("/:..route")]
  PageNotFound { route: Vec<String> }
}

fn main() {
  dioxus::launch(App);
}

fn initial_environment() -> Environment {
  let fallback = Environment { viewport_width: DESKTOP_BREAKPOINT, ..Environment::default() };
  let Some(window) = window() else {
    return fallback;
  };
  match read_environment(&window) {
    Ok(env) => env,
    Err(e) => {
      warn!("could not read environment, assuming desktop: {}", e);
      fallback
    }
  }
}

fn App() -> Element {
  let config = use_context_provider(AppConfig::from_env);
  use_context_provider(FooterRules::default);
  use_context_provider(|| -> AlertGate { VisitGate::with_window(browser_store(), config.reprompt_window_ms) });

  let notifier = use_hook(|| Rc::new(DeviceNotifier::new(&initial_environment())));
  use_hook(|| match ViewportWatcher::attach(notifier.clone()) {
    Ok(watcher) => Some(Rc::new(watcher)),
    Err(e) => {
      warn!("viewport changes will not be tracked: {}", e);
      None
    }
  });

  let snapshot = use_signal(|| notifier.current());
  use_context_provider(|| DeviceContext { snapshot });

  use_hook(|| {
    let mut rx = notifier.subscribe();
    let mut snapshot = snapshot;
    info!("device classified as {}", snapshot.peek().category);
    spawn(async move {
      while rx.changed().await.is_ok() {
        let next = rx.borrow_and_update().clone();
        snapshot.set(next);
      }
    });
  });

  rsx! {
    Router::<Route> {}
    DeviceAlert {}
  }
}

#[component]
fn PageNotFound(route: Vec<String>) -> Element {
  rsx! {
    h1 { "Page not found" }
    p { "We are terribly sorry, but the page you requested doesn't exist." }
    pre { color: "red", "log:\nattemped to navigate to: {route:?}" }
  }
}
