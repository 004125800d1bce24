use std::rc::Rc;
use dioxus::logger::tracing::{debug, warn};
use tokio::sync::watch;
use web_sys::{
  wasm_bindgen::{closure::Closure, JsCast, JsValue},
  window, Window,
};

use super::{
  device::{DeviceSnapshot, Environment},
  error::AppError,
};

const VIEWPORT_EVENTS: [&str; 2] = ["resize", "orientationchange"];

/// Fans out device snapshots. Publishing an unchanged snapshot wakes nobody.
pub struct DeviceNotifier {
  tx: watch::Sender<DeviceSnapshot>,
}

impl DeviceNotifier {
  pub fn new(env: &Environment) -> Self {
    let (tx, _rx) = watch::channel(env.classify());
    Self { tx }
  }

  pub fn publish(&self, env: &Environment) -> bool {
    let next = env.classify();
    self.tx.send_if_modified(|current| {
      if *current == next {
        return false;
      }
      *current = next;
      true
    })
  }

  pub fn subscribe(&self) -> watch::Receiver<DeviceSnapshot> {
    self.tx.subscribe()
  }

  pub fn current(&self) -> DeviceSnapshot {
    self.tx.borrow().clone()
  }
}

pub fn read_environment(window: &Window) -> Result<Environment, AppError> {
  let viewport_width = js_dimension(window.inner_width())?;
  let viewport_height = js_dimension(window.inner_height())?;
  let navigator = window.navigator();
  let user_agent = navigator.user_agent().map_err(|e| AppError::WasmError(format!("{:?}", e)))?;
  let touch_support = navigator.max_touch_points() > 0;

  Ok(Environment { viewport_width, viewport_height, user_agent, touch_support })
}

fn js_dimension(value: Result<JsValue, JsValue>) -> Result<u32, AppError> {
  let value = value.map_err(|e| AppError::WasmError(format!("{:?}", e)))?;
  value.as_f64()
    .map(|px| px.max(0.0) as u32)
    .ok_or_else(|| AppError::WasmError(format!("viewport dimension is not a number: {:?}", value)))
}

/// Re-reads the environment on resize/orientation changes and publishes it.
/// Listeners are removed when the watcher is dropped.
pub struct ViewportWatcher {
  window: Window,
  listener: Closure<dyn FnMut()>,
}

impl ViewportWatcher {
  pub fn attach(notifier: Rc<DeviceNotifier>) -> Result<Self, AppError> {
    let window = window().ok_or_else(|| AppError::WasmError("global window missing".to_string()))?;

    let target = window.clone();
    let listener = Closure::<dyn FnMut()>::new(move || match read_environment(&target) {
      Ok(env) => {
        if notifier.publish(&env) {
          debug!("viewport changed: {}x{}", env.viewport_width, env.viewport_height);
        }
      }
      Err(e) => warn!("viewport read failed: {}", e),
    });

    for event in VIEWPORT_EVENTS {
      window.add_event_listener_with_callback(event, listener.as_ref().unchecked_ref())
        .map_err(|e| AppError::WasmError(format!("{:?}", e)))?;
    }

    Ok(Self { window, listener })
  }
}

impl Drop for ViewportWatcher {
  fn drop(&mut self) {
    for event in VIEWPORT_EVENTS {
      let _ = self.window.remove_event_listener_with_callback(event, self.listener.as_ref().unchecked_ref());
    }
  }
}
