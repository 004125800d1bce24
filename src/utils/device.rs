use std::{collections::BTreeSet, fmt};
use serde::Serialize;

/// Widths below this are laid out as phones.
pub const MOBILE_BREAKPOINT: u32 = 768;
/// Widths below this (and at least `MOBILE_BREAKPOINT`) are laid out as tablets.
pub const DESKTOP_BREAKPOINT: u32 = 1024;

const MOBILE_KEYWORDS: [&str; 9] = [
  "iphone", "ipod", "windows phone", "blackberry", "bb10", "iemobile", "opera mini", "webos", "mobile",
];
const TABLET_KEYWORDS: [&str; 6] = ["ipad", "tablet", "kindle", "silk", "playbook", "android"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum DeviceCategory {
  Mobile,
  Tablet,
  Desktop,
}

impl DeviceCategory {
  pub fn from_width(width: u32) -> Self {
    if width < MOBILE_BREAKPOINT {
      DeviceCategory::Mobile
    } else if width < DESKTOP_BREAKPOINT {
      DeviceCategory::Tablet
    } else {
      DeviceCategory::Desktop
    }
  }
}

impl fmt::Display for DeviceCategory {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      DeviceCategory::Mobile => write!(f, "mobile"),
      DeviceCategory::Tablet => write!(f, "tablet"),
      DeviceCategory::Desktop => write!(f, "desktop"),
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeviceSnapshot {
  pub category: DeviceCategory,
  pub viewport_width: u32,
  pub viewport_height: u32,
  pub is_touch: bool,
  /// UA keywords that took part in the decision.
  pub user_agent_hints: BTreeSet<String>,
}

impl DeviceSnapshot {
  pub fn is_mobile(&self) -> bool {
    self.category == DeviceCategory::Mobile
  }

  pub fn is_tablet(&self) -> bool {
    self.category == DeviceCategory::Tablet
  }

  pub fn is_handheld(&self) -> bool {
    self.is_mobile() || self.is_tablet()
  }
}

/// Raw host readings, captured fresh on every resize/orientation event.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Environment {
  pub viewport_width: u32,
  pub viewport_height: u32,
  pub user_agent: String,
  pub touch_support: bool,
}

impl Environment {
  pub fn classify(&self) -> DeviceSnapshot {
    classify(self.viewport_width, self.viewport_height, &self.user_agent, self.touch_support)
  }
}

/// Mobile if either the UA or the width says mobile, then the same for tablet,
/// desktop otherwise. A UA tablet keyword is ignored when the UA also contains "mobile".
pub fn classify(viewport_width: u32, viewport_height: u32, user_agent: &str, touch_support: bool) -> DeviceSnapshot {
  let ua = user_agent.to_lowercase();
  let mut user_agent_hints = BTreeSet::new();

  let mobile_hits = matching_keywords(&ua, &MOBILE_KEYWORDS);
  let ua_mobile = !mobile_hits.is_empty();
  user_agent_hints.extend(mobile_hits);

  let ua_tablet = if ua.contains("mobile") {
    false
  } else {
    let tablet_hits = matching_keywords(&ua, &TABLET_KEYWORDS);
    let hit = !tablet_hits.is_empty();
    user_agent_hints.extend(tablet_hits);
    hit
  };

  let by_width = DeviceCategory::from_width(viewport_width);
  let category = if ua_mobile || by_width == DeviceCategory::Mobile {
    DeviceCategory::Mobile
  } else if ua_tablet || by_width == DeviceCategory::Tablet {
    DeviceCategory::Tablet
  } else {
    DeviceCategory::Desktop
  };

  DeviceSnapshot { category, viewport_width, viewport_height, is_touch: touch_support, user_agent_hints }
}

fn matching_keywords(ua: &str, keywords: &[&str]) -> Vec<String> {
  keywords.iter()
    .filter(|kw| ua.contains(*kw))
    .map(|kw| kw.to_string())
    .collect()
}

#[cfg(test)]
mod tests {
  use super::*;
  use proptest::prelude::*;

  const IPHONE_UA: &str = "Mozilla/5.0 (iPhone; CPU iPhone OS 17_0 like Mac OS X) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.0 Mobile/15E148 Safari/604.1";
  const IPAD_UA: &str = "Mozilla/5.0 (iPad; CPU OS 17_0 like Mac OS X) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.0 Safari/604.1";
  const ANDROID_PHONE_UA: &str = "Mozilla/5.0 (Linux; Android 14; Pixel 8) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0 Mobile Safari/537.36";
  const ANDROID_TABLET_UA: &str = "Mozilla/5.0 (Linux; Android 14; SM-X710) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0 Safari/537.36";
  const DESKTOP_UA: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0 Safari/537.36";

  #[test]
  fn width_breakpoints() {
    assert_eq!(DeviceCategory::from_width(0), DeviceCategory::Mobile);
    assert_eq!(DeviceCategory::from_width(767), DeviceCategory::Mobile);
    assert_eq!(DeviceCategory::from_width(768), DeviceCategory::Tablet);
    assert_eq!(DeviceCategory::from_width(1023), DeviceCategory::Tablet);
    assert_eq!(DeviceCategory::from_width(1024), DeviceCategory::Desktop);
  }

  #[test]
  fn iphone_is_mobile_even_on_wide_viewport() {
    let snap = classify(1280, 800, IPHONE_UA, true);
    assert_eq!(snap.category, DeviceCategory::Mobile);
    assert!(snap.user_agent_hints.contains("iphone"));
    assert!(snap.user_agent_hints.contains("mobile"));
  }

  #[test]
  fn ipad_is_tablet_on_desktop_width() {
    let snap = classify(1366, 1024, IPAD_UA, true);
    assert_eq!(snap.category, DeviceCategory::Tablet);
    assert!(snap.is_handheld());
  }

  #[test]
  fn android_phone_is_not_mistaken_for_tablet() {
    let snap = classify(1100, 900, ANDROID_PHONE_UA, true);
    assert_eq!(snap.category, DeviceCategory::Mobile);
    assert!(!snap.user_agent_hints.contains("android"));
  }

  #[test]
  fn android_without_mobile_is_tablet() {
    let snap = classify(1280, 800, ANDROID_TABLET_UA, true);
    assert_eq!(snap.category, DeviceCategory::Tablet);
    assert!(snap.user_agent_hints.contains("android"));
  }

  #[test]
  fn desktop_ua_follows_width() {
    assert_eq!(classify(1440, 900, DESKTOP_UA, false).category, DeviceCategory::Desktop);
    assert_eq!(classify(900, 700, DESKTOP_UA, false).category, DeviceCategory::Tablet);
    assert_eq!(classify(500, 700, DESKTOP_UA, false).category, DeviceCategory::Mobile);
    assert!(classify(1440, 900, DESKTOP_UA, false).user_agent_hints.is_empty());
  }

  #[test]
  fn touch_is_recorded_but_not_decisive() {
    let snap = classify(1440, 900, DESKTOP_UA, true);
    assert!(snap.is_touch);
    assert_eq!(snap.category, DeviceCategory::Desktop);
  }

  #[test]
  fn ua_matching_is_case_insensitive() {
    let snap = classify(1440, 900, "SOMEBROWSER (IPAD)", false);
    assert_eq!(snap.category, DeviceCategory::Tablet);
  }

  #[test]
  fn environment_classify_matches_free_function() {
    let env = Environment { viewport_width: 400, viewport_height: 800, user_agent: IPHONE_UA.to_string(), touch_support: true };
    assert_eq!(env.classify(), classify(400, 800, IPHONE_UA, true));
  }

  proptest! {
    #[test]
    fn narrow_viewports_are_always_mobile(width in 0u32..MOBILE_BREAKPOINT, height in 0u32..4000, ua in ".{0,64}", touch in any::<bool>()) {
      prop_assert_eq!(classify(width, height, &ua, touch).category, DeviceCategory::Mobile);
    }

    #[test]
    fn mobile_ua_is_always_mobile(width in 0u32..8000, ua_prefix in "[a-z ]{0,16}") {
      let ua = format!("{}iphone", ua_prefix);
      prop_assert_eq!(classify(width, 600, &ua, true).category, DeviceCategory::Mobile);
    }
  }
}
