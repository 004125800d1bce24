#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FooterMode {
  Hidden,
  Simplified,
  Full,
}

/// Force-show beats hide, hide beats simplified, anything unmatched is full.
/// Matching is a plain case-sensitive `starts_with`.
pub fn resolve<S: AsRef<str>>(path: &str, hide_list: &[S], simplified_list: &[S], force_show_list: &[S]) -> FooterMode {
  let matches = |list: &[S]| list.iter().any(|prefix| path.starts_with(prefix.as_ref()));

  if matches(force_show_list) {
    FooterMode::Full
  } else if matches(hide_list) {
    FooterMode::Hidden
  } else if matches(simplified_list) {
    FooterMode::Simplified
  } else {
    FooterMode::Full
  }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FooterRules {
  pub hide: Vec<String>,
  pub simplified: Vec<String>,
  pub force_show: Vec<String>,
}

impl FooterRules {
  pub fn resolve(&self, path: &str) -> FooterMode {
    resolve(path, &self.hide, &self.simplified, &self.force_show)
  }
}

impl Default for FooterRules {
  // the trading screen needs the full viewport; the guide lives under
  // the /trading prefix but is a plain content page
  fn default() -> Self {
    let owned = |paths: &[&str]| paths.iter().map(|p| p.to_string()).collect::<Vec<_>>();
    Self {
      hide: owned(&["/trading"]),
      simplified: owned(&["/markets", "/debug"]),
      force_show: owned(&["/trading-guide"]),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  const NONE: [&str; 0] = [];

  #[test]
  fn hide_prefix_hides() {
    assert_eq!(resolve("/trading/BTC", &["/trading"], &NONE, &NONE), FooterMode::Hidden);
  }

  #[test]
  fn force_show_overrides_hide() {
    assert_eq!(resolve("/about", &["/about"], &NONE, &["/about"]), FooterMode::Full);
    assert_eq!(resolve("/about/team", &["/about"], &["/about"], &["/about"]), FooterMode::Full);
  }

  #[test]
  fn hide_beats_simplified() {
    assert_eq!(resolve("/markets/spot", &["/markets"], &["/markets"], &NONE), FooterMode::Hidden);
  }

  #[test]
  fn simplified_and_default() {
    assert_eq!(resolve("/markets", &["/trading"], &["/markets"], &NONE), FooterMode::Simplified);
    assert_eq!(resolve("/", &["/trading"], &["/markets"], &NONE), FooterMode::Full);
  }

  #[test]
  fn matching_is_case_sensitive_prefix() {
    assert_eq!(resolve("/Trading/BTC", &["/trading"], &NONE, &NONE), FooterMode::Full);
    assert_eq!(resolve("/x/trading", &["/trading"], &NONE, &NONE), FooterMode::Full);
    // plain prefix, not path segments
    assert_eq!(resolve("/tradingview", &["/trading"], &NONE, &NONE), FooterMode::Hidden);
  }

  #[test]
  fn empty_lists_are_full() {
    assert_eq!(resolve("/anything", &NONE, &NONE, &NONE), FooterMode::Full);
  }

  #[test]
  fn default_rules_for_routes() {
    let rules = FooterRules::default();
    assert_eq!(rules.resolve("/"), FooterMode::Full);
    assert_eq!(rules.resolve("/trading/BTC-USDT"), FooterMode::Hidden);
    assert_eq!(rules.resolve("/markets"), FooterMode::Simplified);
    assert_eq!(rules.resolve("/debug/device"), FooterMode::Simplified);
    assert_eq!(rules.resolve("/trading-guide"), FooterMode::Full);
    assert_eq!(rules.resolve("/about"), FooterMode::Full);
  }
}
