//! Page stylesheet.
//!
//! Black background, light-green headings and a fixed navigation strip.
//! Injected as a `<style>` element so the page needs no separate CSS file.

use leptos::prelude::*;

pub const STYLESHEET: &str = r#"
:root { --page-pad: 1in; --gap: 1.5rem; --nav-height: 60px; }
@media (max-width: 900px) { :root { --page-pad: 20px; --gap: 1rem; --nav-height: 70px; } }

.page { min-height: 100vh; background: #000; color: #fff; }
.main {
  padding: var(--page-pad);
  padding-top: calc(var(--nav-height) + var(--page-pad));
  margin: 0;
  font-family: ui-sans-serif, system-ui, -apple-system, Segoe UI, Roboto, Helvetica, Arial, Noto Sans, sans-serif;
}
.main--narrow { max-width: 1400px; margin-inline: auto; }

.two-col { display: grid; grid-template-columns: 1fr 1fr; gap: var(--gap); align-items: start; }
@media (max-width: 900px) { .two-col { grid-template-columns: 1fr; } }

.hero { display: grid; grid-template-columns: 1fr 1fr; gap: var(--gap); align-items: center; }
@media (max-width: 900px) { .hero { grid-template-columns: 1fr; } }
.hero__text { text-align: left; }
.hero__title { font-size: clamp(32px, 4.5vw, 60px); line-height: 1.25; font-weight: 700; letter-spacing: -0.01em; }
.hero__subtitle { font-size: clamp(20px, 2.5vw, 36px); font-weight: 400; margin-top: 1rem; line-height: 1.35; }

.page-body--home { margin-top: 2rem; max-width: 1200px; margin-inline: auto; }
.page-body--home > .section:first-child { margin-top: 0; }
.section { margin-top: 1.25rem; }
.page-title { margin-top: 1.25rem; }

.img-round { border-radius: 12px; display: block; width: 100%; height: auto; }
.arch-img { max-height: 70vh; object-fit: contain; }

.heading { line-height: 1.2; margin: 0; }
.h1 { font-size: clamp(28px, 4vw, 48px); }
.h2 { font-size: clamp(20px, 2.6vw, 34px); color: #90EE90; margin: 0; }
.h3 { font-size: clamp(18px, 2.2vw, 28px); color: #90EE90; margin: 0; }
.para, .list { font-size: clamp(16px, 1.6vw, 20px); line-height: 1.7; }
.para { margin-top: .5rem; }
.list { padding-left: 1.2rem; margin-top: .5rem; }

.person__role { margin-top: .25rem; margin-bottom: .25rem; }
.person__contact { font-size: clamp(14px, 1.4vw, 18px); }
.link { color: #90EE90; text-decoration: none; }

.nav-strip {
  position: fixed; top: 0; left: 0; right: 0;
  height: var(--nav-height);
  background: #000;
  border-bottom: 1px solid #333;
  display: flex; align-items: center; justify-content: center;
  z-index: 1000;
  box-shadow: 0 2px 10px rgba(0,0,0,0.3);
}
.tabs { display: flex; gap: 10px; align-items: center; }
.tab {
  padding: 8px 16px;
  background: transparent;
  color: #fff;
  border: 1px solid #ffffff55;
  border-radius: 999px;
  cursor: pointer;
  font-size: 14px;
  transition: all 0.2s ease;
}
.tab:hover { border-color: #ffffff88; background: #ffffff11; }
.tab.active { border-color: #90EE90; color: #90EE90; background: #90EE9011; }
@media (max-width: 480px) {
  .nav-strip { justify-content: flex-start; padding: 0 12px; }
  .tabs { flex-wrap: wrap; gap: 8px; width: 100%; }
  .tab { padding: 6px 12px; font-size: 13px; }
}

.wave-container {
  margin-top: calc(-2rem - var(--nav-height));
  margin-left: calc(-1 * var(--page-pad));
  margin-right: calc(-1 * var(--page-pad));
  padding-top: var(--nav-height);
  overflow: hidden;
}
.wave { width: 100%; height: 80px; object-fit: cover; display: block; }
"#;

#[component]
pub fn GlobalStyles() -> impl IntoView {
    view! { <style>{STYLESHEET}</style> }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stylesheet_covers_layout_classes() {
        for class in [
            ".nav-strip", ".tab.active", ".main--narrow", ".two-col", ".hero",
            ".page-body--home", ".img-round", ".arch-img", ".wave-container", ".link",
        ] {
            assert!(STYLESHEET.contains(class), "missing {class}");
        }
    }

    #[test]
    fn test_active_tab_is_green() {
        let rule = STYLESHEET
            .lines()
            .find(|l| l.starts_with(".tab.active"))
            .unwrap();
        assert!(rule.contains("#90EE90"));
    }

    #[test]
    fn test_home_first_section_sits_flush_under_hero() {
        let rule = STYLESHEET
            .lines()
            .find(|l| l.starts_with(".page-body--home > .section:first-child"))
            .unwrap();
        assert!(rule.contains("margin-top: 0"));
    }
}
