//! Navigation Strip button styling.
//!
//! Labels and aria text come from `SelectedView` itself.

/// CSS class of a navigation button.
pub fn tab_class(active: bool) -> &'static str {
    if active {
        "tab active"
    } else {
        "tab"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_class() {
        assert_eq!(tab_class(true), "tab active");
        assert_eq!(tab_class(false), "tab");
    }
}
