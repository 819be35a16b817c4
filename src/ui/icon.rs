use leptos::prelude::*;

/// Class applied when no other is given; defined in style/main.css
pub const DEFAULT_ICON_CLASS: &str = "icon-text";

#[component]
pub fn Icon(
    /// Icon file name under /icons, without the .svg extension
    name: &'static str,
    /// CSS classes
    #[prop(default = DEFAULT_ICON_CLASS)]
    class: &'static str,
) -> impl IntoView {
    let icon_path = format!("/icons/{}.svg", name);

    view! {
        <img
            src=icon_path
            class=class
            alt=""
            aria-hidden="true"
            draggable=false
        />
    }
}

/// Icons shipped in public/icons
pub mod icons {
    pub const ALERT_CIRCLE: &str = "alert-circle";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_class_is_styled() {
        let css = include_str!("../../style/main.css");
        assert!(css.contains(&format!(".{}", DEFAULT_ICON_CLASS)));
    }
}
