//! Inline SVG icons (Lucide, 24px stroke set).

use leptos::prelude::*;

/// Renders a stroked icon from SVG path data.
#[component]
pub fn Icon(
    /// SVG path data (the `d` attribute value)
    path: &'static str,
    /// Icon size in pixels
    #[prop(default = "24")]
    size: &'static str,
    /// Fill; stars are filled, everything else is outline only
    #[prop(default = "none")]
    fill: &'static str,
    /// Additional CSS class names
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            width=size
            height=size
            viewBox="0 0 24 24"
            fill=fill
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            class=class
            aria-hidden="true"
        >
            <path d=path></path>
        </svg>
    }
}

pub const ICON_CHEVRON_LEFT: &str = "m15 18-6-6 6-6";

pub const ICON_CHEVRON_RIGHT: &str = "m9 18 6-6-6-6";

pub const ICON_MENU: &str = "M4 6h16M4 12h16M4 18h16";

pub const ICON_X: &str = "M18 6 6 18M6 6l12 12";

pub const ICON_STAR: &str = "M12 2l3.09 6.26L22 9.27l-5 4.87 1.18 6.88L12 17.77l-6.18 3.25L7 14.14 2 9.27l6.91-1.01L12 2z";

pub const ICON_MAP_PIN: &str = "M20 10c0 6-8 12-8 12s-8-6-8-12a8 8 0 0 1 16 0ZM15 10a3 3 0 1 1-6 0 3 3 0 0 1 6 0Z";

pub const ICON_PHONE: &str = "M22 16.92v3a2 2 0 0 1-2.18 2 19.79 19.79 0 0 1-8.63-3.07 19.5 19.5 0 0 1-6-6 19.79 19.79 0 0 1-3.07-8.67A2 2 0 0 1 4.11 2h3a2 2 0 0 1 2 1.72 12.84 12.84 0 0 0 .7 2.81 2 2 0 0 1-.45 2.11L8.09 9.91a16 16 0 0 0 6 6l1.27-1.27a2 2 0 0 1 2.11-.45 12.84 12.84 0 0 0 2.81.7A2 2 0 0 1 22 16.92z";

pub const ICON_MAIL: &str = "M4 4h16a2 2 0 0 1 2 2v12a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2V6a2 2 0 0 1 2-2Zm18 3-8.97 5.7a1.94 1.94 0 0 1-2.06 0L2 7";

pub const ICON_MESSAGE_SQUARE: &str = "M21 15a2 2 0 0 1-2 2H7l-4 4V5a2 2 0 0 1 2-2h14a2 2 0 0 1 2 2z";
