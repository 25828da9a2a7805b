//! Amber accent colors layered over the gpui-component default theme.

use gpui::{App, Hsla, hsla};
use gpui_component::Theme;

/// Amber used for the primary action and the running total.
pub fn amber() -> Hsla {
    hsla(32.0 / 360.0, 0.95, 0.44, 1.0)
}

fn hover_variant(base: Hsla) -> Hsla {
    let shift = if base.l > 0.5 { -0.05 } else { 0.05 };
    Hsla {
        l: (base.l + shift).clamp(0.0, 1.0),
        ..base
    }
}

fn active_variant(base: Hsla) -> Hsla {
    let shift = if base.l > 0.5 { -0.10 } else { 0.10 };
    Hsla {
        l: (base.l + shift).clamp(0.0, 1.0),
        ..base
    }
}

/// Replaces the primary palette with amber. Call after
/// `gpui_component::init`.
pub fn apply_timber_theme(cx: &mut App) {
    let colors = &mut Theme::global_mut(cx).colors;
    let accent = amber();

    colors.primary = accent;
    colors.primary_hover = hover_variant(accent);
    colors.primary_active = active_variant(accent);
    colors.ring = accent;
    colors.caret = accent;
}
