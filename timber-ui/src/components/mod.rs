pub mod advice_panel;
pub mod history_list;
pub mod measurement_form;

use gpui::{App, ClickEvent, Pixels, SharedString, Size, Styled, Window, px};
use gpui_component::Sizable;
use gpui_component::button::{Button, ButtonVariants};

pub use advice_panel::advice_panel;
pub use history_list::{empty_history, history_row};
pub use measurement_form::MeasurementForm;

#[derive(Debug, Clone, Copy)]
pub struct WindowPreferences {
    pub size: Size<Pixels>,
}

impl Default for WindowPreferences {
    fn default() -> Self {
        Self {
            size: Size {
                width: px(760.0),
                height: px(820.0),
            },
        }
    }
}

/// Creates a full-width primary button with a custom click handler.
pub fn make_button(
    id: impl Into<SharedString>,
    label: impl Into<SharedString>,
    on_click: impl Fn(&ClickEvent, &mut Window, &mut App) + 'static,
) -> Button {
    Button::new(id.into())
        .primary()
        .large()
        .w_full()
        .label(label.into())
        .on_click(on_click)
}

/// Creates a compact toolbar button.
pub fn make_small_button(
    id: impl Into<SharedString>,
    label: impl Into<SharedString>,
    on_click: impl Fn(&ClickEvent, &mut Window, &mut App) + 'static,
) -> Button {
    Button::new(id.into())
        .small()
        .label(label.into())
        .on_click(on_click)
}
