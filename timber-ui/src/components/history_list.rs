use gpui::{App, ClickEvent, Div, IntoElement, ParentElement, SharedString, Styled, Window, div, px};
use gpui_component::{
    Theme,
    button::{Button, ButtonVariants},
    h_flex, v_flex,
};
use timber_core::{
    CalculationRecord,
    format::{format_operands, format_time, format_units},
};

/// One history entry: label and time, the operands, the result, and a
/// remove button wired to `on_remove`.
///
/// `number` counts up from the oldest record.
pub fn history_row(
    number: usize,
    record: &CalculationRecord,
    cx: &App,
    on_remove: impl Fn(&ClickEvent, &mut Window, &mut App) + 'static,
) -> Div {
    let colors = &Theme::global(cx).colors;

    h_flex()
        .w_full()
        .p_3()
        .gap_4()
        .items_center()
        .rounded_md()
        .border_1()
        .border_color(colors.border)
        .child(
            v_flex()
                .flex_1()
                .gap_1()
                .child(
                    h_flex()
                        .gap_2()
                        .items_center()
                        .child(div().text_sm().child(format!("Measurement #{number}")))
                        .child(
                            div()
                                .text_xs()
                                .px_1()
                                .rounded_sm()
                                .bg(colors.muted)
                                .text_color(colors.muted_foreground)
                                .child(format_time(record.created_at())),
                        ),
                )
                .child(
                    div()
                        .text_xs()
                        .text_color(colors.muted_foreground)
                        .child(format!("{} / 144", format_operands(record))),
                ),
        )
        .child(
            v_flex()
                .items_end()
                .child(div().text_lg().child(format_units(record.result())))
                .child(
                    div()
                        .text_xs()
                        .text_color(colors.muted_foreground)
                        .child("UNITS"),
                ),
        )
        .child(
            Button::new(SharedString::from(format!("remove-{}", record.id())))
                .ghost()
                .label("Remove")
                .on_click(on_remove),
        )
}

/// Placeholder shown instead of the list when there is no history.
pub fn empty_history(cx: &App) -> impl IntoElement {
    let colors = &Theme::global(cx).colors;

    div()
        .w_full()
        .py(px(48.))
        .flex()
        .justify_center()
        .rounded_md()
        .border_1()
        .border_color(colors.border)
        .text_color(colors.muted_foreground)
        .child("No calculations yet. Start adding items above.")
}
