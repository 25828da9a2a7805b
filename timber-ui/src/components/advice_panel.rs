use gpui::{App, ClickEvent, Div, ParentElement, Styled, Window, div};
use gpui_component::{
    Theme,
    button::{Button, ButtonVariants},
    h_flex, v_flex,
};

/// The "Wood Expert Insights" panel.
///
/// Lines of `advice` are rendered one per row so paragraph breaks in the
/// generated text survive.
pub fn advice_panel(
    advice: &str,
    cx: &App,
    on_dismiss: impl Fn(&ClickEvent, &mut Window, &mut App) + 'static,
) -> Div {
    let colors = &Theme::global(cx).colors;

    h_flex()
        .w_full()
        .p_4()
        .gap_4()
        .items_start()
        .rounded_lg()
        .bg(colors.secondary)
        .border_1()
        .border_color(colors.primary)
        .child(
            v_flex()
                .flex_1()
                .gap_1()
                .child(div().text_sm().child("Wood Expert Insights"))
                .children(advice.lines().map(|line| {
                    div()
                        .text_sm()
                        .min_h_4()
                        .child(line.to_string())
                })),
        )
        .child(
            Button::new("dismiss-advice")
                .ghost()
                .label("Close")
                .on_click(on_dismiss),
        )
}
