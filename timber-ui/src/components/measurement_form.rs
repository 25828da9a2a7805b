use gpui::{
    App, AppContext, Context, Div, Entity, IntoElement, ParentElement, Render, SharedString,
    Styled, Window, div,
};
use gpui_component::{
    Theme, h_flex,
    input::{Input, InputState},
    v_flex,
};
use timber_core::Dimension;

/// The four measurement fields.
pub struct MeasurementForm {
    /// One input per [`Dimension`], in [`Dimension::ALL`] order.
    inputs: [Entity<InputState>; 4],
}

impl MeasurementForm {
    pub fn new(
        window: &mut Window,
        cx: &mut Context<Self>,
    ) -> Self {
        let inputs = Dimension::ALL.map(|dimension| {
            cx.new(|input_cx| {
                InputState::new(window, input_cx).placeholder(dimension.placeholder())
            })
        });

        Self { inputs }
    }

    /// Raw text of every field, in [`Dimension::ALL`] order.
    pub fn values(
        &self,
        cx: &App,
    ) -> [String; 4] {
        self.inputs
            .each_ref()
            .map(|input| input.read(cx).value().to_string())
    }

    /// Empties all four fields.
    pub fn clear(
        &mut self,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        for input in &self.inputs {
            input.update(cx, |state, cx| state.set_value("", window, cx));
        }
    }
}

impl Render for MeasurementForm {
    fn render(
        &mut self,
        _window: &mut Window,
        cx: &mut Context<Self>,
    ) -> impl IntoElement {
        let muted = Theme::global(cx).colors.muted_foreground;

        v_flex()
            .gap_3()
            .child(
                v_flex()
                    .child(div().text_lg().child("New Calculation"))
                    .child(
                        div()
                            .text_sm()
                            .text_color(muted)
                            .child("Formula: (L × W × T × Qty) / 144"),
                    ),
            )
            .child(
                h_flex().gap_3().w_full().children(
                    Dimension::ALL
                        .iter()
                        .zip(&self.inputs)
                        .map(|(dimension, input)| make_labeled_field(dimension.label(), input)),
                ),
            )
    }
}

/// A caption above a text input, sharing the row width with its siblings.
fn make_labeled_field(
    label: impl Into<SharedString>,
    state: &Entity<InputState>,
) -> Div {
    v_flex()
        .flex_1()
        .gap_1()
        .child(div().text_xs().child(label.into()))
        .child(Input::new(state))
}
