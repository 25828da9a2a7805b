use std::sync::Arc;

use anyhow::Result;
use gpui::{
    AnyView, App, AppContext, Bounds, ClickEvent, Context, Entity, InteractiveElement,
    IntoElement, KeyBinding, Menu, MenuItem, ParentElement, PromptLevel, Render,
    StatefulInteractiveElement, Styled, Subscription, TitlebarOptions, Window, WindowBounds,
    WindowOptions, div,
};
use gpui_component::{Disableable, Root, Theme, button::ButtonVariants, h_flex, v_flex};
use timber_core::{
    Advisor, Dimension, RecordId,
    advisory::OFFLINE_ADVICE_FALLBACK,
    format::format_total,
};
use tokio::runtime::Handle;
use tracing::{debug, error, info, warn};

use crate::{
    Quit,
    components::{
        MeasurementForm, WindowPreferences, advice_panel, empty_history, history_row, make_button,
        make_small_button,
    },
    logging::log_task_error,
    quit,
    state::AppState,
    themes::{amber, apply_timber_theme},
};

/// Shown under the form when a submission is refused.
pub const INVALID_INPUT_MESSAGE: &str = "Please enter valid numbers for all four inputs.";

pub fn setup_app(app_cx: &mut App) {
    // This must be called before using any GPUI Component features.
    gpui_component::init(app_cx);
    apply_timber_theme(app_cx);

    app_cx.activate(true);

    #[cfg(target_os = "macos")]
    app_cx.bind_keys([KeyBinding::new("cmd-q", Quit, None)]);

    #[cfg(not(target_os = "macos"))]
    app_cx.bind_keys([
        KeyBinding::new("ctrl-q", Quit, None),
        KeyBinding::new("alt-F4", Quit, None),
    ]);

    app_cx.on_action(quit);

    app_cx.set_menus(vec![Menu {
        name: "TimberTrack".into(),
        items: vec![MenuItem::action("Quit", Quit)],
    }]);
}

/// Opens the calculator window, centered on the primary display.
pub fn open_main_window(
    cx: &mut App,
    advisor: Arc<Advisor>,
    runtime: Handle,
    preferences: WindowPreferences,
) -> Result<()> {
    let options = WindowOptions {
        window_bounds: Some(WindowBounds::Windowed(Bounds::centered(
            None,
            preferences.size,
            cx,
        ))),
        titlebar: Some(TitlebarOptions {
            title: Some("TimberTrack".into()),
            ..Default::default()
        }),
        ..Default::default()
    };

    cx.open_window(options, |window, cx| {
        let view = cx.new(|view_cx| TimberView::new(advisor, runtime, window, view_cx));
        cx.new(|root_cx| Root::new(AnyView::from(view), window, root_cx))
    })?;

    info!("main window opened");
    Ok(())
}

/// The calculator window: form, running total, history and advice.
///
/// All decisions live in [`AppState`]; this type forwards events and
/// re-renders.
pub struct TimberView {
    state: AppState,
    form: Entity<MeasurementForm>,
    advisor: Arc<Advisor>,
    /// Runs advisory requests; the HTTP client needs a tokio reactor.
    runtime: Handle,
    input_error: Option<String>,
    _window_close_subscription: Subscription,
}

impl TimberView {
    pub fn new(
        advisor: Arc<Advisor>,
        runtime: Handle,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) -> Self {
        let form = cx.new(|form_cx| MeasurementForm::new(window, form_cx));
        let subscription = cx.on_window_closed(|cx: &mut App| {
            info!("Window closed callback");
            quit(&Quit, cx);
        });

        Self {
            state: AppState::new(),
            form,
            advisor,
            runtime,
            input_error: None,
            _window_close_subscription: subscription,
        }
    }

    fn submit(
        &mut self,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        let values = self.form.read(cx).values(cx);
        for (dimension, value) in Dimension::ALL.into_iter().zip(values) {
            self.state.set_input(dimension, value);
        }

        match self.state.submit() {
            Ok(_) => {
                self.input_error = None;
                self.form.update(cx, |form, form_cx| form.clear(window, form_cx));
            }
            Err(error) => {
                warn!(%error, "submission rejected");
                self.input_error = Some(format!("{INVALID_INPUT_MESSAGE} ({error})"));
            }
        }
        cx.notify();
    }

    fn remove(
        &mut self,
        id: RecordId,
        cx: &mut Context<Self>,
    ) {
        if self.state.remove(id) {
            cx.notify();
        }
    }

    fn request_clear(
        &mut self,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        if !self.state.request_clear() {
            return;
        }
        cx.notify();

        let answer = window.prompt(
            PromptLevel::Warning,
            "Clear all calculations?",
            Some("This cannot be undone."),
            &["Clear All", "Cancel"],
            cx,
        );

        cx.spawn(async move |this, cx| {
            let confirmed = matches!(answer.await, Ok(0));
            let result = this.update(cx, |view, cx| {
                if confirmed {
                    view.state.confirm_clear();
                } else {
                    view.state.cancel_clear();
                }
                cx.notify();
            });
            log_task_error("clear confirmation", result);
        })
        .detach();
    }

    fn request_advice(
        &mut self,
        cx: &mut Context<Self>,
    ) {
        let total = match self.state.begin_advisory() {
            Ok(total) => total,
            Err(reason) => {
                debug!(%reason, "advice request ignored");
                return;
            }
        };
        cx.notify();

        let advisor = self.advisor.clone();
        let job = self
            .runtime
            .spawn(async move { advisor.request_advice(total).await });

        cx.spawn(async move |this, cx| {
            let advice = job.await.unwrap_or_else(|error| {
                error!(%error, "advice task did not complete");
                OFFLINE_ADVICE_FALLBACK.to_string()
            });
            let result = this.update(cx, |view, cx| {
                view.state.finish_advisory(advice);
                cx.notify();
            });
            log_task_error("advice request", result);
        })
        .detach();
    }

    fn dismiss_advice(
        &mut self,
        cx: &mut Context<Self>,
    ) {
        self.state.dismiss_advice();
        cx.notify();
    }
}

impl Render for TimberView {
    fn render(
        &mut self,
        _window: &mut Window,
        cx: &mut Context<Self>,
    ) -> impl IntoElement {
        let colors = Theme::global(cx).colors.clone();
        let loading = self.state.is_loading_advice();

        let header = h_flex()
            .w_full()
            .justify_between()
            .items_center()
            .child(div().text_xl().child("TimberTrack"))
            .child(
                h_flex()
                    .gap_2()
                    .items_center()
                    .child(
                        div()
                            .text_sm()
                            .text_color(colors.muted_foreground)
                            .child("Total Units:"),
                    )
                    .child(
                        div()
                            .text_xl()
                            .text_color(amber())
                            .child(format_total(self.state.total())),
                    ),
            );

        let form = v_flex()
            .gap_4()
            .p_4()
            .rounded_lg()
            .border_1()
            .border_color(colors.border)
            .child(self.form.clone())
            .child(make_button(
                "add-calculation",
                "Add to Total",
                cx.listener(|this: &mut Self, _: &ClickEvent, window, cx| this.submit(window, cx)),
            ))
            .children(self.input_error.clone().map(|message| {
                div().text_sm().text_color(colors.danger).child(message)
            }));

        let toolbar = h_flex()
            .w_full()
            .justify_between()
            .items_center()
            .child(
                div()
                    .text_sm()
                    .text_color(colors.muted_foreground)
                    .child("CALCULATION HISTORY"),
            )
            .child(
                h_flex()
                    .gap_2()
                    .child(
                        make_small_button(
                            "request-advice",
                            if loading { "Thinking..." } else { "AI Insights" },
                            cx.listener(|this: &mut Self, _: &ClickEvent, _, cx| {
                                this.request_advice(cx)
                            }),
                        )
                        .loading(loading)
                        .disabled(!self.state.can_request_advice()),
                    )
                    .child(
                        make_small_button(
                            "clear-history",
                            "Clear All",
                            cx.listener(|this: &mut Self, _: &ClickEvent, window, cx| {
                                this.request_clear(window, cx)
                            }),
                        )
                        .danger()
                        .disabled(!self.state.can_clear() || self.state.is_clear_pending()),
                    ),
            );

        let on_dismiss =
            cx.listener(|this: &mut Self, _: &ClickEvent, _, cx| this.dismiss_advice(cx));
        let advice = self
            .state
            .advice()
            .map(|text| advice_panel(text, cx, on_dismiss));

        let records = self.state.records();
        let mut history = v_flex()
            .id("history-list")
            .flex_1()
            .gap_2()
            .overflow_y_scroll();
        if records.is_empty() {
            history = history.child(empty_history(cx));
        } else {
            for (index, record) in records.iter().enumerate() {
                let id = record.id();
                let on_remove =
                    cx.listener(move |this: &mut Self, _: &ClickEvent, _, cx| this.remove(id, cx));
                history = history.child(history_row(records.len() - index, record, cx, on_remove));
            }
        }

        v_flex()
            .size_full()
            .p_5()
            .gap_4()
            .bg(colors.background)
            .child(header)
            .child(form)
            .child(toolbar)
            .children(advice)
            .child(history)
    }
}
