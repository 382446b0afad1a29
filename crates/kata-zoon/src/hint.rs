use std::rc::Rc;

use zoon::*;

use crate::button::{ButtonVariant, action_button};

/// Builds the hint body. Called again whenever the panel is rebuilt.
pub type ContentFactory = Rc<dyn Fn() -> RawElOrText>;

#[derive(Clone)]
pub struct HintAction {
    pub text: String,
    pub on_click: Rc<dyn Fn()>,
}

impl HintAction {
    pub fn new(text: impl Into<String>, on_click: impl Fn() + 'static) -> Self {
        Self {
            text: text.into(),
            on_click: Rc::new(on_click),
        }
    }
}

/// Collapsible hint box with a row of extra actions.
pub struct Hint {
    actions: Vec<HintAction>,
    content: Option<ContentFactory>,
    expanded: Mutable<bool>,
}

impl Hint {
    pub fn new() -> Self {
        Self {
            actions: Vec::new(),
            content: None,
            expanded: Mutable::new(false),
        }
    }

    pub fn action(mut self, action: HintAction) -> Self {
        self.actions.push(action);
        self
    }

    pub fn content(mut self, content: Option<ContentFactory>) -> Self {
        self.content = content;
        self
    }

    pub fn build(self) -> impl Element {
        let Self {
            actions,
            content,
            expanded,
        } = self;
        Column::new()
            .s(Width::fill())
            .s(Gap::new().y(10))
            .s(Padding::all(12))
            .s(RoundedCorners::all(16))
            .s(Background::new().color(color!("rgba(21, 27, 44, 0.92)")))
            .item_signal(expanded.signal().map(move |is_expanded| {
                let content = content.as_ref().filter(|_| is_expanded)?;
                Some(
                    El::new()
                        .s(Font::new().size(14).color(color!("rgba(226, 232, 255, 0.7)")))
                        .child(content()),
                )
            }))
            .item(
                Row::new()
                    .s(Gap::new().x(8))
                    .multiline()
                    .item(Self::toggle_button(expanded.clone()))
                    .items(actions.into_iter().map(|HintAction { text, on_click }| {
                        action_button(El::new().child(text), ButtonVariant::Secondary, move || on_click())
                    })),
            )
    }

    fn toggle_button(expanded: Mutable<bool>) -> impl Element {
        action_button(
            El::new().child_signal(expanded.signal().map_bool(|| "Hide hints", || "Show hints")),
            ButtonVariant::Secondary,
            move || expanded.update(|expanded| !expanded),
        )
    }
}

impl Default for Hint {
    fn default() -> Self {
        Self::new()
    }
}
