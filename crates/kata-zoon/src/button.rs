use zoon::*;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    #[default]
    Secondary,
    Primary,
}

impl ButtonVariant {
    fn background(self, hovered: bool) -> Rgba {
        match (self, hovered) {
            (ButtonVariant::Primary, true) => color!("rgba(140, 196, 255, 0.9)"),
            (ButtonVariant::Primary, false) => color!("rgba(108, 162, 255, 0.75)"),
            (ButtonVariant::Secondary, true) => color!("rgba(36, 48, 72, 0.44)"),
            (ButtonVariant::Secondary, false) => color!("rgba(26, 36, 58, 0.32)"),
        }
    }

    fn text(self) -> Rgba {
        match self {
            ButtonVariant::Primary => color!("#052039"),
            ButtonVariant::Secondary => color!("#f1f4ff"),
        }
    }
}

pub fn action_button(
    label: impl Element,
    variant: ButtonVariant,
    on_press: impl FnMut() + 'static,
) -> impl Element {
    let hovered = Mutable::new(false);
    Button::new()
        .s(Padding::new().x(14).y(7))
        .s(RoundedCorners::all(22))
        .s(Font::new().size(14).weight(FontWeight::SemiBold).color(variant.text()).no_wrap())
        .s(Borders::all(
            Border::new().color(color!("rgba(88, 126, 194, 0.4)")).width(1),
        ))
        .s(Background::new().color_signal(hovered.signal().map(move |hovered| variant.background(hovered))))
        .label(label)
        .on_hovered_change(move |is_hovered| hovered.set(is_hovered))
        .on_press(on_press)
}
