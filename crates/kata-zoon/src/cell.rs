//! The executable cell capability.
//!
//! A cell renders editable source code and runs it against the configured
//! execution backend. Exercises only depend on [`ExecutableCell`]; the
//! backend-specific widget is supplied through a [`CellProvider`] so it can
//! be constructed lazily, once browser globals are available.

use std::cell::RefCell;
use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;

use kata::CellSettings;
use zoon::{println, *};

/// Rewrites the editor content before it is run.
pub type Transform = Rc<dyn Fn(&str) -> String>;

/// Builds the cell's action row from the live context. Cells call it on
/// every render of their action area.
pub type CellActions = Rc<dyn Fn(CellContext) -> RawElOrText>;

pub type CellFuture = Pin<Box<dyn Future<Output = Rc<dyn ExecutableCell>>>>;

/// Acquires the cell implementation.
pub type CellProvider = Rc<dyn Fn() -> CellFuture>;

/// Executes a program and returns its printable output.
pub type RunHandler = Rc<dyn Fn(&CellSettings, &str) -> String>;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CellClassNames {
    pub cell: String,
    pub input: String,
    pub button: String,
    pub output: String,
}

/// Handle passed to [`CellActions`], bound to one rendered cell.
#[derive(Clone)]
pub struct CellContext {
    run: Rc<dyn Fn(Option<Transform>)>,
}

impl CellContext {
    pub fn new(run: impl Fn(Option<Transform>) + 'static) -> Self {
        Self { run: Rc::new(run) }
    }

    /// Runs the current editor content, piped through `transform` if given.
    pub fn run_code(&self, transform: Option<Transform>) {
        (self.run)(transform)
    }
}

pub struct CellProps {
    pub class_names: CellClassNames,
    pub settings: CellSettings,
    pub source: String,
    pub actions: CellActions,
}

pub trait ExecutableCell {
    fn render(&self, props: CellProps) -> RawElOrText;
}

/// A plain `<textarea>` editor with an output pane.
///
/// Running hands the program to a [`RunHandler`] and shows what it returns.
#[derive(Clone)]
pub struct TextAreaCell {
    run_handler: RunHandler,
}

impl TextAreaCell {
    pub fn new(run_handler: impl Fn(&CellSettings, &str) -> String + 'static) -> Self {
        Self {
            run_handler: Rc::new(run_handler),
        }
    }

    /// Provider resolving to a clone of this cell.
    pub fn provider(self) -> CellProvider {
        Rc::new(move || {
            let cell: Rc<dyn ExecutableCell> = Rc::new(self.clone());
            let future: CellFuture = Box::pin(async move { cell });
            future
        })
    }
}

impl Default for TextAreaCell {
    /// Shows the program instead of executing it.
    fn default() -> Self {
        Self::new(|settings, program| {
            format!("# {} program for the `{}` kernel\n{program}", settings.lang, settings.kernel_type)
        })
    }
}

impl ExecutableCell for TextAreaCell {
    fn render(&self, props: CellProps) -> RawElOrText {
        let CellProps {
            class_names,
            settings,
            source,
            actions,
        } = props;
        let editor = Rc::new(RefCell::new(None::<web_sys::HtmlTextAreaElement>));
        let output = Mutable::new(None::<String>);

        let context = CellContext::new({
            let editor = editor.clone();
            let output = output.clone();
            let run_handler = self.run_handler.clone();
            move |transform: Option<Transform>| {
                let content = editor
                    .borrow()
                    .as_ref()
                    .map(|editor| editor.value())
                    .unwrap_or_default();
                let program = match transform {
                    Some(transform) => transform(&content),
                    None => content,
                };
                if settings.debug {
                    println!("[{} / {}] running:\n{program}", settings.lang, settings.kernel_type);
                }
                output.set(Some(run_handler(&settings, &program)));
            }
        });

        let textarea = RawHtmlEl::<web_sys::HtmlTextAreaElement>::new("textarea")
            .attr("spellcheck", "false")
            .attr("rows", &source.lines().count().max(4).to_string())
            .style("width", "100%")
            .style("font-family", "monospace")
            .style("resize", "vertical")
            .prop("value", &source)
            .after_insert(move |element| {
                editor.borrow_mut().replace(element);
            });

        let output_class = class_names.output.clone();
        Column::new()
            .s(Width::fill())
            .s(Gap::new().y(8))
            .update_raw_el(|raw_el| with_class(raw_el, &class_names.cell))
            .item(with_class(textarea, &class_names.input))
            .item(
                El::new()
                    .update_raw_el(|raw_el| with_class(raw_el, &class_names.button))
                    .child(actions(context)),
            )
            .item_signal(output.signal_cloned().map(move |output| {
                output.map(|text| {
                    El::new()
                        .s(Font::new().family([FontFamily::Monospace]).size(13))
                        .s(Padding::all(8))
                        .update_raw_el(|raw_el| with_class(raw_el, &output_class).style("white-space", "pre-wrap"))
                        .child(text)
                })
            }))
            .unify()
    }
}

fn with_class<T: RawEl>(raw_el: T, class: &str) -> T {
    if class.is_empty() { raw_el } else { raw_el.class(class) }
}
