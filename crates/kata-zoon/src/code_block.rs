use std::rc::Rc;

use kata::{CatalogQuery, Deferred, ExecutionContext, Exercise, ExerciseAction, ExerciseConfig, ExerciseState};
use zoon::*;

use crate::button::{ButtonVariant, action_button};
use crate::cell::{
    CellActions, CellClassNames, CellContext, CellProps, CellProvider, ExecutableCell, TextAreaCell, Transform,
};
use crate::hint::{ContentFactory, Hint, HintAction};

/// An interactive exercise: executable cell, Run / Submit actions and hints.
///
/// The rendered subtree is keyed on the reset counter, so "Reset" throws
/// away the cell (and whatever was typed into it) and builds a new one.
#[derive(Clone)]
pub struct CodeBlock {
    exercise: Rc<Exercise>,
    state: Mutable<ExerciseState>,
    cell: Mutable<Option<Rc<dyn ExecutableCell>>>,
    loader: Deferred<Rc<dyn ExecutableCell>>,
    provider: CellProvider,
    class_names: Rc<CellClassNames>,
    hint_content: Option<ContentFactory>,
}

impl CodeBlock {
    pub fn new(catalog: &CatalogQuery, config: ExerciseConfig) -> Self {
        Self {
            exercise: Rc::new(Exercise::new(catalog, config)),
            state: Mutable::new(ExerciseState::new()),
            cell: Mutable::new(None),
            loader: Deferred::new(),
            provider: TextAreaCell::default().provider(),
            class_names: Rc::new(CellClassNames::default()),
            hint_content: None,
        }
    }

    pub fn cell_provider(mut self, provider: CellProvider) -> Self {
        self.provider = provider;
        self
    }

    pub fn class_names(mut self, class_names: CellClassNames) -> Self {
        self.class_names = Rc::new(class_names);
        self
    }

    pub fn hint<E: Element>(mut self, content: impl Fn() -> E + 'static) -> Self {
        self.hint_content = Some(Rc::new(move || content().unify()));
        self
    }

    pub fn exercise(&self) -> &Exercise {
        &self.exercise
    }

    pub fn state(&self) -> ExerciseState {
        self.state.get()
    }

    pub fn build(self) -> impl Element {
        self.load_cell();
        self.root()
    }

    fn root(&self) -> impl Element + use<> {
        let this = self.clone();
        El::new()
            .s(Width::fill())
            .child_signal(
                self.state
                    .signal_ref(ExerciseState::reset_key)
                    .dedupe()
                    .map(move |reset_key| Some(this.instance(reset_key))),
            )
    }

    fn instance(&self, reset_key: u64) -> impl Element + use<> {
        Column::new()
            .s(Width::fill())
            .s(Gap::new().y(12))
            .update_raw_el(|raw_el| {
                raw_el
                    .attr("data-exercise", self.exercise.id())
                    .attr("data-reset-key", &reset_key.to_string())
            })
            .item_signal(self.cell_signal())
            .item(self.hint_panel())
    }

    /// Nothing until the cell has loaded, then the cell showing the source
    /// or, once revealed, the solution.
    fn cell_signal(&self) -> impl Signal<Item = Option<RawElOrText>> + use<> {
        let this = self.clone();
        map_ref! {
            let cell = self.cell.signal_cloned(),
            let show_solution = self.state.signal_ref(ExerciseState::is_solution_shown).dedupe() =>
            cell.as_ref().map(|cell| this.render_cell(cell, *show_solution))
        }
    }

    fn render_cell(&self, cell: &Rc<dyn ExecutableCell>, show_solution: bool) -> RawElOrText {
        let source = self.exercise.files().displayed(show_solution).unwrap_or_default();
        cell.render(CellProps {
            class_names: CellClassNames::clone(&self.class_names),
            settings: self.exercise.cell_settings().clone(),
            source: source.to_owned(),
            actions: self.cell_actions(),
        })
    }

    fn cell_actions(&self) -> CellActions {
        let exercise = self.exercise.clone();
        Rc::new(move |context: CellContext| {
            let controls = exercise.controls();
            let submission: Transform = {
                let exercise = exercise.clone();
                Rc::new(move |content: &str| exercise.submission(content).unwrap_or_else(|| content.to_owned()))
            };
            Row::new()
                .s(Gap::new().x(8))
                .item(controls.run.then(|| {
                    let context = context.clone();
                    action_button(El::new().child("Run Code"), ButtonVariant::Secondary, move || {
                        context.run_code(None)
                    })
                }))
                .item(controls.submit.then(|| {
                    action_button(El::new().child("Submit"), ButtonVariant::Primary, move || {
                        context.run_code(Some(submission.clone()))
                    })
                }))
                .unify()
        })
    }

    fn hint_panel(&self) -> impl Element + use<> {
        Hint::new()
            .action(HintAction::new("Show solution", {
                let this = self.clone();
                move || this.dispatch(ExerciseAction::ShowSolution)
            }))
            .action(HintAction::new("Reset", {
                let this = self.clone();
                move || this.dispatch(ExerciseAction::Reset)
            }))
            .content(self.hint_content.clone())
            .build()
    }

    fn dispatch(&self, action: ExerciseAction) {
        let next = self.state.get().apply(action);
        self.state.set_neq(next);
        self.load_cell();
    }

    /// Starts loading the cell unless it is loaded, loading, or we are not
    /// running in a browser.
    fn load_cell(&self) {
        let context = if web_sys::window().is_some() {
            ExecutionContext::Interactive
        } else {
            ExecutionContext::Prerender
        };
        let provider = self.provider.clone();
        if let Some(task) = self.loader.acquire(context, move || provider()) {
            let cell = self.cell.clone();
            self.loader.on_ready(move |loaded| cell.set(Some(loaded.clone())));
            Task::start(task);
        }
    }
}
