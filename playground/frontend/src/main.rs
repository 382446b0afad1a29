use std::rc::Rc;

use kata_zoon::kata::{CatalogQuery, ExerciseConfig};
use kata_zoon::zoon::{eprintln, *};
use kata_zoon::{CellClassNames, CodeBlock};

// Regenerate with `kata catalog lessons/exercises --site lessons/site.json`
static CATALOG_JSON: &str = include_str!("../../lessons/catalog.json");

fn main() {
    start_app("app", Lesson::new);
}

fn page_background_color() -> Rgba {
    color!("#141f33")
}

fn primary_text_color() -> Rgba {
    color!("#f1f4ff")
}

fn muted_text_color() -> Rgba {
    color!("rgba(226, 232, 255, 0.7)")
}

fn error_text_color() -> Rgba {
    color!("#f08080")
}

#[derive(Clone)]
struct Lesson {
    catalog: Rc<CatalogQuery>,
}

impl Lesson {
    fn new() -> impl Element {
        match CatalogQuery::from_json(CATALOG_JSON) {
            Ok(catalog) => Self {
                catalog: Rc::new(catalog),
            }
            .root()
            .unify(),
            Err(error) => {
                eprintln!("Failed to load the exercise catalog: {error}");
                El::new()
                    .s(Padding::all(20))
                    .s(Font::new().color(error_text_color()))
                    .child(format!("Failed to load the exercise catalog: {error}"))
                    .unify()
            }
        }
    }

    fn root(&self) -> impl Element + use<> {
        Column::new()
            .s(Width::fill())
            .s(Height::fill())
            .s(Padding::new().x(24).y(20))
            .s(Gap::new().y(28))
            .s(Background::new().color(page_background_color()))
            .s(Font::new().color(primary_text_color()))
            .s(Scrollbars::both())
            .item(El::new().s(Font::new().size(28)).child("Chapter 1: Python basics"))
            .item(self.section(
                "Adding things up",
                CodeBlock::new(&self.catalog, ExerciseConfig::new("01_01"))
                    .class_names(Self::cell_class_names())
                    .hint(|| El::new().child("Python has a built-in function that adds up everything in a list.")),
            ))
            .item(self.section(
                "Filtering",
                CodeBlock::new(&self.catalog, ExerciseConfig::new("01_02"))
                    .class_names(Self::cell_class_names())
                    .hint(|| El::new().child("The remainder of an even number divided by 2 is 0.")),
            ))
            .item(self.section(
                "Walkthrough",
                CodeBlock::new(&self.catalog, ExerciseConfig::new("01_03").executable("false"))
                    .class_names(Self::cell_class_names()),
            ))
    }

    fn section(&self, title: &str, block: CodeBlock) -> impl Element + use<> {
        Column::new()
            .s(Width::fill())
            .s(Gap::new().y(10))
            .item(
                El::new()
                    .s(Font::new().size(18).color(muted_text_color()))
                    .child(title.to_owned()),
            )
            .item(block.build())
    }

    fn cell_class_names() -> CellClassNames {
        CellClassNames {
            cell: "juniper-cell".to_owned(),
            input: "juniper-input".to_owned(),
            button: "juniper-button".to_owned(),
            output: "juniper-output".to_owned(),
        }
    }
}
