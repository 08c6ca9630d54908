use client_core::{ShowcaseView, FAILURE_CAPTION, FAILURE_TITLE};

#[derive(Debug, PartialEq, Eq)]
pub enum Rendered {
    Nothing,
    Stdout(String),
    Stderr(String),
}

pub fn render_view(view: ShowcaseView<'_>, json: bool) -> serde_json::Result<Rendered> {
    let rendered = match view {
        ShowcaseView::Empty | ShowcaseView::Loading => Rendered::Nothing,
        ShowcaseView::List(projects) if json => {
            Rendered::Stdout(serde_json::to_string_pretty(projects)?)
        }
        ShowcaseView::List([]) => Rendered::Stdout("(no projects)".to_string()),
        ShowcaseView::List(projects) => Rendered::Stdout(
            projects
                .iter()
                .map(|project| format!("{}\t{}\t{}", project.id, project.name, project.image_url))
                .collect::<Vec<_>>()
                .join("\n"),
        ),
        ShowcaseView::Failure => Rendered::Stderr(format!("{FAILURE_TITLE}\n{FAILURE_CAPTION}")),
    };
    Ok(rendered)
}
