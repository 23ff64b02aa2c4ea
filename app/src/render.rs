//! Plain-text rendering of the landing page and the resource pages.

use crud_core::{Entity, PageMode, ResourceState, Route};

pub fn home() -> String {
    let mut out = String::new();
    out.push_str(&format!("== {} ==\n", Route::Home.title()));
    out.push_str("A small CRUD front-end over a mock REST API.\n");
    out.push_str(&format!(
        "  -> {}  manage {}\n",
        Route::Users.path(),
        Route::Users.title().to_lowercase()
    ));
    out.push_str(&format!("Type `go {}` to open it.\n", Route::Users.path()));
    out
}

pub fn page<E: Entity>(route: Route, state: &ResourceState<E>, pending_delete: Option<u64>) -> String {
    let mode = PageMode::of(state);
    let mut out = String::new();
    out.push_str(&format!("== {} ({}) [{}] ==\n", route.title(), route.path(), mode_label(mode)));
    if let Some(error) = &state.error {
        out.push_str(&format!("error: {error}\n"));
    }
    if let Some(id) = pending_delete {
        out.push_str(&format!("pending: delete {} {id}\n", E::KIND));
    }
    if mode == PageMode::Loading && state.items.is_empty() {
        out.push_str("loading...\n");
    } else {
        out.push_str(&table(&state.items));
        out.push_str(&format!("{} {}(s)\n", state.items.len(), E::KIND));
    }
    out.push_str(&form(&state.form));
    out
}

fn mode_label(mode: PageMode) -> &'static str {
    match mode {
        PageMode::Loading => "loading",
        PageMode::Viewing => "viewing",
        PageMode::Editing => "editing",
    }
}

/// Renders `items` as a boxed table with an `id` column followed by the
/// entity's fields.
pub fn table<E: Entity>(items: &[E]) -> String {
    let headers: Vec<&str> = std::iter::once("id").chain(E::FIELDS.iter().copied()).collect();
    let rows: Vec<Vec<String>> = items
        .iter()
        .map(|item| {
            let id = item.id().map(|id| id.to_string()).unwrap_or_default();
            std::iter::once(id)
                .chain(E::FIELDS.iter().map(|f| item.field(f).unwrap_or_default()))
                .collect()
        })
        .collect();

    let widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(col, header)| {
            rows.iter()
                .map(|row| row[col].chars().count())
                .chain(std::iter::once(header.chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let rule = {
        let mut rule = String::from("+");
        for width in &widths {
            rule.push_str(&"-".repeat(width + 2));
            rule.push('+');
        }
        rule
    };

    let mut out = String::new();
    out.push_str(&format!("{rule}\n"));
    out.push_str(&format!("{}\n", line(headers.iter().copied(), &widths)));
    out.push_str(&format!("{rule}\n"));
    for row in &rows {
        out.push_str(&format!("{}\n", line(row.iter().map(String::as_str), &widths)));
    }
    if !rows.is_empty() {
        out.push_str(&format!("{rule}\n"));
    }
    out
}

fn line<'a>(cells: impl Iterator<Item = &'a str>, widths: &[usize]) -> String {
    let mut out = String::from("|");
    for (cell, width) in cells.zip(widths) {
        out.push_str(&format!(" {cell:<width$} |"));
    }
    out
}

fn form<E: Entity>(draft: &E) -> String {
    let mut out = String::new();
    match draft.id() {
        Some(id) => out.push_str(&format!("form: editing {} {id}\n", E::KIND)),
        None => out.push_str(&format!("form: new {}\n", E::KIND)),
    }
    let label_width = E::FIELDS.iter().map(|f| f.len()).max().unwrap_or(0);
    for field in E::FIELDS {
        let value = draft.field(field).unwrap_or_default();
        out.push_str(&format!("  {field:<label_width$} : {value}\n"));
    }
    out
}
