//! Markdown export of all three lists.

use crate::app::App;
use chrono::{DateTime, Utc};
use std::fmt::Write as _;

/// Render the export document: dump as bullets, todo as a priority table,
/// completed as a date/task table with the pre-completion priority.
#[must_use]
pub fn render_markdown(app: &App, now: DateTime<Utc>) -> String {
    let mut doc = String::new();
    // fmt::Write to a String cannot fail.
    let _ = writeln!(
        doc,
        "# Task Export - {}\n",
        now.format("%Y-%m-%d %H:%M:%S UTC")
    );

    let _ = writeln!(doc, "## Dump\n");
    for item in app.dump.sorted() {
        let _ = writeln!(doc, "* {}", item.text);
    }

    let _ = writeln!(doc, "\n## Todo\n");
    let _ = writeln!(doc, "| Priority | Task |");
    let _ = writeln!(doc, "| :------- | :--- |");
    for item in app.todo.sorted() {
        let _ = writeln!(doc, "| {} | {} |", item.priority, item.text);
    }

    let _ = writeln!(doc, "\n## Completed\n");
    let _ = writeln!(doc, "| Completed | Task | (Original priority) |");
    let _ = writeln!(doc, "| :-------- | :--- | :------------------ |");
    for item in app.completed.sorted() {
        let _ = writeln!(
            doc,
            "| {} | {} | ({}) |",
            item.completed_at.format("%Y-%m-%d"),
            item.text,
            item.original_priority
        );
    }

    doc
}

/// Timestamped default filename for the export document.
#[must_use]
pub fn export_filename(now: DateTime<Utc>) -> String {
    format!("list_export_{}.md", now.format("%Y%m%d_%H%M%S"))
}

#[cfg(test)]
mod tests {
    use super::{export_filename, render_markdown};
    use crate::app::App;
    use crate::model::Priority;
    use chrono::{TimeZone, Utc};

    #[test]
    fn document_contains_every_item() {
        let mut app = App::in_memory();
        app.dump.add(&app.storage, "a loose note");
        app.todo.add(&app.storage, "a real task", Priority::High);
        let id = app.todo.add(&app.storage, "finished task", Priority::Low).id;
        app.todo.complete(&app.storage, id, &mut app.completed);

        let doc = render_markdown(&app, Utc::now());
        assert!(doc.contains("* a loose note"));
        assert!(doc.contains("| high | a real task |"));
        assert!(doc.contains("| finished task | (low) |"));
    }

    #[test]
    fn empty_lists_still_produce_sections() {
        let app = App::in_memory();
        let doc = render_markdown(&app, Utc::now());
        assert!(doc.contains("## Dump"));
        assert!(doc.contains("## Todo"));
        assert!(doc.contains("## Completed"));
    }

    #[test]
    fn filename_is_timestamped() {
        let at = Utc.with_ymd_and_hms(2025, 3, 9, 14, 5, 7).unwrap();
        assert_eq!(export_filename(at), "list_export_20250309_140507.md");
    }
}
