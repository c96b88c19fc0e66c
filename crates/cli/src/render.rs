//! Plain-text rendering of store state

use std::fmt::Write;

use jotlist_core::note::{format_timestamp, NoteRecord};
use jotlist_core::store::Change;
use jotlist_core::task::{Filter, TaskCounts, TaskRecord};

pub fn empty_message(filter: Filter) -> &'static str {
    match filter {
        Filter::All => "No tasks yet. Start by adding one!",
        Filter::Active => "No active tasks. Time to add some!",
        Filter::Completed => "No completed tasks yet. Keep going!",
    }
}

pub fn task_list(tasks: &[&TaskRecord], filter: Filter) -> String {
    if tasks.is_empty() {
        return format!("{}\n", empty_message(filter));
    }

    let mut out = String::new();
    for task in tasks {
        let mark = if task.content.completed { 'x' } else { ' ' };
        let _ = writeln!(out, "[{}] {}  {}", mark, task.id, task.content.text);
    }
    let noun = if tasks.len() == 1 { "task" } else { "tasks" };
    let _ = writeln!(out, "{} {} shown ({})", tasks.len(), noun, filter);
    out
}

pub fn counts(counts: TaskCounts) -> String {
    format!(
        "total: {}\nactive: {}\ncompleted: {}\n",
        counts.total, counts.active, counts.completed
    )
}

pub fn note_list(notes: &[NoteRecord], width: usize) -> String {
    if notes.is_empty() {
        return "No notes yet.\n".to_string();
    }

    let mut out = String::new();
    for note in notes {
        let _ = writeln!(out, "{}  {}", note.id, note.content.title);
        let _ = writeln!(out, "    {}", format_timestamp(note.created_at));
        let _ = writeln!(out, "    {}", note.content.preview(width));
    }
    out
}

pub fn change(kind: &str, change: &Change) -> String {
    match change {
        Change::Added(id) => format!("Added {} {}", kind, id),
        Change::Updated(id) => format!("Updated {} {}", kind, id),
        Change::Removed(id) => format!("Removed {} {}", kind, id),
        Change::Toggled { id, completed } => {
            let state = if *completed { "done" } else { "not done" };
            format!("Marked {} {} as {}", kind, id, state)
        }
        Change::ClearedCompleted(count) => format!("Cleared {} completed {}(s)", count, kind),
        Change::FilterChanged(filter) => format!("Showing {} {}s", filter, kind),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jotlist_core::note::Note;
    use jotlist_core::record::{Record, RecordId};
    use jotlist_core::task::Task;

    fn task(id: &str, text: &str, completed: bool) -> TaskRecord {
        let mut record = Record::new(RecordId::new(id), Task::new(text).unwrap());
        record.content.completed = completed;
        record
    }

    #[test]
    fn test_task_list() {
        let a = task("task-1", "Buy milk", false);
        let b = task("task-2", "Walk dog", true);

        let out = task_list(&[&a, &b], Filter::All);
        assert_eq!(
            out,
            "[ ] task-1  Buy milk\n[x] task-2  Walk dog\n2 tasks shown (all)\n"
        );
    }

    #[test]
    fn test_task_list_single() {
        let a = task("task-1", "Buy milk", false);
        let out = task_list(&[&a], Filter::Active);
        assert!(out.ends_with("1 task shown (active)\n"));
    }

    #[test]
    fn test_empty_task_list() {
        assert_eq!(
            task_list(&[], Filter::Completed),
            "No completed tasks yet. Keep going!\n"
        );
    }

    #[test]
    fn test_counts() {
        let out = counts(TaskCounts {
            total: 3,
            active: 2,
            completed: 1,
        });
        assert_eq!(out, "total: 3\nactive: 2\ncompleted: 1\n");
    }

    #[test]
    fn test_note_list_truncates() {
        let note = Record::new(RecordId::new("note-1"), Note::new("Ideas", "abcdefgh").unwrap());
        let out = note_list(&[note], 3);
        assert!(out.starts_with("note-1  Ideas\n"));
        assert!(out.contains("    abc...\n"));
    }

    #[test]
    fn test_change() {
        let id = RecordId::new("task-9");
        assert_eq!(change("task", &Change::Added(id.clone())), "Added task task-9");
        assert_eq!(
            change(
                "task",
                &Change::Toggled {
                    id,
                    completed: true
                }
            ),
            "Marked task task-9 as done"
        );
        assert_eq!(
            change("task", &Change::FilterChanged(Filter::Active)),
            "Showing active tasks"
        );
    }
}
