use super::task::Task;
use anyhow::Result;
use prettytable::{row, Table};

pub struct View {}

impl View {
    /// Renders a collection snapshot as a terminal table.
    pub fn tasks(tasks: &[Task]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", "DONE", "TITLE", "DESCRIPTION", "UPDATED"]);
        for task in tasks {
            table.add_row(row![
                task.id,
                if task.completed { "✔" } else { " " },
                task.title,
                task.description.as_deref().unwrap_or(""),
                task.updated_at.format("%Y-%m-%d %H:%M")
            ]);
        }
        table.printstd();

        Ok(())
    }
}
