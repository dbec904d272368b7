//! Table output formatting for CLI commands
//!
//! Renders ranked tasks with comfy-table. Priority bands are colored when the
//! terminal supports it.

use comfy_table::{presets, Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use crate::domain::models::{PriorityLevel, ScoreBreakdown, ScoredTask, Task, DUE_DATE_FORMAT};

/// Table formatter for CLI output
pub struct TableFormatter {
    /// Whether to use colors in output
    use_colors: bool,
    /// Maximum width for tables (None = auto)
    max_width: Option<u16>,
}

impl TableFormatter {
    /// Create a new table formatter
    pub fn new() -> Self {
        Self {
            use_colors: console::colors_enabled(),
            max_width: None,
        }
    }

    /// Create a new table formatter with custom settings
    pub const fn with_config(use_colors: bool, max_width: Option<u16>) -> Self {
        Self {
            use_colors,
            max_width,
        }
    }

    /// Format ranked tasks as a table
    pub fn format_ranked(&self, tasks: &[ScoredTask]) -> String {
        let mut table = self.create_base_table();

        table.set_header(vec![
            header("#"),
            header("Title"),
            header("Due"),
            header("Hours"),
            header("Importance"),
            header("Deps"),
            header("Score"),
            header("Priority"),
        ]);

        for (rank, scored) in tasks.iter().enumerate() {
            let task = &scored.task;
            table.add_row(vec![
                Cell::new(rank + 1),
                Cell::new(truncate_text(task.title(), 40)),
                Cell::new(task.due_date().format(DUE_DATE_FORMAT)),
                Cell::new(format_number(task.estimated_hours())).set_alignment(CellAlignment::Right),
                Cell::new(format_number(task.importance())).set_alignment(CellAlignment::Right),
                Cell::new(task.dependency_count()).set_alignment(CellAlignment::Right),
                Cell::new(format!("{:.2}", scored.score)).set_alignment(CellAlignment::Right),
                self.priority_cell(scored.priority_level()),
            ]);
        }

        table.to_string()
    }

    /// Format unscored tasks, e.g. the suggestion sample
    pub fn format_tasks(&self, tasks: &[Task]) -> String {
        let mut table = self.create_base_table();

        table.set_header(vec![
            header("Title"),
            header("Due"),
            header("Hours"),
            header("Importance"),
            header("Deps"),
        ]);

        for task in tasks {
            table.add_row(vec![
                Cell::new(truncate_text(task.title(), 40)),
                Cell::new(task.due_date().format(DUE_DATE_FORMAT)),
                Cell::new(format_number(task.estimated_hours())).set_alignment(CellAlignment::Right),
                Cell::new(format_number(task.importance())).set_alignment(CellAlignment::Right),
                Cell::new(task.dependency_count()).set_alignment(CellAlignment::Right),
            ]);
        }

        table.to_string()
    }

    /// Format ranked tasks with the factors behind each score
    pub fn format_breakdowns(&self, rows: &[(ScoredTask, ScoreBreakdown)]) -> String {
        let mut table = self.create_base_table();

        table.set_header(vec![
            header("#"),
            header("Title"),
            header("Days Left"),
            header("Urgency"),
            header("Importance"),
            header("Effort"),
            header("Deps"),
            header("Raw"),
            header("Score"),
        ]);

        for (rank, (scored, breakdown)) in rows.iter().enumerate() {
            table.add_row(vec![
                Cell::new(rank + 1),
                Cell::new(truncate_text(scored.task.title(), 30)),
                Cell::new(breakdown.days_left).set_alignment(CellAlignment::Right),
                Cell::new(format!("{:.4}", breakdown.urgency)).set_alignment(CellAlignment::Right),
                Cell::new(format!("{:.4}", breakdown.importance_factor))
                    .set_alignment(CellAlignment::Right),
                Cell::new(format!("{:.4}", breakdown.effort_factor))
                    .set_alignment(CellAlignment::Right),
                Cell::new(format!("{:.4}", breakdown.dependency_factor))
                    .set_alignment(CellAlignment::Right),
                Cell::new(format!("{:.4}", breakdown.raw)).set_alignment(CellAlignment::Right),
                self.priority_colored(format!("{:.2}", scored.score), scored.priority_level()),
            ]);
        }

        table.to_string()
    }

    fn priority_cell(&self, level: PriorityLevel) -> Cell {
        self.priority_colored(level.to_string(), level)
    }

    fn priority_colored(&self, text: String, level: PriorityLevel) -> Cell {
        if self.use_colors {
            Cell::new(text).fg(priority_color(level))
        } else {
            Cell::new(text)
        }
    }

    /// Create a base table with common settings
    fn create_base_table(&self) -> Table {
        let mut table = Table::new();

        table
            .load_preset(presets::UTF8_FULL)
            .set_content_arrangement(ContentArrangement::Dynamic);

        if let Some(width) = self.max_width {
            table.set_width(width);
        }

        table
    }
}

impl Default for TableFormatter {
    fn default() -> Self {
        Self::new()
    }
}

fn header(text: &str) -> Cell {
    Cell::new(text).add_attribute(Attribute::Bold)
}

const fn priority_color(level: PriorityLevel) -> Color {
    match level {
        PriorityLevel::High => Color::Red,
        PriorityLevel::Medium => Color::Yellow,
        PriorityLevel::Low => Color::Green,
    }
}

/// Print whole hours without a trailing `.0`
fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{value:.0}")
    } else {
        format!("{value}")
    }
}

/// Truncate text to `max_chars` characters, appending "..." when cut
fn truncate_text(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        text.to_string()
    } else {
        let kept: String = text.chars().take(max_chars.saturating_sub(3)).collect();
        format!("{kept}...")
    }
}
