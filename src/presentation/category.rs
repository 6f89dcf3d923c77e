use colored::Color;

use pocket_domain::CategoryCode;

/// Display metadata for a category code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryStyle {
    pub label: &'static str,
    pub icon: &'static str,
    pub color: Color,
}

pub fn category_style(code: CategoryCode) -> CategoryStyle {
    let (label, icon, color) = match code {
        CategoryCode::Food => ("Food & Dining", "🍽", Color::Yellow),
        CategoryCode::Groceries => ("Groceries", "🛒", Color::Green),
        CategoryCode::Housing => ("Housing", "🏠", Color::Blue),
        CategoryCode::Transport => ("Transport", "🚗", Color::Cyan),
        CategoryCode::Utilities => ("Utilities", "💡", Color::Magenta),
        CategoryCode::Personal => ("Personal", "👤", Color::BrightBlue),
        CategoryCode::Income => ("Income", "💰", Color::BrightGreen),
    };
    CategoryStyle { label, icon, color }
}
