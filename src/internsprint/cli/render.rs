use colored::Colorize;
use internsprint::api::{CmdMessage, MessageLevel};
use internsprint::index::IndexedInternship;
use internsprint::model::Kind;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const LINE_WIDTH: usize = 100;
const STATUS_WIDTH: usize = 24;
const DIVIDER: &str = "____________________________________________________________";

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

pub(super) fn print_divider() {
    println!("{}", DIVIDER.dimmed());
}

pub(super) fn print_internships(internships: &[IndexedInternship]) {
    for item in internships {
        let idx_str = format!("{:>3}. ", item.index);
        let tag = format!("[{}] ", item.internship.kind());
        let tag_colored = match item.internship.kind() {
            Kind::Software => tag.cyan(),
            Kind::Hardware => tag.magenta(),
            Kind::General => tag.blue(),
        };

        let title = format!("{} - {}", item.internship.role, item.internship.company);
        let fixed_width = idx_str.width() + tag.width() + STATUS_WIDTH;
        let available = LINE_WIDTH.saturating_sub(fixed_width);
        let title_display = truncate_to_width(&title, available);
        let padding = available.saturating_sub(title_display.width());

        let status = truncate_to_width(&item.internship.status, STATUS_WIDTH);
        println!(
            "{}{}{}{}{}",
            idx_str.yellow(),
            tag_colored,
            title_display,
            " ".repeat(padding),
            format!("{:>width$}", status, width = STATUS_WIDTH).dimmed()
        );
    }
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}
