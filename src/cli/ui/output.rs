use console::{Alignment, Color, Style, measure_text_width, pad_str, style};

pub struct Output;

impl Output {
    pub fn new() -> Self {
        Self
    }

    pub fn success(&self, message: &str) {
        println!("{} {}", style("✓").green(), message);
    }

    pub fn error(&self, message: &str) {
        eprintln!("{} {}", style("✗").red(), message);
    }

    pub fn warning(&self, message: &str) {
        println!("{} {}", style("⚠").yellow(), message);
    }

    pub fn info(&self, message: &str) {
        println!("{} {}", style("ℹ").blue(), message);
    }

    pub fn header(&self, message: &str) {
        println!("\n{}", style(message).bold().underlined());
    }

    pub fn section(&self, message: &str) {
        println!("\n{}", style(message).bold());
        println!("{}", "─".repeat(40));
    }

    /// Boxed block of text with a titled top border
    pub fn panel(&self, title: &str, body: &str, color: Color) {
        let border = Style::new().fg(color);
        let lines: Vec<&str> = body.trim_end().lines().collect();
        let title_width = measure_text_width(title);
        let inner = lines
            .iter()
            .map(|l| measure_text_width(l))
            .max()
            .unwrap_or(0)
            .max(title_width + 2);

        println!(
            "{}{}{}",
            border.apply_to("╭─ "),
            style(title).bold(),
            border.apply_to(format!(" {}╮", "─".repeat(inner - title_width - 1)))
        );
        for line in &lines {
            println!(
                "{} {} {}",
                border.apply_to("│"),
                pad_str(line, inner, Alignment::Left, None),
                border.apply_to("│")
            );
        }
        println!("{}", border.apply_to(format!("╰{}╯", "─".repeat(inner + 2))));
    }

    /// Column-aligned table with a bold title and header row
    pub fn table(&self, title: &str, headers: &[&str], rows: &[Vec<String>]) {
        let mut widths: Vec<usize> = headers.iter().map(|h| measure_text_width(h)).collect();
        for row in rows {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(measure_text_width(cell));
            }
        }

        let render = |cells: Vec<String>| {
            cells
                .iter()
                .zip(&widths)
                .map(|(cell, width)| pad_str(cell, *width, Alignment::Left, None).into_owned())
                .collect::<Vec<_>>()
                .join("  ")
        };

        println!("\n{}", style(title).bold());
        println!(
            "{}",
            style(render(headers.iter().map(|h| h.to_string()).collect())).bold()
        );
        let total = widths.iter().sum::<usize>() + 2 * widths.len().saturating_sub(1);
        println!("{}", "─".repeat(total));
        for row in rows {
            println!("{}", render(row.clone()));
        }
    }
}

impl Default for Output {
    fn default() -> Self {
        Self::new()
    }
}
