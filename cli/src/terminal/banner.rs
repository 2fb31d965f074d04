use colored::*;
use unicode_width::UnicodeWidthStr;

use crate::terminal::colors;
use crate::terminal::print::{self, TOTAL_WIDTH};

const BANNER: &str = r#"
            ██████╗ ███████╗██╗   ██╗██╗██████╗
            ██╔══██╗██╔════╝██║   ██║██║██╔══██╗
            ██████╔╝█████╗  ██║   ██║██║██████╔╝
            ██╔══██╗██╔══╝  ╚██╗ ██╔╝██║██╔═══╝
            ██║  ██║███████╗ ╚████╔╝ ██║██║
            ╚═╝  ╚═╝╚══════╝  ╚═══╝  ╚═╝╚═╝
"#;

pub fn print() {
    print::print(&format!("{}", BANNER.color(colors::BANNER)));

    let text_content: String = format!("⟦ REVERSE IP SCANNER v{} ⟧", env!("CARGO_PKG_VERSION"));
    let text_width: usize = UnicodeWidthStr::width(text_content.as_str());
    let text: ColoredString = text_content.color(colors::BANNER).bold();
    let sep: ColoredString = "═".repeat(TOTAL_WIDTH.saturating_sub(text_width) / 2).bright_black();

    print::print(&format!("{}{}{}", sep, text, sep));
}
