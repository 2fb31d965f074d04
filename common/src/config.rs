pub struct Config {
    /// Never print the ASCII banner above a result table.
    pub no_banner: bool,
    /// Quiet level.
    ///
    /// Any value above zero hides the banner and section headers.
    /// Result tables, prompts and errors are always printed.
    pub quiet: u8,
}

impl Config {
    pub fn show_banner(&self) -> bool {
        !self.no_banner && self.quiet == 0
    }
}
