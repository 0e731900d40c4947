use colored::Colorize;

const LOGO: &str = r"
  _   _ ____      _
 | | | |  _ \  __| |_   _ _ __
 | | | | | | |/ _` | | | | '_ \
 | |_| | |_| | (_| | |_| | |_) |
  \___/|____/ \__,_|\__,_| .__/
                         |_|
";

/// Renders the start-up banner
pub fn banner() -> String {
    format!(
        "{}\n              {}\n",
        LOGO.yellow(),
        "# Coded By @2RS3C".green()
    )
}

/// Prints the start-up banner to stdout
pub fn print_banner() {
    println!("{}", banner());
}
