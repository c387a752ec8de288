use dicetrace_types::Fragment;
use is_terminal::IsTerminal;
use owo_colors::OwoColorize;

/// Whether to style inline-code fragments on stdout.
pub fn use_color(no_color: bool) -> bool {
    !no_color && std::io::stdout().is_terminal()
}

/// Join fragments for a terminal: inline-code units get colored, plain text
/// passes through unchanged.
pub fn concat_styled(fragments: &[Fragment]) -> String {
    fragments
        .iter()
        .map(|fragment| match fragment {
            Fragment::Text(text) => text.clone(),
            Fragment::Code(code) => code.cyan().to_string(),
        })
        .collect()
}
