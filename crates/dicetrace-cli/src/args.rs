use clap::Parser;
use std::path::PathBuf;
use std::str::FromStr;

#[derive(Parser)]
#[command(name = "dicetrace")]
#[command(about = "Render dice-expression evaluation traces as readable steps", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Evaluation report (JSON) to render; `-` reads stdin
    #[arg(default_value = "-")]
    pub input: String,

    /// Items shown before a list preview collapses (number or `unlimited`)
    #[arg(long)]
    pub list_limit: Option<LimitArg>,

    /// Addends shown before a sum preview collapses (number or `unlimited`)
    #[arg(long)]
    pub sum_limit: Option<LimitArg>,

    /// Depth rendered in full before subtrees collapse (number or `unlimited`)
    #[arg(long)]
    pub depth_limit: Option<LimitArg>,

    /// TOML file providing default limits
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Emit the fragment sequence as JSON instead of joined text
    #[arg(long)]
    pub json: bool,

    /// Never emit ANSI styling, even on a terminal
    #[arg(long)]
    pub no_color: bool,
}

/// A display limit: a non-negative integer, or the word `unlimited`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LimitArg(pub Option<u32>);

impl FromStr for LimitArg {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("unlimited") {
            return Ok(LimitArg(None));
        }
        s.parse::<u32>()
            .map(|n| LimitArg(Some(n)))
            .map_err(|_| format!("expected a non-negative integer or `unlimited`, got `{}`", s))
    }
}
