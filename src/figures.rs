//! Static ASCII figures printed under the balloon.
//!
//! Every figure starts with the tail strokes that lead up to the balloon, so
//! it has to be printed right after the bottom border.

use std::fmt;
use std::io::{self, Write};

use log::warn;

const COW: &[&str] = &[
    r#"         \  ^__^"#,
    r#"          \ (oo)\_______"#,
    r#"            (__)\       )\/\"#,
    r#"                ||----w |"#,
    r#"                ||     ||"#,
];

const STEGOSAURUS: &[&str] = &[
    r#"         \                      .       ."#,
    r#"          \                    / `.   .' ""#,
    r#"           \           .---.  <    > <    >  .---."#,
    r#"            \          |    \  \ - ~ ~ - /  /    |"#,
    r#"          _____           ..-~             ~-..-~"#,
    r#"         |     |   \~~~\\.'                    `./~~~/"#,
    r#"        ---------   \__/                         \__/"#,
    r#"       .'  O    \     /               /       \  ""#,
    r#"      (_____,    `._.'               |         }  \/~~~/"#,
    r#"       `----.          /       }     |        /    \__/"#,
    r#"             `-.      |       /      |       /      `. ,~~|"#,
    r#"                 ~-.__|      /_ - ~ ^|      /- _      `..-'"#,
    r#"                      |     /        |     /     ~-.     `-. _  _  _"#,
    r#"                      |_____|        |_____|         ~ - . _ _ _ _ _>"#,
];

/// Name used when no figure is asked for.
pub const DEFAULT_FIGURE: &str = "cow";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Figure {
    Cow,
    Stegosaurus,
}

impl Figure {
    pub const ALL: [Figure; 2] = [Figure::Cow, Figure::Stegosaurus];

    pub fn name(self) -> &'static str {
        match self {
            Figure::Cow => "cow",
            Figure::Stegosaurus => "stegosaurus",
        }
    }

    /// Exact, case-sensitive lookup.
    pub fn from_name(name: &str) -> Option<Figure> {
        Self::ALL.into_iter().find(|f| f.name() == name)
    }

    pub fn art(self) -> &'static [&'static str] {
        match self {
            Figure::Cow => COW,
            Figure::Stegosaurus => STEGOSAURUS,
        }
    }

    pub fn names() -> impl Iterator<Item = &'static str> {
        Self::ALL.into_iter().map(Figure::name)
    }
}

impl fmt::Display for Figure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Diagnostic printed in place of a figure for an unknown name.
pub fn unknown_figure_message() -> String {
    let choices: Vec<String> = Figure::names().map(|n| format!("'{n}'")).collect();
    format!("Unknown figure. Please use {} as the figure name.", choices.join(" or "))
}

/// Write the named figure, or the unknown-figure diagnostic.
///
/// Returns the figure that was printed, `None` when the name was not found.
pub fn print_figure<W: Write>(out: &mut W, name: &str) -> io::Result<Option<Figure>> {
    match Figure::from_name(name) {
        Some(figure) => {
            for line in figure.art() {
                writeln!(out, "{line}")?;
            }
            Ok(Some(figure))
        }
        None => {
            warn!("unknown figure {name:?}");
            writeln!(out, "{}", unknown_figure_message())?;
            Ok(None)
        }
    }
}
