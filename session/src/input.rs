//! Line parsing for the interactive recorder. One shot per line:
//!
//! ```text
//! <hitter> <receiver> <strike-zone> <landing-zone> <stroke> <outcome>
//! ```
//!
//! plus the bare commands `undo`, `score`, and `quit`.

use regex::Regex;

use types::ShotForm;

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Shot(ShotForm),
    Undo,
    Score,
    Quit,
}

pub fn parse_command(input: &str) -> Result<Command, String> {
    let input = input.trim();
    match input.to_lowercase().as_str() {
        "undo" | "u" => return Ok(Command::Undo),
        "score" | "s" => return Ok(Command::Score),
        "quit" | "q" | "exit" => return Ok(Command::Quit),
        _ => {}
    }
    shot_from_str(input)
}

fn shot_from_str(input: &str) -> Result<Command, String> {
    let re = Regex::new(
        r"^(?<hitter>\S+)\s+(?<receiver>\S+)\s+(?<strike>\w{2})\s+(?<landing>\w{2})\s+(?<stroke>[\w-]+)\s+(?<outcome>\w+)$",
    )
    .expect("Valid shot regex");
    let Some(caps) = re.captures(input) else {
        return Err(format!(
            "Unable to parse a shot or command from string: {input}"
        ));
    };

    let form = ShotForm {
        hitter: caps["hitter"].to_string(),
        receiver: caps["receiver"].to_string(),
        strike: caps["strike"].parse()?,
        landing: caps["landing"].parse()?,
        stroke: caps["stroke"].parse()?,
        outcome: caps["outcome"].parse()?,
    };
    Ok(Command::Shot(form))
}
