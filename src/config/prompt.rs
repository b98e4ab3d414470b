use super::errors::ValuesResult;
use super::values::SimulationConfig;
use crate::constants::{DEFAULTS, SEQUENCE_LEN};
use std::io::{self, BufRead, Write};
use tracing::debug;

enum Step {
    Header(&'static str),
    Prompt(&'static str),
}

// Prompts appear in the positional order of `SimulationConfig::from_array`.
const SCRIPT: [Step; SEQUENCE_LEN + 4] = [
    Step::Header("central body:"),
    Step::Prompt("\tmass (5.972e+24)[kg]: "),
    Step::Prompt("\tradius (6371000)[m]: "),
    Step::Header("\tstarting velocity [m/s]:"),
    Step::Prompt("\t\tspeed in x (0): "),
    Step::Prompt("\t\tspeed in y (0): "),
    Step::Prompt("\t\tspeed in z (0): "),
    Step::Header("satellite / second body:"),
    Step::Prompt("\tmass (500)[kg]: "),
    Step::Prompt("\tradius (2)[m]: "),
    Step::Header("\tstarting velocity [m/s]:"),
    Step::Prompt("\t\tspeed in x (0): "),
    Step::Prompt("\t\tspeed in y (0): "),
    Step::Prompt("\t\tspeed in z (-8000): "),
    Step::Prompt("\tinitial distance (1000000)[m]: "),
];

/// Drops `_` digit separators (`1_000`). `None` when an underscore is not
/// between two digits.
fn strip_digit_separators(answer: &str) -> Option<String> {
    let bytes = answer.as_bytes();
    for (i, &b) in bytes.iter().enumerate() {
        if b == b'_' {
            let before = i.checked_sub(1).map(|j| bytes[j]);
            let after = bytes.get(i + 1).copied();
            let is_digit = |c: Option<u8>| c.map_or(false, |c| c.is_ascii_digit());
            if !is_digit(before) || !is_digit(after) {
                return None;
            }
        }
    }
    Some(answer.replace('_', ""))
}

/// Parses one answer, keeping `default` for empty or non-numeric input.
pub fn parse_or_default(answer: &str, default: f64) -> f64 {
    let answer = answer.trim();
    let parsed = strip_digit_separators(answer).and_then(|text| text.parse::<f64>().ok());
    match parsed {
        Some(value) => value,
        None => {
            if !answer.is_empty() {
                debug!("Ignoring non-numeric input {:?}, keeping {}", answer, default);
            }
            default
        }
    }
}

impl SimulationConfig {
    /// Asks for every value on `output`, reading one line per value from `input`.
    ///
    /// Unanswered fields (empty line, unparsable line, end of input) keep
    /// their defaults. Only an invalid final combination, such as an explicit
    /// zero mass, makes this fail.
    pub fn from_prompt<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> ValuesResult<Self> {
        let mut values = DEFAULTS.as_sequence();
        let mut slots = values.iter_mut();
        let mut line = String::new();

        for step in SCRIPT.iter() {
            match step {
                Step::Header(text) => writeln!(output, "{}", text)?,
                Step::Prompt(text) => {
                    write!(output, "{}", text)?;
                    output.flush()?;

                    line.clear();
                    input.read_line(&mut line)?;
                    if let Some(slot) = slots.next() {
                        *slot = parse_or_default(&line, *slot);
                    }
                }
            }
        }

        Self::from_array(values)
    }

    /// [`Self::from_prompt`] on the process's stdin and stdout.
    pub fn from_stdin() -> ValuesResult<Self> {
        let stdin = io::stdin();
        let stdout = io::stdout();
        Self::from_prompt(&mut stdin.lock(), &mut stdout.lock())
    }
}
