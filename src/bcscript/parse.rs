use super::script::{Element, Script, OPCODE_PREFIX};
use super::script::Element::{DataPush, OpCode};

/// Splits `text` on whitespace and classifies every token.
///
/// Empty or whitespace-only input gives an empty script. Parsing never fails: an opcode
/// name is only checked against the registry when the script runs.
pub fn parse_script(text: &str) -> Script {
    let mut elements = Vec::new();
    let mut tokens = text.split_whitespace();

    while let Some(element) = parse_one_token(&mut tokens) {
        elements.push(element);
    }

    Script::new(elements)
}

pub fn parse_one_token<'a, I>(tokens: &mut I) -> Option<Element>
where
    I: Iterator<Item = &'a str>,
{
    let token = tokens.next()?;
    if token.starts_with(OPCODE_PREFIX) {
        Some(OpCode(token.to_string()))
    } else {
        Some(DataPush(token.to_string()))
    }
}
