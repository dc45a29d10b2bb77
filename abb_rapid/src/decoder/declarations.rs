//! `speeddata`, `zonedata`, `tooldata` and `wobjdata` declarations.

use super::records::{Declared, RawToolData, RawWorkObjectData, ZoneValue};
use super::scanner::Cursor;
use super::ParsedLine;

/// `VAR`, `PERS`, `CONST`, optionally preceded by `LOCAL`, or `TASK PERS`.
fn storage_qualifier(cur: &mut Cursor) -> bool {
    if cur.keyword("TASK") {
        return cur.keyword("PERS");
    }
    cur.keyword("LOCAL");
    cur.keyword("VAR") || cur.keyword("PERS") || cur.keyword("CONST")
}

/// Recognizes a declaration anchored at the start of `line`.
pub(crate) fn parse_declaration(line: &str) -> Option<ParsedLine> {
    let mut cur = Cursor::new(line);
    if !storage_qualifier(&mut cur) {
        return None;
    }
    let data_type = cur.ident()?;
    let name = cur.ident()?.to_string();
    if !cur.eat_str(":=") {
        return None;
    }
    let parsed = match data_type {
        "speeddata" => ParsedLine::Speed(Declared {
            name,
            value: cur.num_list()?,
        }),
        "zonedata" => ParsedLine::Zone(Declared {
            name,
            value: zone_body(&mut cur)?,
        }),
        "tooldata" => ParsedLine::Tool(Declared {
            name,
            value: RawToolData {
                raw: cur.bracketed()?.to_string(),
            },
        }),
        "wobjdata" => ParsedLine::WorkObject(Declared {
            name,
            value: RawWorkObjectData {
                raw: cur.bracketed()?.to_string(),
            },
        }),
        _ => return None,
    };
    cur.end_of_statement().then_some(parsed)
}

/// `z<N>`, another identifier such as `fine`, or a bracketed field list.
fn zone_body(cur: &mut Cursor) -> Option<Vec<ZoneValue>> {
    if cur.peek_char('[') {
        let body = cur.bracketed()?;
        return Some(body.split(',').map(zone_field).collect());
    }
    let word = cur.ident()?;
    let value = word
        .strip_prefix('z')
        .filter(|digits| !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()))
        .and_then(|digits| digits.parse::<f64>().ok())
        .map_or_else(|| ZoneValue::Text(word.to_string()), ZoneValue::Number);
    Some(vec![value])
}

fn zone_field(field: &str) -> ZoneValue {
    let mut cur = Cursor::new(field);
    match cur.number() {
        Some(n) if cur.at_end() => ZoneValue::Number(n),
        _ => ZoneValue::Text(field.trim().to_string()),
    }
}
