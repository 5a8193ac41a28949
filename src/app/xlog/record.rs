use thiserror::Error;

use super::GameRecord;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub(crate) enum ParseError {
    #[error("missing field `{0}` in xlogfile line")]
    MissingField(&'static str),
    #[error("field `{field}` is not an integer: {value:?}")]
    MalformedNumber { field: &'static str, value: String },
}

pub(crate) fn parse_record_line(line: &str) -> Result<GameRecord, ParseError> {
    let line = line.strip_suffix('\r').unwrap_or(line);
    Ok(GameRecord {
        name: field(line, "name")?.to_string(),
        points: int_field(line, "points")?,
        max_level: int_field(line, "maxlvl")?,
        max_hp: int_field(line, "maxhp")?,
        turns: int_field(line, "turns")?,
        role: field(line, "role")?.to_string(),
        race: field(line, "race")?.to_string(),
        gender: field(line, "gender")?.to_string(),
        align: field(line, "align")?.to_string(),
        death: field(line, "death")?.to_string(),
    })
}

pub(crate) fn field<'a>(line: &'a str, name: &'static str) -> Result<&'a str, ParseError> {
    let needle = format!("\t{name}=");
    let start = line
        .find(&needle)
        .map(|pos| pos + needle.len())
        .ok_or(ParseError::MissingField(name))?;
    let rest = &line[start..];
    Ok(rest.split_once('\t').map_or(rest, |(value, _)| value))
}

fn int_field(line: &str, name: &'static str) -> Result<i64, ParseError> {
    let raw = field(line, name)?;
    raw.parse::<i64>().map_err(|_| ParseError::MalformedNumber {
        field: name,
        value: raw.to_string(),
    })
}
