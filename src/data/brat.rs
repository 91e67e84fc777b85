// ============================================================
// Layer 4 — Brat Standoff Reader
// ============================================================
// Parses brat `.ann` annotation files. Each non-empty line is
// one annotation, identified by the first character of its ID:
//
//   T1\tMajorClaim 503 575\tthe literal span text     (entity)
//   R1\tsupports Arg1:T3 Arg2:T2                       (relation)
//   A1\tStance T4 For                                  (attribute)
//   *\tEquiv T1 T2                                     (group)
//
// Events (E), normalisations (N), modifiers (M, read as
// attributes) and notes (#) are accepted. Events, normalisations
// and notes carry nothing this crate consumes and are dropped.
//
// Entity spans may be discontinuous: "Claim 0 5;10 15".
//
// Reference: brat standoff format documentation

use std::fs;
use std::path::Path;

use crate::domain::error::{ErrorPolicy, LoadError};

/// A text-bound annotation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entity {
    pub id:    String,
    pub kind:  String,
    /// Character offsets (start, end) of each fragment
    pub spans: Vec<(usize, usize)>,
    pub text:  String,
}

/// A binary relation between two annotations
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Relation {
    pub id:   String,
    pub kind: String,
    pub arg1: String,
    pub arg2: String,
}

/// An attribute attached to another annotation, e.g. a Stance
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    pub id:     String,
    pub name:   String,
    pub target: String,
    pub value:  Option<String>,
}

/// An equivalence group (`*` lines)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    pub kind:    String,
    pub members: Vec<String>,
}

/// Everything read from one `.ann` file, in file order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BratDocument {
    pub entities:   Vec<Entity>,
    pub relations:  Vec<Relation>,
    pub attributes: Vec<Attribute>,
    pub groups:     Vec<Group>,
}

/// Read and parse a single `.ann` file.
pub fn read_ann_file(path: &Path, policy: ErrorPolicy) -> Result<BratDocument, LoadError> {
    let content = fs::read(path).map_err(|e| LoadError::file_access(path, e))?;
    parse_ann(path, content, policy)
}

/// Parse the contents of an `.ann` file.
/// `path` is only used for error messages. A line that is not valid
/// UTF-8 is a malformed record like any other.
pub fn parse_ann(
    path: &Path,
    content: impl AsRef<[u8]>,
    policy: ErrorPolicy,
) -> Result<BratDocument, LoadError> {
    let mut doc = BratDocument::default();

    for (idx, bytes) in content.as_ref().split(|b| *b == b'\n').enumerate() {
        let raw = match std::str::from_utf8(bytes) {
            Ok(raw) => raw,
            Err(e) => {
                policy.handle(LoadError::parse(
                    path,
                    idx + 1,
                    format!("line is not valid UTF-8: {e}"),
                ))?;
                continue;
            }
        };
        let line = raw.trim_end_matches('\r');
        if line.trim().is_empty() {
            continue;
        }

        if let Err(message) = parse_line(line, &mut doc) {
            policy.handle(LoadError::parse(path, idx + 1, message))?;
        }
    }

    Ok(doc)
}

/// Parse one annotation line into `doc`.
fn parse_line(line: &str, doc: &mut BratDocument) -> Result<(), String> {
    let mut fields = line.splitn(3, '\t');
    let id   = fields.next().unwrap_or_default();
    let body = fields
        .next()
        .ok_or_else(|| format!("expected a tab after annotation id '{id}'"))?;
    let rest = fields.next();

    match id.chars().next() {
        Some('T') => doc.entities.push(parse_entity(id, body, rest)?),
        Some('R') => doc.relations.push(parse_relation(id, body)?),
        Some('A') | Some('M') => doc.attributes.push(parse_attribute(id, body)?),
        Some('*') => doc.groups.push(parse_group(body)?),
        Some('E') | Some('N') | Some('#') => {}
        _ => return Err(format!("unknown annotation id '{id}'")),
    }

    Ok(())
}

fn parse_entity(id: &str, body: &str, text: Option<&str>) -> Result<Entity, String> {
    let text = text.ok_or_else(|| format!("entity {id} has no text field"))?;

    let (kind, offsets) = body
        .split_once(' ')
        .ok_or_else(|| format!("entity {id} has no offsets"))?;

    let spans = offsets
        .split(';')
        .map(|fragment| {
            let mut bounds = fragment.split_whitespace().map(str::parse::<usize>);
            match (bounds.next(), bounds.next(), bounds.next()) {
                (Some(Ok(start)), Some(Ok(end)), None) if start <= end => Ok((start, end)),
                _ => Err(format!("entity {id} has an invalid span '{fragment}'")),
            }
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Entity {
        id:    id.to_string(),
        kind:  kind.to_string(),
        spans,
        text:  text.to_string(),
    })
}

fn parse_relation(id: &str, body: &str) -> Result<Relation, String> {
    let mut tokens = body.split_whitespace();
    let kind = tokens
        .next()
        .ok_or_else(|| format!("relation {id} has no type"))?;

    let mut arg = |name: &str| -> Result<String, String> {
        let token = tokens
            .next()
            .ok_or_else(|| format!("relation {id} is missing {name}"))?;
        token
            .split_once(':')
            .map(|(_, target)| target.to_string())
            .ok_or_else(|| format!("relation {id} has a malformed argument '{token}'"))
    };

    let arg1 = arg("Arg1")?;
    let arg2 = arg("Arg2")?;

    Ok(Relation {
        id: id.to_string(),
        kind: kind.to_string(),
        arg1,
        arg2,
    })
}

fn parse_attribute(id: &str, body: &str) -> Result<Attribute, String> {
    let mut tokens = body.split_whitespace();
    match (tokens.next(), tokens.next()) {
        (Some(name), Some(target)) => Ok(Attribute {
            id:     id.to_string(),
            name:   name.to_string(),
            target: target.to_string(),
            value:  tokens.next().map(str::to_string),
        }),
        _ => Err(format!("attribute {id} needs a name and a target")),
    }
}

fn parse_group(body: &str) -> Result<Group, String> {
    let mut tokens = body.split_whitespace();
    let kind = tokens
        .next()
        .ok_or_else(|| "group has no type".to_string())?;
    let members: Vec<String> = tokens.map(str::to_string).collect();
    if members.is_empty() {
        return Err(format!("group '{kind}' has no members"));
    }
    Ok(Group {
        kind: kind.to_string(),
        members,
    })
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    const ESSAY: &str = "T1\tMajorClaim 503 575\twe should attach more importance to cooperation\n\
R1\tsupports Arg1:T3 Arg2:T2\t\n\
A1\tStance T4 For\n\
T2\tPremise 0 5;10 15\tsplit span\n\
#1\tAnnotatorNotes T1\tchecked\n\
*\tEquiv T1 T2\n";

    fn parse(content: &str) -> Result<BratDocument, LoadError> {
        parse_ann(Path::new("essay.ann"), content, ErrorPolicy::Abort)
    }

    #[test]
    fn test_parses_every_annotation_kind() {
        let doc = parse(ESSAY).unwrap();

        assert_eq!(doc.entities.len(), 2);
        assert_eq!(doc.entities[0].kind, "MajorClaim");
        assert_eq!(doc.entities[0].spans, vec![(503, 575)]);
        assert_eq!(
            doc.entities[0].text,
            "we should attach more importance to cooperation"
        );
        assert_eq!(doc.entities[1].spans, vec![(0, 5), (10, 15)]);

        assert_eq!(doc.relations[0].kind, "supports");
        assert_eq!(doc.relations[0].arg1, "T3");
        assert_eq!(doc.relations[0].arg2, "T2");

        assert_eq!(doc.attributes[0].name, "Stance");
        assert_eq!(doc.attributes[0].target, "T4");
        assert_eq!(doc.attributes[0].value.as_deref(), Some("For"));

        assert_eq!(doc.groups[0].members, vec!["T1", "T2"]);
    }

    #[test]
    fn test_entity_text_keeps_inner_tabs() {
        let doc = parse("T1\tClaim 0 7\ta\tb c\n").unwrap();
        assert_eq!(doc.entities[0].text, "a\tb c");
    }

    #[test]
    fn test_windows_line_endings() {
        let doc = parse("T1\tClaim 0 4\tsome\r\nT2\tPremise 5 9\ttext\r\n").unwrap();
        assert_eq!(doc.entities[0].text, "some");
        assert_eq!(doc.entities[1].text, "text");
    }

    #[test]
    fn test_malformed_line_aborts_with_line_number() {
        let err = parse("T1\tClaim 0 4\tok\nT2\tPremise zero four\tbad\n").unwrap_err();
        match err {
            LoadError::Parse { line, .. } => assert_eq!(line, 2),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_missing_text_field_is_malformed() {
        assert!(parse("T1\tClaim 0 4\n").is_err());
        assert!(parse("X1\tsomething\n").is_err());
    }

    #[test]
    fn test_invalid_utf8_line_follows_policy() {
        let content: &[u8] = b"T1\tClaim 0 4\tgood\nT2\tPremise 5 9\tb\xffd\nT3\tPremise 10 14\tfine\n";

        let err = parse_ann(Path::new("essay.ann"), content, ErrorPolicy::Abort).unwrap_err();
        assert!(matches!(err, LoadError::Parse { line: 2, .. }));

        let doc = parse_ann(Path::new("essay.ann"), content, ErrorPolicy::Skip).unwrap();
        let ids: Vec<&str> = doc.entities.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["T1", "T3"]);
    }

    #[test]
    fn test_skip_policy_keeps_good_lines() {
        let content = "T1\tClaim 0 4\tgood\nT2 no tabs here\nT3\tPremise 5 9\talso good\n";
        let doc = parse_ann(Path::new("essay.ann"), content, ErrorPolicy::Skip).unwrap();
        assert_eq!(doc.entities.len(), 2);
        assert_eq!(doc.entities[1].id, "T3");
    }
}
