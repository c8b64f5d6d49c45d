pub(crate) mod expand;
pub mod types;

pub use types::{
    Arguments, Command, Dockerfile, Instruction, InstructionDetails, KeyValue, Kind, LineSpan,
    TransferDetails, Trigger,
};

use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::Error;

const DEFAULT_IGNORE_FILE: &str = ".dockerignore";

/// Per-line classification, applied in order. Continuation handling keys
/// off the trailing backslash; keyword recognition is case-insensitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LineState {
    Blank,
    Comment,
    NewMultiline,
    ContinuedMultiline,
    EndMultiline,
    NewCommand,
}

fn classify(line: &str) -> LineState {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return LineState::Blank;
    }
    if trimmed.starts_with('#') {
        return LineState::Comment;
    }
    let keyword = trimmed
        .split_whitespace()
        .next()
        .and_then(Kind::from_keyword)
        .is_some();
    let continued = trimmed.ends_with('\\');
    match (keyword, continued) {
        (true, true) => LineState::NewMultiline,
        (false, true) => LineState::ContinuedMultiline,
        (false, false) => LineState::EndMultiline,
        (true, false) => LineState::NewCommand,
    }
}

/// Command body of a non-comment line: the text after the instruction
/// keyword if the line starts with one, the whole trimmed line otherwise.
/// Trailing continuation backslashes stay in the body.
fn command_body(line: &str) -> String {
    let trimmed = line.trim();
    if let Some(token) = trimmed.split_whitespace().next() {
        if Kind::from_keyword(token).is_some() {
            return trimmed[token.len()..].trim().to_string();
        }
    }
    trimmed.to_string()
}

/// Comment text: everything after the first `#`, remaining `#` runs
/// removed, surrounding whitespace trimmed.
fn comment_body(line: &str) -> String {
    let trimmed = line.trim();
    let rest = trimmed.splitn(2, '#').nth(1).unwrap_or("");
    rest.replace('#', "").trim().to_string()
}

struct PendingRecord {
    start: usize,
    end: usize,
    kind_token: Option<String>,
    body: String,
    raw: String,
}

impl Dockerfile {
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, Error> {
        Self::load(path.as_ref(), None)
    }

    pub fn from_path_with_ignore(
        path: impl AsRef<Path>,
        ignore_file: impl AsRef<Path>,
    ) -> Result<Self, Error> {
        Self::load(path.as_ref(), Some(ignore_file.as_ref()))
    }

    /// Parse raw text. COPY/ADD source expansion and `.dockerignore`
    /// lookup are rooted at the current directory.
    pub fn from_text(text: &str) -> Result<Self, Error> {
        Self::from_text_in(text, Path::new("."))
    }

    /// Parse raw text with expansion and ignore lookup rooted at `base`.
    /// Tests use this with fixture trees instead of the real checkout.
    pub fn from_text_in(text: &str, base: &Path) -> Result<Self, Error> {
        let ignore_patterns = read_ignore_patterns(&base.join(DEFAULT_IGNORE_FILE));
        parse_text(text, None, base, ignore_patterns)
    }

    fn load(path: &Path, ignore_file: Option<&Path>) -> Result<Self, Error> {
        if !path.exists() {
            return Err(Error::NotFound(path.to_path_buf()));
        }
        let content = std::fs::read_to_string(path)?;
        let base = match path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
            _ => PathBuf::from("."),
        };
        let ignore_path = ignore_file
            .map(Path::to_path_buf)
            .unwrap_or_else(|| base.join(DEFAULT_IGNORE_FILE));
        let ignore_patterns = read_ignore_patterns(&ignore_path);
        parse_text(&content, Some(path.to_path_buf()), &base, ignore_patterns)
    }
}

/// Read the companion ignore file. Absence is not an error: the result is
/// simply empty. Blank and `#`-comment lines are dropped.
fn read_ignore_patterns(path: &Path) -> Vec<String> {
    match std::fs::read_to_string(path) {
        Ok(content) => content
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty() && !l.starts_with('#'))
            .map(String::from)
            .collect(),
        Err(_) => Vec::new(),
    }
}

fn parse_text(
    text: &str,
    path: Option<PathBuf>,
    base: &Path,
    ignore_patterns: Vec<String>,
) -> Result<Dockerfile, Error> {
    let mut records: Vec<PendingRecord> = Vec::new();
    let mut run: Option<PendingRecord> = None;

    for (i, line) in text.lines().enumerate() {
        let number = i + 1;
        match classify(line) {
            LineState::Blank => {}
            LineState::Comment => records.push(PendingRecord {
                start: number,
                end: number,
                kind_token: None,
                body: comment_body(line),
                raw: line.to_string(),
            }),
            LineState::NewCommand => records.push(PendingRecord {
                start: number,
                end: number,
                kind_token: line.trim().split_whitespace().next().map(String::from),
                body: command_body(line),
                raw: line.to_string(),
            }),
            LineState::NewMultiline | LineState::ContinuedMultiline => {
                append_to_run(&mut run, number, line);
            }
            LineState::EndMultiline => {
                append_to_run(&mut run, number, line);
                if let Some(done) = run.take() {
                    records.push(done);
                }
            }
        }
    }
    // A run left open at EOF still becomes a record; every non-blank,
    // non-comment line must land in exactly one instruction.
    if let Some(done) = run.take() {
        records.push(done);
    }

    records.sort_by_key(|r| r.start);

    let mut instructions = Vec::with_capacity(records.len());
    for record in records {
        instructions.push(build_instruction(record, base, &ignore_patterns)?);
    }
    debug!(count = instructions.len(), "parsed dockerfile");

    Ok(Dockerfile {
        path,
        ignore_patterns,
        instructions,
    })
}

fn append_to_run(run: &mut Option<PendingRecord>, number: usize, line: &str) {
    match run {
        Some(pending) => {
            pending.end = number;
            pending.body.push_str(&command_body(line));
            pending.raw.push('\n');
            pending.raw.push_str(line);
        }
        None => {
            *run = Some(PendingRecord {
                start: number,
                end: number,
                kind_token: line.trim().split_whitespace().next().map(String::from),
                body: command_body(line),
                raw: line.to_string(),
            });
        }
    }
}

fn build_instruction(
    record: PendingRecord,
    base: &Path,
    ignore_patterns: &[String],
) -> Result<Instruction, Error> {
    let span = LineSpan {
        start: record.start,
        end: record.end,
    };
    let kind = match &record.kind_token {
        None => Kind::Comment,
        Some(token) => {
            Kind::from_keyword(token).ok_or_else(|| Error::UnknownInstruction {
                line: record.start,
                token: token.clone(),
            })?
        }
    };
    let details = parse_details(kind, &record.body, base, ignore_patterns);
    Ok(Instruction {
        span,
        kind,
        details,
        raw: record.raw,
    })
}

fn parse_details(
    kind: Kind,
    body: &str,
    base: &Path,
    ignore_patterns: &[String],
) -> InstructionDetails {
    match kind {
        Kind::Comment => InstructionDetails::Comment {
            comment: body.to_string(),
        },
        Kind::From => parse_from(body),
        Kind::Copy => InstructionDetails::Copy(parse_transfer(body, base, ignore_patterns)),
        Kind::Add => InstructionDetails::Add(parse_transfer(body, base, ignore_patterns)),
        Kind::User => {
            let (user, group) = split_pair(body, ':');
            InstructionDetails::User { user, group }
        }
        Kind::Arg => {
            let (argument, default_value) = split_pair(body, '=');
            InstructionDetails::Arg {
                argument,
                default_value,
            }
        }
        Kind::Env => InstructionDetails::Env(parse_key_values(body)),
        Kind::Label => InstructionDetails::Label(parse_key_values(body)),
        Kind::Run => InstructionDetails::Run(parse_command_notation(body)),
        Kind::Cmd => InstructionDetails::Cmd(parse_command_notation(body)),
        Kind::Entrypoint => InstructionDetails::Entrypoint(parse_command_notation(body)),
        Kind::Shell => InstructionDetails::Shell(parse_command_notation(body)),
        Kind::Healthcheck => InstructionDetails::Healthcheck(parse_trigger(body)),
        Kind::Onbuild => InstructionDetails::Onbuild(parse_trigger(body)),
        Kind::Expose => {
            let (port, protocol) = split_pair(body, '/');
            InstructionDetails::Expose { port, protocol }
        }
        Kind::Workdir => InstructionDetails::Workdir {
            workdir: body.to_string(),
        },
        Kind::Stopsignal => InstructionDetails::Stopsignal {
            stopsignal: body.to_string(),
        },
        Kind::Volume => InstructionDetails::Volume {
            volume: body.to_string(),
        },
        Kind::Maintainer => InstructionDetails::Maintainer {
            maintainer: body.to_string(),
        },
    }
}

fn split_pair(body: &str, sep: char) -> (String, Option<String>) {
    match body.split_once(sep) {
        Some((left, right)) => (left.to_string(), Some(right.to_string())),
        None => (body.to_string(), None),
    }
}

fn parse_from(body: &str) -> InstructionDetails {
    // `image[:version] [AS alias]`, the AS keyword matched case-insensitively
    let lowered = body.to_ascii_lowercase();
    let (image_part, alias) = match lowered.find(" as ") {
        Some(pos) => (
            body[..pos].trim().to_string(),
            Some(body[pos + 4..].trim().to_string()),
        ),
        None => (body.to_string(), None),
    };
    let (image, version) = split_pair(&image_part, ':');
    InstructionDetails::From {
        image,
        version,
        alias,
    }
}

fn parse_transfer(body: &str, base: &Path, ignore_patterns: &[String]) -> TransferDetails {
    let mut tokens: Vec<&str> = body.split_whitespace().collect();
    let mut chown = None;
    if let Some(first) = tokens.first() {
        if first.starts_with("--chown") {
            chown = first.split_once('=').map(|(_, v)| v.to_string());
            tokens.remove(0);
        }
    }
    let target = tokens.pop().map(String::from).unwrap_or_default();
    let sources: Vec<String> = tokens.into_iter().map(String::from).collect();
    let parsed_source_files = expand::expand_sources(&sources, base, ignore_patterns);
    TransferDetails {
        chown,
        sources,
        parsed_source_files,
        target,
    }
}

/// Exec-form (`["a", "b"]`) or shell-form command parsing. Anything that
/// fails as a list literal falls back to a first-whitespace split; a lone
/// token yields an empty exec argument list.
fn parse_command_notation(body: &str) -> Command {
    if let Some(items) = parse_exec_form(body) {
        let executable = items.first().cloned().unwrap_or_default();
        let arguments = items.get(1..).unwrap_or(&[]).to_vec();
        return Command {
            executable,
            arguments: Arguments::Exec(arguments),
        };
    }
    match body.split_once(char::is_whitespace) {
        Some((executable, rest)) => Command {
            executable: executable.to_string(),
            arguments: Arguments::Raw(rest.trim_start().to_string()),
        },
        None => Command {
            executable: body.to_string(),
            arguments: Arguments::Exec(Vec::new()),
        },
    }
}

/// Parse a `["a", "b"]` list literal. Items may be single- or
/// double-quoted. Returns `None` for anything that is not a clean list.
fn parse_exec_form(body: &str) -> Option<Vec<String>> {
    let trimmed = body.trim();
    let inner = trimmed.strip_prefix('[')?.strip_suffix(']')?;

    let mut items = Vec::new();
    let mut chars = inner.chars();
    loop {
        let mut next = None;
        for c in chars.by_ref() {
            if c == '\'' || c == '"' {
                next = Some(c);
                break;
            }
            if !c.is_whitespace() && c != ',' {
                return None;
            }
        }
        let Some(quote) = next else { break };
        let mut item = String::new();
        let mut closed = false;
        for c in chars.by_ref() {
            if c == quote {
                closed = true;
                break;
            }
            item.push(c);
        }
        if !closed {
            return None;
        }
        items.push(item);
    }
    Some(items)
}

fn parse_trigger(body: &str) -> Trigger {
    if let Some(items) = parse_exec_form(body) {
        let sub_instruction = items.first().cloned().unwrap_or_default();
        let executable = items.get(1).cloned().unwrap_or_default();
        let arguments = items.get(2..).unwrap_or(&[]).to_vec();
        return Trigger {
            sub_instruction,
            command: Command {
                executable,
                arguments: Arguments::Exec(arguments),
            },
        };
    }
    let (sub, rest) = body.split_once(char::is_whitespace).unwrap_or((body, ""));
    Trigger {
        sub_instruction: sub.to_string(),
        command: parse_command_notation(rest.trim()),
    }
}

/// Split key=value pairs for ENV/LABEL bodies. More than one `=` means
/// the body carries several whitespace-separated pairs; otherwise the
/// whole body is one pair, split on `=` or on the first space.
fn parse_key_values(body: &str) -> Vec<KeyValue> {
    if body.matches('=').count() > 1 {
        body.split_whitespace().map(parse_single_pair).collect()
    } else {
        vec![parse_spaced_pair(body)]
    }
}

fn strip_quotes(value: &str) -> String {
    value.trim_matches('\'').trim_matches('"').to_string()
}

fn parse_single_pair(token: &str) -> KeyValue {
    match token.split_once('=') {
        Some((key, value)) => KeyValue {
            key: key.to_string(),
            value: Some(strip_quotes(value)),
        },
        None => KeyValue {
            key: token.to_string(),
            value: None,
        },
    }
}

fn parse_spaced_pair(body: &str) -> KeyValue {
    if let Some((key, value)) = body.split_once('=') {
        return KeyValue {
            key: key.to_string(),
            value: Some(strip_quotes(value)),
        };
    }
    match body.split_once(' ') {
        Some((key, value)) => KeyValue {
            key: key.to_string(),
            value: Some(strip_quotes(value)),
        },
        None => KeyValue {
            key: body.to_string(),
            value: None,
        },
    }
}
