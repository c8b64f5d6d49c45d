use serde::Serialize;
use std::path::PathBuf;

/// Instruction keywords recognized by the parser, plus `Comment` for
/// `#`-prefixed lines. Any other first token is a fatal parse error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Kind {
    From,
    Copy,
    Add,
    Workdir,
    Expose,
    User,
    Arg,
    Env,
    Label,
    Run,
    Cmd,
    Entrypoint,
    Onbuild,
    Healthcheck,
    Stopsignal,
    Volume,
    Shell,
    Maintainer,
    Comment,
}

impl Kind {
    /// Keyword lookup, case-insensitive. `Comment` has no keyword form.
    pub fn from_keyword(token: &str) -> Option<Kind> {
        Some(match token.to_ascii_uppercase().as_str() {
            "FROM" => Kind::From,
            "COPY" => Kind::Copy,
            "ADD" => Kind::Add,
            "WORKDIR" => Kind::Workdir,
            "EXPOSE" => Kind::Expose,
            "USER" => Kind::User,
            "ARG" => Kind::Arg,
            "ENV" => Kind::Env,
            "LABEL" => Kind::Label,
            "RUN" => Kind::Run,
            "CMD" => Kind::Cmd,
            "ENTRYPOINT" => Kind::Entrypoint,
            "ONBUILD" => Kind::Onbuild,
            "HEALTHCHECK" => Kind::Healthcheck,
            "STOPSIGNAL" => Kind::Stopsignal,
            "VOLUME" => Kind::Volume,
            "SHELL" => Kind::Shell,
            "MAINTAINER" => Kind::Maintainer,
            _ => return None,
        })
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Kind::From => "FROM",
            Kind::Copy => "COPY",
            Kind::Add => "ADD",
            Kind::Workdir => "WORKDIR",
            Kind::Expose => "EXPOSE",
            Kind::User => "USER",
            Kind::Arg => "ARG",
            Kind::Env => "ENV",
            Kind::Label => "LABEL",
            Kind::Run => "RUN",
            Kind::Cmd => "CMD",
            Kind::Entrypoint => "ENTRYPOINT",
            Kind::Onbuild => "ONBUILD",
            Kind::Healthcheck => "HEALTHCHECK",
            Kind::Stopsignal => "STOPSIGNAL",
            Kind::Volume => "VOLUME",
            Kind::Shell => "SHELL",
            Kind::Maintainer => "MAINTAINER",
            Kind::Comment => "COMMENT",
        }
    }
}

impl std::fmt::Display for Kind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 1-based source line range. `end > start` only for instructions joined
/// across continuation lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LineSpan {
    pub start: usize,
    pub end: usize,
}

/// Arguments of RUN/CMD/ENTRYPOINT/SHELL bodies. Exec form keeps discrete
/// tokens; shell form keeps the unsplit tail of the command string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Arguments {
    Exec(Vec<String>),
    Raw(String),
}

impl Arguments {
    pub fn is_empty(&self) -> bool {
        match self {
            Arguments::Exec(items) => items.is_empty(),
            Arguments::Raw(s) => s.is_empty(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Command {
    pub executable: String,
    pub arguments: Arguments,
}

impl Command {
    /// Flatten back into a single shell-command string.
    pub fn command_line(&self) -> String {
        match &self.arguments {
            Arguments::Raw(s) if s.is_empty() => self.executable.clone(),
            Arguments::Raw(s) => format!("{} {}", self.executable, s),
            Arguments::Exec(items) if items.is_empty() => self.executable.clone(),
            Arguments::Exec(items) => format!("{} {}", self.executable, items.join(" ")),
        }
    }
}

/// HEALTHCHECK/ONBUILD payload: the nested sub-instruction keyword plus
/// the command parsed from the remainder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Trigger {
    pub sub_instruction: String,
    pub command: Command,
}

/// COPY/ADD payload. `parsed_source_files` is the on-disk expansion of
/// directory sources, filtered against the ignore patterns and sorted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransferDetails {
    pub chown: Option<String>,
    pub sources: Vec<String>,
    pub parsed_source_files: Vec<String>,
    pub target: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeyValue {
    pub key: String,
    pub value: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum InstructionDetails {
    From {
        image: String,
        version: Option<String>,
        alias: Option<String>,
    },
    Copy(TransferDetails),
    Add(TransferDetails),
    User {
        user: String,
        group: Option<String>,
    },
    Arg {
        argument: String,
        default_value: Option<String>,
    },
    Env(Vec<KeyValue>),
    Label(Vec<KeyValue>),
    Run(Command),
    Cmd(Command),
    Entrypoint(Command),
    Shell(Command),
    Healthcheck(Trigger),
    Onbuild(Trigger),
    Expose {
        port: String,
        protocol: Option<String>,
    },
    Workdir {
        workdir: String,
    },
    Stopsignal {
        stopsignal: String,
    },
    Volume {
        volume: String,
    },
    Maintainer {
        maintainer: String,
    },
    Comment {
        comment: String,
    },
}

/// One logical instruction after continuation-joining. `raw` holds the
/// original source text, continuation backslashes intact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Instruction {
    pub span: LineSpan,
    pub kind: Kind,
    pub details: InstructionDetails,
    pub raw: String,
}

impl Instruction {
    pub fn transfer(&self) -> Option<&TransferDetails> {
        match &self.details {
            InstructionDetails::Copy(t) | InstructionDetails::Add(t) => Some(t),
            _ => None,
        }
    }

    pub fn command(&self) -> Option<&Command> {
        match &self.details {
            InstructionDetails::Run(c)
            | InstructionDetails::Cmd(c)
            | InstructionDetails::Entrypoint(c)
            | InstructionDetails::Shell(c) => Some(c),
            _ => None,
        }
    }
}

/// A fully parsed Dockerfile. Built once, immutable afterward; the
/// accessors are the rule engine's only read path into parsed state.
#[derive(Debug)]
pub struct Dockerfile {
    pub(crate) path: Option<PathBuf>,
    pub(crate) ignore_patterns: Vec<String>,
    pub(crate) instructions: Vec<Instruction>,
}

impl Dockerfile {
    pub fn path(&self) -> Option<&PathBuf> {
        self.path.as_ref()
    }

    /// Display label used in findings: the given path, or `<input>` for
    /// raw-text parses.
    pub fn label(&self) -> String {
        self.path
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "<input>".to_string())
    }

    pub fn ignore_patterns(&self) -> &[String] {
        &self.ignore_patterns
    }

    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    /// Ordered sequence of instruction kinds, one entry per record.
    pub fn kinds(&self) -> Vec<Kind> {
        self.instructions.iter().map(|i| i.kind).collect()
    }

    pub fn of_kind(&self, kind: Kind) -> impl Iterator<Item = &Instruction> {
        self.instructions.iter().filter(move |i| i.kind == kind)
    }

    pub fn froms(&self) -> impl Iterator<Item = &Instruction> {
        self.of_kind(Kind::From)
    }

    pub fn copies(&self) -> impl Iterator<Item = &Instruction> {
        self.of_kind(Kind::Copy)
    }

    pub fn adds(&self) -> impl Iterator<Item = &Instruction> {
        self.of_kind(Kind::Add)
    }

    pub fn users(&self) -> impl Iterator<Item = &Instruction> {
        self.of_kind(Kind::User)
    }

    pub fn args(&self) -> impl Iterator<Item = &Instruction> {
        self.of_kind(Kind::Arg)
    }

    pub fn envs(&self) -> impl Iterator<Item = &Instruction> {
        self.of_kind(Kind::Env)
    }

    pub fn labels(&self) -> impl Iterator<Item = &Instruction> {
        self.of_kind(Kind::Label)
    }

    pub fn runs(&self) -> impl Iterator<Item = &Instruction> {
        self.of_kind(Kind::Run)
    }

    pub fn cmds(&self) -> impl Iterator<Item = &Instruction> {
        self.of_kind(Kind::Cmd)
    }

    pub fn entrypoints(&self) -> impl Iterator<Item = &Instruction> {
        self.of_kind(Kind::Entrypoint)
    }

    pub fn shells(&self) -> impl Iterator<Item = &Instruction> {
        self.of_kind(Kind::Shell)
    }

    pub fn exposes(&self) -> impl Iterator<Item = &Instruction> {
        self.of_kind(Kind::Expose)
    }

    pub fn workdirs(&self) -> impl Iterator<Item = &Instruction> {
        self.of_kind(Kind::Workdir)
    }

    pub fn stopsignals(&self) -> impl Iterator<Item = &Instruction> {
        self.of_kind(Kind::Stopsignal)
    }

    pub fn volumes(&self) -> impl Iterator<Item = &Instruction> {
        self.of_kind(Kind::Volume)
    }

    pub fn healthchecks(&self) -> impl Iterator<Item = &Instruction> {
        self.of_kind(Kind::Healthcheck)
    }

    pub fn onbuilds(&self) -> impl Iterator<Item = &Instruction> {
        self.of_kind(Kind::Onbuild)
    }

    pub fn maintainers(&self) -> impl Iterator<Item = &Instruction> {
        self.of_kind(Kind::Maintainer)
    }

    pub fn comments(&self) -> impl Iterator<Item = &Instruction> {
        self.of_kind(Kind::Comment)
    }
}
