/// Returned by `explain` for codes that are not in the catalogue.
pub const UNKNOWN_RULE: &str = "rule does not exist";

pub const AVAILABLE_RULES: &[(&str, &str)] = &[
    ("DL001", "Sensitive file copied into the image"),
    ("DL002", "No .dockerignore next to the Dockerfile"),
    ("DL003", "COPY of the whole build context (source `.`)"),
    ("DL004", "Sensitive keyword in a build argument name"),
    ("DL005", "Final USER is root"),
    ("DL006", "Filename does not follow the Dockerfile convention"),
    ("DL007", "ADD used where COPY would do"),
    ("DL008", "Consecutive RUN instructions"),
    ("DL009", "No HEALTHCHECK instruction"),
    ("DL010", "Instructions after ENTRYPOINT/CMD"),
    ("DL011", "Deprecated MAINTAINER instruction"),
    ("DL012", "Shell issues in RUN commands"),
];

pub fn list_rules() -> String {
    use std::fmt::Write;
    let mut out = String::from("Available rules:\n\n");
    for (code, desc) in AVAILABLE_RULES {
        let _ = writeln!(out, "  {code:<8} {desc}");
    }
    out.push_str("\nRun `quaylint explain <code>` for details.");
    out
}

pub fn explain(rule: &str) -> Option<&'static str> {
    match rule.to_ascii_uppercase().as_str() {
        "DL001" => Some(
            "DL001: Sensitive file copied into the image.\n\
             \n\
             Every COPY/ADD source and target is checked against a list of sensitive\n\
             substrings (.env, .pem, secrets, credentials, ...). Files like these end up\n\
             baked into an image layer, and layers are forever: anyone who can pull the\n\
             image can read them back with `docker history` or by unpacking the layer\n\
             tarballs. Keep secrets out of the build context and inject them at runtime.\n\
             \n\
             Severity: critical\n\
             Config: sensitive_files",
        ),
        "DL002" => Some(
            "DL002: No .dockerignore next to the Dockerfile.\n\
             \n\
             Without an ignore file, `COPY . .` ships the entire working tree to the\n\
             daemon and into the image: .git, local caches, editor droppings, and any\n\
             secrets lying around. A small .dockerignore shrinks build context transfer\n\
             and is the cheapest guard against accidental inclusion. Pairs with DL003.\n\
             \n\
             Severity: info",
        ),
        "DL003" => Some(
            "DL003: COPY of the whole build context.\n\
             \n\
             A COPY with source `.` grabs everything the ignore file does not exclude.\n\
             Narrow copies (COPY src/ /app/src/) keep images smaller, make layer caching\n\
             effective, and avoid shipping files that were never meant to leave the\n\
             repository.\n\
             \n\
             Severity: major",
        ),
        "DL004" => Some(
            "DL004: Sensitive keyword in a build argument name.\n\
             \n\
             ARG values look ephemeral but are recorded in the image metadata and visible\n\
             via `docker history`. An argument named api_key, db_pass or auth_token is a\n\
             strong signal a secret is being passed at build time. Use build secrets\n\
             (`--mount=type=secret`) or runtime configuration instead.\n\
             \n\
             Severity: critical\n\
             Config: sensitive_build_args",
        ),
        "DL005" => Some(
            "DL005: Final USER is root.\n\
             \n\
             The last USER instruction decides which account PID 1 runs under. Leaving it\n\
             at root hands any container escape or application compromise full privileges\n\
             inside the container. Create a dedicated account and switch to it as the\n\
             final USER; a Dockerfile with no USER at all is not flagged, since base\n\
             images may set one.\n\
             \n\
             Severity: major",
        ),
        "DL006" => Some(
            "DL006: Filename does not follow the Dockerfile convention.\n\
             \n\
             Tooling (editors, CI, registries) recognizes `Dockerfile` and the\n\
             `<purpose>.Dockerfile` pattern. Names like `dockerfile` or `Dockerfile.test`\n\
             break that detection: the suffix after the last dot should be exactly\n\
             `Dockerfile`.\n\
             \n\
             Severity: minor",
        ),
        "DL007" => Some(
            "DL007: ADD used where COPY would do.\n\
             \n\
             ADD has two legitimate jobs: fetching a URL and auto-extracting a local\n\
             archive. For plain files it behaves like COPY but with surprising extra\n\
             semantics, so the simpler instruction states the intent. Sources that are\n\
             neither http(s) URLs nor recognized archives are flagged.\n\
             \n\
             Severity: minor\n\
             Config: archive_suffixes",
        ),
        "DL008" => Some(
            "DL008: Consecutive RUN instructions.\n\
             \n\
             Each RUN creates a layer. Two adjacent RUNs should be chained with `&&` into\n\
             one, which keeps the image smaller and makes the steps fail together. Both\n\
             instructions of an adjacent pair are reported.\n\
             \n\
             Severity: major",
        ),
        "DL009" => Some(
            "DL009: No HEALTHCHECK instruction.\n\
             \n\
             Without a HEALTHCHECK the runtime only knows whether PID 1 is alive, not\n\
             whether the service actually answers. Orchestrators keep routing traffic to\n\
             a wedged container. A one-line `HEALTHCHECK CMD curl -f http://localhost/`\n\
             turns silent failures into restarts.\n\
             \n\
             Severity: info",
        ),
        "DL010" => Some(
            "DL010: Instructions after ENTRYPOINT/CMD.\n\
             \n\
             ENTRYPOINT and CMD describe how the finished image runs and belong at the\n\
             end. Instructions that follow them still execute at build time, which reads\n\
             as if they configured the process but does nothing of the sort. Anything\n\
             after the last ENTRYPOINT/CMD other than a trailing CMD or comment is\n\
             flagged.\n\
             \n\
             Severity: major",
        ),
        "DL011" => Some(
            "DL011: Deprecated MAINTAINER instruction.\n\
             \n\
             MAINTAINER has been deprecated since Docker 1.13. The replacement is a\n\
             label, which is queryable like any other metadata:\n\
             \n\
                 LABEL maintainer=\"name <email>\"\n\
             \n\
             Severity: major",
        ),
        "DL012" => Some(
            "DL012: Shell issues in RUN commands.\n\
             \n\
             Each RUN body is handed to a shell linter and its diagnostics are surfaced\n\
             as findings: errors map to major, warnings and style notes to minor. The\n\
             built-in linter flags sudo usage, curl-pipe-sh installs, apt-get without -y,\n\
             and cd in place of WORKDIR; an external analyzer can be swapped in behind\n\
             the same interface.\n\
             \n\
             Severity: minor/major (per diagnostic)",
        ),
        _ => None,
    }
}
